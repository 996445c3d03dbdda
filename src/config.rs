use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::models::{BudgetState, DEFAULT_INCOME};
use crate::ui::util::{format_amount, parse_amount};

/// Startup settings for the dashboard, adjustable from the command line.
#[derive(Debug, Clone)]
pub(crate) struct DashboardConfig {
    pub(crate) default_income: Decimal,
    pub(crate) min_income: Decimal,
    pub(crate) income_step: Decimal,
    pub(crate) amount_step: Decimal,
    pub(crate) export_file_name: String,
    /// `--set` overrides applied on top of the seed categories.
    pub(crate) overrides: Vec<(String, Decimal)>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_income: DEFAULT_INCOME,
            min_income: Decimal::from(1000),
            income_step: Decimal::from(100),
            amount_step: Decimal::from(50),
            export_file_name: "budget_data.csv".into(),
            overrides: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Pull the global flags out of `args`, returning the config and the
    /// remaining (command) arguments.
    pub(crate) fn from_args(args: &[String]) -> Result<(Self, Vec<String>)> {
        let mut config = Self::default();
        let mut rest = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--income" => {
                    let value = iter.next().context("--income requires a value")?;
                    config.default_income = parse_amount(value)
                        .with_context(|| format!("Invalid --income value: {value}"))?;
                }
                "--min-income" => {
                    let value = iter.next().context("--min-income requires a value")?;
                    config.min_income = parse_amount(value)
                        .with_context(|| format!("Invalid --min-income value: {value}"))?;
                }
                "--set" => {
                    let value = iter
                        .next()
                        .context("--set requires <Category>=<amount>")?;
                    config.overrides.push(parse_override(value)?);
                }
                _ => rest.push(arg.clone()),
            }
        }

        if config.min_income <= Decimal::ZERO {
            anyhow::bail!("Minimum income must be greater than zero");
        }
        if config.default_income < config.min_income {
            anyhow::bail!(
                "Income {} is below the minimum of {}",
                format_amount(config.default_income),
                format_amount(config.min_income)
            );
        }
        config.seed_state()?;

        Ok((config, rest))
    }

    /// The budget the dashboard starts from (and resets to).
    pub(crate) fn seed_state(&self) -> Result<BudgetState> {
        let mut state = BudgetState::seeded(self.default_income);
        for (name, amount) in &self.overrides {
            state
                .set_amount(name, *amount)
                .with_context(|| format!("Invalid --set for {name}"))?;
        }
        Ok(state)
    }
}

fn parse_override(value: &str) -> Result<(String, Decimal)> {
    let (name, amount) = value
        .rsplit_once('=')
        .with_context(|| format!("Expected <Category>=<amount>, got '{value}'"))?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Missing category name in '{value}'");
    }
    Ok((name.to_string(), parse_amount(amount)?))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
