use anyhow::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::budget::{self, BudgetError, DerivedBudget};
use crate::config::DashboardConfig;
use crate::export;
use crate::models::BudgetState;
use crate::ui::util::{format_amount, parse_amount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Details,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Details]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Details => write!(f, "Details"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// A sidebar input: the income or one category's amount (by index).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Income,
    Category(usize),
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) edit_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) config: DashboardConfig,
    pub(crate) budget: BudgetState,

    // Sidebar cursor: 0 is income, then one per category
    pub(crate) field_index: usize,
}

impl App {
    pub(crate) fn new(config: DashboardConfig) -> Result<Self> {
        let budget = config.seed_state()?;
        Ok(Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            edit_input: String::new(),
            status_message: String::new(),
            show_help: false,

            config,
            budget,

            field_index: 0,
        })
    }

    /// Recomputed on every call.
    pub(crate) fn derived(&self) -> Result<DerivedBudget, BudgetError> {
        budget::derive(&self.budget)
    }

    pub(crate) fn field_count(&self) -> usize {
        1 + self.budget.categories.len()
    }

    pub(crate) fn selected_field(&self) -> Field {
        match self.field_index {
            0 => Field::Income,
            i => Field::Category(i - 1),
        }
    }

    pub(crate) fn field_label(&self, field: Field) -> &str {
        match field {
            Field::Income => "Monthly Income",
            Field::Category(i) => self
                .budget
                .categories
                .get(i)
                .map(|c| c.name.as_str())
                .unwrap_or(""),
        }
    }

    pub(crate) fn field_value(&self, field: Field) -> Decimal {
        match field {
            Field::Income => self.budget.income,
            Field::Category(i) => self
                .budget
                .categories
                .get(i)
                .map(|c| c.amount)
                .unwrap_or(Decimal::ZERO),
        }
    }

    pub(crate) fn select_next(&mut self) {
        if self.field_index + 1 < self.field_count() {
            self.field_index += 1;
        }
    }

    pub(crate) fn select_prev(&mut self) {
        self.field_index = self.field_index.saturating_sub(1);
    }

    pub(crate) fn select_first(&mut self) {
        self.field_index = 0;
    }

    pub(crate) fn select_last(&mut self) {
        self.field_index = self.field_count().saturating_sub(1);
    }

    pub(crate) fn set_income(&mut self, income: Decimal) -> Result<(), BudgetError> {
        if income < self.config.min_income {
            return Err(BudgetError::InvalidInput(format!(
                "Monthly income must be at least {}",
                format_amount(self.config.min_income)
            )));
        }
        self.budget.set_income(income)?;
        info!(%income, "income updated");
        Ok(())
    }

    pub(crate) fn set_amount(&mut self, name: &str, amount: Decimal) -> Result<String, BudgetError> {
        let name = self.budget.set_amount(name, amount)?;
        info!(category = %name, %amount, "amount updated");
        Ok(name)
    }

    /// Step the selected field up or down. Income stops at the configured
    /// minimum and amounts stop at zero.
    pub(crate) fn adjust_selected(&mut self, steps: i64) {
        let field = self.selected_field();
        let (step, floor) = match field {
            Field::Income => (self.config.income_step, self.config.min_income),
            Field::Category(_) => (self.config.amount_step, Decimal::ZERO),
        };
        let current = self.field_value(field);
        let next = current
            .saturating_add(step.saturating_mul(Decimal::from(steps)))
            .max(floor);
        if next == current {
            return;
        }
        self.apply_to_field(field, next);
    }

    pub(crate) fn begin_edit(&mut self) {
        let value = self.field_value(self.selected_field());
        self.edit_input = value.normalize().to_string();
        self.input_mode = InputMode::Editing;
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.edit_input.clear();
        self.input_mode = InputMode::Normal;
        self.set_status("Edit cancelled");
    }

    pub(crate) fn commit_edit(&mut self) {
        let input = std::mem::take(&mut self.edit_input);
        self.input_mode = InputMode::Normal;
        match parse_amount(&input) {
            Ok(value) => self.apply_to_field(self.selected_field(), value),
            Err(e) => {
                warn!(input = %input, "rejected edit: {e}");
                self.set_status(format!("{e}"));
            }
        }
    }

    fn apply_to_field(&mut self, field: Field, value: Decimal) {
        let result = match field {
            Field::Income => self.set_income(value).map(|_| "Monthly Income".to_string()),
            Field::Category(i) => {
                let name = self.field_label(Field::Category(i)).to_string();
                self.set_amount(&name, value)
            }
        };
        match result {
            Ok(label) => self.set_status(format!("{label}: {}", format_amount(value))),
            Err(e) => {
                warn!(%value, "rejected edit: {e}");
                self.set_status(e.to_string());
            }
        }
    }

    pub(crate) fn reset(&mut self) -> Result<()> {
        self.budget = self.config.seed_state()?;
        self.field_index = 0;
        info!("budget reset to defaults");
        self.set_status("Budget reset to defaults");
        Ok(())
    }

    /// Write the current budget as CSV. `path` may be a file or directory;
    /// without one the configured file name goes to the default location.
    pub(crate) fn export(&mut self, path: Option<&str>) -> Result<PathBuf> {
        let derived = self.derived()?;
        let rows = budget::to_export_rows(&self.budget, &derived);
        let target = export::resolve_export_path(path, &self.config.export_file_name);
        let count = export::export_to_path(&target, &rows)?;
        info!(path = %target.display(), rows = count, "exported budget");
        Ok(target)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
