//! Derivation of percentages, totals and the savings rate from a
//! [`BudgetState`]. Everything here is a pure function of its inputs.

mod advisory;
mod error;
mod report;

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::BudgetState;

pub use advisory::{advisory_level, AdvisoryLevel};
pub use error::BudgetError;
pub use report::{
    expense_breakdown, expense_shares, rank_by_amount_descending, to_export_rows, ExportRow,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedBudget {
    /// Percentage of income per category, in state order.
    pub percentages: Vec<(String, Decimal)>,
    pub total_expenses: Decimal,
    /// `100 - sum(percentages)`.
    pub savings_rate: Decimal,
}

impl DerivedBudget {
    pub fn percentage(&self, category: &str) -> Option<Decimal> {
        self.percentages
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, pct)| *pct)
    }

    pub fn percentage_sum(&self) -> Decimal {
        self.percentages
            .iter()
            .fold(Decimal::ZERO, |acc, (_, pct)| acc.saturating_add(*pct))
    }

    pub fn advisory(&self) -> AdvisoryLevel {
        advisory_level(self.savings_rate)
    }
}

pub fn derive(state: &BudgetState) -> Result<DerivedBudget, BudgetError> {
    validate(state)?;

    let mut percentages = Vec::with_capacity(state.categories.len());
    let mut total_expenses = Decimal::ZERO;
    let mut percentage_sum = Decimal::ZERO;

    for category in &state.categories {
        let pct = percentage_of(category.amount, state.income)?;
        total_expenses = total_expenses
            .checked_add(category.amount)
            .ok_or_else(|| overflow("total expenses"))?;
        percentage_sum = percentage_sum
            .checked_add(pct)
            .ok_or_else(|| overflow("percentages"))?;
        percentages.push((category.name.clone(), pct));
    }

    let savings_rate = Decimal::ONE_HUNDRED
        .checked_sub(percentage_sum)
        .ok_or_else(|| overflow("savings rate"))?;

    Ok(DerivedBudget {
        percentages,
        total_expenses,
        savings_rate,
    })
}

fn validate(state: &BudgetState) -> Result<(), BudgetError> {
    if state.income <= Decimal::ZERO {
        return Err(BudgetError::InvalidInput(format!(
            "income must be greater than zero (got {})",
            state.income
        )));
    }

    let mut seen = HashSet::new();
    for category in &state.categories {
        if category.amount < Decimal::ZERO {
            return Err(BudgetError::InvalidInput(format!(
                "amount for {} must not be negative (got {})",
                category.name, category.amount
            )));
        }
        if !seen.insert(category.name.to_lowercase()) {
            return Err(BudgetError::InvalidInput(format!(
                "duplicate category: {}",
                category.name
            )));
        }
    }
    Ok(())
}

fn percentage_of(amount: Decimal, income: Decimal) -> Result<Decimal, BudgetError> {
    amount
        .checked_div(income)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow("percentage"))
}

fn overflow(what: &str) -> BudgetError {
    BudgetError::InvalidInput(format!("{what} out of range"))
}

#[cfg(test)]
mod tests;
