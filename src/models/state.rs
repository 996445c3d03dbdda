use rust_decimal::Decimal;

use super::BudgetCategory;
use crate::budget::BudgetError;

pub const DEFAULT_INCOME: Decimal = Decimal::from_parts(7500, 0, 0, false, 0);

const SEED_CATEGORIES: [(&str, u32); 9] = [
    ("Housing", 2250),
    ("Utilities", 375),
    ("Transportation", 750),
    ("Food", 750),
    ("Savings", 1500),
    ("Debt Repayment", 750),
    ("Insurance", 375),
    ("Entertainment & Recreation", 375),
    ("Miscellaneous", 375),
];

/// The income and per-category amounts the user edits.
///
/// Owned by whoever presents the budget and handed to the functions in
/// [`crate::budget`] on every recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetState {
    pub income: Decimal,
    pub categories: Vec<BudgetCategory>,
}

impl BudgetState {
    pub fn new(income: Decimal, categories: Vec<BudgetCategory>) -> Self {
        Self { income, categories }
    }

    /// The nine seed categories against the given income.
    pub fn seeded(income: Decimal) -> Self {
        let categories = SEED_CATEGORIES
            .iter()
            .map(|(name, amount)| BudgetCategory::new(*name, Decimal::from(*amount)))
            .collect();
        Self::new(income, categories)
    }

    #[cfg(test)]
    pub fn find(&self, name: &str) -> Option<&BudgetCategory> {
        BudgetCategory::position_by_name(&self.categories, name).map(|i| &self.categories[i])
    }

    pub fn set_income(&mut self, income: Decimal) -> Result<(), BudgetError> {
        if income <= Decimal::ZERO {
            return Err(BudgetError::InvalidInput(format!(
                "income must be greater than zero (got {income})"
            )));
        }
        self.income = income;
        Ok(())
    }

    /// Set the amount of a category looked up case-insensitively.
    /// Returns the category's canonical name.
    pub fn set_amount(&mut self, name: &str, amount: Decimal) -> Result<String, BudgetError> {
        if amount < Decimal::ZERO {
            return Err(BudgetError::InvalidInput(format!(
                "amount for {name} must not be negative (got {amount})"
            )));
        }
        let index = BudgetCategory::position_by_name(&self.categories, name)
            .ok_or_else(|| BudgetError::UnknownCategory(name.to_string()))?;
        let category = &mut self.categories[index];
        category.amount = amount;
        Ok(category.name.clone())
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::seeded(DEFAULT_INCOME)
    }
}
