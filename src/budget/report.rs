use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::DerivedBudget;
use crate::models::{BudgetCategory, BudgetState};

/// One category as written to the CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub category: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

/// One line of the expense breakdown: amounts summed per category name,
/// with the share of total expenses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    pub category: String,
    pub amount: Decimal,
    pub share: Decimal,
}

/// Stable sort by amount, largest first. Equal amounts keep their order.
pub fn rank_by_amount_descending(categories: &[BudgetCategory]) -> Vec<BudgetCategory> {
    let mut ranked = categories.to_vec();
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    ranked
}

pub fn to_export_rows(state: &BudgetState, derived: &DerivedBudget) -> Vec<ExportRow> {
    state
        .categories
        .iter()
        .map(|c| ExportRow {
            category: c.name.clone(),
            amount: c.amount,
            percentage: derived.percentage(&c.name).unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Each category's share of total expenses, in state order.
pub fn expense_shares(state: &BudgetState) -> Vec<(String, Decimal)> {
    let total = sum_amounts(state.categories.iter().map(|c| c.amount));
    state
        .categories
        .iter()
        .map(|c| (c.name.clone(), share_of(c.amount, total)))
        .collect()
}

/// Amounts grouped by category name (ordered by name) with their share of
/// total expenses.
pub fn expense_breakdown(state: &BudgetState) -> Vec<BreakdownRow> {
    let mut grouped: BTreeMap<&str, Decimal> = BTreeMap::new();
    for c in &state.categories {
        let entry = grouped.entry(c.name.as_str()).or_insert(Decimal::ZERO);
        *entry = entry.saturating_add(c.amount);
    }

    let total = sum_amounts(grouped.values().copied());
    grouped
        .into_iter()
        .map(|(name, amount)| BreakdownRow {
            category: name.to_string(),
            amount,
            share: share_of(amount, total),
        })
        .collect()
}

fn sum_amounts(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, |acc, a| acc.saturating_add(a))
}

// A zero total has no meaningful split; report 0% rather than NaN.
fn share_of(amount: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount
        .checked_div(total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}
