#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::budget::BudgetError;

// ── BudgetCategory ────────────────────────────────────────────

#[test]
fn test_category_new() {
    let cat = BudgetCategory::new("Food", dec!(750));
    assert_eq!(cat.name, "Food");
    assert_eq!(cat.amount, dec!(750));
}

#[test]
fn test_category_display() {
    let cat = BudgetCategory::new("Debt Repayment", dec!(750));
    assert_eq!(format!("{cat}"), "Debt Repayment");
}

#[test]
fn test_position_by_name_case_insensitive() {
    let cats = vec![
        BudgetCategory::new("Housing", dec!(2250)),
        BudgetCategory::new("Entertainment & Recreation", dec!(375)),
    ];
    assert_eq!(BudgetCategory::position_by_name(&cats, "housing"), Some(0));
    assert_eq!(
        BudgetCategory::position_by_name(&cats, "ENTERTAINMENT & RECREATION"),
        Some(1)
    );
    assert_eq!(BudgetCategory::position_by_name(&cats, "Pets"), None);
}

// ── BudgetState ───────────────────────────────────────────────

#[test]
fn test_default_state_is_seeded() {
    let state = BudgetState::default();
    assert_eq!(state.income, dec!(7500));
    assert_eq!(state.categories.len(), 9);
    assert_eq!(state.categories[0].name, "Housing");
    assert_eq!(state.categories[8].name, "Miscellaneous");

    let total: Decimal = state.categories.iter().map(|c| c.amount).sum();
    assert_eq!(total, dec!(7500));
}

#[test]
fn test_seed_order_and_amounts() {
    let state = BudgetState::seeded(dec!(9000));
    let pairs: Vec<(&str, Decimal)> = state
        .categories
        .iter()
        .map(|c| (c.name.as_str(), c.amount))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Housing", dec!(2250)),
            ("Utilities", dec!(375)),
            ("Transportation", dec!(750)),
            ("Food", dec!(750)),
            ("Savings", dec!(1500)),
            ("Debt Repayment", dec!(750)),
            ("Insurance", dec!(375)),
            ("Entertainment & Recreation", dec!(375)),
            ("Miscellaneous", dec!(375)),
        ]
    );
    assert_eq!(state.income, dec!(9000));
}

#[test]
fn test_set_income() {
    let mut state = BudgetState::default();
    state.set_income(dec!(10000)).unwrap();
    assert_eq!(state.income, dec!(10000));
}

#[test]
fn test_set_income_rejects_zero_and_negative() {
    let mut state = BudgetState::default();
    assert!(matches!(
        state.set_income(Decimal::ZERO),
        Err(BudgetError::InvalidInput(_))
    ));
    assert!(matches!(
        state.set_income(dec!(-1)),
        Err(BudgetError::InvalidInput(_))
    ));
    assert_eq!(state.income, dec!(7500));
}

#[test]
fn test_set_amount_returns_canonical_name() {
    let mut state = BudgetState::default();
    let name = state.set_amount("debt repayment", dec!(900)).unwrap();
    assert_eq!(name, "Debt Repayment");
    assert_eq!(state.find("Debt Repayment").unwrap().amount, dec!(900));
}

#[test]
fn test_set_amount_rejects_negative() {
    let mut state = BudgetState::default();
    assert!(matches!(
        state.set_amount("Food", dec!(-0.01)),
        Err(BudgetError::InvalidInput(_))
    ));
    assert_eq!(state.find("Food").unwrap().amount, dec!(750));
}

#[test]
fn test_set_amount_unknown_category() {
    let mut state = BudgetState::default();
    assert_eq!(
        state.set_amount("Pets", dec!(10)),
        Err(BudgetError::UnknownCategory("Pets".into()))
    );
}

#[test]
fn test_set_amount_zero_is_allowed() {
    let mut state = BudgetState::default();
    state.set_amount("Housing", Decimal::ZERO).unwrap();
    assert_eq!(state.find("Housing").unwrap().amount, Decimal::ZERO);
}
