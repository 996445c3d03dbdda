#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::BudgetCategory;

fn assert_close(actual: Decimal, expected: Decimal) {
    let tolerance = dec!(0.000000001) * expected.abs().max(Decimal::ONE);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{actual} differs from {expected} by more than {tolerance}"
    );
}

fn state(income: Decimal, amounts: &[(&str, Decimal)]) -> BudgetState {
    let categories = amounts
        .iter()
        .map(|(name, amount)| BudgetCategory::new(*name, *amount))
        .collect();
    BudgetState::new(income, categories)
}

/// Deterministic spread of incomes, category counts and amounts.
fn sample_states() -> Vec<BudgetState> {
    let incomes = [
        dec!(1),
        dec!(3),
        dec!(7),
        dec!(1000),
        dec!(1234.56),
        dec!(7500),
        dec!(99999.99),
    ];
    let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
    let mut states = Vec::new();
    for income in incomes {
        for len in [0usize, 1, 3, 9, 25] {
            let mut categories = Vec::with_capacity(len);
            for i in 0..len {
                seed = seed
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                let cents = ((seed >> 33) % 500_000) as i64;
                categories.push(BudgetCategory::new(
                    format!("Category {i}"),
                    Decimal::new(cents, 2),
                ));
            }
            states.push(BudgetState::new(income, categories));
        }
    }
    states
}

// ── derive ────────────────────────────────────────────────────

#[test]
fn test_percentages_and_savings_sum_to_hundred() {
    for s in sample_states() {
        let derived = derive(&s).unwrap();
        assert_close(
            derived.percentage_sum() + derived.savings_rate,
            Decimal::ONE_HUNDRED,
        );
    }
}

#[test]
fn test_savings_rate_matches_independent_form() {
    for s in sample_states() {
        let derived = derive(&s).unwrap();
        let independent =
            Decimal::ONE_HUNDRED - derived.total_expenses / s.income * Decimal::ONE_HUNDRED;
        assert_close(derived.savings_rate, independent);
    }
}

#[test]
fn test_percentage_sum_matches_total_over_income() {
    for s in sample_states() {
        let derived = derive(&s).unwrap();
        assert_close(
            derived.percentage_sum(),
            derived.total_expenses / s.income * Decimal::ONE_HUNDRED,
        );
    }
}

#[test]
fn test_total_expenses_is_exact_sum() {
    for s in sample_states() {
        let derived = derive(&s).unwrap();
        let expected: Decimal = s.categories.iter().map(|c| c.amount).sum();
        assert_eq!(derived.total_expenses, expected);
    }
}

#[test]
fn test_derive_is_deterministic() {
    for s in sample_states() {
        let first = derive(&s).unwrap();
        let second = derive(&s).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.savings_rate.serialize(),
            second.savings_rate.serialize()
        );
        assert_eq!(
            first.total_expenses.serialize(),
            second.total_expenses.serialize()
        );
        for ((_, a), (_, b)) in first.percentages.iter().zip(&second.percentages) {
            assert_eq!(a.serialize(), b.serialize());
        }
    }
}

#[test]
fn test_percentages_follow_state_order() {
    let s = BudgetState::default();
    let derived = derive(&s).unwrap();
    let names: Vec<&str> = derived.percentages.iter().map(|(n, _)| n.as_str()).collect();
    let expected: Vec<&str> = s.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_zero_income_is_invalid() {
    let s = state(Decimal::ZERO, &[("Housing", dec!(100))]);
    assert!(matches!(derive(&s), Err(BudgetError::InvalidInput(_))));
}

#[test]
fn test_negative_income_is_invalid() {
    let s = state(dec!(-7500), &[("Housing", dec!(100))]);
    assert!(matches!(derive(&s), Err(BudgetError::InvalidInput(_))));
}

#[test]
fn test_negative_amount_is_invalid() {
    let s = state(dec!(7500), &[("Housing", dec!(100)), ("Food", dec!(-1))]);
    let err = derive(&s).unwrap_err();
    assert!(matches!(err, BudgetError::InvalidInput(ref msg) if msg.contains("Food")));
}

#[test]
fn test_duplicate_names_are_invalid() {
    let s = state(dec!(7500), &[("Food", dec!(100)), ("food", dec!(200))]);
    assert!(matches!(derive(&s), Err(BudgetError::InvalidInput(_))));
}

#[test]
fn test_overflow_is_invalid() {
    let huge_amount = state(Decimal::ONE, &[("Housing", Decimal::MAX)]);
    assert!(matches!(derive(&huge_amount), Err(BudgetError::InvalidInput(_))));

    let tiny_income = state(Decimal::new(1, 28), &[("Housing", Decimal::ONE)]);
    assert!(matches!(derive(&tiny_income), Err(BudgetError::InvalidInput(_))));
}

#[test]
fn test_no_categories_saves_everything() {
    let derived = derive(&state(dec!(5000), &[])).unwrap();
    assert!(derived.percentages.is_empty());
    assert_eq!(derived.total_expenses, Decimal::ZERO);
    assert_eq!(derived.savings_rate, Decimal::ONE_HUNDRED);
}

#[test]
fn test_overspending_gives_negative_savings() {
    let derived = derive(&state(dec!(1000), &[("Housing", dec!(1500))])).unwrap();
    assert_eq!(derived.savings_rate, dec!(-50));
    assert_eq!(derived.advisory(), AdvisoryLevel::Warning);
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn test_seed_budget_scenario() {
    let derived = derive(&BudgetState::default()).unwrap();
    assert_eq!(derived.total_expenses, dec!(7500));
    assert_close(derived.savings_rate, Decimal::ZERO);
    assert_eq!(advisory_level(derived.savings_rate), AdvisoryLevel::Warning);
    assert_eq!(derived.percentage("Housing"), Some(dec!(30)));
    assert_eq!(derived.percentage("Savings"), Some(dec!(20)));
    assert_eq!(derived.percentage("Miscellaneous"), Some(dec!(5)));
}

#[test]
fn test_all_zero_scenario() {
    let mut s = BudgetState::default();
    for c in &mut s.categories {
        c.amount = Decimal::ZERO;
    }
    let derived = derive(&s).unwrap();
    assert_eq!(derived.total_expenses, Decimal::ZERO);
    assert!(derived.percentages.iter().all(|(_, pct)| pct.is_zero()));
    assert_eq!(derived.savings_rate, Decimal::ONE_HUNDRED);
    assert_eq!(advisory_level(derived.savings_rate), AdvisoryLevel::Healthy);
}

#[test]
fn test_housing_share_of_ten_thousand() {
    let mut s = BudgetState::seeded(dec!(10000));
    s.set_amount("Housing", dec!(2000)).unwrap();
    let derived = derive(&s).unwrap();
    assert_eq!(derived.percentage("Housing"), Some(dec!(20.0)));
}

#[test]
fn test_percentage_lookup_unknown() {
    let derived = derive(&BudgetState::default()).unwrap();
    assert_eq!(derived.percentage("Pets"), None);
}

// ── advisory_level ────────────────────────────────────────────

#[test]
fn test_advisory_threshold() {
    assert_eq!(advisory_level(dec!(0)), AdvisoryLevel::Warning);
    assert_eq!(advisory_level(dec!(19.99)), AdvisoryLevel::Warning);
    assert_eq!(advisory_level(dec!(20)), AdvisoryLevel::Healthy);
    assert_eq!(advisory_level(dec!(100)), AdvisoryLevel::Healthy);
    assert_eq!(advisory_level(dec!(-12.5)), AdvisoryLevel::Warning);
}

#[test]
fn test_advisory_display() {
    assert_eq!(AdvisoryLevel::Warning.to_string(), "Warning");
    assert_eq!(AdvisoryLevel::Healthy.to_string(), "Healthy");
}

// ── rank_by_amount_descending ─────────────────────────────────

#[test]
fn test_rank_seed_budget() {
    let ranked = rank_by_amount_descending(&BudgetState::default().categories);
    let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Housing",
            "Savings",
            "Transportation",
            "Food",
            "Debt Repayment",
            "Utilities",
            "Insurance",
            "Entertainment & Recreation",
            "Miscellaneous",
        ]
    );
}

#[test]
fn test_rank_is_stable_for_ties() {
    let s = state(
        dec!(1000),
        &[
            ("A", dec!(10)),
            ("B", dec!(20)),
            ("C", dec!(10)),
            ("D", dec!(20)),
            ("E", dec!(10)),
        ],
    );
    let ranked = rank_by_amount_descending(&s.categories);
    let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["B", "D", "A", "C", "E"]);
}

#[test]
fn test_rank_is_idempotent() {
    for s in sample_states() {
        let once = rank_by_amount_descending(&s.categories);
        let twice = rank_by_amount_descending(&once);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_rank_preserves_categories() {
    for s in sample_states() {
        let ranked = rank_by_amount_descending(&s.categories);
        assert_eq!(ranked.len(), s.categories.len());
        for c in &s.categories {
            let before = s.categories.iter().filter(|x| *x == c).count();
            let after = ranked.iter().filter(|x| *x == c).count();
            assert_eq!(before, after, "{} was lost or duplicated", c.name);
        }
        assert!(ranked.windows(2).all(|w| w[0].amount >= w[1].amount));
    }
}

#[test]
fn test_rank_empty() {
    assert!(rank_by_amount_descending(&[]).is_empty());
}

// ── to_export_rows ────────────────────────────────────────────

#[test]
fn test_export_rows_follow_state_order() {
    for s in sample_states() {
        let derived = derive(&s).unwrap();
        let rows = to_export_rows(&s, &derived);
        assert_eq!(rows.len(), s.categories.len());
        for (row, c) in rows.iter().zip(&s.categories) {
            assert_eq!(row.category, c.name);
            assert_eq!(row.amount, c.amount);
            assert_eq!(Some(row.percentage), derived.percentage(&c.name));
        }
    }
}

#[test]
fn test_export_rows_seed_budget() {
    let s = BudgetState::default();
    let rows = to_export_rows(&s, &derive(&s).unwrap());
    assert_eq!(
        rows[0],
        ExportRow {
            category: "Housing".into(),
            amount: dec!(2250),
            percentage: dec!(30),
        }
    );
    assert_eq!(rows[7].category, "Entertainment & Recreation");
    assert_eq!(rows[7].percentage, dec!(5));
}

// ── expense_shares / expense_breakdown ────────────────────────

#[test]
fn test_expense_shares_are_relative_to_expenses() {
    let s = state(
        dec!(10000),
        &[("Housing", dec!(600)), ("Food", dec!(300)), ("Fun", dec!(100))],
    );
    let shares = expense_shares(&s);
    assert_eq!(
        shares,
        vec![
            ("Housing".to_string(), dec!(60)),
            ("Food".to_string(), dec!(30)),
            ("Fun".to_string(), dec!(10)),
        ]
    );
}

#[test]
fn test_expense_shares_zero_total() {
    let s = state(dec!(7500), &[("Housing", dec!(0)), ("Food", dec!(0))]);
    assert!(expense_shares(&s).iter().all(|(_, share)| share.is_zero()));
}

#[test]
fn test_breakdown_sorted_by_name() {
    let rows = expense_breakdown(&BudgetState::default());
    let names: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Debt Repayment",
            "Entertainment & Recreation",
            "Food",
            "Housing",
            "Insurance",
            "Miscellaneous",
            "Savings",
            "Transportation",
            "Utilities",
        ]
    );
    let housing = rows.iter().find(|r| r.category == "Housing").unwrap();
    assert_eq!(housing.amount, dec!(2250));
    assert_eq!(housing.share, dec!(30));
}

#[test]
fn test_breakdown_groups_repeated_names() {
    let s = state(
        dec!(1000),
        &[("Food", dec!(100)), ("Rent", dec!(200)), ("Food", dec!(100))],
    );
    let rows = expense_breakdown(&s);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category, "Food");
    assert_eq!(rows[0].amount, dec!(200));
    assert_eq!(rows[0].share, dec!(50));
    assert_eq!(rows[1].category, "Rent");
    assert_eq!(rows[1].share, dec!(50));
}

#[test]
fn test_breakdown_shares_sum_to_hundred() {
    for s in sample_states() {
        let rows = expense_breakdown(&s);
        let total: Decimal = rows.iter().map(|r| r.amount).sum();
        if total.is_zero() {
            assert!(rows.iter().all(|r| r.share.is_zero()));
        } else {
            let shares: Decimal = rows.iter().map(|r| r.share).sum();
            assert_close(shares, Decimal::ONE_HUNDRED);
        }
    }
}
