#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;
use crate::budget::AdvisoryLevel;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Food", 10), "Food");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("Savings", 7), "Savings");
}

#[test]
fn test_truncate_long_category() {
    assert_eq!(truncate("Entertainment & Recreation", 10), "Entertain…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Housing", 0), "");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("Housing", 1), "…");
}

// ── format_amount ──────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_seed_income() {
    assert_eq!(format_amount(dec!(7500)), "$7,500.00");
}

#[test]
fn test_format_amount_zero() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-42.50)), "-$42.50");
}

#[test]
fn test_format_amount_millions() {
    assert_eq!(format_amount(dec!(10000000.00)), "$10,000,000.00");
}

#[test]
fn test_format_amount_rounds_to_two_decimals() {
    assert_eq!(format_amount(dec!(1.5)), "$1.50");
}

// ── format_percent ─────────────────────────────────────────

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(dec!(30)), "30.00%");
    assert_eq!(format_percent(dec!(0)), "0.00%");
    assert_eq!(format_percent(dec!(-12.5)), "-12.50%");
}

// ── parse_amount ───────────────────────────────────────────

#[test]
fn test_parse_amount_plain() {
    assert_eq!(parse_amount("2250").unwrap(), dec!(2250));
    assert_eq!(parse_amount("375.50").unwrap(), dec!(375.50));
}

#[test]
fn test_parse_amount_with_currency() {
    assert_eq!(parse_amount("$1,234.56").unwrap(), dec!(1234.56));
    assert_eq!(parse_amount("  $10,000 ").unwrap(), dec!(10000));
}

#[test]
fn test_parse_amount_negative_is_parsed() {
    // Range checks belong to the budget state, not the parser.
    assert_eq!(parse_amount("-5").unwrap(), dec!(-5));
}

#[test]
fn test_parse_amount_empty() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount("  ").is_err());
}

#[test]
fn test_parse_amount_invalid() {
    assert!(parse_amount("lots").is_err());
}

// ── advice_message ─────────────────────────────────────────

#[test]
fn test_advice_messages() {
    assert!(advice_message(AdvisoryLevel::Warning).contains("below 20%"));
    assert!(advice_message(AdvisoryLevel::Healthy).starts_with("Great!"));
}
