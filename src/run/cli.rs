use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

use crate::budget::{self, DerivedBudget};
use crate::config::DashboardConfig;
use crate::export;
use crate::models::BudgetState;
use crate::ui::util::{advice_message, format_amount, format_percent};

pub(crate) fn as_cli(args: &[String], config: &DashboardConfig) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "summary" | "s" => cli_summary(config),
        "export" | "e" => cli_export(&args[1..], config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetdash {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("budgetdash — interactive budget dashboard");
    println!();
    println!("Usage: budgetdash [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary                       Print metrics, table, breakdown and advice");
    println!("  export [path|-]               Write budget_data.csv (- for stdout)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --income <amount>             Monthly income (default: 7500)");
    println!("  --min-income <amount>         Lowest income the dashboard accepts (default: 1000)");
    println!("  --set <Category>=<amount>     Override a category amount (repeatable)");
}

fn load(config: &DashboardConfig) -> Result<(BudgetState, DerivedBudget)> {
    let state = config.seed_state()?;
    let derived = budget::derive(&state).context("Failed to compute budget")?;
    Ok((state, derived))
}

fn cli_summary(config: &DashboardConfig) -> Result<()> {
    let (state, derived) = load(config)?;

    println!("Personal Budget Dashboard");
    println!("{}", "─".repeat(56));
    println!("  Total Income:    {}", format_amount(state.income));
    println!("  Total Expenses:  {}", format_amount(derived.total_expenses));
    println!("  Savings Rate:    {}", format_percent(derived.savings_rate));

    println!();
    println!("Detailed Budget Data:");
    println!("  {:<28} {:>14} {:>11}", "Category", "Amount", "Percentage");
    for row in budget::to_export_rows(&state, &derived) {
        println!(
            "  {:<28} {:>14} {:>11}",
            row.category,
            format_amount(row.amount),
            format_percent(row.percentage)
        );
    }

    println!();
    println!("Expenses by Category:");
    for c in budget::rank_by_amount_descending(&state.categories) {
        println!("  {:<28} {:>14}", c.name, format_amount(c.amount));
    }

    println!();
    println!("Expense Categories Breakdown:");
    for row in budget::expense_breakdown(&state) {
        println!(
            "  {:<28} {:>14} {:>11}",
            row.category,
            format_amount(row.amount),
            format_percent(row.share)
        );
    }

    println!();
    println!("Savings Advice ({}):", derived.advisory());
    println!("  {}", advice_message(derived.advisory()));
    Ok(())
}

fn cli_export(args: &[String], config: &DashboardConfig) -> Result<()> {
    let (state, derived) = load(config)?;
    let rows = budget::to_export_rows(&state, &derived);

    if args.first().map(String::as_str) == Some("-") {
        let csv = export::to_csv_string(&rows)?;
        write_stdout(&csv)?;
        return Ok(());
    }

    let target = export::resolve_export_path(
        args.first().map(String::as_str),
        &config.export_file_name,
    );
    let count = export::export_to_path(&target, &rows)?;
    info!(path = %target.display(), rows = count, "exported budget");
    println!("Exported {count} categories to {}", target.display());
    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}
