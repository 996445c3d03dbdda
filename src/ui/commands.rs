use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use super::util::{format_amount, parse_amount};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("t", "Go to Details", cmd_details, r);
    register_command!("details", "Go to Details", cmd_details, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "income",
        "Set monthly income (e.g. :income 8200)",
        cmd_income,
        r
    );
    register_command!(
        "i",
        "Set monthly income (e.g. :i 8200)",
        cmd_income,
        r
    );
    register_command!(
        "set",
        "Set category amount (e.g. :set Debt Repayment 600)",
        cmd_set,
        r
    );
    register_command!(
        "s",
        "Set category amount (e.g. :s Food 800)",
        cmd_set,
        r
    );
    register_command!(
        "export",
        "Export budget to CSV (e.g. :export ~/budget.csv)",
        cmd_export,
        r
    );
    register_command!("e", "Export budget to CSV", cmd_export, r);
    register_command!("reset", "Restore the starting budget", cmd_reset, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    Ok(())
}

fn cmd_details(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Details;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_income(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!(
            "Monthly income is {}. Usage: :income <amount>",
            format_amount(app.budget.income)
        ));
        return Ok(());
    }

    let income = match parse_amount(args) {
        Ok(v) => v,
        Err(_) => {
            app.set_status(format!("Invalid amount: {args}"));
            return Ok(());
        }
    };

    match app.set_income(income) {
        Ok(()) => app.set_status(format!("Monthly Income: {}", format_amount(income))),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_set(args: &str, app: &mut App) -> anyhow::Result<()> {
    // Category names may contain spaces, so the amount is the last word
    let Some((name, amount_str)) = args.rsplit_once(' ') else {
        app.set_status("Usage: :set <category> <amount>");
        return Ok(());
    };
    let name = name.trim();

    let amount = match parse_amount(amount_str) {
        Ok(v) => v,
        Err(_) => {
            app.set_status(format!("Invalid amount: {amount_str}"));
            return Ok(());
        }
    };

    match app.set_amount(name, amount) {
        Ok(canonical) => app.set_status(format!("{canonical}: {}", format_amount(amount))),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    let path = if args.is_empty() { None } else { Some(args) };
    match app.export(path) {
        Ok(target) => app.set_status(format!("Exported budget to {}", target.display())),
        Err(e) => app.set_status(format!("Export failed: {e:#}")),
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.reset()
}
