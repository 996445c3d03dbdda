use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::budget::{self, AdvisoryLevel, DerivedBudget};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{advice_message, format_amount, format_percent, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, derived: &DerivedBudget) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Metric strip
            Constraint::Length(4), // Savings advice
            Constraint::Min(10),   // Charts
        ])
        .split(area);

    render_metric_strip(f, chunks[0], app, derived);
    render_advice(f, chunks[1], derived);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_distribution(f, charts[0], app);
    render_ranked_chart(f, charts[1], app);
}

fn render_metric_strip(f: &mut Frame, area: Rect, app: &App, derived: &DerivedBudget) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let savings_color = match derived.advisory() {
        AdvisoryLevel::Healthy => theme::GREEN,
        AdvisoryLevel::Warning => theme::YELLOW,
    };

    render_card(
        f,
        cards[0],
        "Total Income",
        format_amount(app.budget.income),
        theme::GREEN,
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        format_amount(derived.total_expenses),
        theme::RED,
    );
    render_card(
        f,
        cards[2],
        "Savings Rate",
        format_percent(derived.savings_rate),
        savings_color,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, display: String, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(theme::panel_title(title));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_advice(f: &mut Frame, area: Rect, derived: &DerivedBudget) {
    let level = derived.advisory();
    let color = match level {
        AdvisoryLevel::Healthy => theme::GREEN,
        AdvisoryLevel::Warning => theme::YELLOW,
    };

    let advice = Paragraph::new(Line::from(Span::styled(
        advice_message(level),
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(theme::panel_title("Savings Advice")),
    );
    f.render_widget(advice, area);
}

/// Proportional split of total expenses: one stacked strip plus a legend
/// with a bar per category.
fn render_distribution(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(theme::panel_title("Expenses Distribution"));

    let shares = budget::expense_shares(&app.budget);
    if shares.iter().all(|(_, share)| share.is_zero()) {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expenses entered",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let inner = area.width.saturating_sub(2) as usize;
    let mut lines = vec![stacked_strip(&shares, inner), Line::from("")];

    let label_width = 14;
    let pct_width = 7;
    let bar_width = inner.saturating_sub(label_width + pct_width + 4);
    for (i, (name, share)) in shares.iter().enumerate() {
        let color = theme::slice_color(i);
        let filled = cells_for(*share, bar_width);
        lines.push(Line::from(vec![
            Span::styled(" ■ ", Style::default().fg(color)),
            Span::styled(
                format!("{:<label_width$}", truncate(name, label_width)),
                theme::normal_style(),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                " ".repeat(bar_width.saturating_sub(filled)),
                theme::normal_style(),
            ),
            Span::styled(format!("{:>pct_width$.1}%", share), theme::dim_style()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn stacked_strip(shares: &[(String, Decimal)], width: usize) -> Line<'static> {
    let amounts: Vec<Decimal> = shares.iter().map(|(_, share)| *share).collect();
    let spans = strip_cells(&amounts, width)
        .into_iter()
        .enumerate()
        .map(|(i, cells)| {
            Span::styled(
                "█".repeat(cells),
                Style::default().fg(theme::slice_color(i)),
            )
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Cells per slice of the stacked strip. Zero shares get no cells and the
/// rounding remainder goes to the last non-zero slice.
pub(super) fn strip_cells(shares: &[Decimal], width: usize) -> Vec<usize> {
    let last_visible = shares.iter().rposition(|share| !share.is_zero());
    let mut cells = vec![0; shares.len()];
    let mut used = 0;
    for (i, share) in shares.iter().enumerate() {
        if share.is_zero() {
            continue;
        }
        let n = if Some(i) == last_visible {
            width.saturating_sub(used)
        } else {
            cells_for(*share, width).min(width.saturating_sub(used))
        };
        used += n;
        cells[i] = n;
    }
    cells
}

fn cells_for(share: Decimal, width: usize) -> usize {
    let fraction = (share / Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0);
    (fraction * width as f64).round().max(0.0) as usize
}

fn render_ranked_chart(f: &mut Frame, area: Rect, app: &App) {
    let ranked = budget::rank_by_amount_descending(&app.budget.categories);
    if ranked.is_empty() {
        return;
    }

    let inner = area.width.saturating_sub(2) as usize;
    let gap = 1;
    let bar_width = (inner / ranked.len()).saturating_sub(gap).clamp(1, 12) as u16;

    let bars: Vec<Bar> = ranked
        .iter()
        .map(|c| {
            Bar::default()
                .value(c.amount.round().to_u64().unwrap_or(0))
                .text_value(c.amount.round().to_string())
                .label(Line::from(truncate(&c.name, bar_width as usize)))
                .style(Style::default().fg(theme::SKY))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(theme::SKY)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(theme::panel_title("Expenses by Category")),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap as u16)
        .bar_style(Style::default().fg(theme::SKY))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}
