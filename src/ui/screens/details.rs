use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use crate::budget::{self, DerivedBudget};
use crate::ui::app::{App, Field};
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, derived: &DerivedBudget) {
    // Detail table: header + one row per category + total, plus borders
    let detail_height = app.budget.categories.len() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(detail_height), Constraint::Min(5)])
        .split(area);

    render_detail_table(f, chunks[0], app, derived);
    render_breakdown(f, chunks[1], app);
}

fn widths() -> [Constraint; 3] {
    [
        Constraint::Min(24),
        Constraint::Length(16),
        Constraint::Length(12),
    ]
}

fn render_detail_table(f: &mut Frame, area: Rect, app: &App, derived: &DerivedBudget) {
    let selected = match app.selected_field() {
        Field::Category(i) => Some(i),
        Field::Income => None,
    };

    let mut rows: Vec<Row> = budget::to_export_rows(&app.budget, derived)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if selected == Some(i) {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                row.category,
                format!("{:>16}", format_amount(row.amount)),
                format!("{:>12}", format_percent(row.percentage)),
            ])
            .style(style)
        })
        .collect();

    rows.push(
        Row::new(vec![
            "Total".to_string(),
            format!("{:>16}", format_amount(derived.total_expenses)),
            format!("{:>12}", format_percent(derived.percentage_sum())),
        ])
        .style(theme::normal_style().add_modifier(Modifier::BOLD)),
    );

    let table = Table::new(rows, widths())
        .header(Row::new(vec![
            "Category".to_string(),
            format!("{:>16}", "Amount"),
            format!("{:>12}", "Percentage"),
        ])
        .style(theme::header_style()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(theme::panel_title("Detailed Budget Data")),
        );
    f.render_widget(table, area);
}

fn render_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let rows: Vec<Row> = budget::expense_breakdown(&app.budget)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                row.category,
                format!("{:>16}", format_amount(row.amount)),
                format!("{:>12}", format_percent(row.share)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, widths())
        .header(Row::new(vec![
            "Category".to_string(),
            format!("{:>16}", "Amount"),
            format!("{:>12}", "Share"),
        ])
        .style(theme::header_style()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::OVERLAY))
                .title(theme::panel_title("Expense Categories Breakdown")),
        );
    f.render_widget(table, area);
}
