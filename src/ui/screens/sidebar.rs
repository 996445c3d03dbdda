use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::ui::app::{App, Field, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    // Inner width minus the value column and padding
    let inner = area.width.saturating_sub(2) as usize;
    let value_width = 14;
    let label_width = inner.saturating_sub(value_width + 2).max(4);

    let mut items: Vec<ListItem> = Vec::with_capacity(app.field_count() + 1);
    for i in 0..app.field_count() {
        let field = if i == 0 { Field::Income } else { Field::Category(i - 1) };
        let selected = i == app.field_index;

        let style = if selected {
            theme::selected_style()
        } else if i % 2 == 0 {
            theme::alt_row_style()
        } else {
            theme::normal_style()
        };

        let value = if selected && app.input_mode == InputMode::Editing {
            format!("{}▏", app.edit_input)
        } else {
            format_amount(app.field_value(field))
        };

        let label = truncate(app.field_label(field), label_width);
        let label_style = if field == Field::Income {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!(" {label:<label_width$}"), label_style),
            Span::styled(format!("{value:>value_width$} "), style),
        ])));

        // Separate income from the category amounts
        if field == Field::Income {
            items.push(ListItem::new(Line::from(Span::styled(
                format!(" {}", "─".repeat(inner.saturating_sub(2))),
                Style::default().fg(theme::OVERLAY),
            ))));
        }
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(theme::panel_title("Adjust your Budget")),
    );
    f.render_widget(list, area);
}
