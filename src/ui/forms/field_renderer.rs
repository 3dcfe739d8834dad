//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rows a field box occupies
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        4
    } else {
        3
    }
}

/// Placeholder shown for an empty, unfocused field
fn placeholder(field: &FormField) -> &'static str {
    match field.kind {
        FieldKind::File => "Upload a file",
        FieldKind::Email => "name@example.com",
        _ => "",
    }
}

/// Draw a form field as a bordered box titled with its label
pub fn draw_field(buf: &mut Buffer, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let cursor = if is_active && field.accepts_text() {
        "▌"
    } else {
        ""
    };

    let content = if display_value.is_empty() && !is_active {
        Paragraph::new(Span::styled(
            placeholder(field),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if display_value.ends_with('\n') || lines.is_empty() {
            lines.push(Line::from(""));
        }
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
        }
        // Keep the cursor line visible once the text outgrows the box
        let visible = area.height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(visible.max(1));
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    content
        .wrap(Wrap { trim: false })
        .block(block)
        .render(area, buf);
}
