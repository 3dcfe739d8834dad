//! Button component for TUI

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Width a bordered button needs for `label`
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Render a bordered button
///
/// Primary buttons are the filled call-to-action buttons of the site.
pub fn render_button(buf: &mut Buffer, area: Rect, label: &str, is_focused: bool, primary: bool) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else if primary {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if primary {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    Paragraph::new(label)
        .style(text_style)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}

/// Render an inline text link (single row)
pub fn render_link(buf: &mut Buffer, area: Rect, label: &str, is_focused: bool) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Paragraph::new(label).style(style).render(area, buf);
}
