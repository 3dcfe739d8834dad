//! Slide-in navigation drawer
//!
//! Only drawn while the drawer overlay is open; when closed nothing of it
//! reaches the frame.

use super::components::{button_width, render_button, BUTTON_HEIGHT};
use super::display_label;
use crate::app::App;
use crate::content::{Section, BRAND, NAVIGATION};
use crate::state::{Focus, Trigger};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

/// Drawer width on terminals wide enough to show the page beside it
const PANEL_WIDTH: u16 = 36;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerLayout {
    pub panel: Rect,
    pub brand: Rect,
    pub close: Rect,
    pub links: Vec<(Section, Rect)>,
}

impl DrawerLayout {
    /// Lay out the drawer against the right edge of `area`
    pub fn compute(area: Rect) -> Self {
        let width = if area.width < PANEL_WIDTH + 4 {
            area.width
        } else {
            PANEL_WIDTH
        };
        let panel = Rect::new(area.right().saturating_sub(width), area.y, width, area.height);
        let inner_x = panel.x + 2;
        let inner_width = panel.width.saturating_sub(4);

        let close_width = button_width(display_label(Trigger::CloseMenu)).min(inner_width);
        let close = Rect::new(
            panel.right().saturating_sub(2).saturating_sub(close_width),
            panel.y + 1,
            close_width,
            BUTTON_HEIGHT,
        );
        let brand = Rect::new(inner_x, panel.y + 2, inner_width.saturating_sub(close_width), 1);

        let mut y = close.bottom() + 1;
        let links = NAVIGATION
            .iter()
            .map(|item| {
                let rect = Rect::new(inner_x, y, inner_width, BUTTON_HEIGHT);
                y += BUTTON_HEIGHT;
                (item.section, rect.intersection(panel))
            })
            .collect();

        Self {
            panel,
            brand,
            close,
            links,
        }
    }

    /// Drawer element at a screen position (`None` for empty panel space)
    pub fn hit(&self, col: u16, row: u16) -> Option<Trigger> {
        if super::page::contains(self.close, col, row) {
            return Some(Trigger::CloseMenu);
        }
        self.links
            .iter()
            .find(|(_, rect)| super::page::contains(*rect, col, row))
            .map(|(section, _)| Trigger::DrawerLink(*section))
    }
}

/// Draw the drawer over the page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let layout = DrawerLayout::compute(area);
    let focus = app.state.focus;
    let buf = frame.buffer_mut();

    Clear.render(layout.panel, buf);
    Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black))
        .render(layout.panel, buf);

    Paragraph::new(Span::styled(
        BRAND,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .render(layout.brand, buf);

    render_button(
        buf,
        layout.close,
        display_label(Trigger::CloseMenu),
        focus == Some(Focus::Trigger(Trigger::CloseMenu)),
        false,
    );

    for (section, rect) in &layout.links {
        let trigger = Trigger::DrawerLink(*section);
        render_button(
            buf,
            *rect,
            trigger.label(),
            focus == Some(Focus::Trigger(trigger)),
            false,
        );
    }
}
