//! Layout components (header, status bar)

use super::components::{button_width, render_button, render_link, BUTTON_HEIGHT};
use super::display_label;
use super::page::contains;
use crate::app::App;
use crate::content::{BRAND, NAVIGATION};
use crate::state::{Focus, Layer, Trigger};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

/// Header height (tall enough for a bordered button)
pub const HEADER_HEIGHT: u16 = BUTTON_HEIGHT;

/// Gap between inline header links
const LINK_GAP: u16 = 4;

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Split the screen into header, page body and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Page body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Area overlays may cover (everything above the status bar)
pub fn overlay_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub brand: Rect,
    pub items: Vec<(Trigger, Rect)>,
}

impl HeaderLayout {
    /// Place header items right to left against the edge of `area`
    pub fn compute(area: Rect, compact: bool) -> Self {
        let brand = Rect::new(area.x + 2, area.y + 1, BRAND.len() as u16, 1).intersection(area);
        let mut right = area.right().saturating_sub(1);
        let mut items = Vec::new();

        let mut place_button = |trigger: Trigger, right: &mut u16| {
            let width = button_width(display_label(trigger));
            let x = right.saturating_sub(width);
            items.push((trigger, Rect::new(x, area.y, width, BUTTON_HEIGHT)));
            *right = x.saturating_sub(1);
        };

        if compact {
            place_button(Trigger::OpenMainMenu, &mut right);
        } else {
            place_button(Trigger::Login, &mut right);
            place_button(Trigger::ContactUs, &mut right);
            right = right.saturating_sub(1);
            for item in NAVIGATION.iter().rev() {
                let trigger = Trigger::NavLink(item.section);
                let width = trigger.label().len() as u16;
                let x = right.saturating_sub(width);
                items.push((trigger, Rect::new(x, area.y + 1, width, 1)));
                right = x.saturating_sub(LINK_GAP);
            }
            items.reverse();
        }

        Self {
            brand,
            items: items
                .into_iter()
                .map(|(trigger, rect)| (trigger, rect.intersection(area)))
                .collect(),
        }
    }

    pub fn hit(&self, col: u16, row: u16) -> Option<Trigger> {
        self.items
            .iter()
            .find(|(_, rect)| contains(*rect, col, row))
            .map(|(trigger, _)| *trigger)
    }
}

/// Draw the header bar
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let layout = HeaderLayout::compute(area, app.state.compact);
    let focus = app.state.focus;
    let buf = frame.buffer_mut();

    Paragraph::new(Span::styled(
        BRAND,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .render(layout.brand, buf);

    for (trigger, rect) in &layout.items {
        let focused = focus == Some(Focus::Trigger(*trigger));
        match trigger {
            Trigger::NavLink(_) => render_link(buf, *rect, trigger.label(), focused),
            Trigger::Login => render_button(buf, *rect, display_label(*trigger), focused, false),
            _ => render_button(buf, *rect, display_label(*trigger), focused, true),
        }
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = get_layer_hints(app.state.top_layer(), app.state.compact);
    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::Gray),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: area.height.min(1),
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the topmost layer
fn get_layer_hints(layer: Layer, compact: bool) -> String {
    match layer {
        Layer::Page if compact => {
            "Tab:focus  Enter:activate  ↑↓:scroll  m:menu  c:contact  q:quit".to_string()
        }
        Layer::Page => "Tab:focus  Enter:activate  ↑↓:scroll  c:contact  q:quit".to_string(),
        Layer::Drawer => "Tab:next  Enter:go  Esc:close".to_string(),
        Layer::Dialog => "Tab:next  ←→:choose  Enter:submit  Esc:close".to_string(),
    }
}
