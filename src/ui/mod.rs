//! UI module for rendering the TUI
//!
//! Rendering is a pure function of [`App`] state: an overlay that is not
//! open (or, for the dialog, not still leaving) draws nothing at all.

mod components;
mod contact_dialog;
mod drawer;
mod forms;
mod layout;
mod page;

pub use contact_dialog::DialogLayout;
pub use drawer::DrawerLayout;
pub use layout::{create_layout, overlay_area, HeaderLayout};
pub use page::PageLayout;

use crate::app::App;
use crate::state::{Focus, Trigger};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    draw_at(frame, app, Instant::now());
}

/// Draw the frame as it looks at `now`
pub fn draw_at(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let screen = create_layout(area);

    page::draw(frame, screen.body, app);
    layout::draw_header(frame, screen.header, app);

    if app.state.nav_drawer.is_open() {
        drawer::draw(frame, overlay_area(area), app);
    }
    if app.state.contact_dialog.is_rendered() {
        contact_dialog::draw(frame, overlay_area(area), app, now);
    }

    layout::draw_status_bar(frame, screen.status, app);
}

/// Label drawn on a trigger (icon glyphs included)
pub fn display_label(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::OpenMainMenu => "☰ Open main menu",
        Trigger::CloseMenu => "✕ Close menu",
        other => other.label(),
    }
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Element(Focus),
    /// Outside the topmost overlay's panel
    Backdrop,
    Nothing,
}

/// Resolve a click at a screen position against the topmost layer, as the
/// frame looks at `now`.
pub fn hit_test(app: &App, area: Rect, col: u16, row: u16, now: Instant) -> Hit {
    let state = &app.state;
    let overlay = overlay_area(area);

    if state.contact_dialog.is_open() {
        let offset = contact_dialog::slide_offset(state.contact_dialog.visibility(now));
        let dialog = DialogLayout::compute(overlay, &state.contact_form, offset);
        if !page::contains(dialog.panel, col, row) {
            return Hit::Backdrop;
        }
        return dialog.hit(col, row).map_or(Hit::Nothing, Hit::Element);
    }

    if state.nav_drawer.is_open() {
        let drawer = DrawerLayout::compute(overlay);
        if !page::contains(drawer.panel, col, row) {
            return Hit::Backdrop;
        }
        return drawer
            .hit(col, row)
            .map_or(Hit::Nothing, |t| Hit::Element(Focus::Trigger(t)));
    }

    let screen = create_layout(area);
    if page::contains(screen.header, col, row) {
        return HeaderLayout::compute(screen.header, state.compact)
            .hit(col, row)
            .map_or(Hit::Nothing, |t| Hit::Element(Focus::Trigger(t)));
    }
    if page::contains(screen.body, col, row) {
        let page = PageLayout::compute(screen.body.width, &state.careers_form);
        let page_row = row - screen.body.y + state.scroll_offset;
        return page
            .hit(col - screen.body.x, page_row)
            .map_or(Hit::Nothing, Hit::Element);
    }
    Hit::Nothing
}

/// Rows of a buffer as plain strings
#[cfg(test)]
pub(crate) fn buffer_lines(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                .collect()
        })
        .collect()
}
