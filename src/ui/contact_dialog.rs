//! Centered "Contact our team" dialog
//!
//! Drawn while the dialog transition is rendered, including the leave
//! animation. During enter/leave the panel sits a few rows lower and is
//! dimmed, easing into place.

use super::components::{centered_rect, dim_backdrop, render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, field_height};
use super::page::contains;
use crate::app::App;
use crate::content::CONTACT_TITLE;
use crate::state::{Focus, FormFieldSet, FormId, Trigger};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};
use std::time::Instant;

const MAX_WIDTH: u16 = 64;

/// Inner width at which fields share rows
const SIDE_BY_SIDE_WIDTH: u16 = 40;

/// Rows the panel travels while entering or leaving
const SLIDE_ROWS: f32 = 4.0;

const COUNTRY_WIDTH: u16 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogLayout {
    pub panel: Rect,
    pub title: Rect,
    pub fields: Vec<(usize, Rect)>,
    pub submit: Rect,
}

impl DialogLayout {
    /// Lay out the dialog centered in `area`, shifted down by `offset` rows
    pub fn compute(area: Rect, form: &FormFieldSet, offset: u16) -> Self {
        let width = area.width.saturating_sub(4).min(MAX_WIDTH);
        let inner_width = width.saturating_sub(4);
        let rows = field_rows(form, inner_width >= SIDE_BY_SIDE_WIDTH);

        let row_height = |row: &[(usize, Constraint)]| {
            row.iter()
                .filter_map(|(i, _)| form.get(*i))
                .map(field_height)
                .max()
                .unwrap_or(3)
        };
        let fields_height: u16 = rows.iter().map(|row| row_height(row)).sum();
        // border + title + gap + fields + gap + submit + border
        let height = 1 + 1 + 1 + fields_height + 1 + BUTTON_HEIGHT + 1;

        let mut panel = centered_rect(area, width, height);
        panel.y = panel.y.saturating_add(offset).min(area.bottom().saturating_sub(1));
        let panel = panel.intersection(area);

        let inner_x = panel.x + 2;
        let title = Rect::new(inner_x, panel.y + 1, inner_width, 1);

        let mut y = title.bottom() + 1;
        let mut fields = Vec::new();
        for row in &rows {
            let row_area = Rect::new(inner_x, y, inner_width, row_height(row));
            let constraints: Vec<Constraint> = row.iter().map(|(_, c)| *c).collect();
            let cells = Layout::horizontal(constraints).spacing(1).split(row_area);
            for ((index, _), cell) in row.iter().zip(cells.iter()) {
                let height = form.get(*index).map(field_height).unwrap_or(3);
                fields.push((*index, Rect::new(cell.x, cell.y, cell.width, height)));
            }
            y += row_area.height;
        }
        let submit = Rect::new(inner_x, y + 1, inner_width, BUTTON_HEIGHT);

        Self {
            panel,
            title: title.intersection(area),
            fields: fields
                .into_iter()
                .map(|(i, rect)| (i, rect.intersection(area)))
                .collect(),
            submit: submit.intersection(area),
        }
    }

    /// Dialog element at a screen position
    pub fn hit(&self, col: u16, row: u16) -> Option<Focus> {
        if contains(self.submit, col, row) {
            return Some(Focus::Trigger(Trigger::SubmitContact));
        }
        self.fields
            .iter()
            .find(|(_, rect)| contains(*rect, col, row))
            .map(|(index, _)| Focus::Field(FormId::Contact, *index))
    }
}

/// Group the contact fields into rows
fn field_rows(form: &FormFieldSet, side_by_side: bool) -> Vec<Vec<(usize, Constraint)>> {
    let index = |name: &str| form.position(name);
    let fill = |name: &str| index(name).map(|i| (i, Constraint::Fill(1)));

    if !side_by_side {
        return (0..form.len()).map(|i| vec![(i, Constraint::Fill(1))]).collect();
    }

    let rows = vec![
        vec![fill("first-name"), fill("last-name")],
        vec![fill("email"), fill("company")],
        vec![
            fill("industry"),
            index("country").map(|i| (i, Constraint::Length(COUNTRY_WIDTH))),
            fill("phone-number"),
        ],
        vec![fill("message")],
    ];
    rows.into_iter()
        .map(|row| row.into_iter().flatten().collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect()
}

/// Rows the panel sits below its resting place at `visibility`
pub fn slide_offset(visibility: f32) -> u16 {
    ((1.0 - visibility.clamp(0.0, 1.0)) * SLIDE_ROWS).round() as u16
}

/// Draw the dimmed backdrop and the dialog panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let state = &app.state;
    let visibility = state.contact_dialog.visibility(now);
    let layout = DialogLayout::compute(area, &state.contact_form, slide_offset(visibility));
    let buf = frame.buffer_mut();

    if visibility > 0.0 {
        dim_backdrop(buf, area);
    }

    Clear.render(layout.panel, buf);
    let border_color = if visibility < 0.6 {
        Color::DarkGray
    } else {
        Color::Blue
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black))
        .render(layout.panel, buf);

    Paragraph::new(Span::styled(
        CONTACT_TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(layout.title, buf);

    for (index, rect) in &layout.fields {
        if rect.is_empty() {
            continue;
        }
        if let Some(field) = state.contact_form.get(*index) {
            let focused = state.focus == Some(Focus::Field(FormId::Contact, *index));
            draw_field(buf, *rect, field, focused);
        }
    }

    if !layout.submit.is_empty() {
        render_button(
            buf,
            layout.submit,
            Trigger::SubmitContact.label(),
            state.focus == Some(Focus::Trigger(Trigger::SubmitContact)),
            true,
        );
    }

    if visibility < 0.6 {
        buf.set_style(
            layout.panel,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
