//! Scrollable page body: hero, client solutions, about us, careers, footer
//!
//! The page is laid out once per frame into a [`PageLayout`] in page
//! coordinates (row 0 is the top of the page, not of the screen). The same
//! layout drives rendering, mouse hit-testing and scroll targets.

use super::components::{button_width, render_button, wrap_text, BUTTON_HEIGHT};
use super::forms::{draw_field, field_height};
use crate::app::App;
use crate::content::{
    Section, ABOUT_TITLE, ABOUT_US, CLIENT_SOLUTIONS_INTRO, CLIENT_SOLUTIONS_TITLE, FEATURES,
    FOOTER, HERO_ILLUSTRATION, HERO_LEAD, HERO_TITLE, HIRING_BLURB, HIRING_TITLE,
    RESUME_FORMATS,
};
use crate::state::{Focus, FormFieldSet, FormId, Trigger};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

/// Widest the text column grows
const MAX_CONTENT_WIDTH: u16 = 90;

/// Content column width at which paired fields sit side by side
const SIDE_BY_SIDE_WIDTH: u16 = 60;

/// Width of the country select next to the phone number
const COUNTRY_WIDTH: u16 = 12;

#[derive(Debug, Clone)]
pub enum BlockKind {
    Text(Vec<Line<'static>>),
    Button(Trigger),
    /// Index into the careers form
    Field(usize),
}

#[derive(Debug, Clone)]
pub struct PageBlock {
    pub rect: Rect,
    pub kind: BlockKind,
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    pub height: u16,
    pub blocks: Vec<PageBlock>,
    sections: Vec<(Section, u16)>,
}

impl PageLayout {
    /// Lay out the page for a body `width` columns wide
    pub fn compute(width: u16, careers: &FormFieldSet) -> Self {
        let mut builder = Builder::new(width);
        builder.hero();
        builder.client_solutions();
        builder.about();
        builder.careers(careers);
        builder.footer();
        builder.finish()
    }

    /// First page row of a section
    pub fn section_offset(&self, section: Section) -> u16 {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, y)| *y)
            .unwrap_or(0)
    }

    /// Page rect of a focusable element
    pub fn focus_rect(&self, focus: Focus) -> Option<Rect> {
        self.blocks
            .iter()
            .find(|block| match (&block.kind, focus) {
                (BlockKind::Button(t), Focus::Trigger(f)) => *t == f,
                (BlockKind::Field(i), Focus::Field(FormId::Careers, f)) => *i == f,
                _ => false,
            })
            .map(|block| block.rect)
    }

    /// Interactive element at a page position
    pub fn hit(&self, col: u16, row: u16) -> Option<Focus> {
        self.blocks
            .iter()
            .filter(|block| contains(block.rect, col, row))
            .find_map(|block| match block.kind {
                BlockKind::Button(t) => Some(Focus::Trigger(t)),
                BlockKind::Field(i) => Some(Focus::Field(FormId::Careers, i)),
                BlockKind::Text(_) => None,
            })
    }

    /// Largest scroll offset that still fills a viewport of `viewport` rows
    pub fn max_scroll(&self, viewport: u16) -> u16 {
        self.height.saturating_sub(viewport)
    }
}

pub(crate) fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.right() && row >= rect.y && row < rect.bottom()
}

struct Builder {
    x: u16,
    width: u16,
    y: u16,
    blocks: Vec<PageBlock>,
    sections: Vec<(Section, u16)>,
}

impl Builder {
    fn new(page_width: u16) -> Self {
        let width = page_width.saturating_sub(4).clamp(1, MAX_CONTENT_WIDTH);
        Self {
            x: page_width.saturating_sub(width) / 2,
            width,
            y: 1,
            blocks: Vec::new(),
            sections: Vec::new(),
        }
    }

    fn gap(&mut self, rows: u16) {
        self.y += rows;
    }

    fn section(&mut self, section: Section) {
        self.sections.push((section, self.y));
    }

    fn lines(&mut self, lines: Vec<Line<'static>>) {
        let height = lines.len() as u16;
        self.blocks.push(PageBlock {
            rect: Rect::new(self.x, self.y, self.width, height),
            kind: BlockKind::Text(lines),
        });
        self.y += height;
    }

    fn paragraph(&mut self, text: &str, style: Style, indent: u16) {
        let pad = " ".repeat(indent as usize);
        let lines = wrap_text(text, self.width.saturating_sub(indent) as usize)
            .into_iter()
            .map(|line| Line::from(Span::styled(format!("{pad}{line}"), style)))
            .collect();
        self.lines(lines);
    }

    fn heading(&mut self, text: &str) {
        let style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        self.paragraph(text, style, 0);
    }

    fn button(&mut self, trigger: Trigger, width: u16) {
        self.blocks.push(PageBlock {
            rect: Rect::new(self.x, self.y, width.min(self.width), BUTTON_HEIGHT),
            kind: BlockKind::Button(trigger),
        });
        self.y += BUTTON_HEIGHT;
    }

    /// One row of fields; `widths` of `None` share the remaining space
    fn field_row(&mut self, fields: &[(usize, Option<u16>)], form: &FormFieldSet) {
        let spacing = 2;
        let fixed: u16 = fields.iter().filter_map(|(_, w)| *w).sum();
        let flexible = fields.iter().filter(|(_, w)| w.is_none()).count() as u16;
        let gaps = spacing * (fields.len() as u16).saturating_sub(1);
        let share = self
            .width
            .saturating_sub(fixed + gaps)
            .checked_div(flexible)
            .unwrap_or(0);

        let mut x = self.x;
        let mut height = 0;
        for (i, (index, width)) in fields.iter().enumerate() {
            let mut w = width.unwrap_or(share);
            if i + 1 == fields.len() {
                // Last field absorbs rounding
                w = (self.x + self.width).saturating_sub(x);
            }
            let h = form.get(*index).map(field_height).unwrap_or(3);
            self.blocks.push(PageBlock {
                rect: Rect::new(x, self.y, w, h),
                kind: BlockKind::Field(*index),
            });
            x += w + spacing;
            height = height.max(h);
        }
        self.y += height;
    }

    fn hero(&mut self) {
        self.section(Section::Hero);
        self.paragraph(
            HERO_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            0,
        );
        self.gap(1);
        self.paragraph(HERO_LEAD, Style::default().fg(Color::Gray), 0);
        self.gap(1);
        self.button(Trigger::GetInTouch, button_width(Trigger::GetInTouch.label()));
        self.gap(1);
        self.lines(vec![Line::from(Span::styled(
            format!("[ illustration: {HERO_ILLUSTRATION} ]"),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]);
        self.gap(2);
    }

    fn client_solutions(&mut self) {
        self.section(Section::ClientSolutions);
        self.heading(CLIENT_SOLUTIONS_TITLE);
        self.gap(1);
        self.paragraph(CLIENT_SOLUTIONS_INTRO, Style::default().fg(Color::Gray), 0);
        self.gap(1);
        for feature in FEATURES {
            self.lines(vec![Line::from(vec![
                Span::styled(
                    format!(" {} ", feature.icon),
                    Style::default().fg(Color::White).bg(Color::Blue),
                ),
                Span::raw(" "),
                Span::styled(feature.name, Style::default().add_modifier(Modifier::BOLD)),
            ])]);
            self.paragraph(feature.description, Style::default().fg(Color::Gray), 4);
            self.gap(1);
        }
        self.gap(1);
    }

    fn about(&mut self) {
        self.section(Section::About);
        self.heading(ABOUT_TITLE);
        self.gap(1);
        for item in ABOUT_US {
            self.lines(vec![Line::from(Span::styled(
                item.name,
                Style::default().add_modifier(Modifier::BOLD),
            ))]);
            self.paragraph(item.description, Style::default().fg(Color::Gray), 0);
            self.gap(1);
        }
        self.gap(1);
    }

    fn careers(&mut self, form: &FormFieldSet) {
        self.section(Section::Careers);
        self.heading(HIRING_TITLE);
        self.gap(1);
        self.paragraph(HIRING_BLURB, Style::default().fg(Color::Gray), 0);
        self.gap(1);

        let index = |name: &str| form.position(name).unwrap_or(0);
        let (first, last) = (index("first-name"), index("last-name"));
        if self.width >= SIDE_BY_SIDE_WIDTH {
            self.field_row(&[(first, None), (last, None)], form);
        } else {
            self.field_row(&[(first, None)], form);
            self.field_row(&[(last, None)], form);
        }
        self.field_row(&[(index("email"), None)], form);
        self.field_row(
            &[(index("country"), Some(COUNTRY_WIDTH)), (index("phone-number"), None)],
            form,
        );
        self.field_row(&[(index("file-upload"), None)], form);
        self.lines(vec![Line::from(Span::styled(
            format!("  {RESUME_FORMATS}"),
            Style::default().fg(Color::DarkGray),
        ))]);
        self.gap(1);
        self.button(Trigger::SubmitApplication, self.width);
        self.gap(2);
    }

    fn footer(&mut self) {
        self.lines(vec![Line::from(Span::styled(
            FOOTER,
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center)]);
        self.gap(1);
    }

    fn finish(self) -> PageLayout {
        PageLayout {
            height: self.y,
            blocks: self.blocks,
            sections: self.sections,
        }
    }
}

/// Render the page body, scrolled by the current offset
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let layout = PageLayout::compute(area.width, &state.careers_form);
    let mut page = Buffer::empty(Rect::new(0, 0, area.width, layout.height));

    for block in &layout.blocks {
        match &block.kind {
            BlockKind::Text(lines) => {
                Paragraph::new(lines.clone()).render(block.rect, &mut page);
            }
            BlockKind::Button(trigger) => {
                let focused = state.focus == Some(Focus::Trigger(*trigger));
                render_button(&mut page, block.rect, trigger.label(), focused, true);
            }
            BlockKind::Field(index) => {
                if let Some(field) = state.careers_form.get(*index) {
                    let focused = state.focus == Some(Focus::Field(FormId::Careers, *index));
                    draw_field(&mut page, block.rect, field, focused);
                }
            }
        }
    }

    blit(&page, frame.buffer_mut(), area, state.scroll_offset);
}

/// Copy the visible window of the page into the frame
fn blit(page: &Buffer, target: &mut Buffer, area: Rect, scroll: u16) {
    for row in 0..area.height {
        let src_y = scroll.saturating_add(row);
        if src_y >= page.area.height {
            break;
        }
        for col in 0..area.width {
            if let (Some(src), Some(dst)) = (
                page.cell((col, src_y)),
                target.cell_mut((area.x + col, area.y + row)),
            ) {
                *dst = src.clone();
            }
        }
    }
}
