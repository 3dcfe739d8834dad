//! Application state and core logic

use crate::config::TuiConfig;
use crate::content::Section;
use crate::state::{AppState, Focus, Layer, Trigger};
use crate::ui::{self, create_layout, Hit, PageLayout};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::time::Instant;

/// Rows moved per scroll step
const SCROLL_STEP: u16 = 3;

/// Main application struct
pub struct App {
    /// Page view state, including both overlays
    pub state: AppState,
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        let state = AppState::new(config.enter_duration(), config.leave_duration());
        Self {
            state,
            config,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Record a new terminal size and switch header layouts at the breakpoint
    pub fn on_resize(&mut self, width: u16, height: u16) {
        if self.terminal_size == Some((height, width)) {
            return;
        }
        self.terminal_size = Some((height, width));
        let compact = width < self.config.compact_width();
        self.state.set_compact(compact, Instant::now());
        self.clamp_scroll();
    }

    /// Advance overlay animations
    pub fn tick(&mut self, now: Instant) {
        self.state.tick(now);
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    fn area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    fn page_layout(&self) -> (PageLayout, u16) {
        let body = create_layout(self.area()).body;
        (
            PageLayout::compute(body.width, &self.state.careers_form),
            body.height,
        )
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let offset = i32::from(self.state.scroll_offset) + delta;
        self.state.scroll_offset = offset.clamp(0, i32::from(u16::MAX)) as u16;
        self.clamp_scroll();
    }

    /// Scroll the page so `section` starts at the top (as far as possible)
    pub fn scroll_to(&mut self, section: Section) {
        let (layout, viewport) = self.page_layout();
        self.state.scroll_offset = layout
            .section_offset(section)
            .min(layout.max_scroll(viewport));
    }

    fn clamp_scroll(&mut self) {
        let (layout, viewport) = self.page_layout();
        self.state.scroll_offset = self.state.scroll_offset.min(layout.max_scroll(viewport));
    }

    /// Scroll a focused page element into view
    fn reveal_focus(&mut self) {
        if self.state.top_layer() != Layer::Page {
            return;
        }
        let Some(focus) = self.state.focus else {
            return;
        };
        let (layout, viewport) = self.page_layout();
        let Some(rect) = layout.focus_rect(focus) else {
            return;
        };
        let scroll = self.state.scroll_offset;
        if rect.y < scroll {
            self.state.scroll_offset = rect.y;
        } else if rect.bottom() > scroll + viewport {
            self.state.scroll_offset = rect.bottom().saturating_sub(viewport);
        }
        self.clamp_scroll();
    }

    /// Run whatever a trigger is wired to
    pub fn activate(&mut self, trigger: Trigger) {
        tracing::debug!("activated \"{}\"", trigger.label());
        let now = Instant::now();
        if let Some(action) = trigger.overlay_action() {
            self.state.apply(action, now);
        }
        if let Some(section) = trigger.scroll_target() {
            self.scroll_to(section);
        } else {
            self.reveal_focus();
        }
        if matches!(trigger, Trigger::Login | Trigger::SubmitApplication) {
            tracing::debug!("\"{}\" has no handler", trigger.label());
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.state.close_topmost(Instant::now());
                self.reveal_focus();
                return;
            }
            KeyCode::Tab => {
                self.state.focus_next();
                self.reveal_focus();
                return;
            }
            KeyCode::BackTab => {
                self.state.focus_prev();
                self.reveal_focus();
                return;
            }
            _ => {}
        }

        if self.handle_field_key(key) {
            return;
        }

        let layer = self.state.top_layer();
        match (key.code, layer) {
            (KeyCode::Enter | KeyCode::Char(' '), _) => {
                if let Some(trigger) = self.state.focused_trigger() {
                    self.activate(trigger);
                }
            }
            (KeyCode::Down, Layer::Drawer | Layer::Dialog) => self.state.focus_next(),
            (KeyCode::Up, Layer::Drawer | Layer::Dialog) => self.state.focus_prev(),
            (KeyCode::Down, Layer::Page) => self.scroll_by(1),
            (KeyCode::Up, Layer::Page) => self.scroll_by(-1),
            (KeyCode::PageDown, Layer::Page) => self.scroll_by(self.page_step()),
            (KeyCode::PageUp, Layer::Page) => self.scroll_by(-self.page_step()),
            (KeyCode::Home, Layer::Page) => self.state.scroll_offset = 0,
            (KeyCode::End, Layer::Page) => self.scroll_by(i32::from(u16::MAX)),
            (KeyCode::Char('q'), Layer::Page) => self.quit = true,
            (KeyCode::Char('m'), Layer::Page) if self.state.compact => {
                self.state.focus = Some(Focus::Trigger(Trigger::OpenMainMenu));
                self.activate(Trigger::OpenMainMenu);
            }
            (KeyCode::Char('c'), Layer::Page | Layer::Drawer) => {
                self.activate(Trigger::ContactUs);
            }
            _ => {}
        }
    }

    fn page_step(&self) -> i32 {
        let (_, viewport) = self.page_layout();
        i32::from(viewport.saturating_sub(2).max(1))
    }

    /// Edit the focused form field. Returns true if the key was consumed.
    fn handle_field_key(&mut self, key: KeyEvent) -> bool {
        let Some(field) = self.state.focused_field_mut() else {
            return false;
        };
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(' ') if field.is_select() => {
                field.cycle_option(true);
                true
            }
            KeyCode::Char(c) if plain && field.accepts_text() => {
                field.push_char(c);
                true
            }
            KeyCode::Backspace => {
                field.pop_char();
                true
            }
            KeyCode::Left if field.is_select() => {
                field.cycle_option(false);
                true
            }
            KeyCode::Right if field.is_select() => {
                field.cycle_option(true);
                true
            }
            KeyCode::Enter if field.is_multiline() => {
                field.push_char('\n');
                true
            }
            KeyCode::Enter => {
                self.state.focus_next();
                self.reveal_focus();
                true
            }
            _ => false,
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let now = Instant::now();
                match ui::hit_test(self, self.area(), mouse.column, mouse.row, now) {
                    Hit::Backdrop => {
                        self.state.close_topmost(now);
                    }
                    Hit::Element(focus) => {
                        self.state.focus = Some(focus);
                        if let Some(trigger) = focus.trigger() {
                            self.activate(trigger);
                        }
                    }
                    Hit::Nothing => {}
                }
            }
            MouseEventKind::ScrollDown if self.state.top_layer() == Layer::Page => {
                self.scroll_by(i32::from(SCROLL_STEP));
            }
            MouseEventKind::ScrollUp if self.state.top_layer() == Layer::Page => {
                self.scroll_by(-i32::from(SCROLL_STEP));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormId, OverlayId, OverlayState};
    use crate::ui::{overlay_area, DialogLayout, DrawerLayout, HeaderLayout};
    use pretty_assertions::assert_eq;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 24;

    fn app() -> App {
        let config = TuiConfig {
            animations: Some(false),
            ..Default::default()
        };
        let mut app = App::new(config);
        app.on_resize(WIDTH, HEIGHT);
        app
    }

    fn area() -> Rect {
        Rect::new(0, 0, WIDTH, HEIGHT)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click_at(app: &mut App, rect: Rect) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y + 1,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn drawer(app: &App) -> OverlayState {
        app.state.nav_drawer.state()
    }

    fn dialog(app: &App) -> OverlayState {
        app.state.contact_dialog.overlay().state()
    }

    fn click_open_main_menu(app: &mut App) {
        let header = HeaderLayout::compute(create_layout(area()).header, app.state.compact);
        let (trigger, rect) = header.items[0];
        assert_eq!(trigger, Trigger::OpenMainMenu);
        click_at(app, rect);
    }

    fn click_close_menu(app: &mut App) {
        let drawer = DrawerLayout::compute(overlay_area(area()));
        click_at(app, drawer.close);
    }

    fn click_get_in_touch(app: &mut App) {
        let body = create_layout(area()).body;
        let page = PageLayout::compute(body.width, &app.state.careers_form);
        let rect = page
            .focus_rect(Focus::Trigger(Trigger::GetInTouch))
            .unwrap();
        let screen_rect = Rect {
            y: rect.y + body.y - app.state.scroll_offset,
            ..rect
        };
        click_at(app, screen_rect);
    }

    fn click_submit(app: &mut App) {
        let dialog = DialogLayout::compute(overlay_area(area()), &app.state.contact_form, 0);
        click_at(app, dialog.submit);
    }

    mod scenarios {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fresh_page_load() {
            let app = app();
            assert_eq!(drawer(&app), OverlayState::Closed);
            assert_eq!(dialog(&app), OverlayState::Closed);
        }

        #[test]
        fn test_open_main_menu() {
            let mut app = app();
            click_open_main_menu(&mut app);
            assert_eq!(drawer(&app), OverlayState::Open);
            assert_eq!(dialog(&app), OverlayState::Closed);
        }

        #[test]
        fn test_close_menu() {
            let mut app = app();
            click_open_main_menu(&mut app);
            click_close_menu(&mut app);
            assert_eq!(drawer(&app), OverlayState::Closed);
            assert_eq!(
                app.state.focus,
                Some(Focus::Trigger(Trigger::OpenMainMenu))
            );
        }

        #[test]
        fn test_get_in_touch_then_submit() {
            let mut app = app();
            click_get_in_touch(&mut app);
            assert_eq!(dialog(&app), OverlayState::Open);
            assert_eq!(drawer(&app), OverlayState::Closed);

            click_submit(&mut app);
            assert_eq!(dialog(&app), OverlayState::Closed);
            assert!(!app.state.contact_dialog.is_rendered());
            assert_eq!(app.state.focus, Some(Focus::Trigger(Trigger::GetInTouch)));
        }
    }

    mod dismissal {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_escape_closes_dialog() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('c')));
            assert_eq!(dialog(&app), OverlayState::Open);
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(dialog(&app), OverlayState::Closed);
        }

        #[test]
        fn test_escape_closes_drawer() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('m')));
            assert_eq!(drawer(&app), OverlayState::Open);
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(drawer(&app), OverlayState::Closed);
        }

        #[test]
        fn test_escape_on_bare_page_is_harmless() {
            let mut app = app();
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(drawer(&app), OverlayState::Closed);
            assert_eq!(dialog(&app), OverlayState::Closed);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_backdrop_click_closes_drawer() {
            let mut app = app();
            click_open_main_menu(&mut app);
            click_at(&mut app, Rect::new(0, 10, 1, 1));
            assert_eq!(drawer(&app), OverlayState::Closed);
        }

        #[test]
        fn test_backdrop_click_closes_dialog() {
            let mut app = app();
            click_get_in_touch(&mut app);
            click_at(&mut app, Rect::new(0, 0, 1, 1));
            assert_eq!(dialog(&app), OverlayState::Closed);
        }

        #[test]
        fn test_drawer_link_closes_and_scrolls() {
            let mut app = app();
            click_open_main_menu(&mut app);
            let drawer_layout = DrawerLayout::compute(overlay_area(area()));
            let (section, rect) = drawer_layout.links[1];
            assert_eq!(section, Section::About);
            click_at(&mut app, rect);
            assert_eq!(drawer(&app), OverlayState::Closed);
            assert!(app.state.scroll_offset > 0);
        }
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;
        use std::time::Duration;

        fn animated_app() -> App {
            let mut app = App::new(TuiConfig::default());
            app.on_resize(WIDTH, HEIGHT);
            app
        }

        #[test]
        fn test_escape_while_entering_closes_dialog() {
            let mut app = animated_app();
            app.handle_key(key(KeyCode::Char('c')));
            assert!(app.is_animating());
            assert_eq!(dialog(&app), OverlayState::Open);

            app.handle_key(key(KeyCode::Esc));
            assert_eq!(dialog(&app), OverlayState::Closed);
            assert_eq!(app.state.top_layer(), Layer::Page);

            app.tick(Instant::now() + Duration::from_secs(1));
            assert!(!app.state.contact_dialog.is_rendered());
            assert!(!app.is_animating());
        }

        #[test]
        fn test_close_mid_enter_then_tick_hides_dialog() {
            let mut app = animated_app();
            let t0 = Instant::now();
            app.state.open_overlay(OverlayId::ContactDialog, t0);
            app.tick(t0 + Duration::from_millis(100));
            app.state
                .close_overlay(OverlayId::ContactDialog, t0 + Duration::from_millis(100));
            assert!(app.state.contact_dialog.is_rendered());

            app.tick(t0 + Duration::from_millis(400));
            assert!(!app.state.contact_dialog.is_rendered());
        }

        #[test]
        fn test_reopen_while_leaving_wins() {
            let mut app = animated_app();
            let t0 = Instant::now();
            app.state.open_overlay(OverlayId::ContactDialog, t0);
            app.tick(t0 + Duration::from_millis(300));
            let t1 = t0 + Duration::from_millis(300);
            app.state.close_overlay(OverlayId::ContactDialog, t1);
            app.state
                .open_overlay(OverlayId::ContactDialog, t1 + Duration::from_millis(50));
            assert_eq!(dialog(&app), OverlayState::Open);

            app.tick(t1 + Duration::from_secs(1));
            assert!(app.state.contact_dialog.is_rendered());
            assert!(!app.is_animating());
        }

        #[test]
        fn test_input_reaches_page_while_dialog_leaves() {
            let mut app = animated_app();
            app.handle_key(key(KeyCode::Char('c')));
            app.tick(Instant::now() + Duration::from_millis(300));
            app.handle_key(key(KeyCode::Esc));
            assert!(app.state.contact_dialog.is_rendered());
            assert_eq!(app.state.top_layer(), Layer::Page);

            app.handle_key(key(KeyCode::Down));
            assert_eq!(app.state.scroll_offset, 1);
            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }
    }

    mod keyboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_tab_then_enter_opens_menu() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(
                app.state.focus,
                Some(Focus::Trigger(Trigger::OpenMainMenu))
            );
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(drawer(&app), OverlayState::Open);
            assert_eq!(app.state.focus, Some(Focus::Trigger(Trigger::CloseMenu)));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(drawer(&app), OverlayState::Closed);
            assert_eq!(
                app.state.focus,
                Some(Focus::Trigger(Trigger::OpenMainMenu))
            );
        }

        #[test]
        fn test_typing_into_contact_form() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('c')));
            for c in "Ana".chars() {
                app.handle_key(key(KeyCode::Char(c)));
            }
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.contact_form.get(0).unwrap().as_text(), "An");
            // Enter on a single-line field moves on
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.focus, Some(Focus::Field(FormId::Contact, 1)));
        }

        #[test]
        fn test_typed_q_goes_into_field() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('c')));
            app.handle_key(key(KeyCode::Char('q')));
            assert!(!app.should_quit());
            assert_eq!(app.state.contact_form.get(0).unwrap().as_text(), "q");
        }

        #[test]
        fn test_select_field_cycles() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('c')));
            let industry = app.state.contact_form.position("industry").unwrap();
            app.state.focus = Some(Focus::Field(FormId::Contact, industry));
            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Char(' ')));
            app.handle_key(key(KeyCode::Left));
            assert_eq!(
                app.state.contact_form.get(industry).unwrap().selected_option(),
                Some("Legal")
            );
        }

        #[test]
        fn test_multiline_enter_inserts_newline() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('c')));
            let message = app.state.contact_form.position("message").unwrap();
            app.state.focus = Some(Focus::Field(FormId::Contact, message));
            app.handle_key(key(KeyCode::Char('a')));
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Char('b')));
            assert_eq!(app.state.contact_form.get(message).unwrap().as_text(), "a\nb");
        }

        #[test]
        fn test_submit_by_keyboard() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('c')));
            app.handle_key(key(KeyCode::BackTab));
            assert_eq!(
                app.state.focus,
                Some(Focus::Trigger(Trigger::SubmitContact))
            );
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(dialog(&app), OverlayState::Closed);
        }

        #[test]
        fn test_q_quits_from_page() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }

        #[test]
        fn test_menu_shortcut_needs_compact_layout() {
            let mut app = app();
            app.on_resize(120, HEIGHT);
            app.handle_key(key(KeyCode::Char('m')));
            assert_eq!(drawer(&app), OverlayState::Closed);
        }

        #[test]
        fn test_release_events_ignored() {
            let mut app = app();
            let mut release = key(KeyCode::Char('q'));
            release.kind = KeyEventKind::Release;
            app.handle_key(release);
            assert!(!app.should_quit());
        }
    }

    mod scrolling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_scroll_is_clamped() {
            let mut app = app();
            app.scroll_by(-10);
            assert_eq!(app.state.scroll_offset, 0);
            app.handle_key(key(KeyCode::End));
            let (layout, viewport) = app.page_layout();
            assert_eq!(app.state.scroll_offset, layout.max_scroll(viewport));
            app.handle_key(key(KeyCode::Home));
            assert_eq!(app.state.scroll_offset, 0);
        }

        #[test]
        fn test_focusing_careers_field_reveals_it() {
            let mut app = app();
            app.state.focus = Some(Focus::Trigger(Trigger::GetInTouch));
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.focus, Some(Focus::Field(FormId::Careers, 0)));
            let (layout, viewport) = app.page_layout();
            let rect = layout
                .focus_rect(Focus::Field(FormId::Careers, 0))
                .unwrap();
            assert!(rect.y >= app.state.scroll_offset);
            assert!(rect.bottom() <= app.state.scroll_offset + viewport);
        }

        #[test]
        fn test_wheel_scroll_only_on_page() {
            let mut app = app();
            let wheel = MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 5,
                row: 10,
                modifiers: KeyModifiers::NONE,
            };
            app.handle_mouse(wheel);
            assert_eq!(app.state.scroll_offset, SCROLL_STEP);

            app.handle_key(key(KeyCode::Char('c')));
            app.handle_mouse(wheel);
            assert_eq!(app.state.scroll_offset, SCROLL_STEP);
        }

        #[test]
        fn test_enter_after_widening_does_not_reopen_drawer() {
            let mut app = app();
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(drawer(&app), OverlayState::Open);

            app.on_resize(120, HEIGHT);
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(drawer(&app), OverlayState::Closed);
            assert_eq!(app.state.focus, None);
        }

        #[test]
        fn test_enter_after_narrowing_ignores_header_link() {
            let mut app = app();
            app.on_resize(120, HEIGHT);
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(
                app.state.focus,
                Some(Focus::Trigger(Trigger::NavLink(Section::ClientSolutions)))
            );

            app.on_resize(WIDTH, HEIGHT);
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.scroll_offset, 0);
            assert_eq!(app.state.focus, None);
        }

        #[test]
        fn test_widening_closes_open_drawer() {
            let mut app = app();
            click_open_main_menu(&mut app);
            app.on_resize(120, HEIGHT);
            assert_eq!(drawer(&app), OverlayState::Closed);
            assert!(!app.state.compact);
        }
    }
}
