//! Page view state
//!
//! The page owns one state machine per overlay. Nothing here is global:
//! every instance lives in [`AppState`] and is handed to the renderer by
//! reference.

use super::{
    Focus, FormField, FormFieldSet, FormId, Overlay, OverlayAction, OverlayId, Transition,
    Trigger,
};
use crate::content::NAVIGATION;
use std::time::{Duration, Instant};

/// Topmost layer receiving input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Page,
    Drawer,
    Dialog,
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Slide-in navigation drawer (compact layouts)
    pub nav_drawer: Overlay,
    /// Centered contact dialog with enter/leave animation
    pub contact_dialog: Transition,
    pub contact_form: FormFieldSet,
    pub careers_form: FormFieldSet,
    pub focus: Option<Focus>,
    /// First page row shown below the header
    pub scroll_offset: u16,
    /// Terminal narrower than the configured breakpoint
    pub compact: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl AppState {
    pub fn new(enter: Duration, leave: Duration) -> Self {
        Self {
            nav_drawer: Overlay::with_initial_focus(Focus::Trigger(Trigger::CloseMenu)),
            contact_dialog: Transition::new(
                Overlay::with_initial_focus(Focus::Field(FormId::Contact, 0)),
                enter,
                leave,
            ),
            contact_form: FormFieldSet::contact(),
            careers_form: FormFieldSet::careers(),
            focus: None,
            scroll_offset: 0,
            compact: false,
        }
    }

    pub fn is_open(&self, id: OverlayId) -> bool {
        match id {
            OverlayId::NavDrawer => self.nav_drawer.is_open(),
            OverlayId::ContactDialog => self.contact_dialog.is_open(),
        }
    }

    pub fn top_layer(&self) -> Layer {
        if self.contact_dialog.is_open() {
            Layer::Dialog
        } else if self.nav_drawer.is_open() {
            Layer::Drawer
        } else {
            Layer::Page
        }
    }

    pub fn form(&self, id: FormId) -> &FormFieldSet {
        match id {
            FormId::Contact => &self.contact_form,
            FormId::Careers => &self.careers_form,
        }
    }

    /// Focusable elements of the topmost layer, in tab order
    pub fn focus_ring(&self) -> Vec<Focus> {
        let fields = |form: FormId| {
            (0..self.form(form).len()).map(move |i| Focus::Field(form, i))
        };
        let mut ring = Vec::new();
        match self.top_layer() {
            Layer::Dialog => {
                ring.extend(fields(FormId::Contact));
                ring.push(Focus::Trigger(Trigger::SubmitContact));
            }
            Layer::Drawer => {
                ring.push(Focus::Trigger(Trigger::CloseMenu));
                ring.extend(
                    NAVIGATION
                        .iter()
                        .map(|item| Focus::Trigger(Trigger::DrawerLink(item.section))),
                );
            }
            Layer::Page => {
                if self.compact {
                    ring.push(Focus::Trigger(Trigger::OpenMainMenu));
                } else {
                    ring.extend(
                        NAVIGATION
                            .iter()
                            .map(|item| Focus::Trigger(Trigger::NavLink(item.section))),
                    );
                    ring.push(Focus::Trigger(Trigger::ContactUs));
                    ring.push(Focus::Trigger(Trigger::Login));
                }
                ring.push(Focus::Trigger(Trigger::GetInTouch));
                ring.extend(fields(FormId::Careers));
                ring.push(Focus::Trigger(Trigger::SubmitApplication));
            }
        }
        ring
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let ring = self.focus_ring();
        if ring.is_empty() {
            return;
        }
        let len = ring.len();
        let position = self
            .focus
            .and_then(|focus| ring.iter().position(|f| *f == focus));
        let next = match (position, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.focus = Some(ring[next]);
    }

    #[cfg(test)]
    pub fn focused_field(&self) -> Option<&FormField> {
        let (form, index) = self.focus?.field()?;
        self.form(form).get(index)
    }

    /// Focused trigger, if it is part of the topmost layer
    pub fn focused_trigger(&self) -> Option<Trigger> {
        let focus = self.focus?;
        if !self.focus_ring().contains(&focus) {
            return None;
        }
        focus.trigger()
    }

    /// Forget focus on an element the topmost layer no longer shows
    fn drop_stale_focus(&mut self) {
        if let Some(focus) = self.focus {
            if !self.focus_ring().contains(&focus) {
                tracing::debug!("dropping focus on hidden {focus:?}");
                self.focus = None;
            }
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        let (form, index) = self.focus?.field()?;
        match form {
            FormId::Contact => self.contact_form.get_mut(index),
            FormId::Careers => self.careers_form.get_mut(index),
        }
    }

    /// Open an overlay, remembering the focused element as its trigger
    pub fn open_overlay(&mut self, id: OverlayId, now: Instant) {
        if self.is_open(id) {
            return;
        }
        let trigger = self.focus;
        let focus = match id {
            OverlayId::NavDrawer => self.nav_drawer.open(trigger),
            OverlayId::ContactDialog => {
                // The dialog content mounts fresh every time it opens
                self.contact_form = FormFieldSet::contact();
                self.contact_dialog.open(trigger, now)
            }
        };
        if focus.is_some() {
            self.focus = focus;
        }
        tracing::info!("opened {}", id.label());
    }

    /// Close an overlay and hand focus back to whatever opened it
    pub fn close_overlay(&mut self, id: OverlayId, now: Instant) {
        if !self.is_open(id) {
            return;
        }
        self.focus = match id {
            OverlayId::NavDrawer => self.nav_drawer.close(),
            OverlayId::ContactDialog => self.contact_dialog.close(now),
        };
        self.drop_stale_focus();
        tracing::info!("closed {}", id.label());
    }

    pub fn apply(&mut self, action: OverlayAction, now: Instant) {
        match action {
            OverlayAction::Open(id) => self.open_overlay(id, now),
            OverlayAction::Close(id) => self.close_overlay(id, now),
        }
    }

    /// Close whichever overlay is on top. Returns false if none was open.
    pub fn close_topmost(&mut self, now: Instant) -> bool {
        match self.top_layer() {
            Layer::Dialog => self.close_overlay(OverlayId::ContactDialog, now),
            Layer::Drawer => self.close_overlay(OverlayId::NavDrawer, now),
            Layer::Page => return false,
        }
        true
    }

    /// Switch between compact and wide header layouts
    pub fn set_compact(&mut self, compact: bool, now: Instant) {
        if self.compact == compact {
            return;
        }
        self.compact = compact;
        // The drawer's trigger only exists on compact layouts
        if !compact {
            self.close_overlay(OverlayId::NavDrawer, now);
        }
        self.drop_stale_focus();
    }

    pub fn tick(&mut self, now: Instant) {
        self.contact_dialog.tick(now);
    }

    pub fn is_animating(&self) -> bool {
        self.contact_dialog.is_animating()
    }
}
