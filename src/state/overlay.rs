//! Open/closed state for the page overlays
//!
//! Each overlay (navigation drawer, contact dialog) is a two-state machine
//! owned by the page state. Opening remembers the element that triggered it
//! so focus can go back there on close.

use super::Focus;

/// Overlay instances on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayId {
    NavDrawer,
    ContactDialog,
}

impl OverlayId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NavDrawer => "navigation drawer",
            Self::ContactDialog => "contact dialog",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// A toggleable overlay with focus handoff
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    state: OverlayState,
    /// Where focus goes when the overlay opens
    initial_focus: Option<Focus>,
    /// Element that opened the overlay
    return_focus: Option<Focus>,
}

impl Overlay {
    pub fn with_initial_focus(focus: Focus) -> Self {
        Self {
            initial_focus: Some(focus),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Open the overlay.
    ///
    /// Returns the focus target to move to. Opening an already open overlay
    /// changes nothing and returns `None`.
    pub fn open(&mut self, trigger: Option<Focus>) -> Option<Focus> {
        if self.is_open() {
            return None;
        }
        self.state = OverlayState::Open;
        self.return_focus = trigger;
        self.initial_focus
    }

    /// Close the overlay.
    ///
    /// Returns the element that opened it, so the caller can restore focus.
    /// Closing a closed overlay changes nothing and returns `None`.
    pub fn close(&mut self) -> Option<Focus> {
        if !self.is_open() {
            return None;
        }
        self.state = OverlayState::Closed;
        self.return_focus.take()
    }
}
