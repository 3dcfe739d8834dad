//! Named triggers and keyboard focus targets

use super::OverlayId;
use crate::content::{nav_label, Section};

/// A user-interface element whose activation does something on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Hamburger button shown on compact layouts
    OpenMainMenu,
    /// Close button inside the navigation drawer
    CloseMenu,
    /// Header call-to-action
    ContactUs,
    /// Hero call-to-action
    GetInTouch,
    /// Submit button inside the contact dialog
    SubmitContact,
    Login,
    /// Inline header link (wide layouts)
    NavLink(Section),
    /// Link inside the navigation drawer
    DrawerLink(Section),
    /// Submit button under the careers form
    SubmitApplication,
}

/// Effect a trigger has on an overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Open(OverlayId),
    Close(OverlayId),
}

impl Trigger {
    /// Visible label of the trigger
    pub fn label(&self) -> &'static str {
        match self {
            Self::OpenMainMenu => "Open main menu",
            Self::CloseMenu => "Close menu",
            Self::ContactUs => "Contact us",
            Self::GetInTouch => "Get in touch",
            Self::SubmitContact | Self::SubmitApplication => "Submit",
            Self::Login => "Login",
            Self::NavLink(section) | Self::DrawerLink(section) => nav_label(*section),
        }
    }

    /// Overlay transition this trigger requests, if any
    pub fn overlay_action(&self) -> Option<OverlayAction> {
        match self {
            Self::OpenMainMenu => Some(OverlayAction::Open(OverlayId::NavDrawer)),
            Self::CloseMenu | Self::DrawerLink(_) => {
                Some(OverlayAction::Close(OverlayId::NavDrawer))
            }
            Self::ContactUs | Self::GetInTouch => {
                Some(OverlayAction::Open(OverlayId::ContactDialog))
            }
            Self::SubmitContact => Some(OverlayAction::Close(OverlayId::ContactDialog)),
            Self::Login | Self::NavLink(_) | Self::SubmitApplication => None,
        }
    }

    /// Section the page scrolls to after activation
    pub fn scroll_target(&self) -> Option<Section> {
        match self {
            Self::NavLink(section) | Self::DrawerLink(section) => Some(*section),
            _ => None,
        }
    }
}

/// Forms rendered on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormId {
    /// Form inside the contact dialog
    Contact,
    /// Inline form under "We're Hiring!"
    Careers,
}

/// Element holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Trigger(Trigger),
    Field(FormId, usize),
}

impl Focus {
    pub fn trigger(&self) -> Option<Trigger> {
        match self {
            Self::Trigger(trigger) => Some(*trigger),
            Self::Field(..) => None,
        }
    }

    pub fn field(&self) -> Option<(FormId, usize)> {
        match self {
            Self::Field(form, index) => Some((*form, *index)),
            Self::Trigger(_) => None,
        }
    }
}
