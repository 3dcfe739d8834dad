//! Reusable UI components

mod button;
mod text;

pub use button::{button_width, render_button, render_link, BUTTON_HEIGHT};
pub use text::{centered_rect, dim_backdrop, wrap_text};
