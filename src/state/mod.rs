//! Application state module

mod app_state;
mod focus;
mod forms;
mod overlay;
mod transition;

pub use app_state::*;
pub use focus::*;
pub use forms::*;
pub use overlay::*;
pub use transition::*;
