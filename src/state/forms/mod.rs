//! Form domain layer
//!
//! Declarative field sets for the contact dialog and the careers section.
//! Fields hold editable values but carry no validation state.

mod field;
mod field_set;

pub use field::{FieldKind, FieldValue, FormField};
pub use field_set::FormFieldSet;
