//! Form domain layer
//!
//! Typed fields and the registration form that owns them.

mod field;
mod form_state;

pub use field::FieldName;
pub use form_state::{Form, RegistrationForm};
