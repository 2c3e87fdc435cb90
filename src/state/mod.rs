//! Application state module

mod app_state;
mod forms;
pub mod picture;
pub mod reference;
pub mod validation;

pub use app_state::*;
pub use forms::*;
