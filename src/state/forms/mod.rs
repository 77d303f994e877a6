//! Typed form state for the entry and report overlays

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
