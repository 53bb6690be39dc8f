//! Core selection types.
//!
//! This module contains the pure building blocks the picker is made of:
//! - The `SelectionState` derived from a provisional range
//! - Guard predicates for dates and ranges
//! - Immutable click history
//!
//! Nothing here performs side effects or logging.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{ClickTransition, SelectionHistory};
pub use state::SelectionState;
