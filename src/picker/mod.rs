//! Date-range selection.
//!
//! This module is the "imperative shell" around the pure selection logic:
//!
//! - `transition`: pure functions computing the next range, disabled days
//!   and display text
//! - `session`: the provisional range of one open/close cycle
//! - `machine`: `DateRangePicker`, owning the committed range and firing the
//!   confirm/cancel callbacks
//!
//! Nothing is asynchronous. Each call handles one user interaction to
//! completion.

pub mod error;
mod machine;
mod session;
mod transition;

pub use error::ConfirmError;
pub use machine::{CancelCallback, ConfirmCallback, DateRangePicker, DayAnnotation, PickerCallbacks};
pub use session::SelectionSession;
pub use transition::{
    disabled_dates, min_stay_window, next_range, session_text, trigger_text, ClickOutcome,
    IgnoreReason,
};
