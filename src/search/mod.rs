//! The booking search bar: destination, dates and guests.

pub mod error;
mod form;
mod layout;
mod payload;

pub use error::{MissingField, SearchError};
pub use form::{BookingSearch, SearchCallback};
pub use layout::Layout;
pub use payload::BookingSearchPayload;
