//! Search submission errors.

use std::fmt;
use thiserror::Error;

/// A field the search still needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
    Location,
    CheckIn,
    CheckOut,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Location => "location",
            Self::CheckIn => "check-in",
            Self::CheckOut => "check-out",
        })
    }
}

fn list(fields: &[MissingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search is missing: {}", list(.0))]
    Incomplete(Vec<MissingField>),
}
