//! The structured value emitted on search.

use crate::location::SearchLocation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything the caller needs to run a booking search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSearchPayload {
    pub location: Option<SearchLocation>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub adults: u32,
    pub children: u32,
}

impl BookingSearchPayload {
    pub fn nights(&self) -> Option<i64> {
        let (from, to) = self.check_in.zip(self.check_out)?;
        Some(crate::calendar::days_between(from, to))
    }
}
