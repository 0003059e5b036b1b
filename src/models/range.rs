use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::utils::date::start_of_day;

/// Half-open time interval `[start, end)` used to select records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl RecordRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Whole calendar days from `first` to `last`, both included.
    pub fn from_dates(first: NaiveDate, last: NaiveDate) -> Self {
        Self {
            start: start_of_day(first),
            end: start_of_day(last) + chrono::Duration::days(1),
        }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }

    /// Smallest range covering both `self` and `other`.
    pub fn union(&self, other: &RecordRange) -> RecordRange {
        RecordRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
