use chrono::NaiveDateTime;
use serde::Serialize;

use crate::utils::formatting::round2;

/// One fixed time-slice of a chart, recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub starts_at: NaiveDateTime,
    pub total_hours: f64,
    pub record_count: usize,
    pub average_minutes: i64,
}

impl Bucket {
    /// Reduce the raw totals of a slice into display values.
    pub fn from_totals(
        label: String,
        starts_at: NaiveDateTime,
        total_seconds: i64,
        record_count: usize,
    ) -> Self {
        let average_minutes = if record_count == 0 {
            0
        } else {
            (total_seconds as f64 / record_count as f64 / 60.0).round() as i64
        };

        Self {
            label,
            starts_at,
            total_hours: round2(total_seconds as f64 / 3600.0),
            record_count,
            average_minutes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
