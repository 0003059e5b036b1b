use serde::{Serialize, Serializer};
use std::fmt;

use crate::models::range::RecordRange;

/// Relative change between two windows.
///
/// `Unavailable` means there is nothing to compare against (the previous
/// window is empty); it is never reported as 0% or as an infinite increase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentChange {
    Value(f64),
    Unavailable,
}

impl PercentChange {
    pub fn between(current: f64, previous: f64) -> Self {
        if previous == 0.0 {
            PercentChange::Unavailable
        } else {
            PercentChange::Value((current - previous) / previous * 100.0)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            PercentChange::Value(v) => Some(*v),
            PercentChange::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, PercentChange::Value(_))
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercentChange::Value(v) => write!(f, "{:+.1}%", v),
            PercentChange::Unavailable => f.write_str("n/a"),
        }
    }
}

/// Serialized as a number, or `null` when unavailable.
impl Serialize for PercentChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PercentChange::Value(v) => serializer.serialize_f64(*v),
            PercentChange::Unavailable => serializer.serialize_none(),
        }
    }
}

/// Current window vs the window immediately before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodComparison {
    pub current: RecordRange,
    pub previous: RecordRange,
    pub current_total: f64,
    pub previous_total: f64,
    pub percent_change: PercentChange,
}
