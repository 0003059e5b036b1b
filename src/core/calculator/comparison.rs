//! Rolling comparison between the current window and the one right before it.

use crate::models::comparison::{PercentChange, PeriodComparison};
use crate::models::period::Period;
use crate::models::record::TimeRecord;
use crate::utils::formatting::round2;
use chrono::NaiveDateTime;

/// Compare the total duration of the window ending at `now` with the
/// adjacent previous window of the same length.
///
/// An empty previous window yields [`PercentChange::Unavailable`], whatever
/// the current total is.
pub fn compare(records: &[TimeRecord], period: Period, now: NaiveDateTime) -> PeriodComparison {
    let (current, previous) = period.comparison_windows(now);

    let (mut current_secs, mut previous_secs) = (0i64, 0i64);
    for r in records {
        if current.contains(r.occurred_at) {
            current_secs += r.duration_seconds;
        } else if previous.contains(r.occurred_at) {
            previous_secs += r.duration_seconds;
        }
    }

    PeriodComparison {
        current,
        previous,
        current_total: round2(current_secs as f64 / 3600.0),
        previous_total: round2(previous_secs as f64 / 3600.0),
        percent_change: PercentChange::between(current_secs as f64, previous_secs as f64),
    }
}
