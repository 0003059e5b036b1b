//! Consecutive-day activity streaks.

use crate::models::record::TimeRecord;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub current_days: u32,
    pub longest_days: u32,
    pub active_today: bool,
    pub last_active: Option<NaiveDate>,
}

/// Compute streaks as of `today`.
///
/// A day is active when it holds at least one record. The current streak
/// ends today, or yesterday when nothing has been logged yet today.
/// Records dated after `today` are ignored.
pub fn streak(records: &[TimeRecord], today: NaiveDate) -> StreakSummary {
    let days: BTreeSet<NaiveDate> = records
        .iter()
        .map(TimeRecord::date)
        .filter(|d| *d <= today)
        .collect();

    let Some(last_active) = days.last().copied() else {
        return StreakSummary::default();
    };

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for &d in &days {
        run = match prev {
            Some(p) if d - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(d);
    }

    let active_today = days.contains(&today);
    let anchor = if active_today {
        Some(today)
    } else if days.contains(&(today - Duration::days(1))) {
        Some(today - Duration::days(1))
    } else {
        None
    };

    let mut current = 0u32;
    if let Some(mut d) = anchor {
        while days.contains(&d) {
            current += 1;
            d -= Duration::days(1);
        }
    }

    StreakSummary {
        current_days: current,
        longest_days: longest,
        active_today,
        last_active: Some(last_active),
    }
}
