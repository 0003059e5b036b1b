use chrono::{Duration, Months, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::range::RecordRange;
use crate::utils::date::{first_of_month, next_month_start, start_of_day, start_of_hour};

/// Reporting window selector shared by the chart, the comparison and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[value(name = "last24hours")]
    Last24Hours,
    #[value(name = "last7days")]
    Last7Days,
    #[value(name = "last14days")]
    Last14Days,
    #[value(name = "last4weeks")]
    Last4Weeks,
    #[value(name = "last3months")]
    Last3Months,
    #[value(name = "last12months")]
    Last12Months,
}

pub const ALL_PERIODS: [Period; 6] = [
    Period::Last24Hours,
    Period::Last7Days,
    Period::Last14Days,
    Period::Last4Weeks,
    Period::Last3Months,
    Period::Last12Months,
];

/// Length of one comparison window.
enum Span {
    Hours(i64),
    Days(i64),
    Months(u32),
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Last24Hours => "last24hours",
            Period::Last7Days => "last7days",
            Period::Last14Days => "last14days",
            Period::Last4Weeks => "last4weeks",
            Period::Last3Months => "last3months",
            Period::Last12Months => "last12months",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Period::Last24Hours => "Last 24 hours",
            Period::Last7Days => "Last 7 days",
            Period::Last14Days => "Last 14 days",
            Period::Last4Weeks => "Last 4 weeks",
            Period::Last3Months => "Last 3 months",
            Period::Last12Months => "Last 12 months",
        }
    }

    /// Number of buckets the aggregator always returns for this period.
    pub fn bucket_count(&self) -> usize {
        match self {
            Period::Last24Hours => 24,
            Period::Last7Days => 7,
            Period::Last14Days => 14,
            Period::Last4Weeks => 4,
            Period::Last3Months => 3,
            Period::Last12Months => 12,
        }
    }

    fn span(&self) -> Span {
        match self {
            Period::Last24Hours => Span::Hours(24),
            Period::Last7Days => Span::Days(7),
            Period::Last14Days => Span::Days(14),
            Period::Last4Weeks => Span::Days(28),
            Period::Last3Months => Span::Months(3),
            Period::Last12Months => Span::Months(12),
        }
    }

    /// `now` moved back by `windows` whole comparison spans.
    fn shift_back(&self, now: NaiveDateTime, windows: u32) -> NaiveDateTime {
        match self.span() {
            Span::Hours(h) => now - Duration::hours(h * windows as i64),
            Span::Days(d) => now - Duration::days(d * windows as i64),
            Span::Months(m) => now
                .checked_sub_months(Months::new(m * windows))
                .unwrap_or(NaiveDateTime::MIN),
        }
    }

    /// Current and previous comparison windows.
    ///
    /// The current window ends at `now`; the previous one ends exactly where
    /// the current one starts.
    pub fn comparison_windows(&self, now: NaiveDateTime) -> (RecordRange, RecordRange) {
        let current_start = self.shift_back(now, 1);
        let previous_start = self.shift_back(now, 2);

        (
            RecordRange::new(current_start, now),
            RecordRange::new(previous_start, current_start),
        )
    }

    /// Time span covered by the buckets of this period.
    pub fn aggregation_range(&self, now: NaiveDateTime) -> RecordRange {
        let today = now.date();

        match self {
            Period::Last24Hours => {
                let hour = start_of_hour(now);
                RecordRange::new(hour - Duration::hours(23), hour + Duration::hours(1))
            }
            Period::Last7Days | Period::Last14Days | Period::Last4Weeks => {
                let days = match self {
                    Period::Last7Days => 7,
                    Period::Last14Days => 14,
                    _ => 28,
                };
                RecordRange::from_dates(today - Duration::days(days - 1), today)
            }
            Period::Last3Months | Period::Last12Months => {
                let back = self.bucket_count() as u32 - 1;
                let first = first_of_month(today)
                    .checked_sub_months(Months::new(back))
                    .unwrap_or(first_of_month(today));

                RecordRange::new(start_of_day(first), next_month_start(today))
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ALL_PERIODS
            .iter()
            .copied()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| AppError::InvalidPeriod(s.to_string()))
    }
}
