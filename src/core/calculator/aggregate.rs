//! Time-bucketed aggregation: partitions records into the fixed slices of a
//! [`Period`] and reduces each slice to total / count / average.

use crate::models::bucket::Bucket;
use crate::models::period::Period;
use crate::models::record::TimeRecord;
use crate::utils::date::{first_of_month, previous_month_first, start_of_day, start_of_hour};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

/// What a bucket matches on. Membership is decided by calendar equality
/// (same hour of the same day, same date, same month of the same year),
/// never by a rolling half-open interval.
#[derive(Debug, Clone, Copy)]
enum Slot {
    Hour { date: NaiveDate, hour: u32 },
    Day(NaiveDate),
    /// Seven calendar days, `first..=last`.
    Week { first: NaiveDate, last: NaiveDate },
    Month { year: i32, month: u32 },
}

impl Slot {
    fn contains(&self, at: NaiveDateTime) -> bool {
        let date = at.date();
        match *self {
            Slot::Hour { date: d, hour } => date == d && at.hour() == hour,
            Slot::Day(d) => date == d,
            Slot::Week { first, last } => date >= first && date <= last,
            Slot::Month { year, month } => date.year() == year && date.month() == month,
        }
    }
}

struct SlotSpec {
    label: String,
    starts_at: NaiveDateTime,
    slot: Slot,
}

/// Bucket skeleton for `period`, oldest first. Depends only on `now`.
fn slots(period: Period, now: NaiveDateTime) -> Vec<SlotSpec> {
    let today = now.date();
    let n = period.bucket_count();

    match period {
        Period::Last24Hours => (0..n as i64)
            .rev()
            .map(|i| {
                let start = start_of_hour(now) - Duration::hours(i);
                SlotSpec {
                    label: start.format("%H:00").to_string(),
                    starts_at: start,
                    slot: Slot::Hour {
                        date: start.date(),
                        hour: start.hour(),
                    },
                }
            })
            .collect(),

        Period::Last7Days | Period::Last14Days => (0..n as i64)
            .rev()
            .map(|i| {
                let day = today - Duration::days(i);
                SlotSpec {
                    label: day.format("%a %-d").to_string(),
                    starts_at: start_of_day(day),
                    slot: Slot::Day(day),
                }
            })
            .collect(),

        Period::Last4Weeks => (0..n as i64)
            .rev()
            .enumerate()
            .map(|(idx, i)| {
                let last = today - Duration::days(i * 7);
                let first = last - Duration::days(6);
                SlotSpec {
                    label: format!("Week {}", idx + 1),
                    starts_at: start_of_day(first),
                    slot: Slot::Week { first, last },
                }
            })
            .collect(),

        Period::Last3Months | Period::Last12Months => {
            let mut months = Vec::with_capacity(n);
            let mut first = first_of_month(today);
            for _ in 0..n {
                months.push(first);
                first = previous_month_first(first);
            }
            months
                .into_iter()
                .rev()
                .map(|first| SlotSpec {
                    label: first.format("%b").to_string(),
                    starts_at: start_of_day(first),
                    slot: Slot::Month {
                        year: first.year(),
                        month: first.month(),
                    },
                })
                .collect()
        }
    }
}

/// Aggregate `records` into the buckets of `period`, ending at `now`.
///
/// Always returns `period.bucket_count()` buckets in chronological order,
/// even when `records` is empty. Records outside every bucket are ignored.
pub fn aggregate(records: &[TimeRecord], period: Period, now: NaiveDateTime) -> Vec<Bucket> {
    let specs = slots(period, now);
    let mut totals = vec![(0i64, 0usize); specs.len()];

    for r in records {
        if let Some(idx) = specs.iter().position(|s| s.slot.contains(r.occurred_at)) {
            totals[idx].0 += r.duration_seconds;
            totals[idx].1 += 1;
        }
    }

    specs
        .into_iter()
        .zip(totals)
        .map(|(spec, (secs, count))| Bucket::from_totals(spec.label, spec.starts_at, secs, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::period::ALL_PERIODS;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn rec(at: NaiveDateTime, secs: i64, label: &str) -> TimeRecord {
        TimeRecord::new("u1", at, secs, Some(label))
    }

    #[test]
    fn bucket_count_is_fixed_for_empty_input() {
        let now = at(2025, 3, 16, 18, 30);
        for period in ALL_PERIODS {
            let buckets = aggregate(&[], period, now);
            assert_eq!(buckets.len(), period.bucket_count(), "{period}");
            assert!(buckets.iter().all(|b| b.total_hours == 0.0 && b.record_count == 0));
            assert!(buckets.iter().all(|b| b.average_minutes == 0));
        }
    }

    #[test]
    fn buckets_are_chronological() {
        let now = at(2025, 3, 16, 18, 30);
        for period in ALL_PERIODS {
            let buckets = aggregate(&[], period, now);
            assert!(
                buckets.windows(2).all(|w| w[0].starts_at < w[1].starts_at),
                "{period}"
            );
        }
    }

    #[test]
    fn week_of_days_monday_to_sunday() {
        // 2025-03-10 is a Monday, 2025-03-16 the following Sunday.
        let records = vec![
            rec(at(2025, 3, 10, 10, 0), 3600, "Work"),
            rec(at(2025, 3, 11, 10, 0), 1800, "Study"),
        ];
        let buckets = aggregate(&records, Period::Last7Days, at(2025, 3, 16, 20, 0));

        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Mon 10", "Tue 11", "Wed 12", "Thu 13", "Fri 14", "Sat 15", "Sun 16"]
        );
        assert_eq!(buckets[0].total_hours, 1.0);
        assert_eq!(buckets[1].total_hours, 0.5);
        assert!(buckets[2..].iter().all(|b| b.total_hours == 0.0));
        assert_eq!(buckets[0].average_minutes, 60);
        assert_eq!(buckets[1].average_minutes, 30);
    }

    #[test]
    fn hours_do_not_fold_across_days() {
        let now = at(2025, 3, 16, 9, 15);
        let records = vec![
            // same hour-of-day as the newest bucket, but two days earlier
            rec(at(2025, 3, 14, 9, 0), 3600, "Work"),
            rec(at(2025, 3, 16, 9, 5), 600, "Work"),
            // 10:00 yesterday is the oldest bucket
            rec(at(2025, 3, 15, 10, 59), 1200, "Work"),
        ];
        let buckets = aggregate(&records, Period::Last24Hours, now);

        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[0].label, "10:00");
        assert_eq!(buckets[0].record_count, 1);
        assert_eq!(buckets[23].label, "09:00");
        assert_eq!(buckets[23].record_count, 1);
        assert_eq!(buckets[23].total_hours, 0.17);
    }

    #[test]
    fn midnight_belongs_to_the_new_day() {
        let records = vec![rec(at(2025, 3, 15, 0, 0), 3600, "Work")];
        let buckets = aggregate(&records, Period::Last7Days, at(2025, 3, 16, 12, 0));

        assert_eq!(buckets[5].label, "Sat 15");
        assert_eq!(buckets[5].record_count, 1);
        assert_eq!(buckets[4].record_count, 0);
    }

    #[test]
    fn weeks_are_labeled_oldest_first() {
        let now = at(2025, 3, 28, 12, 0);
        let records = vec![
            rec(at(2025, 3, 1, 8, 0), 7200, "Work"),  // Week 1 (Mar 1..7)
            rec(at(2025, 3, 22, 8, 0), 3600, "Work"), // Week 4 (Mar 22..28)
            rec(at(2025, 3, 28, 23, 0), 1800, "Work"),
            rec(at(2025, 2, 28, 8, 0), 3600, "Work"), // outside
        ];
        let buckets = aggregate(&records, Period::Last4Weeks, now);

        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(buckets[0].total_hours, 2.0);
        assert_eq!(buckets[3].total_hours, 1.5);
        assert_eq!(buckets[3].record_count, 2);
        assert_eq!(buckets[3].average_minutes, 45);
    }

    #[test]
    fn months_match_by_calendar_month() {
        let now = at(2025, 1, 10, 12, 0);
        let records = vec![
            rec(at(2024, 11, 1, 0, 0), 3600, "Work"),
            rec(at(2024, 12, 31, 23, 59), 5400, "Work"),
            rec(at(2025, 1, 2, 9, 0), 0, "Work"),
            rec(at(2023, 12, 15, 9, 0), 3600, "Work"), // same month, wrong year
        ];
        let buckets = aggregate(&records, Period::Last3Months, now);

        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Nov", "Dec", "Jan"]);
        assert_eq!(buckets[0].total_hours, 1.0);
        assert_eq!(buckets[1].total_hours, 1.5);
        assert_eq!(buckets[2].record_count, 1);
        assert_eq!(buckets[2].average_minutes, 0);
    }

    #[test]
    fn zero_duration_records_lower_the_average() {
        let now = at(2025, 3, 16, 12, 0);
        let records = vec![
            rec(at(2025, 3, 16, 8, 0), 3600, "Work"),
            rec(at(2025, 3, 16, 9, 0), 0, "Work"),
        ];
        let buckets = aggregate(&records, Period::Last7Days, now);

        assert_eq!(buckets[6].record_count, 2);
        assert_eq!(buckets[6].average_minutes, 30);
    }

    #[test]
    fn totals_are_preserved_inside_the_window() {
        let now = at(2025, 6, 30, 12, 0);
        let records: Vec<TimeRecord> = (0..60)
            .map(|i| rec(at(2025, 6, 1, 6, 0) + Duration::hours(i * 11), 900 + i * 37, "Work"))
            .filter(|r| r.occurred_at <= now)
            .collect();
        let expected: f64 = records.iter().map(|r| r.hours()).sum();

        let buckets = aggregate(&records, Period::Last12Months, now);
        let total: f64 = buckets.iter().map(|b| b.total_hours).sum();
        let count: usize = buckets.iter().map(|b| b.record_count).sum();

        assert_eq!(count, records.len());
        assert!((total - expected).abs() < 0.01 * buckets.len() as f64);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let now = at(2025, 3, 16, 12, 0);
        let records = vec![
            rec(at(2025, 3, 12, 8, 0), 3600, "Work"),
            rec(at(2025, 3, 14, 9, 0), 1234, "Study"),
        ];
        let snapshot = records.clone();

        let first = aggregate(&records, Period::Last14Days, now);
        let second = aggregate(&records, Period::Last14Days, now);

        assert_eq!(first, second);
        assert_eq!(records, snapshot);
    }
}
