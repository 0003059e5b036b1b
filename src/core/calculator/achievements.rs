//! Achievement-unlock detection over the whole record history.

use crate::core::calculator::streak::streak;
use crate::models::record::TimeRecord;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub unlocked: bool,
    pub progress: u64,
    pub target: u64,
}

/// Which measure an achievement tracks.
#[derive(Clone, Copy)]
enum Metric {
    Sessions,
    Hours,
    LongestStreakDays,
    LongestSessionHours,
}

const CATALOGUE: [(&str, &str, Metric, u64); 7] = [
    ("first-session", "First session", Metric::Sessions, 1),
    ("ten-sessions", "Ten sessions", Metric::Sessions, 10),
    ("ten-hours", "Ten hours logged", Metric::Hours, 10),
    ("hundred-hours", "Hundred hours logged", Metric::Hours, 100),
    ("week-streak", "Seven-day streak", Metric::LongestStreakDays, 7),
    ("month-streak", "Thirty-day streak", Metric::LongestStreakDays, 30),
    ("marathon", "Four-hour session", Metric::LongestSessionHours, 4),
];

/// Evaluate the fixed catalogue, in order. `progress` never exceeds `target`.
pub fn achievements(records: &[TimeRecord], today: NaiveDate) -> Vec<Achievement> {
    let history: Vec<TimeRecord> = records
        .iter()
        .filter(|r| r.date() <= today)
        .cloned()
        .collect();

    let sessions = history.len() as u64;
    let total_secs: i64 = history.iter().map(|r| r.duration_seconds).sum();
    let longest_secs = history.iter().map(|r| r.duration_seconds).max().unwrap_or(0);
    let longest_streak = streak(&history, today).longest_days as u64;

    CATALOGUE
        .iter()
        .map(|&(id, title, metric, target)| {
            let value = match metric {
                Metric::Sessions => sessions,
                Metric::Hours => (total_secs.max(0) / 3600) as u64,
                Metric::LongestStreakDays => longest_streak,
                Metric::LongestSessionHours => (longest_secs.max(0) / 3600) as u64,
            };
            Achievement {
                id,
                title,
                unlocked: value >= target,
                progress: value.min(target),
                target,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn on(date: NaiveDate, secs: i64) -> TimeRecord {
        TimeRecord::new("u1", date.and_hms_opt(9, 0, 0).unwrap(), secs, Some("Work"))
    }

    fn find<'a>(list: &'a [Achievement], id: &str) -> &'a Achievement {
        list.iter().find(|a| a.id == id).unwrap()
    }

    #[test]
    fn nothing_unlocked_without_records() {
        let list = achievements(&[], d(2025, 3, 16));
        assert_eq!(list.len(), 7);
        assert!(list.iter().all(|a| !a.unlocked && a.progress == 0));
    }

    #[test]
    fn week_streak_and_marathon() {
        let start = d(2025, 3, 1);
        let mut records: Vec<_> = (0..7).map(|i| on(start + Duration::days(i), 1800)).collect();
        records.push(on(start, 4 * 3600 + 60));

        let list = achievements(&records, d(2025, 3, 16));

        assert!(find(&list, "first-session").unlocked);
        assert!(find(&list, "week-streak").unlocked);
        assert!(!find(&list, "month-streak").unlocked);
        assert_eq!(find(&list, "month-streak").progress, 7);
        assert!(find(&list, "marathon").unlocked);
        assert!(!find(&list, "ten-sessions").unlocked);
        assert_eq!(find(&list, "ten-sessions").progress, 8);
    }

    #[test]
    fn progress_is_capped_at_target() {
        let records: Vec<_> = (1..=12).map(|day| on(d(2025, 1, day), 3600)).collect();
        let list = achievements(&records, d(2025, 3, 16));

        let ten = find(&list, "ten-hours");
        assert!(ten.unlocked);
        assert_eq!(ten.progress, 10);
        assert_eq!(find(&list, "hundred-hours").progress, 12);
    }
}
