use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let n = chrono::Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

pub fn start_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

pub fn start_of_hour(dt: NaiveDateTime) -> NaiveDateTime {
    start_of_day(dt.date()) + Duration::hours(dt.hour() as i64)
}

pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.day0() as i64)
}

/// First day of the month before the one containing `d`.
pub fn previous_month_first(d: NaiveDate) -> NaiveDate {
    first_of_month(first_of_month(d) - Duration::days(1))
}

/// Midnight of the first day of the month after the one containing `d`.
pub fn next_month_start(d: NaiveDate) -> NaiveDateTime {
    start_of_day(first_of_month(first_of_month(d) + Duration::days(31)))
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse the `--now` reference instant.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]` (or with a `T` separator). A bare date means
/// the last second of that day, so the whole day counts as elapsed.
pub fn parse_now(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }

    let day = parse_date(s)?;
    Ok(start_of_day(day) + Duration::days(1) - Duration::seconds(1))
}

/// Resolve an optional `--now` flag against the local clock.
pub fn resolve_now(flag: Option<&str>) -> AppResult<NaiveDateTime> {
    match flag {
        Some(s) => parse_now(s),
        None => Ok(now()),
    }
}

pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    let today = today();
    let first = first_of_month(today);
    let last = next_month_start(today).date() - Duration::days(1);
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_helpers_cross_year_boundaries() {
        assert_eq!(first_of_month(d(2025, 1, 17)), d(2025, 1, 1));
        assert_eq!(previous_month_first(d(2025, 1, 17)), d(2024, 12, 1));
        assert_eq!(next_month_start(d(2024, 12, 31)).date(), d(2025, 1, 1));
        assert_eq!(next_month_start(d(2024, 1, 31)).date(), d(2024, 2, 1));
    }

    #[test]
    fn parse_now_accepts_several_layouts() {
        let expected = d(2025, 3, 16).and_hms_opt(18, 30, 0).unwrap();
        assert_eq!(parse_now("2025-03-16 18:30").unwrap(), expected);
        assert_eq!(parse_now("2025-03-16T18:30:00").unwrap(), expected);
        assert_eq!(
            parse_now("2025-03-16").unwrap(),
            d(2025, 3, 16).and_hms_opt(23, 59, 59).unwrap()
        );
        assert!(parse_now("16/03/2025").is_err());
    }
}
