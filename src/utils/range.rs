//! Parsing of `--period` / `--range` expressions into record ranges.

use crate::errors::{AppError, AppResult};
use crate::models::range::RecordRange;
use crate::utils::date::{first_of_month, next_month_start};
use chrono::{Duration, NaiveDate};

/// Parse a range expression.
///
/// Supported forms:
/// - `all` → `None` (no bound)
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `A:B` where `A` and `B` use the same form (e.g. `2025-01:2025-03`)
pub fn parse_range(r: &str) -> AppResult<Option<RecordRange>> {
    let r = r.trim();

    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (first, last) = match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(AppError::InvalidRange(format!(
                    "{r}: start and end must have the same format"
                )));
            }
            (bounds(start)?.0, bounds(end)?.1)
        }
        None => bounds(r)?,
    };

    if first > last {
        return Err(AppError::InvalidRange(format!("{r}: start is after end")));
    }

    Ok(Some(RecordRange::from_dates(first, last)))
}

/// First and last calendar day covered by a single `YYYY[-MM[-DD]]` token.
fn bounds(token: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(token.to_string());

    match token.len() {
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{token}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let last = next_month_start(first).date() - Duration::days(1);
            Ok((first_of_month(first), last))
        }
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_tokens() {
        assert_eq!(
            parse_range("2024").unwrap(),
            Some(RecordRange::from_dates(d(2024, 1, 1), d(2024, 12, 31)))
        );
        assert_eq!(
            parse_range("2024-02").unwrap(),
            Some(RecordRange::from_dates(d(2024, 2, 1), d(2024, 2, 29)))
        );
        assert_eq!(
            parse_range("2025-03-16").unwrap(),
            Some(RecordRange::from_dates(d(2025, 3, 16), d(2025, 3, 16)))
        );
    }

    #[test]
    fn intervals_and_all() {
        assert_eq!(
            parse_range("2024-11:2025-01").unwrap(),
            Some(RecordRange::from_dates(d(2024, 11, 1), d(2025, 1, 31)))
        );
        assert_eq!(parse_range("ALL").unwrap(), None);
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!(parse_range("2025-1").is_err());
        assert!(parse_range("2025:2025-01").is_err());
        assert!(parse_range("2025-03:2025-01").is_err());
        assert!(parse_range("2025-13").is_err());
    }
}
