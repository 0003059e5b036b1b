//! Time utilities: parsing HH:MM, session durations, formatting seconds.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;
use regex::Regex;

pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t.trim(), "%H:%M:%S"))
        .map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Parse a session duration into seconds.
///
/// Accepted forms: `90` (minutes), `90m`, `1h30m`, `1h`, `45s`, `1h 5m 30s`, `1:30` (h:mm).
pub fn parse_duration(input: &str) -> AppResult<i64> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = || AppError::InvalidDuration(input.to_string());

    if compact.is_empty() {
        return Err(invalid());
    }

    if let Ok(minutes) = compact.parse::<i64>() {
        if minutes < 0 {
            return Err(invalid());
        }
        return minutes.checked_mul(60).ok_or_else(invalid);
    }

    if let Some((h, m)) = compact.split_once(':') {
        let h: i64 = h.parse().map_err(|_| invalid())?;
        let m: i64 = m.parse().map_err(|_| invalid())?;
        if h < 0 || !(0..60).contains(&m) {
            return Err(invalid());
        }
        return h
            .checked_mul(3600)
            .and_then(|hs| hs.checked_add(m * 60))
            .ok_or_else(invalid);
    }

    let re = Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$")
        .map_err(|e| AppError::Other(e.to_string()))?;
    let caps = re.captures(&compact).ok_or_else(invalid)?;

    let part = |i: usize, scale: i64| -> AppResult<i64> {
        match caps.get(i) {
            Some(m) => m
                .as_str()
                .parse::<i64>()
                .ok()
                .and_then(|v| v.checked_mul(scale))
                .ok_or_else(invalid),
            None => Ok(0),
        }
    };

    let (h, m, sec) = (part(1, 3600)?, part(2, 60)?, part(3, 1)?);
    h.checked_add(m)
        .and_then(|t| t.checked_add(sec))
        .ok_or_else(invalid)
}

/// `5400` → `"1h 30m"`, `45` → `"0h 00m 45s"`.
pub fn format_seconds(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    let (h, m, rest) = (s / 3600, (s % 3600) / 60, s % 60);

    if rest == 0 {
        format!("{sign}{h}h {m:02}m")
    } else {
        format!("{sign}{h}h {m:02}m {rest:02}s")
    }
}
