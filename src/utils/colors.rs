//! ANSI color helper utilities for terminal output.

use crate::models::comparison::PercentChange;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Change color:
/// \>0 → green
/// \<0 → red
/// 0 or unavailable → grey
pub fn color_for_change(change: PercentChange) -> &'static str {
    match change.value() {
        Some(v) if v > 0.0 => GREEN,
        Some(v) if v < 0.0 => RED,
        _ => GREY,
    }
}

/// Grey out empty cells ("0", "0.00h", "--").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "0" || v == "0.00h" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
