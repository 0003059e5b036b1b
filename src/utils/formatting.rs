//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;


/// Round to two decimal places (used for every hour total).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pad on the right by display width, so emoji and CJK labels stay aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// Horizontal bar proportional to `value / max`, at most `width` cells.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

/// `1.5` → `"1.50h"`.
pub fn hours2readable(hours: f64) -> String {
    format!("{:.2}h", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_and_bars() {
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.675_1), 2.68);
        assert_eq!(bar(0.0, 4.0, 10), "");
        assert_eq!(bar(4.0, 4.0, 10).chars().count(), 10);
        assert_eq!(bar(0.01, 4.0, 10).chars().count(), 1);
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(UnicodeWidthStr::width(pad_right("書", 4).as_str()), 4);
    }
}
