use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Label used when a record carries no category.
pub const DEFAULT_LABEL: &str = "Other";

/// A timestamped duration entry, as stored in the `records` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeRecord {
    pub id: i64,                    // ⇔ records.id
    pub user_id: String,            // ⇔ records.user_id
    pub occurred_at: NaiveDateTime, // ⇔ records.occurred_at (TEXT "YYYY-MM-DD HH:MM:SS")
    pub duration_seconds: i64,      // ⇔ records.duration_seconds (>= 0)
    pub label: Option<String>,      // ⇔ records.label (NULL → "Other")
    pub note: String,               // ⇔ records.note (TEXT, default '')
    pub created_at: String,         // ⇔ records.created_at (TEXT, ISO8601)
}

impl TimeRecord {
    /// Build a record that has not been persisted yet (`id = 0`).
    ///
    /// Blank labels are normalized to `None`.
    pub fn new(
        user_id: &str,
        occurred_at: NaiveDateTime,
        duration_seconds: i64,
        label: Option<&str>,
    ) -> Self {
        Self {
            id: 0,
            user_id: user_id.to_string(),
            occurred_at,
            duration_seconds,
            label: label
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            note: String::new(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.to_string();
        self
    }

    /// Category name, falling back to [`DEFAULT_LABEL`].
    pub fn category(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date()
    }

    pub fn occurred_at_str(&self) -> String {
        self.occurred_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn hours(&self) -> f64 {
        self.duration_seconds as f64 / 3600.0
    }
}
