use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::insert_record;
use crate::errors::{AppError, AppResult};
use crate::models::record::TimeRecord;
use crate::ui::messages::success;
use crate::utils::time::format_seconds;
use chrono::NaiveDateTime;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &mut DbPool,
        user_id: &str,
        occurred_at: NaiveDateTime,
        duration_seconds: i64,
        label: Option<&str>,
        note: Option<&str>,
    ) -> AppResult<i64> {
        if duration_seconds < 0 {
            return Err(AppError::InvalidDuration(duration_seconds.to_string()));
        }

        let record = TimeRecord::new(user_id, occurred_at, duration_seconds, label)
            .with_note(note.unwrap_or_default());

        let id = insert_record(&pool.conn, &record)?;

        let summary = format!(
            "{} | {} | {}",
            record.occurred_at_str(),
            format_seconds(duration_seconds),
            record.category()
        );

        ttlog_or_warn(&pool.conn, "add", &format!("record {id}"), &summary);
        success(format!("Added record #{id}: {summary}"));

        Ok(id)
    }
}
