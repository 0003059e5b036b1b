use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_record, load_record};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<()> {
        let record = load_record(&pool.conn, id)?.ok_or(AppError::RecordNotFound(id))?;

        delete_record(&pool.conn, id)?;

        let summary = format!(
            "{} | {}s | {}",
            record.occurred_at_str(),
            record.duration_seconds,
            record.category()
        );
        ttlog_or_warn(&pool.conn, "del", &format!("record {id}"), &summary);
        info(format!("Deleted record #{id} ({summary})"));

        Ok(())
    }
}
