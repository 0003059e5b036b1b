// src/export/logic.rs

use crate::core::logic::StatsLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::db::source::RecordSource;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{BucketExport, RecordExport};
use crate::export::ExportFormat;
use crate::models::period::Period;
use crate::ui::messages::warning;
use crate::utils::range::parse_range;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::Path;

/// What to write into the output file.
pub enum ExportContent<'a> {
    /// Raw records, optionally restricted by a range expression.
    Records { range: Option<&'a str> },
    /// Chart buckets of a period ending at `now`.
    Buckets { period: Period, now: NaiveDateTime },
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export records or buckets of `user_id` to `file`.
    ///
    /// `file` must be an absolute path.
    pub fn export(
        pool: &mut DbPool,
        user_id: &str,
        format: ExportFormat,
        file: &str,
        content: ExportContent<'_>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let (rows, what) = match content {
            ExportContent::Records { range } => {
                let bounds = match range {
                    Some(r) => parse_range(r)?,
                    None => None,
                };
                let records = pool.fetch_records(user_id, bounds.as_ref())?;
                if records.is_empty() {
                    warning("No records found for selected range.");
                    return Ok(());
                }
                ensure_writable(path, force)?;

                let rows: Vec<RecordExport> = records.iter().map(RecordExport::from).collect();
                let n = write(&rows, format, path)?;
                (n, format!("records ({})", range.unwrap_or("all")))
            }
            ExportContent::Buckets { period, now } => {
                let buckets = StatsLogic::buckets(pool, user_id, period, now)?;
                ensure_writable(path, force)?;

                let rows: Vec<BucketExport> = buckets
                    .iter()
                    .map(|b| BucketExport::new(period.as_str(), b))
                    .collect();
                let n = write(&rows, format, path)?;
                (n, format!("buckets ({period})"))
            }
        };

        ttlog_or_warn(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{rows} {what} → {}", path.display()),
        );

        Ok(())
    }
}

fn write<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }
    Ok(rows.len())
}
