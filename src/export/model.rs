// src/export/model.rs

use crate::models::bucket::Bucket;
use crate::models::record::TimeRecord;
use serde::Serialize;

/// Flat record row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: i64,
    pub user_id: String,
    pub occurred_at: String,
    pub duration_seconds: i64,
    pub hours: f64,
    pub label: String,
    pub note: String,
}

impl From<&TimeRecord> for RecordExport {
    fn from(r: &TimeRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id.clone(),
            occurred_at: r.occurred_at_str(),
            duration_seconds: r.duration_seconds,
            hours: crate::utils::formatting::round2(r.hours()),
            label: r.category().to_string(),
            note: r.note.clone(),
        }
    }
}

/// Flat chart bucket row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct BucketExport {
    pub period: String,
    pub label: String,
    pub starts_at: String,
    pub total_hours: f64,
    pub record_count: usize,
    pub average_minutes: i64,
}

impl BucketExport {
    pub fn new(period: &str, b: &Bucket) -> Self {
        Self {
            period: period.to_string(),
            label: b.label.clone(),
            starts_at: b.starts_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            total_hours: b.total_hours,
            record_count: b.record_count,
            average_minutes: b.average_minutes,
        }
    }
}
