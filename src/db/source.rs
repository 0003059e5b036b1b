//! Repository seam between the stored records and the pure reducers.

use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::models::range::RecordRange;
use crate::models::record::TimeRecord;

/// Anything that can hand out the records of a user, oldest first.
pub trait RecordSource {
    fn fetch_records(
        &mut self,
        user_id: &str,
        range: Option<&RecordRange>,
    ) -> AppResult<Vec<TimeRecord>>;
}

impl RecordSource for DbPool {
    fn fetch_records(
        &mut self,
        user_id: &str,
        range: Option<&RecordRange>,
    ) -> AppResult<Vec<TimeRecord>> {
        load_records(&self.conn, user_id, range)
    }
}

/// In-memory source, mainly for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    records: Vec<TimeRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<TimeRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: TimeRecord) {
        self.records.push(record);
    }
}

impl RecordSource for MemorySource {
    fn fetch_records(
        &mut self,
        user_id: &str,
        range: Option<&RecordRange>,
    ) -> AppResult<Vec<TimeRecord>> {
        let mut out: Vec<TimeRecord> = self
            .records
            .iter()
            .filter(|r| r.user_id == user_id)
            .filter(|r| range.is_none_or(|rg| rg.contains(r.occurred_at)))
            .cloned()
            .collect();
        out.sort_by_key(|r| r.occurred_at);
        Ok(out)
    }
}
