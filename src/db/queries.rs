use crate::errors::{AppError, AppResult};
use crate::models::range::RecordRange;
use crate::models::record::TimeRecord;
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn ts(dt: &NaiveDateTime) -> String {
    dt.format(TS_FORMAT).to_string()
}

pub fn map_row(row: &Row) -> Result<TimeRecord> {
    let occurred_str: String = row.get("occurred_at")?;

    let occurred_at = NaiveDateTime::parse_from_str(&occurred_str, TS_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(occurred_str.clone())),
        )
    })?;

    Ok(TimeRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        occurred_at,
        duration_seconds: row.get("duration_seconds")?,
        label: row.get("label")?,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
    })
}

/// Insert a record and return its new id.
pub fn insert_record(conn: &Connection, rec: &TimeRecord) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO records (user_id, occurred_at, duration_seconds, label, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            rec.user_id,
            ts(&rec.occurred_at),
            rec.duration_seconds,
            rec.label,
            rec.note,
            rec.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Records of `user_id`, oldest first. `None` means no time bound.
pub fn load_records(
    conn: &Connection,
    user_id: &str,
    range: Option<&RecordRange>,
) -> AppResult<Vec<TimeRecord>> {
    let mut out = Vec::new();

    match range {
        None => {
            let mut stmt = conn.prepare_cached(
                "SELECT * FROM records
                 WHERE user_id = ?1
                 ORDER BY occurred_at ASC, id ASC",
            )?;
            for r in stmt.query_map([user_id], map_row)? {
                out.push(r?);
            }
        }
        Some(range) => {
            let mut stmt = conn.prepare_cached(
                "SELECT * FROM records
                 WHERE user_id = ?1 AND occurred_at >= ?2 AND occurred_at < ?3
                 ORDER BY occurred_at ASC, id ASC",
            )?;
            let rows = stmt.query_map(
                params![user_id, ts(&range.start), ts(&range.end)],
                map_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn load_record(conn: &Connection, id: i64) -> AppResult<Option<TimeRecord>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM records WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn delete_record(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM records WHERE id = ?1", [id])?)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn insert_load_and_delete() {
        let pool = DbPool::in_memory().unwrap();
        let rec = TimeRecord::new("alice", at(10, 9), 3600, Some("Work")).with_note("deep work");

        let id = insert_record(&pool.conn, &rec).unwrap();
        let loaded = load_record(&pool.conn, id).unwrap().unwrap();

        assert_eq!(loaded.id, id);
        assert_eq!(loaded.occurred_at, rec.occurred_at);
        assert_eq!(loaded.label.as_deref(), Some("Work"));
        assert_eq!(loaded.note, "deep work");

        assert_eq!(delete_record(&pool.conn, id).unwrap(), 1);
        assert!(load_record(&pool.conn, id).unwrap().is_none());
    }

    #[test]
    fn range_is_half_open_and_per_user() {
        let pool = DbPool::in_memory().unwrap();
        for rec in [
            TimeRecord::new("alice", at(10, 0), 60, None),
            TimeRecord::new("alice", at(11, 0), 60, None),
            TimeRecord::new("alice", at(12, 0), 60, None),
            TimeRecord::new("bob", at(11, 0), 60, None),
        ] {
            insert_record(&pool.conn, &rec).unwrap();
        }

        let range = RecordRange::new(at(10, 0), at(12, 0));
        let got = load_records(&pool.conn, "alice", Some(&range)).unwrap();

        assert_eq!(got.len(), 2);
        assert!(got.iter().all(|r| r.user_id == "alice" && r.label.is_none()));
        assert_eq!(load_records(&pool.conn, "alice", None).unwrap().len(), 3);
        assert_eq!(count_records(&pool.conn).unwrap(), 4);
    }
}
