//! Versioned schema migrations. Each applied version is recorded in the
//! `log` table (`operation = 'migration_applied'`) and never re-run.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::notice;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250110_0001_create_records",
        description: "Created records table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS records (
                id               INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id          TEXT NOT NULL DEFAULT 'local',
                occurred_at      TEXT NOT NULL,
                duration_seconds INTEGER NOT NULL CHECK(duration_seconds >= 0),
                label            TEXT,
                created_at       TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20250110_0002_records_indexes",
        description: "Added indexes on records(user_id, occurred_at) and records(label)",
        sql: r#"
            CREATE INDEX IF NOT EXISTS idx_records_user_time ON records(user_id, occurred_at);
            CREATE INDEX IF NOT EXISTS idx_records_label ON records(label);
        "#,
    },
    Migration {
        version: "20250301_0003_add_note_column",
        description: "Added note column to records",
        sql: "ALTER TABLE records ADD COLUMN note TEXT NOT NULL DEFAULT '';",
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions not yet applied to this database, oldest first.
pub fn pending_versions(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, each in its own transaction.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;

        tx.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            params![Local::now().to_rfc3339(), m.version, m.description],
        )?;

        tx.commit()?;

        notice(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(applied, MIGRATIONS.len() as i64);
        assert!(pending_versions(&conn).unwrap().is_empty());
    }

    #[test]
    fn migration_rows_use_rfc3339_timestamps() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        let mut stmt = conn
            .prepare("SELECT date FROM log WHERE operation = 'migration_applied'")
            .unwrap();
        let dates: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(dates.len(), MIGRATIONS.len());
        for d in dates {
            assert!(
                chrono::DateTime::parse_from_rfc3339(&d).is_ok(),
                "{d} is not RFC 3339"
            );
        }
    }

    #[test]
    fn negative_durations_are_rejected_by_schema() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        let res = conn.execute(
            "INSERT INTO records (occurred_at, duration_seconds, created_at)
             VALUES ('2025-03-16 10:00:00', -1, '')",
            [],
        );
        assert!(res.is_err());
    }
}
