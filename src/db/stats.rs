use crate::db::migrate::pending_versions;
use crate::db::pool::DbPool;
use crate::db::queries::count_records;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::path::expand_tilde;
use chrono::NaiveDateTime;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(expand_tilde(db_path))
        .map(|m| m.len())
        .unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let count = count_records(&pool.conn)?;
    println!("{}• Total records:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(DISTINCT user_id) FROM records", [], |row| {
            row.get(0)
        })?;
    println!("{}• Users:{} {}", CYAN, RESET, users);

    let first: Option<String> = pool
        .conn
        .query_row("SELECT MIN(occurred_at) FROM records", [], |row| row.get(0))
        .optional()?
        .flatten();
    let last: Option<String> = pool
        .conn
        .query_row("SELECT MAX(occurred_at) FROM records", [], |row| row.get(0))
        .optional()?
        .flatten();

    let placeholder = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.clone().unwrap_or_else(|| placeholder.clone()));
    println!("    to:   {}", last.clone().unwrap_or(placeholder));

    if let (Some(f), Some(l)) = (first, last)
        && let (Ok(d1), Ok(d2)) = (parse_ts(&f), parse_ts(&l))
    {
        let days = (d2.date() - d1.date()).num_days() + 1;
        let avg = count as f64 / days as f64;
        println!("{}• Average records/day:{} {:.2}", CYAN, RESET, avg);
    }

    let pending = pending_versions(&pool.conn)?;
    if pending.is_empty() {
        println!("{}• Schema:{} up to date", CYAN, RESET);
    } else {
        println!(
            "{}• Schema:{} {}{} pending migration(s){}",
            CYAN,
            RESET,
            YELLOW,
            pending.len(),
            RESET
        );
    }

    println!();
    Ok(())
}

fn parse_ts(s: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
}
