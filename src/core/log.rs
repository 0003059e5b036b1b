use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 40;

/// Display width of `s` once ANSI escape sequences are removed.
fn visible_width(s: &str) -> usize {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => UnicodeWidthStr::width(re.replace_all(s, "").as_ref()),
        Err(_) => UnicodeWidthStr::width(s),
    }
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

struct LogEntry {
    id: i64,
    date: String,
    operation: String,
    target: String,
    message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let painted: Vec<String> = entries
            .iter()
            .map(|e| {
                let op = color_for_operation(&e.operation).paint(e.operation.as_str());
                let mut target: String = e.target.clone();
                if target.chars().count() > MAX_OP_WIDTH {
                    target = target.chars().take(MAX_OP_WIDTH - 3).collect();
                    target.push_str("...");
                }
                if target.is_empty() {
                    op.to_string()
                } else {
                    format!("{op} ({target})")
                }
            })
            .collect();

        let op_w = painted
            .iter()
            .map(|p| visible_width(p))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (e, op) in entries.iter().zip(&painted) {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(op)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                op,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
