use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::source::RecordSource;
use crate::errors::AppResult;
use crate::models::range::RecordRange;
use crate::ui::messages::{header, info};
use crate::utils::date::current_month_bounds;
use crate::utils::range::parse_range;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_seconds;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let range = match period {
            Some(p) => parse_range(p)?,
            None => {
                let (first, last) = current_month_bounds();
                Some(RecordRange::from_dates(first, last))
            }
        };

        let mut pool = DbPool::open(&cfg.database)?;
        let records = pool.fetch_records(&cfg.default_user, range.as_ref())?;

        if records.is_empty() {
            info(format!(
                "No records for {}",
                period.as_deref().unwrap_or("the current month")
            ));
            return Ok(());
        }

        header(format!("Records ({})", records.len()));

        let mut table = Table::new(
            vec![
                Column::right("ID"),
                Column::left("When"),
                Column::right("Duration"),
                Column::left("Label"),
                Column::left("Note"),
            ],
            cfg.separator(),
        );

        let mut total = 0i64;
        for r in &records {
            total += r.duration_seconds;
            table.add_row(vec![
                r.id.to_string(),
                r.occurred_at.format("%Y-%m-%d %H:%M").to_string(),
                format_seconds(r.duration_seconds),
                r.category().to_string(),
                r.note.clone(),
            ]);
        }

        print!("{}", table.render());
        println!("\nTotal: {}", format_seconds(total));
    }
    Ok(())
}
