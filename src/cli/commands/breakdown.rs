use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bar, hours2readable};
use crate::utils::range::parse_range;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Breakdown { range, json } = cmd {
        let bounds = match range {
            Some(r) => parse_range(r)?,
            None => None,
        };

        let mut pool = DbPool::open(&cfg.database)?;
        let shares = StatsLogic::categories(&mut pool, &cfg.default_user, bounds.as_ref())?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&shares)?);
            return Ok(());
        }

        if shares.is_empty() {
            info("No records to break down.");
            return Ok(());
        }

        header(format!("Categories ({})", range.as_deref().unwrap_or("all")));

        let mut table = Table::new(
            vec![
                Column::left("Category"),
                Column::right("Hours"),
                Column::right("Share"),
                Column::right("Sessions"),
                Column::left(""),
            ],
            cfg.separator(),
        );
        for s in &shares {
            table.add_row(vec![
                s.category.clone(),
                hours2readable(s.hours),
                format!("{}%", s.percentage),
                s.record_count.to_string(),
                bar(s.percentage as f64, 100.0, cfg.bar_width),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
