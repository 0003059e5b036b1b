use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::comparison::PeriodComparison;
use crate::models::period::Period;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_change};
use crate::utils::date::resolve_now;
use crate::utils::formatting::hours2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compare { period, now, json } = cmd {
        let period = match period {
            Some(p) => *p,
            None => cfg.period()?,
        };
        let now = resolve_now(now.as_deref())?;

        let mut pool = DbPool::open(&cfg.database)?;
        let cmp = StatsLogic::comparison(&mut pool, &cfg.default_user, period, now)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&cmp)?);
        } else {
            print_comparison(period, &cmp);
        }
    }
    Ok(())
}

fn print_comparison(period: Period, cmp: &PeriodComparison) {
    const FMT: &str = "%Y-%m-%d %H:%M";

    header(format!("{} vs previous", period.title()));

    println!(
        "Current  ({} → {}): {}",
        cmp.current.start.format(FMT),
        cmp.current.end.format(FMT),
        hours2readable(cmp.current_total)
    );
    println!(
        "Previous ({} → {}): {}",
        cmp.previous.start.format(FMT),
        cmp.previous.end.format(FMT),
        hours2readable(cmp.previous_total)
    );

    let color = color_for_change(cmp.percent_change);
    if cmp.percent_change.is_available() {
        println!("Change: {}{}{}", color, cmp.percent_change, RESET);
    } else {
        println!("Change: {}{} (no data to compare){}", color, cmp.percent_change, RESET);
    }
}
