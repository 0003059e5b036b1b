use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::parse_date;
use crate::utils::time::{parse_duration, parse_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        duration,
        label,
        note,
    } = cmd
    {
        let occurred_at = parse_date(date)?.and_time(parse_time(time)?);
        let seconds = parse_duration(duration)?;

        let mut pool = DbPool::open(&cfg.database)?;
        AddLogic::apply(
            &mut pool,
            &cfg.default_user,
            occurred_at,
            seconds,
            label.as_deref(),
            note.as_deref(),
        )?;
    }
    Ok(())
}
