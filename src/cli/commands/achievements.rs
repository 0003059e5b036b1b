use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::date::resolve_now;
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Achievements { now, json } = cmd {
        let today = resolve_now(now.as_deref())?.date();

        let mut pool = DbPool::open(&cfg.database)?;
        let list = StatsLogic::achievements(&mut pool, &cfg.default_user, today)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&list)?);
            return Ok(());
        }

        let unlocked = list.iter().filter(|a| a.unlocked).count();
        header(format!("Achievements ({}/{})", unlocked, list.len()));

        let title_w = list.iter().map(|a| a.title.len()).max().unwrap_or(10);
        for a in &list {
            let (color, mark) = if a.unlocked { (GREEN, "✔") } else { (GREY, "·") };
            println!(
                "{}{} {}{}  {}/{}",
                color,
                mark,
                pad_right(a.title, title_w),
                RESET,
                a.progress,
                a.target
            );
        }
    }
    Ok(())
}
