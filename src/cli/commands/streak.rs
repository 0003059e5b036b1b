use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::date::resolve_now;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Streak { now, json } = cmd {
        let today = resolve_now(now.as_deref())?.date();

        let mut pool = DbPool::open(&cfg.database)?;
        let s = StatsLogic::streak(&mut pool, &cfg.default_user, today)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&s)?);
            return Ok(());
        }

        header("Streak");
        println!("🔥 Current streak: {} day(s)", s.current_days);
        println!("🏆 Longest streak: {} day(s)", s.longest_days);

        let (color, mark) = if s.active_today { (GREEN, "yes") } else { (GREY, "not yet") };
        println!("📅 Active today:   {}{}{}", color, mark, RESET);

        if let Some(last) = s.last_active {
            println!("🕒 Last active:    {}", last);
        }
    }
    Ok(())
}
