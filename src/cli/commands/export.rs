use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportContent, ExportLogic};
use crate::utils::date::resolve_now;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        buckets,
        now,
        force,
    } = cmd
    {
        let content = match buckets {
            Some(period) => ExportContent::Buckets {
                period: *period,
                now: resolve_now(now.as_deref())?,
            },
            None => ExportContent::Records {
                range: range.as_deref(),
            },
        };

        let mut pool = DbPool::open(&cfg.database)?;
        ExportLogic::export(&mut pool, &cfg.default_user, *format, file, content, *force)?;
    }
    Ok(())
}
