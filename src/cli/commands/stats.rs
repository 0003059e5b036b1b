use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::bucket::Bucket;
use crate::models::period::Period;
use crate::ui::messages::header;
use crate::utils::colors::colorize_optional;
use crate::utils::date::resolve_now;
use crate::utils::formatting::{bar, hours2readable, pad_left, pad_right, round2};
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { period, now, json } = cmd {
        let period = match period {
            Some(p) => *p,
            None => cfg.period()?,
        };
        let now = resolve_now(now.as_deref())?;

        let mut pool = DbPool::open(&cfg.database)?;
        let buckets = StatsLogic::buckets(&mut pool, &cfg.default_user, period, now)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        } else {
            print_chart(period, &buckets, cfg.bar_width);
        }
    }
    Ok(())
}

/// Display width of the widest bucket label.
fn label_width(buckets: &[Bucket]) -> usize {
    buckets
        .iter()
        .map(|b| UnicodeWidthStr::width(b.label.as_str()))
        .max()
        .unwrap_or(6)
}

fn print_chart(period: Period, buckets: &[Bucket], bar_width: usize) {
    header(period.title());

    let max = buckets.iter().map(|b| b.total_hours).fold(0.0, f64::max);
    let label_w = label_width(buckets);

    for b in buckets {
        let hours = hours2readable(b.total_hours);
        let sessions = b.record_count.to_string();
        let avg = if b.is_empty() {
            "--".to_string()
        } else {
            format!("avg {}m", b.average_minutes)
        };

        println!(
            "{}  {}  {}  {}  {}",
            pad_right(&b.label, label_w),
            colorize_optional(&pad_left(&hours, 8)),
            colorize_optional(&pad_left(&sessions, 3)),
            pad_right(&bar(b.total_hours, max, bar_width), bar_width),
            colorize_optional(&avg),
        );
    }

    let total: f64 = buckets.iter().map(|b| b.total_hours).sum();
    let count: usize = buckets.iter().map(|b| b.record_count).sum();
    println!(
        "\nTotal: {} in {} session(s)",
        hours2readable(round2(total)),
        count
    );
}
