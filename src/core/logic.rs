//! Glue between a [`RecordSource`] and the pure reducers: fetch exactly the
//! records a report needs, then reduce them in memory.

use crate::core::calculator::achievements::Achievement;
use crate::core::calculator::streak::StreakSummary;
use crate::core::calculator::{achievements, aggregate, breakdown, compare, streak};
use crate::db::source::RecordSource;
use crate::errors::AppResult;
use crate::models::bucket::Bucket;
use crate::models::category_share::CategoryShare;
use crate::models::comparison::PeriodComparison;
use crate::models::period::Period;
use crate::models::range::RecordRange;
use chrono::{NaiveDate, NaiveDateTime};

pub struct StatsLogic;

impl StatsLogic {
    pub fn buckets<S: RecordSource>(
        source: &mut S,
        user_id: &str,
        period: Period,
        now: NaiveDateTime,
    ) -> AppResult<Vec<Bucket>> {
        let range = period.aggregation_range(now);
        let records = source.fetch_records(user_id, Some(&range))?;
        Ok(aggregate(&records, period, now))
    }

    pub fn comparison<S: RecordSource>(
        source: &mut S,
        user_id: &str,
        period: Period,
        now: NaiveDateTime,
    ) -> AppResult<PeriodComparison> {
        let (current, previous) = period.comparison_windows(now);
        let records = source.fetch_records(user_id, Some(&current.union(&previous)))?;
        Ok(compare(&records, period, now))
    }

    pub fn categories<S: RecordSource>(
        source: &mut S,
        user_id: &str,
        range: Option<&RecordRange>,
    ) -> AppResult<Vec<CategoryShare>> {
        let records = source.fetch_records(user_id, range)?;
        Ok(breakdown(&records))
    }

    pub fn streak<S: RecordSource>(
        source: &mut S,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<StreakSummary> {
        let records = source.fetch_records(user_id, None)?;
        Ok(streak(&records, today))
    }

    pub fn achievements<S: RecordSource>(
        source: &mut S,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<Vec<Achievement>> {
        let records = source.fetch_records(user_id, None)?;
        Ok(achievements(&records, today))
    }
}
