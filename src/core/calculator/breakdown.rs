//! Per-category totals and share of the overall time.

use crate::models::category_share::CategoryShare;
use crate::models::record::TimeRecord;
use crate::utils::formatting::round2;
use std::collections::HashMap;

/// Group `records` by label (missing labels become "Other").
///
/// Sorted by total time, descending; equal totals keep first-seen order.
/// Percentages are rounded to whole numbers and are all 0 when the overall
/// total is 0.
pub fn breakdown(records: &[TimeRecord]) -> Vec<CategoryShare> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, i64, usize)> = Vec::new();

    for r in records {
        let key = r.category();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((key, 0, 0));
            groups.len() - 1
        });
        groups[slot].1 += r.duration_seconds;
        groups[slot].2 += 1;
    }

    let total: i64 = groups.iter().map(|g| g.1).sum();

    // stable: ties stay in insertion order
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    groups
        .into_iter()
        .map(|(category, secs, count)| CategoryShare {
            category: category.to_string(),
            hours: round2(secs as f64 / 3600.0),
            percentage: if total == 0 {
                0
            } else {
                (secs as f64 / total as f64 * 100.0).round() as i64
            },
            record_count: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(secs: i64, label: Option<&str>) -> TimeRecord {
        let at = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        TimeRecord::new("u1", at, secs, label)
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(breakdown(&[]).is_empty());
    }

    #[test]
    fn single_category_is_one_hundred_percent() {
        let shares = breakdown(&[rec(3600, Some("A"))]);
        assert_eq!(
            shares,
            vec![CategoryShare {
                category: "A".into(),
                hours: 1.0,
                percentage: 100,
                record_count: 1,
            }]
        );
    }

    #[test]
    fn work_and_study_split() {
        let shares = breakdown(&[rec(1800, Some("Study")), rec(3600, Some("Work"))]);

        assert_eq!(shares[0].category, "Work");
        assert_eq!(shares[0].hours, 1.0);
        assert_eq!(shares[0].percentage, 67);
        assert_eq!(shares[1].category, "Study");
        assert_eq!(shares[1].hours, 0.5);
        assert_eq!(shares[1].percentage, 33);
    }

    #[test]
    fn missing_labels_fold_into_other() {
        let shares = breakdown(&[rec(600, None), rec(600, Some("  ")), rec(600, Some("Other"))]);

        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].category, "Other");
        assert_eq!(shares[0].record_count, 3);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let shares = breakdown(&[
            rec(600, Some("Read")),
            rec(1200, Some("Code")),
            rec(600, Some("Gym")),
        ]);
        let order: Vec<&str> = shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(order, ["Code", "Read", "Gym"]);
    }

    #[test]
    fn zero_total_gives_zero_percentages() {
        let shares = breakdown(&[rec(0, Some("A")), rec(0, Some("B"))]);
        assert!(shares.iter().all(|s| s.percentage == 0));
        assert_eq!(shares.len(), 2);
    }
}
