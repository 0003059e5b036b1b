use serde::Serialize;

/// Total time spent on one label and its share of the overall total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub hours: f64,
    pub percentage: i64,
    pub record_count: usize,
}
