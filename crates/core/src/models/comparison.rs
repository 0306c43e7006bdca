use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One aligned trading day of a two-ticker comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub date: NaiveDate,

    /// Percent change since the first aligned day
    pub pct1: f64,
    pub pct2: f64,

    #[serde(default)]
    pub price1: Option<f64>,
    #[serde(default)]
    pub price2: Option<f64>,
}

/// Successful body of `POST /api/compare_trends`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResponse {
    pub ticker1: String,
    pub ticker2: String,

    /// Pearson correlation of the two closing-price series
    pub correlation: f64,

    pub data: Vec<ComparisonRecord>,
}
