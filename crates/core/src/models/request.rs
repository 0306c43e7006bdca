use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::market::Market;

/// Body of `POST /api/calculate`.
///
/// Nothing here is validated locally: the amount stays the decimal string the
/// user typed and the service decides whether the dates make sense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub ticker: String,

    /// Recurring contribution as entered (e.g. "10000")
    pub amount: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub market: Market,
}

impl ScenarioRequest {
    pub fn new(
        ticker: impl Into<String>,
        amount: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        market: Market,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            amount: amount.into(),
            start_date,
            end_date,
            market,
        }
    }
}

/// Body of `POST /api/compare_trends`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub ticker1: String,
    pub market1: Market,
    pub ticker2: String,
    pub market2: Market,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
