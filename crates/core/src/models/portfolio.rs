use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DEFAULT_CURRENCY: &str = "TWD";

/// One contribution period as computed by the calculation service.
///
/// Records arrive in chronological order and are never modified on the client;
/// the projector only copies fields out of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRecord {
    pub date: NaiveDate,

    /// Cumulative amount contributed up to this period
    pub total_invested: f64,

    /// DCA market value, price return only
    pub portfolio_value: f64,

    /// DCA market value with dividends reinvested
    pub portfolio_value_drip: f64,

    /// Value of investing the same total capital on day one
    pub lump_sum_value: f64,

    pub average_cost: f64,

    /// Closing price for the period
    pub price: f64,

    pub total_shares: f64,

    /// ROI percentages (already multiplied by 100)
    pub roi: f64,
    pub roi_drip: f64,
    pub roi_lump: f64,
}

/// Aggregates over the whole period. Replaced wholesale on every successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_invested: f64,
    pub final_value_price: f64,
    pub final_value_drip: f64,
    pub final_value_lump: f64,
    pub total_roi_price: f64,
    pub total_roi_drip: f64,
    pub total_roi_lump: f64,

    /// ISO currency code of the quoted prices; may be missing or null
    #[serde(default)]
    pub currency: Option<String>,
}

impl Summary {
    /// Currency code to format with. Missing or blank codes fall back to TWD.
    pub fn display_currency(&self) -> String {
        match self.currency.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code.to_uppercase(),
            _ => DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Successful body of `POST /api/calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub summary: Summary,
    pub portfolio: Vec<PortfolioRecord>,

    /// Symbol the service actually resolved (e.g. "2330.TW")
    #[serde(default)]
    pub ticker: Option<String>,
}
