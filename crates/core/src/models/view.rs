use serde::{Deserialize, Serialize};

use super::comparison::ComparisonResponse;
use super::market::Market;
use super::portfolio::CalculationResponse;
use crate::services::format_service::{format_correlation, format_currency, format_percent};

/// Theme colour a figure is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Success,
    Danger,
    Accent,
}

impl DisplayColor {
    /// CSS custom property holding the colour.
    pub fn css_var(&self) -> &'static str {
        match self {
            DisplayColor::Success => "var(--success-color)",
            DisplayColor::Danger => "var(--danger-color)",
            DisplayColor::Accent => "var(--accent-color)",
        }
    }

    /// Gains (including break-even) are green, losses red.
    pub fn for_return(roi: f64) -> Self {
        if roi >= 0.0 {
            DisplayColor::Success
        } else {
            DisplayColor::Danger
        }
    }

    /// Strong positive correlation is green, strong negative red, the rest neutral.
    pub fn for_correlation(correlation: f64) -> Self {
        if correlation > 0.7 {
            DisplayColor::Success
        } else if correlation < -0.7 {
            DisplayColor::Danger
        } else {
            DisplayColor::Accent
        }
    }
}

/// A formatted figure together with its colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColoredFigure {
    pub text: String,
    pub color: DisplayColor,
}

/// Display-ready summary card contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryView {
    pub currency: String,
    pub ticker: Option<String>,
    pub total_invested: String,
    pub final_value_price: String,
    pub roi_price: ColoredFigure,
    pub final_value_drip: String,
    pub roi_drip: ColoredFigure,
    pub final_value_lump: String,
    pub roi_lump: ColoredFigure,
}

impl ColoredFigure {
    /// ROI percentage, green for gains and red for losses.
    pub fn roi(value: f64) -> Self {
        Self {
            text: format_percent(value),
            color: DisplayColor::for_return(value),
        }
    }
}

impl SummaryView {
    /// Format a calculator response. Every money figure uses the summary's currency.
    pub fn from_response(response: &CalculationResponse) -> Self {
        let summary = &response.summary;
        let currency = summary.display_currency();
        Self {
            total_invested: format_currency(summary.total_invested, &currency),
            final_value_price: format_currency(summary.final_value_price, &currency),
            roi_price: ColoredFigure::roi(summary.total_roi_price),
            final_value_drip: format_currency(summary.final_value_drip, &currency),
            roi_drip: ColoredFigure::roi(summary.total_roi_drip),
            final_value_lump: format_currency(summary.final_value_lump, &currency),
            roi_lump: ColoredFigure::roi(summary.total_roi_lump),
            ticker: response.ticker.clone(),
            currency,
        }
    }
}

/// Display-ready comparison header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonView {
    pub ticker1: String,
    pub ticker2: String,
    pub correlation: ColoredFigure,
}

impl ComparisonView {
    pub fn from_response(response: &ComparisonResponse) -> Self {
        Self {
            ticker1: response.ticker1.clone(),
            ticker2: response.ticker2.clone(),
            correlation: ColoredFigure {
                text: format_correlation(response.correlation),
                color: DisplayColor::for_correlation(response.correlation),
            },
        }
    }
}

/// Which of the two forms a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Calculator,
    Comparison,
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormKind::Calculator => write!(f, "calculator"),
            FormKind::Comparison => write!(f, "comparison"),
        }
    }
}

/// Caption and enabled state of a submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub caption: String,
    pub disabled: bool,
}

/// Snapshot of the view-level state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub active_tab: Option<String>,
    pub calculator_submitting: bool,
    pub comparison_submitting: bool,
}

/// Input whose placeholders follow a market selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketField {
    /// Calculator ticker, paired with the amount field
    Calculator,
    /// First comparison ticker (no amount field)
    CompareFirst,
    /// Second comparison ticker (no amount field)
    CompareSecond,
}

impl MarketField {
    pub fn has_amount(&self) -> bool {
        matches!(self, MarketField::Calculator)
    }
}

/// Placeholder text derived from a market selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholders {
    pub market: Market,
    pub ticker_example: &'static str,
    pub amount_example: Option<&'static str>,
    /// e.g. "(TWD)"
    pub amount_unit_label: Option<&'static str>,
}

impl Placeholders {
    /// Full caption of the amount field, e.g. "每月投資金額 (TWD)".
    pub fn amount_label(&self) -> Option<String> {
        self.amount_unit_label
            .map(|unit| format!("每月投資金額 {unit}"))
    }
}
