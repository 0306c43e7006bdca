use serde::{Deserialize, Serialize};

use crate::services::format_service;

/// Logical identifier of a chart region. Each key owns at most one live chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKey {
    /// Total invested vs. DCA value vs. lump-sum value
    Asset,
    /// Average cost vs. period close
    Cost,
    Roi,
    Shares,
    /// Two-ticker percent-change comparison
    Compare,
}

impl ChartKey {
    /// The four charts rebuilt by every calculator response.
    pub const PORTFOLIO: [ChartKey; 4] = [
        ChartKey::Asset,
        ChartKey::Cost,
        ChartKey::Roi,
        ChartKey::Shares,
    ];

    /// Identifier of the canvas this chart draws into.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartKey::Asset => "assetChart",
            ChartKey::Cost => "costChart",
            ChartKey::Roi => "roiChart",
            ChartKey::Shares => "sharesChart",
            ChartKey::Compare => "compareChart",
        }
    }

    pub fn from_canvas_id(id: &str) -> Option<Self> {
        match id {
            "assetChart" => Some(ChartKey::Asset),
            "costChart" => Some(ChartKey::Cost),
            "roiChart" => Some(ChartKey::Roi),
            "sharesChart" => Some(ChartKey::Shares),
            "compareChart" => Some(ChartKey::Compare),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChartKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canvas_id())
    }
}

/// Unit shared by every dataset of one chart; drives tooltip formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ChartUnit {
    /// ISO currency code, e.g. "TWD"
    Currency(String),
    Percent,
    /// Rounded count followed by a unit label, e.g. "股"
    Count(String),
}

impl ChartUnit {
    /// Label used for share counts.
    pub const SHARES_LABEL: &'static str = "股";

    pub fn shares() -> Self {
        ChartUnit::Count(Self::SHARES_LABEL.to_string())
    }

    /// Interpret a raw unit string: "%" is a percentage, "股" a share count,
    /// anything else a currency code.
    pub fn parse(unit: &str) -> Self {
        match unit {
            "%" => ChartUnit::Percent,
            Self::SHARES_LABEL => Self::shares(),
            code => ChartUnit::Currency(code.to_uppercase()),
        }
    }

    /// Format a single value in this unit.
    pub fn format(&self, value: f64) -> String {
        match self {
            ChartUnit::Currency(code) => format_service::format_currency(value, code),
            ChartUnit::Percent => format_service::format_percent(value),
            ChartUnit::Count(label) => format_service::format_count(value, label),
        }
    }
}

/// Cosmetic line encoding. Not semantically load-bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStyle {
    pub border_color: String,
    pub background_color: Option<String>,
    pub fill: bool,
    /// Dash pattern `[dash, gap]`; solid when absent
    pub border_dash: Option<[u8; 2]>,
    pub border_width: f32,
    pub point_radius: f32,
    pub tension: f32,
}

impl DatasetStyle {
    pub fn line(border_color: &str) -> Self {
        Self {
            border_color: border_color.to_string(),
            background_color: None,
            fill: false,
            border_dash: None,
            border_width: 2.0,
            point_radius: 0.0,
            tension: 0.1,
        }
    }

    pub fn filled(mut self, background_color: &str) -> Self {
        self.background_color = Some(background_color.to_string());
        self.fill = true;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.border_dash = Some([5, 5]);
        self
    }

    pub fn width(mut self, border_width: f32) -> Self {
        self.border_width = border_width;
        self
    }
}

/// One labelled series, aligned 1:1 with the chart's labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    pub style: DatasetStyle,
}

/// Everything needed to draw one line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub unit: ChartUnit,
}

impl ChartSpec {
    pub fn new(labels: Vec<String>, unit: ChartUnit) -> Self {
        Self {
            labels,
            datasets: Vec::new(),
            unit,
        }
    }

    pub fn with_dataset(mut self, label: impl Into<String>, values: Vec<f64>, style: DatasetStyle) -> Self {
        self.datasets.push(Dataset {
            label: label.into(),
            values,
            style,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Tooltip text for one hovered point: `"<label>: <formatted value>"`.
    ///
    /// Out-of-range indexes produce the label prefix only, the way a chart
    /// renders a point with no parsed value.
    pub fn tooltip_label(&self, dataset_index: usize, point_index: usize) -> String {
        let Some(dataset) = self.datasets.get(dataset_index) else {
            return String::new();
        };
        let mut label = dataset.label.clone();
        if !label.is_empty() {
            label.push_str(": ");
        }
        if let Some(value) = dataset.values.get(point_index) {
            label.push_str(&self.unit.format(*value));
        }
        label
    }
}

/// The four calculator charts produced from one portfolio series.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioCharts {
    pub asset: ChartSpec,
    pub cost: ChartSpec,
    pub roi: ChartSpec,
    pub shares: ChartSpec,
}

impl PortfolioCharts {
    /// Pair each spec with the key it renders under, in display order.
    pub fn into_keyed(self) -> [(ChartKey, ChartSpec); 4] {
        [
            (ChartKey::Asset, self.asset),
            (ChartKey::Cost, self.cost),
            (ChartKey::Roi, self.roi),
            (ChartKey::Shares, self.shares),
        ]
    }
}
