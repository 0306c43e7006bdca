use crate::models::chart::{ChartSpec, ChartUnit, DatasetStyle, PortfolioCharts};
use crate::models::comparison::ComparisonResponse;
use crate::models::portfolio::PortfolioRecord;
use crate::models::settings::ProjectorOptions;

// ── Palette ─────────────────────────────────────────────────────────
const GREY: &str = "#a0a0a0";
const GREY_FILL: &str = "rgba(160, 160, 160, 0.1)";
const PURPLE: &str = "#bb86fc";
const PURPLE_FILL: &str = "rgba(187, 134, 252, 0.1)";
const PINK: &str = "#ff4081";
const ORANGE: &str = "#ffb74d";
const BLUE: &str = "#2196f3";
const BLUE_FILL: &str = "rgba(33, 150, 243, 0.1)";
const CYAN: &str = "#06b6d4";

/// Turns service responses into chart-ready specs.
///
/// The projector only copies fields out of the records, one value per record,
/// so every dataset it builds is aligned with the date labels, including the
/// empty case.
///
/// Which DCA series is plotted and whether lump-sum lines appear is
/// controlled by [`ProjectorOptions`], covering the plain, dividend-reinvested
/// and lump-sum-comparison variants of the dashboard with one code path.
#[derive(Debug, Clone, Default)]
pub struct DatasetProjector {
    options: ProjectorOptions,
}

impl DatasetProjector {
    pub fn new(options: ProjectorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProjectorOptions {
        &self.options
    }

    /// Build the asset, cost, ROI and share charts for one portfolio series.
    /// Money charts are labelled in `currency`.
    pub fn project_portfolio(&self, records: &[PortfolioRecord], currency: &str) -> PortfolioCharts {
        let labels = date_labels(records.iter().map(|r| r.date));
        let money = ChartUnit::Currency(currency.to_uppercase());
        let drip = self.options.dividend_reinvested;

        let series = |f: fn(&PortfolioRecord) -> f64| column(records, f);

        // 1. Asset growth
        let (dca_label, dca_values) = if drip {
            ("DCA 市值 (含息)", series(|r| r.portfolio_value_drip))
        } else {
            ("DCA 市值", series(|r| r.portfolio_value))
        };
        let mut asset = ChartSpec::new(labels.clone(), money.clone())
            .with_dataset(
                "總投入成本",
                series(|r| r.total_invested),
                DatasetStyle::line(GREY).filled(GREY_FILL),
            )
            .with_dataset(
                dca_label,
                dca_values,
                DatasetStyle::line(PURPLE).filled(PURPLE_FILL),
            );
        if self.options.lump_sum {
            asset = asset.with_dataset(
                "Lump Sum 市值",
                series(|r| r.lump_sum_value),
                DatasetStyle::line(PINK).dashed(),
            );
        }

        // 2. Average cost vs. closing price
        let cost = ChartSpec::new(labels.clone(), money)
            .with_dataset(
                "平均成本",
                series(|r| r.average_cost),
                DatasetStyle::line(ORANGE).dashed(),
            )
            .with_dataset(
                "月收盤價",
                series(|r| r.price),
                DatasetStyle::line(PURPLE).width(1.0),
            );

        // 3. ROI
        let (roi_label, roi_values) = if drip {
            ("DCA 報酬率 (含息) %", series(|r| r.roi_drip))
        } else {
            ("DCA 報酬率 %", series(|r| r.roi))
        };
        let mut roi = ChartSpec::new(labels.clone(), ChartUnit::Percent).with_dataset(
            roi_label,
            roi_values,
            DatasetStyle::line(PURPLE),
        );
        if self.options.lump_sum {
            roi = roi.with_dataset(
                "Lump Sum 報酬率 %",
                series(|r| r.roi_lump),
                DatasetStyle::line(PINK),
            );
        }

        // 4. Accumulated shares
        let shares = ChartSpec::new(labels, ChartUnit::shares()).with_dataset(
            "累積股數",
            series(|r| r.total_shares),
            DatasetStyle::line(BLUE).filled(BLUE_FILL),
        );

        PortfolioCharts {
            asset,
            cost,
            roi,
            shares,
        }
    }

    /// Build the two percent-change series of a comparison, labelled by ticker.
    pub fn project_comparison(&self, response: &ComparisonResponse) -> ChartSpec {
        let labels = date_labels(response.data.iter().map(|d| d.date));

        ChartSpec::new(labels, ChartUnit::Percent)
            .with_dataset(
                format!("{} 漲跌幅 (%)", response.ticker1),
                response.data.iter().map(|d| d.pct1).collect(),
                DatasetStyle::line(PURPLE),
            )
            .with_dataset(
                format!("{} 漲跌幅 (%)", response.ticker2),
                response.data.iter().map(|d| d.pct2).collect(),
                DatasetStyle::line(CYAN),
            )
    }
}

fn column(records: &[PortfolioRecord], field: impl Fn(&PortfolioRecord) -> f64) -> Vec<f64> {
    records.iter().map(field).collect()
}

fn date_labels(dates: impl Iterator<Item = chrono::NaiveDate>) -> Vec<String> {
    dates.map(|d| d.format("%Y-%m-%d").to_string()).collect()
}
