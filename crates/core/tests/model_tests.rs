// ═══════════════════════════════════════════════════════════════════
// Model Tests — wire types, chart specs, view models, settings
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use serde_json::json;

use dca_dashboard_core::errors::CoreError;
use dca_dashboard_core::models::chart::{ChartKey, ChartSpec, ChartUnit, DatasetStyle};
use dca_dashboard_core::models::comparison::ComparisonResponse;
use dca_dashboard_core::models::market::Market;
use dca_dashboard_core::models::portfolio::CalculationResponse;
use dca_dashboard_core::models::request::{ComparisonRequest, ScenarioRequest};
use dca_dashboard_core::models::settings::{Settings, DEFAULT_API_BASE_URL};
use dca_dashboard_core::models::view::{
    ComparisonView, DisplayColor, FormKind, MarketField, SummaryView,
};

fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn calculation_json(currency: serde_json::Value) -> serde_json::Value {
    json!({
        "portfolio": [{
            "date": "2023-01-01",
            "price": 500.0,
            "total_invested": 10000.0,
            "portfolio_value": 10000.0,
            "portfolio_value_drip": 10000.0,
            "lump_sum_value": 10000.0,
            "average_cost": 500.0,
            "total_shares": 20.0,
            "roi": 0.0,
            "roi_drip": 0.0,
            "roi_lump": 0.0
        }],
        "summary": {
            "total_invested": 1234567.0,
            "final_value_price": 1500000.0,
            "final_value_drip": 1600000.4,
            "final_value_lump": 1700000.0,
            "total_roi_price": 12.345,
            "total_roi_drip": 0.0,
            "total_roi_lump": -4.5,
            "currency": currency
        },
        "ticker": "2330.TW"
    })
}

// ── Market ──────────────────────────────────────────────────────────

mod market {
    use super::*;

    #[test]
    fn from_selection() {
        assert_eq!(Market::from_selection("tw"), Market::Tw);
        assert_eq!(Market::from_selection(" US "), Market::Us);
        assert_eq!(Market::from_selection("crypto"), Market::Crypto);
        assert_eq!(Market::from_selection(""), Market::Crypto);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Market::Tw).unwrap(), "\"tw\"");
        assert_eq!(serde_json::to_string(&Market::Crypto).unwrap(), "\"crypto\"");
        let m: Market = serde_json::from_str("\"us\"").unwrap();
        assert_eq!(m, Market::Us);
    }

    #[test]
    fn amount_currency() {
        assert_eq!(Market::Tw.amount_currency(), "TWD");
        assert_eq!(Market::Us.amount_currency(), "USD");
        assert_eq!(Market::Crypto.amount_currency(), "USD");
    }

    #[test]
    fn only_calculator_field_has_amount() {
        assert!(MarketField::Calculator.has_amount());
        assert!(!MarketField::CompareFirst.has_amount());
        assert!(!MarketField::CompareSecond.has_amount());
    }
}

// ── Requests ────────────────────────────────────────────────────────

mod requests {
    use super::*;

    #[test]
    fn scenario_request_wire_shape() {
        let request = ScenarioRequest::new(
            "2330",
            "10000",
            make_date(2020, 1, 1),
            make_date(2024, 12, 31),
            Market::Tw,
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "ticker": "2330",
                "amount": "10000",
                "start_date": "2020-01-01",
                "end_date": "2024-12-31",
                "market": "tw"
            })
        );
    }

    #[test]
    fn amount_passed_through_unvalidated() {
        let request = ScenarioRequest::new(
            "AAPL",
            "abc",
            make_date(2024, 1, 1),
            make_date(2020, 1, 1),
            Market::Us,
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], "abc");
    }

    #[test]
    fn comparison_request_wire_shape() {
        let request = ComparisonRequest {
            ticker1: "2330".into(),
            market1: Market::Tw,
            ticker2: "BTC".into(),
            market2: Market::Crypto,
            start_date: make_date(2023, 1, 1),
            end_date: make_date(2023, 6, 30),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["market1"], "tw");
        assert_eq!(value["market2"], "crypto");
        assert_eq!(value["end_date"], "2023-06-30");
    }
}

// ── Responses ───────────────────────────────────────────────────────

mod responses {
    use super::*;

    #[test]
    fn calculation_response_parses() {
        let resp: CalculationResponse =
            serde_json::from_value(calculation_json(json!("USD"))).unwrap();
        assert_eq!(resp.portfolio.len(), 1);
        assert_eq!(resp.portfolio[0].date, make_date(2023, 1, 1));
        assert_eq!(resp.summary.display_currency(), "USD");
        assert_eq!(resp.ticker.as_deref(), Some("2330.TW"));
    }

    #[test]
    fn missing_or_null_currency_defaults_to_twd() {
        let resp: CalculationResponse =
            serde_json::from_value(calculation_json(serde_json::Value::Null)).unwrap();
        assert_eq!(resp.summary.currency, None);
        assert_eq!(resp.summary.display_currency(), "TWD");

        let mut body = calculation_json(json!("x"));
        body["summary"].as_object_mut().unwrap().remove("currency");
        let resp: CalculationResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.summary.display_currency(), "TWD");
    }

    #[test]
    fn missing_portfolio_is_an_error() {
        let mut body = calculation_json(json!("TWD"));
        body.as_object_mut().unwrap().remove("portfolio");
        assert!(serde_json::from_value::<CalculationResponse>(body).is_err());
    }

    #[test]
    fn comparison_response_parses_optional_prices() {
        let resp: ComparisonResponse = serde_json::from_value(json!({
            "ticker1": "2330",
            "ticker2": "AAPL",
            "correlation": 0.8512,
            "data": [
                {"date": "2024-01-02", "pct1": 0.0, "pct2": 0.0, "price1": 590.0, "price2": 185.6},
                {"date": "2024-01-03", "pct1": 1.2, "pct2": -0.4}
            ]
        }))
        .unwrap();
        assert_eq!(resp.data.len(), 2);
        assert_eq!(resp.data[0].price1, Some(590.0));
        assert_eq!(resp.data[1].price2, None);
    }
}

// ── Charts ──────────────────────────────────────────────────────────

mod charts {
    use super::*;

    #[test]
    fn canvas_ids() {
        assert_eq!(ChartKey::Asset.canvas_id(), "assetChart");
        assert_eq!(ChartKey::Cost.canvas_id(), "costChart");
        assert_eq!(ChartKey::Roi.canvas_id(), "roiChart");
        assert_eq!(ChartKey::Shares.canvas_id(), "sharesChart");
        assert_eq!(ChartKey::Compare.canvas_id(), "compareChart");
        assert_eq!(ChartKey::from_canvas_id("assetChart"), Some(ChartKey::Asset));
        assert_eq!(ChartKey::from_canvas_id("pieChart"), None);
    }

    #[test]
    fn unit_parse() {
        assert_eq!(ChartUnit::parse("%"), ChartUnit::Percent);
        assert_eq!(ChartUnit::parse("股"), ChartUnit::shares());
        assert_eq!(ChartUnit::parse("usd"), ChartUnit::Currency("USD".into()));
    }

    #[test]
    fn unit_format() {
        assert_eq!(ChartUnit::Currency("TWD".into()).format(15000.0), "$15,000");
        assert_eq!(ChartUnit::Percent.format(-2.5), "-2.50%");
        assert_eq!(ChartUnit::shares().format(12.4), "12 股");
    }

    #[test]
    fn tooltip_label_uses_chart_unit() {
        let spec = ChartSpec::new(vec!["2023-01-01".into()], ChartUnit::Currency("USD".into()))
            .with_dataset("平均成本", vec![1234.6], DatasetStyle::line("#ffb74d"));
        assert_eq!(spec.tooltip_label(0, 0), "平均成本: US$1,235");
    }

    #[test]
    fn tooltip_label_without_value() {
        let spec = ChartSpec::new(vec![], ChartUnit::Percent)
            .with_dataset("ROI", vec![], DatasetStyle::line("#fff"))
            .with_dataset("", vec![], DatasetStyle::line("#fff"));
        assert_eq!(spec.tooltip_label(0, 3), "ROI: ");
        assert_eq!(spec.tooltip_label(1, 0), "");
        assert_eq!(spec.tooltip_label(9, 0), "");
    }

    #[test]
    fn tooltip_label_fails_closed() {
        let spec = ChartSpec::new(vec!["d".into()], ChartUnit::Percent)
            .with_dataset("ROI", vec![f64::NAN], DatasetStyle::line("#fff"));
        assert_eq!(spec.tooltip_label(0, 0), "ROI: --");
    }

    #[test]
    fn style_builders() {
        let style = DatasetStyle::line("#bb86fc")
            .filled("rgba(187, 134, 252, 0.1)")
            .dashed()
            .width(1.0);
        assert!(style.fill);
        assert_eq!(style.background_color.as_deref(), Some("rgba(187, 134, 252, 0.1)"));
        assert_eq!(style.border_dash, Some([5, 5]));
        assert_eq!(style.border_width, 1.0);
        assert_eq!(style.point_radius, 0.0);
    }
}

// ── View models ─────────────────────────────────────────────────────

mod views {
    use super::*;

    #[test]
    fn summary_view_formats_in_summary_currency() {
        let resp: CalculationResponse =
            serde_json::from_value(calculation_json(json!("TWD"))).unwrap();
        let view = SummaryView::from_response(&resp);

        assert_eq!(view.currency, "TWD");
        assert_eq!(view.total_invested, "$1,234,567");
        assert_eq!(view.final_value_drip, "$1,600,000");
        assert_eq!(view.roi_price.text, "12.35%");
        assert_eq!(view.roi_price.color, DisplayColor::Success);
        assert_eq!(view.roi_drip.color, DisplayColor::Success);
        assert_eq!(view.roi_lump.text, "-4.50%");
        assert_eq!(view.roi_lump.color, DisplayColor::Danger);
        assert_eq!(view.ticker.as_deref(), Some("2330.TW"));
    }

    #[test]
    fn correlation_colors() {
        assert_eq!(DisplayColor::for_correlation(0.85), DisplayColor::Success);
        assert_eq!(DisplayColor::for_correlation(-0.9), DisplayColor::Danger);
        assert_eq!(DisplayColor::for_correlation(0.2), DisplayColor::Accent);
        assert_eq!(DisplayColor::for_correlation(0.7), DisplayColor::Accent);
        assert_eq!(DisplayColor::for_correlation(-0.7), DisplayColor::Accent);
        assert_eq!(DisplayColor::for_correlation(f64::NAN), DisplayColor::Accent);
    }

    #[test]
    fn css_vars() {
        assert_eq!(DisplayColor::Success.css_var(), "var(--success-color)");
        assert_eq!(DisplayColor::Danger.css_var(), "var(--danger-color)");
        assert_eq!(DisplayColor::Accent.css_var(), "var(--accent-color)");
    }

    #[test]
    fn comparison_view() {
        let resp = ComparisonResponse {
            ticker1: "BTC".into(),
            ticker2: "ETH".into(),
            correlation: 0.85,
            data: vec![],
        };
        let view = ComparisonView::from_response(&resp);
        assert_eq!(view.correlation.text, "0.85");
        assert_eq!(view.correlation.color, DisplayColor::Success);
    }

    #[test]
    fn form_kind_display() {
        assert_eq!(FormKind::Calculator.to_string(), "calculator");
        assert_eq!(FormKind::Comparison.to_string(), "comparison");
    }
}

// ── Settings ────────────────────────────────────────────────────────

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.request_timeout_secs, Some(30));
        assert_eq!(settings.calculator.busy_caption, "計算中...");
        assert_eq!(settings.comparison.busy_caption, "比較中...");
        assert_eq!(settings.form(FormKind::Calculator).fallback_error, "計算發生錯誤");
        assert_eq!(settings.form(FormKind::Comparison).fallback_error, "比較發生錯誤");
        assert!(settings.projector.dividend_reinvested);
        assert!(settings.projector.lump_sum);
        settings.validate().unwrap();
    }

    #[test]
    fn from_json_keeps_missing_defaults() {
        let settings = Settings::from_json(
            r#"{"api_base_url": "https://dca.example.com/", "projector": {"lump_sum": false}}"#,
        )
        .unwrap();
        assert_eq!(settings.api_base_url, "https://dca.example.com/");
        assert!(!settings.projector.lump_sum);
        assert!(settings.projector.dividend_reinvested);
        assert_eq!(settings.calculator.idle_caption, "開始計算");
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let settings = Settings::default().with_base_url("https://dca.example.com/");
        assert_eq!(
            settings.endpoint("/api/calculate"),
            "https://dca.example.com/api/calculate"
        );
    }

    #[test]
    fn invalid_base_url_rejected() {
        let err = Settings::from_json(r#"{"api_base_url": "ftp://nope"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(Settings::default().with_base_url("").validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = Settings::from_json(r#"{"request_timeout_secs": 0}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(CoreError::Config(_))
        ));
    }
}
