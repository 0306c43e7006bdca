use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Captions and fallback error text of one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Caption of the submit control while idle
    pub idle_caption: String,

    /// Caption while the request is in flight
    pub busy_caption: String,

    /// Shown when a failure carries no service-provided message
    pub fallback_error: String,
}

impl FormSettings {
    pub fn calculator() -> Self {
        Self {
            idle_caption: "開始計算".to_string(),
            busy_caption: "計算中...".to_string(),
            fallback_error: "計算發生錯誤".to_string(),
        }
    }

    pub fn comparison() -> Self {
        Self {
            idle_caption: "開始比較".to_string(),
            busy_caption: "比較中...".to_string(),
            fallback_error: "比較發生錯誤".to_string(),
        }
    }
}

/// Which series the calculator charts show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorOptions {
    /// Plot the dividend-reinvested DCA series instead of price return.
    pub dividend_reinvested: bool,

    /// Include the lump-sum series in the asset and ROI charts.
    pub lump_sum: bool,
}

impl Default for ProjectorOptions {
    fn default() -> Self {
        Self {
            dividend_reinvested: true,
            lump_sum: true,
        }
    }
}

/// Where the calculation service listens in a local setup.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Origin of the calculation service; `/api/...` paths are appended to it.
    pub api_base_url: String,

    /// Per-request timeout on native targets. `None` waits indefinitely.
    pub request_timeout_secs: Option<u64>,

    pub calculator: FormSettings,
    pub comparison: FormSettings,
    pub projector: ProjectorOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: Some(30),
            calculator: FormSettings::calculator(),
            comparison: FormSettings::comparison(),
            projector: ProjectorOptions::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let base = self.api_base_url.trim();
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(CoreError::Config(format!(
                "api_base_url must be an http(s) URL, got '{base}'"
            )));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(CoreError::Config(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute URL for an API path such as `/api/calculate`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url.trim().trim_end_matches('/'), path)
    }

    pub fn form(&self, form: crate::models::view::FormKind) -> &FormSettings {
        match form {
            crate::models::view::FormKind::Calculator => &self.calculator,
            crate::models::view::FormKind::Comparison => &self.comparison,
        }
    }
}
