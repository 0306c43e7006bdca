use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::comparison::ComparisonResponse;
use crate::models::portfolio::CalculationResponse;
use crate::models::request::{ComparisonRequest, ScenarioRequest};
use crate::models::settings::Settings;
use super::traits::CalculationApi;

pub const CALCULATE_PATH: &str = "/api/calculate";
pub const COMPARE_TRENDS_PATH: &str = "/api/compare_trends";

/// JSON-over-HTTP client for the calculation service.
///
/// - `POST /api/calculate` with a [`ScenarioRequest`]
/// - `POST /api/compare_trends` with a [`ComparisonRequest`]
///
/// Both send `Content-Type: application/json`. Failures answer with a non-2xx
/// status and `{ "error": "..." }`.
pub struct HttpCalculationApi {
    client: Client,
    calculate_url: String,
    compare_url: String,
}

impl HttpCalculationApi {
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        settings.validate()?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match settings.request_timeout_secs {
            Some(secs) => builder.timeout(Duration::from_secs(secs)),
            None => builder,
        };
        let client = builder
            .build()
            .map_err(|e| CoreError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            calculate_url: settings.endpoint(CALCULATE_PATH),
            compare_url: settings.endpoint(COMPARE_TRENDS_PATH),
        })
    }

    pub fn calculate_url(&self) -> &str {
        &self.calculate_url
    }

    pub fn compare_url(&self) -> &str {
        &self.compare_url
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        log::debug!("POST {url}");
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        decode_response(status, &bytes)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Interpret a service reply.
///
/// 2xx bodies must parse as `T`. Other statuses become
/// [`CoreError::Service`] when the body carries an `error` message and
/// [`CoreError::UnexpectedStatus`] otherwise.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, CoreError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body).map_err(CoreError::from);
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty());

    match message {
        Some(message) => Err(CoreError::Service { status, message }),
        None => Err(CoreError::UnexpectedStatus(status)),
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CalculationApi for HttpCalculationApi {
    async fn calculate(&self, request: &ScenarioRequest) -> Result<CalculationResponse, CoreError> {
        self.post_json(&self.calculate_url, request).await
    }

    async fn compare_trends(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResponse, CoreError> {
        self.post_json(&self.compare_url, request).await
    }
}
