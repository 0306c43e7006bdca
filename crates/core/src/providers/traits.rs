use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::chart::{ChartKey, ChartSpec};
use crate::models::comparison::ComparisonResponse;
use crate::models::portfolio::CalculationResponse;
use crate::models::request::{ComparisonRequest, ScenarioRequest};

/// The remote calculation service.
///
/// The financial math lives behind this seam. `HttpCalculationApi` talks to the
/// real service; tests plug in scripted implementations.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CalculationApi: Send + Sync {
    /// `POST /api/calculate`
    async fn calculate(&self, request: &ScenarioRequest) -> Result<CalculationResponse, CoreError>;

    /// `POST /api/compare_trends`
    async fn compare_trends(
        &self,
        request: &ComparisonRequest,
    ) -> Result<ComparisonResponse, CoreError>;
}

/// The line-chart drawing capability.
///
/// `create` binds a new chart to the canvas identified by `key`;
/// `destroy` releases it. Implementations must accept specs with zero labels.
/// Tooltips are produced with [`ChartSpec::tooltip_label`].
pub trait ChartRenderer {
    type Handle;

    fn create(&mut self, key: ChartKey, spec: &ChartSpec) -> Result<Self::Handle, CoreError>;

    fn destroy(&mut self, handle: Self::Handle);
}
