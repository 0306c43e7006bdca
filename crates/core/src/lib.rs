pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use models::{
    chart::ChartKey,
    comparison::ComparisonResponse,
    market::Market,
    portfolio::CalculationResponse,
    request::{ComparisonRequest, ScenarioRequest},
    settings::Settings,
    view::{ComparisonView, ControlState, FormKind, MarketField, Placeholders, SummaryView, UiState},
};
use providers::{
    http_client::HttpCalculationApi,
    traits::{CalculationApi, ChartRenderer},
};
use services::{
    chart_registry::ChartRegistry,
    dataset_projector::DatasetProjector,
    placeholder_service::PlaceholderController,
    submission_service::{SubmissionController, SubmissionOutcome, SubmissionTicket},
    tab_service::TabController,
};

use errors::CoreError;

/// Direct user input that changes view state synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A tab button was clicked; carries the shared tab/panel identifier.
    TabSelected(String),
    /// A market selector changed.
    MarketChanged { field: MarketField, market: Market },
    /// Tear down every rendered result.
    Reset,
}

/// A calculator submission whose request has not been sent yet.
///
/// Obtained from [`DcaDashboard::begin_calculation`]. Run it, then hand the
/// result to [`DcaDashboard::complete_calculation`] with the same ticket.
pub struct PendingCalculation<A> {
    pub ticket: SubmissionTicket,
    pub request: ScenarioRequest,
    api: Arc<A>,
}

impl<A: CalculationApi> PendingCalculation<A> {
    pub async fn run(&self) -> Result<CalculationResponse, CoreError> {
        self.api.calculate(&self.request).await
    }
}

/// A comparison submission whose request has not been sent yet.
pub struct PendingComparison<A> {
    pub ticket: SubmissionTicket,
    pub request: ComparisonRequest,
    api: Arc<A>,
}

impl<A: CalculationApi> PendingComparison<A> {
    pub async fn run(&self) -> Result<ComparisonResponse, CoreError> {
        self.api.compare_trends(&self.request).await
    }
}

/// Main entry point for the dashboard core.
/// Owns the chart registry and every UI state machine, and turns service
/// responses into rendered charts and formatted summaries.
#[must_use]
pub struct DcaDashboard<A: CalculationApi, R: ChartRenderer> {
    settings: Settings,
    api: Arc<A>,
    charts: ChartRegistry<R>,
    projector: DatasetProjector,
    tabs: TabController,
    placeholders: PlaceholderController,
    calculator: SubmissionController,
    comparison: SubmissionController,
    summary: Option<SummaryView>,
    comparison_view: Option<ComparisonView>,
    calculator_results_visible: bool,
    comparison_results_visible: bool,
}

impl<A: CalculationApi, R: ChartRenderer> std::fmt::Debug for DcaDashboard<A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DcaDashboard")
            .field("api_base_url", &self.settings.api_base_url)
            .field("live_charts", &self.charts.live_keys())
            .field("active_tab", &self.tabs.active())
            .field("calculator", &self.calculator.state())
            .field("comparison", &self.comparison.state())
            .finish()
    }
}

impl<R: ChartRenderer> DcaDashboard<HttpCalculationApi, R> {
    /// Build a dashboard that talks to the calculation service over HTTP.
    pub fn connect(settings: Settings, renderer: R, tabs: TabController) -> Result<Self, CoreError> {
        let api = HttpCalculationApi::new(&settings)?;
        Ok(Self::new(settings, Arc::new(api), renderer, tabs))
    }
}

impl<A: CalculationApi, R: ChartRenderer> DcaDashboard<A, R> {
    pub fn new(settings: Settings, api: Arc<A>, renderer: R, tabs: TabController) -> Self {
        Self {
            projector: DatasetProjector::new(settings.projector),
            calculator: SubmissionController::new(FormKind::Calculator, settings.calculator.clone()),
            comparison: SubmissionController::new(FormKind::Comparison, settings.comparison.clone()),
            charts: ChartRegistry::new(renderer),
            placeholders: PlaceholderController::default(),
            summary: None,
            comparison_view: None,
            calculator_results_visible: false,
            comparison_results_visible: false,
            settings,
            api,
            tabs,
        }
    }

    /// Replace the initial placeholder state with the markets the form markup selects.
    pub fn with_markets(mut self, calculator: Market, compare_first: Market, compare_second: Market) -> Self {
        self.placeholders = PlaceholderController::new(calculator, compare_first, compare_second);
        self
    }

    // ── Synchronous Events ──────────────────────────────────────────

    /// Route a direct user interaction into the matching state machine.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), CoreError> {
        match event {
            UiEvent::TabSelected(id) => self.tabs.select(&id),
            UiEvent::MarketChanged { field, market } => {
                self.placeholders.market_changed(field, market);
                Ok(())
            }
            UiEvent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Destroy every chart, clear both result regions and drop interest in
    /// any in-flight response. Submit controls stay locked until their
    /// requests resolve.
    pub fn reset(&mut self) {
        self.charts.destroy_all();
        self.summary = None;
        self.comparison_view = None;
        self.calculator_results_visible = false;
        self.comparison_results_visible = false;
        self.calculator.supersede();
        self.comparison.supersede();
        log::info!("dashboard reset");
    }

    // ── Calculator ──────────────────────────────────────────────────

    /// `Idle → Submitting` for the calculator form.
    /// Fails with `SubmissionInFlight` while a previous calculation is pending.
    pub fn begin_calculation(&mut self, request: ScenarioRequest) -> Result<PendingCalculation<A>, CoreError> {
        let ticket = self.calculator.begin()?;
        log::debug!("calculation #{} for {} ({})", ticket.seq(), request.ticker, request.market);
        Ok(PendingCalculation {
            ticket,
            request,
            api: Arc::clone(&self.api),
        })
    }

    /// Apply the result of a calculator request and return the form to `Idle`.
    ///
    /// Service and decoding failures leave what is on screen untouched. If the
    /// renderer fails midway, the whole calculator result region is cleared
    /// instead. The `Failed` message is what the blocking notification shows.
    pub fn complete_calculation(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<CalculationResponse, CoreError>,
    ) -> Result<SubmissionOutcome, CoreError> {
        self.calculator.check(&ticket)?;

        let outcome = if !self.calculator.is_current(&ticket) {
            log::warn!("dropping stale calculation #{}", ticket.seq());
            SubmissionOutcome::Stale
        } else {
            match result.and_then(|response| self.apply_calculation(&response)) {
                Ok(()) => SubmissionOutcome::Applied,
                Err(e) => {
                    log::warn!("calculation #{} failed: {e}", ticket.seq());
                    SubmissionOutcome::Failed {
                        message: e.user_message(self.calculator.fallback_error()),
                    }
                }
            }
        };

        self.calculator.finish(ticket)?;
        Ok(outcome)
    }

    /// Run one whole calculator cycle.
    pub async fn submit_calculation(&mut self, request: ScenarioRequest) -> Result<SubmissionOutcome, CoreError> {
        let pending = self.begin_calculation(request)?;
        let result = pending.run().await;
        self.complete_calculation(pending.ticket, result)
    }

    fn apply_calculation(&mut self, response: &CalculationResponse) -> Result<(), CoreError> {
        let summary = SummaryView::from_response(response);
        let keyed = self
            .projector
            .project_portfolio(&response.portfolio, &summary.currency)
            .into_keyed();

        // Reject inconsistent data before any chart is torn down.
        for (key, spec) in &keyed {
            ChartRegistry::<R>::validate(*key, spec)?;
        }
        for (key, spec) in &keyed {
            if let Err(e) = self.charts.render_or_replace(*key, spec) {
                // Never leave charts from two responses side by side.
                self.clear_calculation_results();
                return Err(e);
            }
        }

        log::info!(
            "calculation applied: {} periods in {}",
            response.portfolio.len(),
            summary.currency
        );
        self.summary = Some(summary);
        self.calculator_results_visible = true;
        Ok(())
    }

    /// Tear down the calculator result region after a failed redraw.
    fn clear_calculation_results(&mut self) {
        for key in ChartKey::PORTFOLIO {
            self.charts.destroy(key);
        }
        self.summary = None;
        self.calculator_results_visible = false;
        log::warn!("calculator results cleared after a rendering failure");
    }

    // ── Comparison ──────────────────────────────────────────────────

    /// `Idle → Submitting` for the comparison form. Independent of the calculator.
    pub fn begin_comparison(&mut self, request: ComparisonRequest) -> Result<PendingComparison<A>, CoreError> {
        let ticket = self.comparison.begin()?;
        log::debug!(
            "comparison #{} for {} vs {}",
            ticket.seq(),
            request.ticker1,
            request.ticker2
        );
        Ok(PendingComparison {
            ticket,
            request,
            api: Arc::clone(&self.api),
        })
    }

    /// Apply the result of a comparison request and return the form to `Idle`.
    pub fn complete_comparison(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<ComparisonResponse, CoreError>,
    ) -> Result<SubmissionOutcome, CoreError> {
        self.comparison.check(&ticket)?;

        let outcome = if !self.comparison.is_current(&ticket) {
            log::warn!("dropping stale comparison #{}", ticket.seq());
            SubmissionOutcome::Stale
        } else {
            match result.and_then(|response| self.apply_comparison(&response)) {
                Ok(()) => SubmissionOutcome::Applied,
                Err(e) => {
                    log::warn!("comparison #{} failed: {e}", ticket.seq());
                    SubmissionOutcome::Failed {
                        message: e.user_message(self.comparison.fallback_error()),
                    }
                }
            }
        };

        self.comparison.finish(ticket)?;
        Ok(outcome)
    }

    /// Run one whole comparison cycle.
    pub async fn submit_comparison(&mut self, request: ComparisonRequest) -> Result<SubmissionOutcome, CoreError> {
        let pending = self.begin_comparison(request)?;
        let result = pending.run().await;
        self.complete_comparison(pending.ticket, result)
    }

    fn apply_comparison(&mut self, response: &ComparisonResponse) -> Result<(), CoreError> {
        let spec = self.projector.project_comparison(response);
        if let Err(e) = self.charts.render_or_replace(ChartKey::Compare, &spec) {
            self.comparison_view = None;
            self.comparison_results_visible = false;
            return Err(e);
        }

        log::info!(
            "comparison applied: {} vs {} over {} days",
            response.ticker1,
            response.ticker2,
            response.data.len()
        );
        self.comparison_view = Some(ComparisonView::from_response(response));
        self.comparison_results_visible = true;
        Ok(())
    }

    // ── View State ──────────────────────────────────────────────────

    #[must_use]
    pub fn ui_state(&self) -> UiState {
        UiState {
            active_tab: self.tabs.active().map(str::to_string),
            calculator_submitting: self.calculator.is_submitting(),
            comparison_submitting: self.comparison.is_submitting(),
        }
    }

    /// Caption and enabled state of a form's submit control.
    #[must_use]
    pub fn control_state(&self, form: FormKind) -> ControlState {
        match form {
            FormKind::Calculator => self.calculator.control_state(),
            FormKind::Comparison => self.comparison.control_state(),
        }
    }

    /// Whether a form's result region has been revealed.
    #[must_use]
    pub fn is_results_visible(&self, form: FormKind) -> bool {
        match form {
            FormKind::Calculator => self.calculator_results_visible,
            FormKind::Comparison => self.comparison_results_visible,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&SummaryView> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn comparison_view(&self) -> Option<&ComparisonView> {
        self.comparison_view.as_ref()
    }

    #[must_use]
    pub fn placeholders(&self, field: MarketField) -> &Placeholders {
        self.placeholders.get(field)
    }

    #[must_use]
    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    #[must_use]
    pub fn charts(&self) -> &ChartRegistry<R> {
        &self.charts
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
