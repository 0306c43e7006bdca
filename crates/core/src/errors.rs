use thiserror::Error;

/// Unified error type for the entire dca-dashboard-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    /// The calculation service answered with a non-2xx status and an `error` field.
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Non-2xx status without a usable `error` field in the body.
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Charts ──────────────────────────────────────────────────────
    #[error("Dataset '{dataset}' for {chart} has {actual} points, expected {expected}")]
    DatasetLengthMismatch {
        chart: String,
        dataset: String,
        expected: usize,
        actual: usize,
    },

    #[error("Chart rendering failed for {chart}: {message}")]
    Render { chart: String, message: String },

    // ── UI State ────────────────────────────────────────────────────
    #[error("A {0} submission is already in flight")]
    SubmissionInFlight(String),

    #[error("Unknown submission ticket #{seq} for {form}")]
    UnknownTicket { form: String, seq: u64 },

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    // ── Config ──────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Text for the blocking notification shown to the user.
    ///
    /// Service-reported messages are surfaced verbatim; every other failure
    /// is replaced by the form's generic `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            CoreError::Service { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL; keep query strings out of user-facing text.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
