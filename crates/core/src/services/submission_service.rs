use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::settings::FormSettings;
use crate::models::view::{ControlState, FormKind};

/// Proof that a submission was started. Handed back when its request resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionTicket {
    form: FormKind,
    seq: u64,
}

impl SubmissionTicket {
    pub fn form(&self) -> FormKind {
        self.form
    }

    /// Monotonic per-form sequence number, starting at 1.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    Idle,
    Submitting { seq: u64 },
}

/// How a resolved submission affected the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// The response was rendered and the result region revealed.
    Applied,
    /// Nothing was rendered; `message` goes into the blocking notification.
    Failed { message: String },
    /// The response belonged to a superseded submission and was dropped.
    Stale,
}

/// `Idle → Submitting → Idle` state machine for one form's submit control.
///
/// While a request is in flight the control is disabled and shows the busy
/// caption, and further `begin` calls are refused. The controller also
/// remembers which ticket may still apply its response: `supersede` (used by
/// reset) keeps the control locked until the request resolves but marks its
/// response as stale.
#[derive(Debug, Clone)]
pub struct SubmissionController {
    form: FormKind,
    settings: FormSettings,
    state: SubmissionState,
    last_seq: u64,
    accepting: Option<u64>,
}

impl SubmissionController {
    pub fn new(form: FormKind, settings: FormSettings) -> Self {
        Self {
            form,
            settings,
            state: SubmissionState::Idle,
            last_seq: 0,
            accepting: None,
        }
    }

    pub fn form(&self) -> FormKind {
        self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting { .. })
    }

    /// Fallback text for failures without a service message.
    pub fn fallback_error(&self) -> &str {
        &self.settings.fallback_error
    }

    /// `Idle → Submitting`. Refused while a request is already in flight.
    pub fn begin(&mut self) -> Result<SubmissionTicket, CoreError> {
        if let SubmissionState::Submitting { seq } = self.state {
            log::warn!("{} submission refused: #{seq} still in flight", self.form);
            return Err(CoreError::SubmissionInFlight(self.form.to_string()));
        }

        self.last_seq += 1;
        let seq = self.last_seq;
        self.state = SubmissionState::Submitting { seq };
        self.accepting = Some(seq);
        log::debug!("{} submission #{seq}: Idle -> Submitting", self.form);

        Ok(SubmissionTicket {
            form: self.form,
            seq,
        })
    }

    /// Fail unless `ticket` is this form's in-flight submission.
    pub fn check(&self, ticket: &SubmissionTicket) -> Result<(), CoreError> {
        match self.state {
            SubmissionState::Submitting { seq } if ticket.form == self.form && ticket.seq == seq => {
                Ok(())
            }
            _ => Err(CoreError::UnknownTicket {
                form: ticket.form.to_string(),
                seq: ticket.seq,
            }),
        }
    }

    /// Whether the response for `ticket` may still be rendered.
    pub fn is_current(&self, ticket: &SubmissionTicket) -> bool {
        ticket.form == self.form && self.accepting == Some(ticket.seq)
    }

    /// Drop interest in the in-flight response without unlocking the control.
    pub fn supersede(&mut self) {
        if let Some(seq) = self.accepting.take() {
            log::debug!("{} submission #{seq} superseded", self.form);
        }
    }

    /// `Submitting → Idle`, whatever the outcome was.
    pub fn finish(&mut self, ticket: SubmissionTicket) -> Result<(), CoreError> {
        self.check(&ticket)?;
        self.state = SubmissionState::Idle;
        if self.accepting == Some(ticket.seq) {
            self.accepting = None;
        }
        log::debug!("{} submission #{}: -> Idle", self.form, ticket.seq);
        Ok(())
    }

    /// Caption and enabled state the submit control should show right now.
    pub fn control_state(&self) -> ControlState {
        match self.state {
            SubmissionState::Idle => ControlState {
                caption: self.settings.idle_caption.clone(),
                disabled: false,
            },
            SubmissionState::Submitting { .. } => ControlState {
                caption: self.settings.busy_caption.clone(),
                disabled: true,
            },
        }
    }
}
