//! Submission state machine and the error slot it reports into.
//!
//! ```text
//! idle ──begin──▶ submitting ──succeed──▶ succeeded
//!   ▲                  │
//!   └──────fail────────┘
//! ```

use serde::Serialize;

use super::error::CreateError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Why a submit did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// The validity gate is closed
    Invalid,
    /// A create call is already outstanding
    InFlight,
    /// The policy was already created from this page
    AlreadyCreated,
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Refusal::Invalid => write!(f, "policy name, namespace and gateway are required"),
            Refusal::InFlight => write!(f, "a create request is already in flight"),
            Refusal::AlreadyCreated => write!(f, "the policy has already been created"),
        }
    }
}

/// Outcome of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Refused(Refusal),
    Created { redirect: String },
    Failed { message: String },
}

/// Holds the last submission error for display. Never a history.
#[derive(Debug, Clone, Default)]
pub struct ErrorChannel {
    message: Option<String>,
}

impl ErrorChannel {
    pub fn current(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    /// Operator closed the alert
    pub fn dismiss(&mut self) {
        self.clear();
    }
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Enter `submitting`.
    ///
    /// `gate_open` must be evaluated by the caller at the moment of the call.
    /// The prior error is cleared only once the attempt is accepted.
    pub fn begin(&mut self, gate_open: bool, errors: &mut ErrorChannel) -> Result<(), Refusal> {
        match self.state {
            SubmissionState::Submitting => return Err(Refusal::InFlight),
            SubmissionState::Succeeded => return Err(Refusal::AlreadyCreated),
            SubmissionState::Idle => {}
        }

        if !gate_open {
            return Err(Refusal::Invalid);
        }

        errors.clear();
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    pub fn succeed(&mut self) {
        self.state = SubmissionState::Succeeded;
    }

    /// Record the rejection and go back to `idle` so the operator can retry
    pub fn fail(&mut self, error: &CreateError, errors: &mut ErrorChannel) {
        errors.set(error.message());
        self.state = SubmissionState::Idle;
    }
}
