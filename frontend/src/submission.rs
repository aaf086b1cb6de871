//! State machine behind the registration form.
//!
//! `FormState` holds what the user typed and what the page is currently
//! telling them. `Submission` sequences attempts: every submit gets a fresh
//! attempt id, and a settled result is only applied if it belongs to the
//! latest attempt, so two in-flight requests resolving out of order cannot
//! leave a stale message on screen.

use signup_console_dto::register::RegisterOutcome;

pub type AttemptId = u64;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Field values and result flags for one mount of the form.
///
/// A pure holder: no validation happens here, and `error`/`success` are only
/// ever written through [`FormState::apply`] once an attempt settles.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormState {
    username: String,
    password: String,
    error: Option<String>,
    success: bool,
}

impl FormState {
    pub fn set_username(&mut self, value: String) {
        self.username = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    pub fn set_error(&mut self, message: Option<String>) {
        self.error = message;
    }

    pub fn set_success(&mut self, success: bool) {
        self.success = success;
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> bool {
        self.success
    }

    /// Map a settled machine state onto the error/success cells.
    ///
    /// Success clears the error and failure clears the success flag, so the
    /// two are never shown together. `Idle` and `Submitting` leave both cells
    /// alone: whatever the previous attempt said stays on screen until the
    /// new one resolves.
    pub fn apply(&mut self, state: &SubmissionState) {
        match state {
            SubmissionState::Succeeded => {
                self.set_error(None);
                self.set_success(true);
            }
            SubmissionState::Failed(message) => {
                self.set_success(false);
                self.set_error(Some(message.clone()));
            }
            SubmissionState::Idle | SubmissionState::Submitting => {}
        }
    }
}

/// Attempt ledger for the submission controller.
#[derive(Debug, Default)]
pub struct Submission {
    state: SubmissionState,
    latest: AttemptId,
}

impl Submission {
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Start a new attempt and return its id.
    pub fn begin(&mut self) -> AttemptId {
        self.latest += 1;
        self.state = SubmissionState::Submitting;
        self.latest
    }

    /// Settle an attempt. Returns the new state, or `None` when `attempt` is
    /// not the latest issued one, in which case nothing changes.
    pub fn resolve(
        &mut self,
        attempt: AttemptId,
        outcome: &RegisterOutcome,
    ) -> Option<&SubmissionState> {
        if attempt != self.latest {
            return None;
        }
        self.state = match outcome.error_message() {
            None => SubmissionState::Succeeded,
            Some(message) => SubmissionState::Failed(message),
        };
        Some(&self.state)
    }
}
