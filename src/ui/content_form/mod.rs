// SPDX-License-Identifier: MPL-2.0
//! Content form submission.
//!
//! Submitting the dialog goes through three steps:
//!
//! 1. [`validate`] trims title and body and rejects empty ones locally
//! 2. [`Submission::begin`] moves the form from `Idle` to `Submitting`, and
//!    refuses while a submission is already in flight
//! 3. [`execute`] runs create-or-update followed by the sequential image
//!    uploads, stopping at the first failure
//!
//! Nothing is rolled back: when an upload fails the content record (and any
//! image uploaded before it) stays on the server.

mod submit;

pub use submit::{execute, FailedStage, SubmitFailure, SubmitPlan, SubmitReport};

use crate::content::Draft;
use std::fmt;

/// Lifecycle of the content form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    /// The last submission failed; the form can be submitted again.
    Failed,
}

/// A submit attempt was refused before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A submission is already running.
    InFlight,
    /// Title or body is empty.
    Invalid(ValidationError),
}

/// Local validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    EmptyBody,
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    ///
    /// Both cases share one message, matching the single alert of the form.
    pub fn i18n_key(&self) -> &'static str {
        "validation-empty-fields"
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "title must not be empty"),
            ValidationError::EmptyBody => write!(f, "body must not be empty"),
        }
    }
}

/// Trims the fields and checks that neither is empty.
pub fn validate(title: &str, body: &str) -> Result<Draft, ValidationError> {
    let title = title.trim();
    let body = body.trim();

    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }

    Ok(Draft {
        title: title.to_string(),
        body: body.to_string(),
    })
}

/// In-flight guard for the content form.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    phase: Phase,
}

impl Submission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Enters `Submitting`, unless a submission is already running.
    pub fn begin(&mut self) -> Result<(), SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        self.phase = Phase::Submitting;
        Ok(())
    }

    /// Records the outcome of the running submission.
    pub fn finish(&mut self, succeeded: bool) {
        self.phase = if succeeded { Phase::Idle } else { Phase::Failed };
    }

    /// Forgets any previous outcome.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_fields() {
        let draft = validate("  Title ", "\n body \t").unwrap();
        assert_eq!(draft.title, "Title");
        assert_eq!(draft.body, "body");
    }

    #[test]
    fn validate_rejects_blank_fields() {
        assert_eq!(validate("   ", "body"), Err(ValidationError::EmptyTitle));
        assert_eq!(validate("title", " \n "), Err(ValidationError::EmptyBody));
        assert_eq!(validate("", ""), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn second_begin_is_refused_while_submitting() {
        let mut submission = Submission::new();
        assert!(submission.begin().is_ok());
        assert_eq!(submission.begin(), Err(SubmitRejected::InFlight));
        assert_eq!(submission.phase(), Phase::Submitting);
    }

    #[test]
    fn failed_submission_can_be_retried() {
        let mut submission = Submission::new();
        submission.begin().unwrap();
        submission.finish(false);
        assert_eq!(submission.phase(), Phase::Failed);
        assert!(submission.begin().is_ok());
        submission.finish(true);
        assert_eq!(submission.phase(), Phase::Idle);
    }
}
