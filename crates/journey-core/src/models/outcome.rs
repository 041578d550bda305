//! Result of a single participant confirmation attempt.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of outcomes of confirming a participant.
///
/// The outcome carries no user-facing text; see
/// [`Messages::for_outcome`](crate::messages::Messages::for_outcome).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationOutcome {
    /// The participant moved from unconfirmed to confirmed
    Success,

    /// The supplied identifier is not a valid UUID
    InvalidIdentifier,

    /// No participant exists with the supplied identifier
    NotFound,

    /// The participant had already been confirmed; nothing was written
    AlreadyConfirmed,

    /// The store failed or timed out
    PersistenceFailure,
}

impl ConfirmationOutcome {
    /// Returns true only for [`ConfirmationOutcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ConfirmationOutcome::Success)
    }

    /// Whether the caller may retry the same request and expect a different
    /// result. Business outcomes are deterministic and never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ConfirmationOutcome::PersistenceFailure)
    }

    /// Stable snake_case name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationOutcome::Success => "success",
            ConfirmationOutcome::InvalidIdentifier => "invalid_identifier",
            ConfirmationOutcome::NotFound => "not_found",
            ConfirmationOutcome::AlreadyConfirmed => "already_confirmed",
            ConfirmationOutcome::PersistenceFailure => "persistence_failure",
        }
    }
}

impl fmt::Display for ConfirmationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
