//! Mapping of domain results to HTTP responses.
//!
//! Every non-success outcome is reported as `400 Bad Request` with a
//! `{"message": ...}` body. Existing clients depend on this flattened mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use journey_core::{ConfirmationOutcome, JourneyError, Messages};
use log::error;
use serde::{Deserialize, Serialize};

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

/// Status code for a confirmation outcome.
pub fn confirmation_status(outcome: ConfirmationOutcome) -> StatusCode {
    match outcome {
        ConfirmationOutcome::Success => StatusCode::NO_CONTENT,
        ConfirmationOutcome::InvalidIdentifier
        | ConfirmationOutcome::NotFound
        | ConfirmationOutcome::AlreadyConfirmed
        | ConfirmationOutcome::PersistenceFailure => StatusCode::BAD_REQUEST,
    }
}

/// Full response for a confirmation outcome: empty on success, otherwise the
/// configured message.
pub fn confirmation_response(outcome: ConfirmationOutcome, messages: &Messages) -> Response {
    let status = confirmation_status(outcome);
    match messages.for_outcome(outcome) {
        Some(message) => (
            status,
            Json(ErrorBody {
                message: message.to_string(),
            }),
        )
            .into_response(),
        None => status.into_response(),
    }
}

/// Error returned by the trip and invite handlers.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Converts a core error into a client response. Failures of the service
    /// itself are logged with `context` and replaced by the generic retry
    /// message; client errors are passed through without logging.
    pub fn from_journey(context: &str, error: &JourneyError, messages: &Messages) -> Self {
        if !error.is_client_error() {
            error!("failed to {context}: {error}");
        }
        Self::bad_request(messages.for_error(error))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}
