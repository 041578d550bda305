//! Participant confirmation workflow.
//!
//! [`ConfirmationService::confirm_participant`] is the one state transition in
//! the system: a participant's `is_confirmed` flag moves from false to true.
//!
//! ```text
//! raw id ──parse──▶ get_participant ──confirmed?──▶ confirm_participant
//!    │                    │                │                 │
//!    ▼                    ▼                ▼                 ▼
//! InvalidIdentifier  NotFound /      AlreadyConfirmed   Success /
//!                    PersistenceFailure                 AlreadyConfirmed /
//!                                                       PersistenceFailure
//! ```
//!
//! The service holds no mutable state. Racing confirmations of the same
//! participant are settled by the store's conditional update, so one request
//! sees `Success` and the others see `AlreadyConfirmed`.

use std::{future::Future, sync::Arc, time::Duration};

use log::{debug, error};
use uuid::Uuid;

use crate::{
    error::{parse_id, JourneyError, Result},
    models::ConfirmationOutcome,
    store::ParticipantStore,
};

#[cfg(test)]
mod tests;

/// Default upper bound for a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Confirms trip participants against a [`ParticipantStore`].
#[derive(Clone)]
pub struct ConfirmationService {
    store: Arc<dyn ParticipantStore>,
    store_timeout: Duration,
}

impl ConfirmationService {
    /// Creates a service using [`DEFAULT_STORE_TIMEOUT`].
    pub fn new(store: Arc<dyn ParticipantStore>) -> Self {
        Self {
            store,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Overrides the upper bound for each store call.
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Confirms the participant identified by `participant_id`.
    ///
    /// Malformed identifiers are rejected before the store is consulted. A
    /// participant that is already confirmed is reported without a write.
    /// Store failures and timeouts are logged and reported as
    /// [`ConfirmationOutcome::PersistenceFailure`]; nothing is retried here.
    pub async fn confirm_participant(&self, participant_id: &str) -> ConfirmationOutcome {
        let id = match parse_id(participant_id) {
            Ok(id) => id,
            Err(e) => {
                debug!("rejected confirmation: {e}");
                return ConfirmationOutcome::InvalidIdentifier;
            }
        };

        let participant = match self
            .bounded("get_participant", self.store.get_participant(id))
            .await
        {
            Ok(participant) => participant,
            Err(JourneyError::ParticipantNotFound { .. }) => {
                return ConfirmationOutcome::NotFound;
            }
            Err(e) => {
                error!("failed to get participant participant_id={participant_id}: {e}");
                return ConfirmationOutcome::PersistenceFailure;
            }
        };

        if participant.is_confirmed {
            return ConfirmationOutcome::AlreadyConfirmed;
        }

        self.apply_confirmation(id, participant_id).await
    }

    async fn apply_confirmation(&self, id: Uuid, participant_id: &str) -> ConfirmationOutcome {
        match self
            .bounded("confirm_participant", self.store.confirm_participant(id))
            .await
        {
            Ok(true) => ConfirmationOutcome::Success,
            // another request confirmed the participant between our read and write
            Ok(false) => ConfirmationOutcome::AlreadyConfirmed,
            Err(e) => {
                error!("failed to confirm participant participant_id={participant_id}: {e}");
                ConfirmationOutcome::PersistenceFailure
            }
        }
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .map_err(|_| JourneyError::Timeout { operation })?
    }
}
