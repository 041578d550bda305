//! Persistence capabilities consumed by the services.
//!
//! The confirmation service and the mailer never see a database client. They
//! depend on the narrow traits below, which [`SqliteStore`] implements for
//! production and in-memory fakes implement in tests.
//!
//! ```text
//! ┌──────────────────────┐    ┌──────────────────┐    ┌──────────────┐
//! │ ConfirmationService  │───▶│ ParticipantStore │───▶│              │
//! └──────────────────────┘    └──────────────────┘    │ SqliteStore  │
//! ┌──────────────────────┐    ┌──────────────────┐    │  (db/)       │
//! │ Mailer               │───▶│ TripStore        │───▶│              │
//! └──────────────────────┘    └──────────────────┘    └──────────────┘
//! ```

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::Result,
    models::{Participant, Trip},
};

pub mod builder;
pub mod sqlite;

pub use builder::StoreBuilder;
pub use sqlite::SqliteStore;

/// Participant lookup and confirmation.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Fetches a participant.
    ///
    /// # Errors
    ///
    /// `JourneyError::ParticipantNotFound` when no such record exists; any
    /// other error is a failure of the store itself.
    async fn get_participant(&self, id: Uuid) -> Result<Participant>;

    /// Sets the participant's confirmation flag.
    ///
    /// Returns `true` when this call flipped the flag and `false` when it was
    /// already set. Must be safe to call on a confirmed record.
    async fn confirm_participant(&self, id: Uuid) -> Result<bool>;
}

/// Trip lookup.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Fetches a trip.
    ///
    /// # Errors
    ///
    /// `JourneyError::TripNotFound` when no such record exists; any other
    /// error is a failure of the store itself.
    async fn get_trip(&self, id: Uuid) -> Result<Trip>;
}
