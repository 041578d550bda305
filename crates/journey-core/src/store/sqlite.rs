//! SQLite-backed store.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use tokio::task;
use uuid::Uuid;

use super::{ParticipantStore, TripStore};
use crate::{
    db::Database,
    error::{JourneyError, Result},
    models::{Participant, Trip},
    params::{CreateTrip, InviteParticipant},
};

/// Async store that runs each operation on the blocking pool against its own
/// SQLite connection. Every call is bounded by the store timeout.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
    call_timeout: Duration,
}

impl SqliteStore {
    /// Use [`StoreBuilder`](super::StoreBuilder) to create and initialize a
    /// store.
    pub(crate) fn new(db_path: PathBuf, call_timeout: Duration) -> Self {
        Self {
            db_path,
            call_timeout,
        }
    }

    /// Opens one connection, which applies the schema.
    pub(crate) async fn initialize(&self) -> Result<()> {
        self.with_database("initialize", |_| Ok(())).await
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Creates a trip together with its initial invitees.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::InvalidInput` if the parameters fail validation
    /// and `JourneyError::Database` if the insert fails.
    pub async fn create_trip(&self, params: &CreateTrip) -> Result<(Trip, Vec<Participant>)> {
        params.validate()?;
        let params = params.clone();
        self.with_database("create_trip", move |db| db.create_trip(&params))
            .await
    }

    /// Retrieves a trip, or `None` if it does not exist.
    pub async fn find_trip(&self, id: Uuid) -> Result<Option<Trip>> {
        self.with_database("find_trip", move |db| db.get_trip(id))
            .await
    }

    /// Invites someone to an existing trip.
    ///
    /// # Errors
    ///
    /// * `JourneyError::InvalidInput` if the address is invalid or already
    ///   invited
    /// * `JourneyError::TripNotFound` if the trip does not exist
    pub async fn invite_participant(
        &self,
        trip_id: Uuid,
        params: &InviteParticipant,
    ) -> Result<Participant> {
        params.validate()?;
        let email = params.email.clone();
        self.with_database("invite_participant", move |db| {
            db.insert_participant(trip_id, &email)
        })
        .await
    }

    /// Lists the participants of a trip.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::TripNotFound` if the trip does not exist.
    pub async fn list_participants(&self, trip_id: Uuid) -> Result<Vec<Participant>> {
        self.with_database("list_participants", move |db| {
            if !db.trip_exists(trip_id)? {
                return Err(JourneyError::TripNotFound { id: trip_id });
            }
            db.list_participants(trip_id)
        })
        .await
    }

    /// Runs `op` on a fresh connection. When the timeout elapses the caller
    /// gets `JourneyError::Timeout`; the blocking call itself runs to
    /// completion in the background.
    async fn with_database<T, F>(&self, operation: &'static str, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let call = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        });

        tokio::time::timeout(self.call_timeout, call)
            .await
            .map_err(|_| JourneyError::Timeout { operation })?
            .map_err(|e| JourneyError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}

#[async_trait]
impl ParticipantStore for SqliteStore {
    async fn get_participant(&self, id: Uuid) -> Result<Participant> {
        self.with_database("get_participant", move |db| db.get_participant(id))
            .await?
            .ok_or(JourneyError::ParticipantNotFound { id })
    }

    async fn confirm_participant(&self, id: Uuid) -> Result<bool> {
        self.with_database("confirm_participant", move |db| {
            db.confirm_participant(id)
        })
        .await
    }
}

#[async_trait]
impl TripStore for SqliteStore {
    async fn get_trip(&self, id: Uuid) -> Result<Trip> {
        self.find_trip(id)
            .await?
            .ok_or(JourneyError::TripNotFound { id })
    }
}
