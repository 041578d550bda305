//! Trip creation and lookup queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row, TransactionBehavior};
use uuid::Uuid;

use super::{timestamp_column, uuid_column};
use crate::{
    error::{DatabaseResultExt, JourneyError, Result},
    models::{Participant, Trip},
    params::CreateTrip,
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (id, destination, owner_name, owner_email, starts_at, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const INSERT_INVITEE_SQL: &str =
    "INSERT OR IGNORE INTO participants (id, trip_id, email, is_confirmed) VALUES (?1, ?2, ?3, 0)";
const SELECT_TRIP_SQL: &str =
    "SELECT id, destination, owner_name, owner_email, starts_at FROM trips WHERE id = ?1";
pub(super) const CHECK_TRIP_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trips WHERE id = ?1)";

impl super::Database {
    /// Creates a trip and its initial invitees in one transaction.
    ///
    /// Duplicate addresses in `emails_to_invite` produce a single participant.
    /// Parameters are expected to have passed [`CreateTrip::validate`].
    pub fn create_trip(&mut self, params: &CreateTrip) -> Result<(Trip, Vec<Participant>)> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let trip = Trip {
            id: Uuid::new_v4(),
            destination: params.destination.trim().to_string(),
            owner_name: params.owner_name.trim().to_string(),
            owner_email: params.owner_email.clone(),
            starts_at: params.starts_at,
        };

        tx.execute(
            INSERT_TRIP_SQL,
            params![
                trip.id.to_string(),
                &trip.destination,
                &trip.owner_name,
                &trip.owner_email,
                trip.starts_at.to_string(),
                Timestamp::now().to_string(),
            ],
        )
        .map_err(|e| JourneyError::database("Failed to insert trip").with_source(e))?;

        let mut invitees = Vec::with_capacity(params.emails_to_invite.len());
        for email in &params.emails_to_invite {
            let participant = Participant {
                id: Uuid::new_v4(),
                trip_id: trip.id,
                email: email.clone(),
                is_confirmed: false,
            };
            let inserted = tx
                .execute(
                    INSERT_INVITEE_SQL,
                    params![
                        participant.id.to_string(),
                        trip.id.to_string(),
                        &participant.email
                    ],
                )
                .map_err(|e| JourneyError::database("Failed to insert invitee").with_source(e))?;
            if inserted == 1 {
                invitees.push(participant);
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok((trip, invitees))
    }

    /// Retrieves a trip by its ID.
    pub fn get_trip(&self, id: Uuid) -> Result<Option<Trip>> {
        self.connection
            .query_row(SELECT_TRIP_SQL, params![id.to_string()], Self::build_trip_from_row)
            .optional()
            .map_err(|e| JourneyError::database("Failed to query trip").with_source(e))
    }

    /// Checks whether a trip exists.
    pub fn trip_exists(&self, id: Uuid) -> Result<bool> {
        self.connection
            .query_row(CHECK_TRIP_EXISTS_SQL, params![id.to_string()], |row| {
                row.get(0)
            })
            .db_context("Failed to check trip existence")
    }

    fn build_trip_from_row(row: &Row<'_>) -> rusqlite::Result<Trip> {
        Ok(Trip {
            id: uuid_column(row, 0)?,
            destination: row.get(1)?,
            owner_name: row.get(2)?,
            owner_email: row.get(3)?,
            starts_at: timestamp_column(row, 4)?,
        })
    }
}
