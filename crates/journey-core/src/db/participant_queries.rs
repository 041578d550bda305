//! Participant invitation, lookup and confirmation queries.

use rusqlite::{params, ErrorCode, OptionalExtension, Row, TransactionBehavior};
use uuid::Uuid;

use super::{trip_queries::CHECK_TRIP_EXISTS_SQL, uuid_column};
use crate::{
    error::{DatabaseResultExt, JourneyError, Result},
    models::Participant,
};

const INSERT_PARTICIPANT_SQL: &str =
    "INSERT INTO participants (id, trip_id, email, is_confirmed) VALUES (?1, ?2, ?3, 0)";
const SELECT_PARTICIPANT_SQL: &str =
    "SELECT id, trip_id, email, is_confirmed FROM participants WHERE id = ?1";
const SELECT_TRIP_PARTICIPANTS_SQL: &str =
    "SELECT id, trip_id, email, is_confirmed FROM participants WHERE trip_id = ?1 ORDER BY email";
// The `is_confirmed = 0` guard makes the transition a single atomic statement:
// of two racing confirmations exactly one changes a row.
const CONFIRM_PARTICIPANT_SQL: &str =
    "UPDATE participants SET is_confirmed = 1 WHERE id = ?1 AND is_confirmed = 0";

impl super::Database {
    /// Invites `email` to an existing trip as an unconfirmed participant.
    ///
    /// # Errors
    ///
    /// * `JourneyError::TripNotFound` if the trip does not exist
    /// * `JourneyError::InvalidInput` if the address was already invited
    pub fn insert_participant(&mut self, trip_id: Uuid, email: &str) -> Result<Participant> {
        // Take the write lock before the existence check. A deferred
        // transaction would fail its lock upgrade without waiting.
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_TRIP_EXISTS_SQL, params![trip_id.to_string()], |row| {
                row.get(0)
            })
            .db_context("Failed to check trip existence")?;
        if !exists {
            return Err(JourneyError::TripNotFound { id: trip_id });
        }

        let participant = Participant {
            id: Uuid::new_v4(),
            trip_id,
            email: email.to_string(),
            is_confirmed: false,
        };

        tx.execute(
            INSERT_PARTICIPANT_SQL,
            params![participant.id.to_string(), trip_id.to_string(), email],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(ref err, _)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                JourneyError::invalid_input("email").with_reason("already invited to this trip")
            }
            e => JourneyError::database("Failed to insert participant").with_source(e),
        })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(participant)
    }

    /// Retrieves a participant by its ID.
    pub fn get_participant(&self, id: Uuid) -> Result<Option<Participant>> {
        self.connection
            .query_row(
                SELECT_PARTICIPANT_SQL,
                params![id.to_string()],
                Self::build_participant_from_row,
            )
            .optional()
            .map_err(|e| JourneyError::database("Failed to query participant").with_source(e))
    }

    /// Lists the participants of a trip ordered by e-mail address.
    pub fn list_participants(&self, trip_id: Uuid) -> Result<Vec<Participant>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIP_PARTICIPANTS_SQL)
            .db_context("Failed to prepare query")?;

        let participants = stmt
            .query_map(params![trip_id.to_string()], Self::build_participant_from_row)
            .db_context("Failed to query participants")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read participant row")?;

        Ok(participants)
    }

    /// Marks a participant as confirmed.
    ///
    /// Returns `true` if this call performed the transition and `false` if the
    /// participant was already confirmed or does not exist. Safe to call any
    /// number of times.
    pub fn confirm_participant(&self, id: Uuid) -> Result<bool> {
        let changed = self
            .connection
            .execute(CONFIRM_PARTICIPANT_SQL, params![id.to_string()])
            .db_context("Failed to confirm participant")?;
        Ok(changed == 1)
    }

    fn build_participant_from_row(row: &Row<'_>) -> rusqlite::Result<Participant> {
        Ok(Participant {
            id: uuid_column(row, 0)?,
            trip_id: uuid_column(row, 1)?,
            email: row.get(2)?,
            is_confirmed: row.get(3)?,
        })
    }
}
