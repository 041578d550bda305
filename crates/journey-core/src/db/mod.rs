//! Database operations and SQLite management for trips and participants.
//!
//! This module provides the synchronous, low-level half of the store. Each
//! [`Database`] wraps one SQLite connection; the async
//! [`SqliteStore`](crate::store::SqliteStore) opens one per call on the
//! blocking pool.

use std::{path::Path, time::Duration};

use jiff::Timestamp;
use rusqlite::{types::Type, Connection, Row};
use uuid::Uuid;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod participant_queries;
pub mod trip_queries;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads a hyphenated UUID stored as TEXT.
pub(crate) fn uuid_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Uuid> {
    row.get::<_, String>(idx)?
        .parse::<Uuid>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads an RFC 3339 timestamp stored as TEXT.
pub(crate) fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
