//! Error types for the journey library.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

/// Comprehensive error type for all journey operations.
#[derive(Error, Debug)]
pub enum JourneyError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Participant not found for the given ID
    #[error("Participant with ID {id} not found")]
    ParticipantNotFound { id: Uuid },
    /// Trip not found for the given ID
    #[error("Trip with ID {id} not found")]
    TripNotFound { id: Uuid },
    /// A path or body value that is not a valid identifier
    #[error("Invalid identifier '{value}': {source}")]
    InvalidIdentifier {
        value: String,
        #[source]
        source: uuid::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A store call did not finish within the configured timeout
    #[error("Operation '{operation}' timed out")]
    Timeout { operation: &'static str },
    /// Outbound mail could not be built or delivered
    #[error("Mail transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    /// Failure inside a mailer operation, tagged with the operation name
    #[error("mailer: {operation}: {message}")]
    Mailer {
        operation: &'static str,
        message: String,
        #[source]
        source: Box<JourneyError>,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Messages file could not be parsed
    #[error("Invalid messages file '{path}': {source}")]
    MessagesFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> JourneyError {
        JourneyError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> JourneyError {
        JourneyError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl JourneyError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a transport error wrapping the underlying cause.
    pub fn transport<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Wraps an error raised inside a mailer operation.
    pub fn mailer(operation: &'static str, message: impl Into<String>, source: JourneyError) -> Self {
        Self::Mailer {
            operation,
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Returns true for "no such record" errors, as opposed to failures of the
    /// store itself.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            JourneyError::ParticipantNotFound { .. } | JourneyError::TripNotFound { .. }
        )
    }

    /// Returns true for errors caused by client input rather than by the
    /// service or its collaborators.
    pub fn is_client_error(&self) -> bool {
        self.is_not_found()
            || matches!(
                self,
                JourneyError::InvalidIdentifier { .. } | JourneyError::InvalidInput { .. }
            )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| JourneyError::database(message).with_source(e))
    }
}

/// Parses a canonical UUID, mapping failures to [`JourneyError::InvalidIdentifier`].
pub fn parse_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|source| JourneyError::InvalidIdentifier {
        value: value.to_string(),
        source,
    })
}

/// Result type alias for journey operations
pub type Result<T> = std::result::Result<T, JourneyError>;
