//! User-facing response messages.
//!
//! Outcome enums and errors carry no client text. The HTTP layer looks up the
//! text here, so a deployment can ship its own wording (or language) through a
//! TOML file without touching the code:
//!
//! ```toml
//! participant_not_found = "participante não encontrado"
//! participant_already_confirmed = "participante já confirmado"
//! ```
//!
//! Keys missing from the file keep their English defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{JourneyError, Result},
    models::ConfirmationOutcome,
};

/// Client-visible message strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Messages {
    pub invalid_identifier: String,
    pub participant_not_found: String,
    pub participant_already_confirmed: String,
    pub trip_not_found: String,
    pub invalid_body: String,
    pub destination_too_short: String,
    pub try_again: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_identifier: "invalid identifier".to_string(),
            participant_not_found: "participant not found".to_string(),
            participant_already_confirmed: "participant already confirmed".to_string(),
            trip_not_found: "trip not found".to_string(),
            invalid_body: "invalid request body or JSON".to_string(),
            destination_too_short: "destination must be at least 4 characters long".to_string(),
            try_again: "something went wrong, try again".to_string(),
        }
    }
}

impl Messages {
    /// Parses messages from TOML text. Absent keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Loads messages from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::FileSystem` if the file cannot be read and
    /// `JourneyError::MessagesFile` if it is not valid TOML for this shape.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| JourneyError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&contents).map_err(|e| JourneyError::MessagesFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Message reported to the client for a confirmation outcome. `Success`
    /// has no body.
    pub fn for_outcome(&self, outcome: ConfirmationOutcome) -> Option<&str> {
        match outcome {
            ConfirmationOutcome::Success => None,
            ConfirmationOutcome::InvalidIdentifier => Some(&self.invalid_identifier),
            ConfirmationOutcome::NotFound => Some(&self.participant_not_found),
            ConfirmationOutcome::AlreadyConfirmed => Some(&self.participant_already_confirmed),
            ConfirmationOutcome::PersistenceFailure => Some(&self.try_again),
        }
    }

    /// Message reported to the client for an error raised by a trip or invite
    /// operation. Internal failures collapse to the generic retry text.
    pub fn for_error(&self, error: &JourneyError) -> String {
        match error {
            JourneyError::InvalidIdentifier { .. } => self.invalid_identifier.clone(),
            JourneyError::TripNotFound { .. } => self.trip_not_found.clone(),
            JourneyError::ParticipantNotFound { .. } => self.participant_not_found.clone(),
            JourneyError::InvalidInput { field, .. } if field == "destination" => {
                self.destination_too_short.clone()
            }
            JourneyError::InvalidInput { field, reason } => format!("{field}: {reason}"),
            _ => self.try_again.clone(),
        }
    }
}
