//! Parameter structures for journey operations.
//!
//! These structures are shared by every interface that drives the core. They
//! carry no HTTP framework types; the server deserializes request bodies into
//! them directly and calls [`CreateTrip::validate`] or
//! [`InviteParticipant::validate`] before touching the store.

use jiff::Timestamp;
use lettre::Address;
use serde::{Deserialize, Serialize};

use crate::{
    error::{JourneyError, Result},
    models::trip::MIN_DESTINATION_LEN,
};

/// Parameters for creating a new trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrip {
    /// Where the trip goes
    pub destination: String,
    /// Display name of the trip owner
    pub owner_name: String,
    /// E-mail address the confirmation message is sent to
    pub owner_email: String,
    /// When the trip starts (RFC 3339)
    pub starts_at: Timestamp,
    /// Addresses to invite as unconfirmed participants
    #[serde(default)]
    pub emails_to_invite: Vec<String>,
}

impl CreateTrip {
    /// Validate trip creation parameters.
    ///
    /// # Errors
    ///
    /// * `JourneyError::InvalidInput` on field `destination` when it is shorter
    ///   than four characters
    /// * `JourneyError::InvalidInput` when the owner name is blank or any
    ///   address is not a valid e-mail
    ///
    /// # Examples
    ///
    /// ```rust
    /// use journey_core::params::CreateTrip;
    ///
    /// let params = CreateTrip {
    ///     destination: "Rio".to_string(),
    ///     owner_name: "Ana".to_string(),
    ///     owner_email: "ana@example.com".to_string(),
    ///     starts_at: "2024-05-01T09:00:00Z".parse().unwrap(),
    ///     emails_to_invite: vec![],
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.destination.trim().chars().count() < MIN_DESTINATION_LEN {
            return Err(JourneyError::invalid_input("destination").with_reason(format!(
                "must be at least {MIN_DESTINATION_LEN} characters long"
            )));
        }
        if self.owner_name.trim().is_empty() {
            return Err(JourneyError::invalid_input("ownerName").with_reason("must not be empty"));
        }
        validate_email("ownerEmail", &self.owner_email)?;
        for email in &self.emails_to_invite {
            validate_email("emailsToInvite", email)?;
        }
        Ok(())
    }
}

/// Parameters for inviting someone to an existing trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteParticipant {
    /// Address of the invitee
    pub email: String,
}

impl InviteParticipant {
    /// Validate the invitee address.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::InvalidInput` if `email` is not a valid address.
    pub fn validate(&self) -> Result<()> {
        validate_email("email", &self.email)
    }
}

fn validate_email(field: &str, value: &str) -> Result<()> {
    value
        .parse::<Address>()
        .map(|_| ())
        .map_err(|e| JourneyError::invalid_input(field).with_reason(format!("'{value}' {e}")))
}
