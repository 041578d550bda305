//! Trip model definition.

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum number of characters in a trip destination.
pub const MIN_DESTINATION_LEN: usize = 4;

/// A planned journey. Owns its participants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: Uuid,

    /// Where the trip goes (at least [`MIN_DESTINATION_LEN`] characters)
    pub destination: String,

    /// Display name of the person who created the trip
    pub owner_name: String,

    /// E-mail address of the trip owner
    pub owner_email: String,

    /// When the trip starts (UTC)
    pub starts_at: Timestamp,
}

impl Trip {
    /// Calendar date the trip starts on, in UTC.
    pub fn start_date(&self) -> Date {
        self.starts_at.to_zoned(TimeZone::UTC).date()
    }
}
