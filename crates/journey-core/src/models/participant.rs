//! Participant model definition.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person invited to a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Unique identifier for the participant
    pub id: Uuid,

    /// ID of the trip this participant was invited to
    pub trip_id: Uuid,

    /// Address the invitation was sent to
    pub email: String,

    /// Whether the invitation has been accepted. Only ever moves from false to
    /// true.
    pub is_confirmed: bool,
}
