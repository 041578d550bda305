//! Data models for trips and participants.
//!
//! This module contains the domain records owned by the store ([`Trip`],
//! [`Participant`]) and the transient [`ConfirmationOutcome`] produced by each
//! confirmation attempt.
//!
//! Records serialize with camelCase field names, which is the shape the HTTP
//! layer returns to clients.
//!
//! # Examples
//!
//! ```rust
//! use journey_core::models::{ConfirmationOutcome, Participant};
//! use uuid::Uuid;
//!
//! let participant = Participant {
//!     id: Uuid::new_v4(),
//!     trip_id: Uuid::new_v4(),
//!     email: "guest@example.com".to_string(),
//!     is_confirmed: false,
//! };
//! assert!(!participant.is_confirmed);
//! assert!(ConfirmationOutcome::PersistenceFailure.is_retryable());
//! ```

pub mod outcome;
pub mod participant;
pub mod trip;

#[cfg(test)]
mod tests;

pub use outcome::ConfirmationOutcome;
pub use participant::Participant;
pub use trip::Trip;
