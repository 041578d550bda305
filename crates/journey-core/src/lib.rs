//! Core library for the Journey trip planning service.
//!
//! This crate provides the business logic behind the HTTP server: trip and
//! participant records, their SQLite persistence, the participant
//! confirmation workflow, and the trip owner notification e-mail.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): `Trip`, `Participant` and the closed
//!   `ConfirmationOutcome` enumeration
//! - **Store** ([`store`], [`db`]): narrow async traits backed by SQLite
//! - **Confirmation** ([`confirmation`]): the participant confirmation
//!   workflow
//! - **Mailer** ([`mailer`]): renders and sends the trip confirmation e-mail
//! - **Messages** ([`messages`]): client-facing text kept apart from outcomes
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use journey_core::{ConfirmationOutcome, ConfirmationService, StoreBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = StoreBuilder::new()
//!     .with_database_path(Some("journey.db"))
//!     .build()
//!     .await?;
//!
//! let service = ConfirmationService::new(Arc::new(store));
//! let outcome = service
//!     .confirm_participant("0f8fad5b-d9cb-469f-a165-70867728950e")
//!     .await;
//! assert_eq!(outcome, ConfirmationOutcome::NotFound);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod confirmation;
pub mod db;
pub mod error;
pub mod mailer;
pub mod messages;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use confirmation::ConfirmationService;
pub use db::Database;
pub use error::{JourneyError, Result};
pub use mailer::{MailTransport, Mailer, OutgoingMail, SmtpConfig, SmtpMailTransport};
pub use messages::Messages;
pub use models::{ConfirmationOutcome, Participant, Trip};
pub use params::{CreateTrip, InviteParticipant};
pub use store::{ParticipantStore, SqliteStore, StoreBuilder, TripStore};
