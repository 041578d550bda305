//! Outbound notification e-mail.
//!
//! The [`Mailer`] renders the one message this service sends, the trip
//! confirmation request to the trip owner, and hands it to a
//! [`MailTransport`]. [`SmtpMailTransport`] delivers over plain SMTP; tests
//! substitute a recording transport.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::{JourneyError, Result},
    models::Trip,
    store::TripStore,
};

pub mod smtp;


pub use smtp::{SmtpConfig, SmtpMailTransport};

/// Subject line of the trip confirmation e-mail.
pub const CONFIRM_TRIP_SUBJECT: &str = "Confirm your trip";

const SEND_CONFIRM_TRIP_EMAIL: &str = "send_confirm_trip_email_to_owner";

/// A rendered plain-text message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivers rendered messages.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Sends one message. Implementations do not retry.
    async fn send(&self, mail: &OutgoingMail) -> Result<()>;
}

/// Composes and dispatches notification e-mails.
#[derive(Clone)]
pub struct Mailer {
    store: Arc<dyn TripStore>,
    transport: Arc<dyn MailTransport>,
    from: String,
    store_timeout: Duration,
}

impl Mailer {
    /// Creates a mailer that sends from `from` through `transport`.
    pub fn new(
        store: Arc<dyn TripStore>,
        transport: Arc<dyn MailTransport>,
        from: impl Into<String>,
    ) -> Self {
        Self {
            store,
            transport,
            from: from.into(),
            store_timeout: crate::confirmation::DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Overrides the upper bound for the trip lookup.
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Asks the trip owner to confirm the trip.
    ///
    /// Sends exactly one e-mail per call; callers must invoke it once per
    /// trip-confirmation event.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::Mailer` wrapping the trip lookup failure
    /// (including `TripNotFound`) or the transport failure.
    pub async fn send_confirm_trip_email_to_owner(&self, trip_id: Uuid) -> Result<()> {
        let trip = tokio::time::timeout(self.store_timeout, self.store.get_trip(trip_id))
            .await
            .map_err(|_| JourneyError::Timeout {
                operation: "get_trip",
            })
            .and_then(|found| found)
            .map_err(|e| JourneyError::mailer(SEND_CONFIRM_TRIP_EMAIL, "failed to get trip", e))?;

        let mail = self.render_confirm_trip(&trip);

        self.transport
            .send(&mail)
            .await
            .map_err(|e| JourneyError::mailer(SEND_CONFIRM_TRIP_EMAIL, "failed to send email", e))
    }

    fn render_confirm_trip(&self, trip: &Trip) -> OutgoingMail {
        let body = format!(
            "Hello, {owner}!\n\n\
             Your trip to {destination}, starting on {date}, needs to be confirmed.\n\
             Use the link below to confirm it.\n",
            owner = trip.owner_name,
            destination = trip.destination,
            date = trip.start_date(),
        );

        OutgoingMail {
            from: self.from.clone(),
            to: trip.owner_email.clone(),
            subject: CONFIRM_TRIP_SUBJECT.to_string(),
            body,
        }
    }
}
