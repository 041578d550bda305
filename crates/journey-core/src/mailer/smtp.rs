//! SMTP delivery through lettre.

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::{MailTransport, OutgoingMail};
use crate::error::{JourneyError, Result};

/// Connection settings for the outbound SMTP relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Sender address used for every message
    pub from: String,
    /// Per-connection timeout
    pub timeout: Duration,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        // local Mailpit instance
        Self {
            host: "localhost".to_string(),
            port: 1025,
            from: "mailpit@journey.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Plain (unencrypted) SMTP transport.
pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    /// Builds a transport for the configured relay. No connection is opened
    /// until the first send.
    pub fn new(config: &SmtpConfig) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .timeout(Some(config.timeout))
            .build();
        Self { transport }
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, mail: &OutgoingMail) -> Result<()> {
        let from: Mailbox = mail
            .from
            .parse()
            .map_err(|e| JourneyError::transport(format!("invalid sender '{}'", mail.from), e))?;
        let to: Mailbox = mail
            .to
            .parse()
            .map_err(|e| JourneyError::transport(format!("invalid recipient '{}'", mail.to), e))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())
            .map_err(|e| JourneyError::transport("failed to build message", e))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| JourneyError::transport("failed to deliver message", e))?;

        Ok(())
    }
}
