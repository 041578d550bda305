use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use journey_core::{Messages, ServiceConfig, SmtpConfig};

/// HTTP backend for the Journey trip planner
///
/// Serves the trip and participant API, stores data in SQLite, and sends the
/// trip confirmation e-mail through an SMTP relay (a local Mailpit by
/// default). Every flag can also be set through its JOURNEY_* environment
/// variable.
#[derive(Parser)]
#[command(version, about, name = "journey")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/journey/journey.db
    #[arg(long, env = "JOURNEY_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Socket address to listen on
    #[arg(long, env = "JOURNEY_LISTEN", default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// SMTP relay host
    #[arg(long, env = "JOURNEY_SMTP_HOST", default_value = "localhost")]
    pub smtp_host: String,

    /// SMTP relay port
    #[arg(long, env = "JOURNEY_SMTP_PORT", default_value_t = 1025)]
    pub smtp_port: u16,

    /// Sender address of outgoing e-mail
    #[arg(long, env = "JOURNEY_MAIL_FROM", default_value = "mailpit@journey.com")]
    pub mail_from: String,

    /// SMTP connection timeout in seconds
    #[arg(long, env = "JOURNEY_SMTP_TIMEOUT_SECS", default_value_t = 10)]
    pub smtp_timeout_secs: u64,

    /// Upper bound for a single database call, in milliseconds
    #[arg(long, env = "JOURNEY_STORE_TIMEOUT_MS", default_value_t = 5000)]
    pub store_timeout_ms: u64,

    /// TOML file overriding the client-facing response messages
    #[arg(long, env = "JOURNEY_MESSAGES_FILE")]
    pub messages_file: Option<PathBuf>,
}

impl Args {
    /// Resolves the service configuration, loading the messages file if one
    /// was given.
    pub fn service_config(&self) -> Result<ServiceConfig> {
        let messages = match &self.messages_file {
            Some(path) => Messages::from_toml_file(path)
                .with_context(|| format!("Failed to load messages from {}", path.display()))?,
            None => Messages::default(),
        };

        Ok(ServiceConfig {
            database_path: self.database_file.clone(),
            smtp: SmtpConfig {
                host: self.smtp_host.clone(),
                port: self.smtp_port,
                from: self.mail_from.clone(),
                timeout: Duration::from_secs(self.smtp_timeout_secs),
            },
            store_timeout: Duration::from_millis(self.store_timeout_ms),
            messages,
        })
    }
}
