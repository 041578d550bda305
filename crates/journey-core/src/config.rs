//! Runtime configuration shared by the services.

use std::{path::PathBuf, time::Duration};

use crate::{confirmation::DEFAULT_STORE_TIMEOUT, mailer::SmtpConfig, messages::Messages};

/// Everything needed to assemble the store, the confirmation service and the
/// mailer.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// SQLite database file; `None` selects the XDG data directory
    pub database_path: Option<PathBuf>,
    pub smtp: SmtpConfig,
    /// Upper bound for each store call made by the services
    pub store_timeout: Duration,
    pub messages: Messages,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            smtp: SmtpConfig::default(),
            store_timeout: DEFAULT_STORE_TIMEOUT,
            messages: Messages::default(),
        }
    }
}
