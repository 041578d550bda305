//! Assembles a [`SqliteStore`] from service settings.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;

use super::SqliteStore;
use crate::{
    config::ServiceConfig,
    confirmation::DEFAULT_STORE_TIMEOUT,
    error::{JourneyError, Result},
};

const XDG_PREFIX: &str = "journey";
const DATABASE_FILE: &str = "journey.db";

/// Resolves where the journey database lives and how long each store call may
/// take, then prepares the file and schema.
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
    call_timeout: Duration,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self {
            database_path: None,
            call_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the database path and store timeout of a service
    /// configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new()
            .with_database_path(config.database_path.as_ref())
            .with_store_timeout(config.store_timeout)
    }

    /// Uses `path` instead of `$XDG_DATA_HOME/journey/journey.db`. `None`
    /// keeps the current choice.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Upper bound for every call the built store makes, schema setup
    /// included.
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Creates the database directory, applies the schema and returns the
    /// store.
    ///
    /// # Errors
    ///
    /// * `JourneyError::XdgDirectory` if no default location can be derived
    /// * `JourneyError::FileSystem` if the directory cannot be created
    /// * `JourneyError::Database` or `JourneyError::Timeout` if the schema
    ///   cannot be applied
    pub async fn build(self) -> Result<SqliteStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => xdg::BaseDirectories::with_prefix(XDG_PREFIX)
                .place_data_file(DATABASE_FILE)
                .map_err(|e| JourneyError::XdgDirectory(e.to_string()))?,
        };

        if let Some(dir) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| JourneyError::FileSystem {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let store = SqliteStore::new(db_path, self.call_timeout);
        store.initialize().await?;
        debug!(
            "journey store ready at {} (call timeout {:?})",
            store.database_path().display(),
            self.call_timeout
        );
        Ok(store)
    }
}
