//! Shared handler state.

use std::sync::Arc;

use journey_core::{
    ConfirmationService, MailTransport, Mailer, Messages, Result, ServiceConfig, SmtpMailTransport,
    SqliteStore, StoreBuilder,
};

/// Services shared by every request. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub store: SqliteStore,
    pub confirmations: ConfirmationService,
    pub mailer: Mailer,
    pub messages: Arc<Messages>,
}

impl AppState {
    /// Opens the database and wires the services against a real SMTP relay.
    ///
    /// # Errors
    ///
    /// Returns the store initialization error.
    pub async fn bootstrap(config: ServiceConfig) -> Result<Self> {
        let store = StoreBuilder::from_config(&config).build().await?;
        let transport = Arc::new(SmtpMailTransport::new(&config.smtp));
        Ok(Self::with_transport(store, transport, config))
    }

    /// Wires the services against an existing store and mail transport. The
    /// store keeps the timeout it was built with.
    pub fn with_transport(
        store: SqliteStore,
        transport: Arc<dyn MailTransport>,
        config: ServiceConfig,
    ) -> Self {
        let shared = Arc::new(store.clone());

        let confirmations = ConfirmationService::new(shared.clone())
            .with_store_timeout(config.store_timeout);
        let mailer = Mailer::new(shared, transport, config.smtp.from)
            .with_store_timeout(config.store_timeout);

        Self {
            store,
            confirmations,
            mailer,
            messages: Arc::new(config.messages),
        }
    }
}
