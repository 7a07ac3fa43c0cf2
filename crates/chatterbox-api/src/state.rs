//! Application state wiring the service to its concrete adapters.
//!
//! The service layer is generic over the repository trait; AppState pins it
//! to the SQLite implementation from `chatterbox-infra`.

use std::sync::Arc;

use chatterbox_core::notify::NotificationBus;
use chatterbox_core::service::MessageService;
use chatterbox_infra::sqlite::message::SqliteMessageRepository;
use chatterbox_infra::sqlite::pool::DatabasePool;

/// Concrete service type pinned to the SQLite repository.
pub type ConcreteMessageService = MessageService<SqliteMessageRepository>;

/// Shared application state used by the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub message_service: Arc<ConcreteMessageService>,
}

impl AppState {
    /// Connect to the database and wire the message service.
    ///
    /// The bus is built by the caller: its lanes must be opened (and their
    /// receivers handed to the workers) before the state exists.
    pub async fn init(database_url: &str, bus: Arc<NotificationBus>) -> anyhow::Result<Self> {
        let pool = DatabasePool::new(database_url).await?;
        let repo = SqliteMessageRepository::new(pool);

        Ok(Self {
            message_service: Arc::new(MessageService::new(repo, bus)),
        })
    }
}
