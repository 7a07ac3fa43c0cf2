//! Message repository trait definition.

use chatterbox_types::error::RepositoryError;
use chatterbox_types::message::Message;

/// Repository trait for message persistence.
///
/// Implementations live in chatterbox-infra (e.g., SqliteMessageRepository).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
/// The store is the sole owner of persisted state; every operation returns
/// messages by value.
pub trait MessageRepository: Send + Sync {
    /// Insert a new message with the given text. The store assigns the id
    /// and both timestamps. Returns the created message.
    fn insert(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Message, RepositoryError>> + Send;

    /// Fetch a message by id. `None` when the id does not exist.
    fn get(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Option<Message>, RepositoryError>> + Send;

    /// List all messages in ascending id order.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Replace a message's text and refresh `updated_at`. `None` when the
    /// id does not exist.
    fn update(
        &self,
        id: i64,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Option<Message>, RepositoryError>> + Send;

    /// Permanently delete a message. Returns `false` when the id does not
    /// exist.
    fn delete(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;
}
