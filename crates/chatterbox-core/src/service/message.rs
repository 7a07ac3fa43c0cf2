//! Message CRUD service.
//!
//! Thin orchestration over the repository: validates input, delegates to
//! the store, and on successful creation only, publishes the new message to
//! the notification bus before returning. Publish is fire-and-forget; its
//! outcome never affects the result the caller sees, and nothing rolls back
//! the store write. Read/update/delete never publish.

use std::sync::Arc;

use chatterbox_types::error::MessageError;
use chatterbox_types::message::{
    CreateMessageRequest, MAX_TEXT_BYTES, Message, UpdateMessageRequest,
};

use crate::notify::NotificationBus;
use crate::repository::message::MessageRepository;

/// Service orchestrating message CRUD and creation fan-out.
///
/// Generic over the repository trait to keep chatterbox-core free of any
/// database dependency.
pub struct MessageService<R: MessageRepository> {
    repo: R,
    bus: Arc<NotificationBus>,
}

impl<R: MessageRepository> MessageService<R> {
    pub fn new(repo: R, bus: Arc<NotificationBus>) -> Self {
        Self { repo, bus }
    }

    /// Create a message and fan it out to the bot lanes.
    pub async fn create(&self, request: CreateMessageRequest) -> Result<Message, MessageError> {
        validate_text(&request.text)?;
        let message = self.repo.insert(&request.text).await?;
        self.bus.publish(&message);
        Ok(message)
    }

    /// Fetch a message by id.
    pub async fn get(&self, id: i64) -> Result<Message, MessageError> {
        self.repo.get(id).await?.ok_or(MessageError::NotFound)
    }

    /// List all messages in ascending id order.
    pub async fn list(&self) -> Result<Vec<Message>, MessageError> {
        Ok(self.repo.list().await?)
    }

    /// Replace a message's text.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateMessageRequest,
    ) -> Result<Message, MessageError> {
        validate_text(&request.text)?;
        self.repo
            .update(id, &request.text)
            .await?
            .ok_or(MessageError::NotFound)
    }

    /// Permanently delete a message.
    pub async fn delete(&self, id: i64) -> Result<(), MessageError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(MessageError::NotFound)
        }
    }
}

fn validate_text(text: &str) -> Result<(), MessageError> {
    if text.trim().is_empty() {
        return Err(MessageError::InvalidText(
            "text must not be empty".to_string(),
        ));
    }
    if text.len() > MAX_TEXT_BYTES {
        return Err(MessageError::InvalidText(format!(
            "text exceeds {MAX_TEXT_BYTES} bytes"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chatterbox_types::bot::BotKind;
    use chatterbox_types::error::RepositoryError;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory repository for service tests.
    #[derive(Default)]
    struct MemoryRepository {
        rows: Mutex<Vec<Message>>,
        next_id: Mutex<i64>,
    }

    impl MessageRepository for MemoryRepository {
        async fn insert(&self, text: &str) -> Result<Message, RepositoryError> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let now = Utc::now();
            let msg = Message {
                id: *next_id,
                text: text.to_string(),
                created_at: now,
                updated_at: now,
            };
            self.rows.lock().unwrap().push(msg.clone());
            Ok(msg)
        }

        async fn get(&self, id: i64) -> Result<Option<Message>, RepositoryError> {
            Ok(self.rows.lock().unwrap().iter().find(|m| m.id == id).cloned())
        }

        async fn list(&self) -> Result<Vec<Message>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn update(&self, id: i64, text: &str) -> Result<Option<Message>, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|m| m.id == id) {
                Some(row) => {
                    row.text = text.to_string();
                    row.updated_at = Utc::now();
                    Ok(Some(row.clone()))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|m| m.id != id);
            Ok(rows.len() != before)
        }
    }

    fn service_with_lane() -> (
        MessageService<MemoryRepository>,
        tokio::sync::mpsc::Receiver<Message>,
    ) {
        let mut bus = NotificationBus::new();
        let rx = bus.open_lane(BotKind::Echo, 8);
        let service = MessageService::new(MemoryRepository::default(), Arc::new(bus));
        (service, rx)
    }

    fn create_req(text: &str) -> CreateMessageRequest {
        CreateMessageRequest {
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_roundtrip() {
        let (service, _rx) = service_with_lane();

        let created = service.create(create_req("hello")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.text, "hello");

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_publishes_to_lane() {
        let (service, mut rx) = service_with_lane();

        let created = service.create(create_req("hello")).await.unwrap();
        let published = rx.try_recv().unwrap();
        assert_eq!(published, created);
    }

    #[tokio::test]
    async fn read_update_delete_never_publish() {
        let (service, mut rx) = service_with_lane();

        let created = service.create(create_req("hello")).await.unwrap();
        let _ = rx.try_recv().unwrap();

        service.get(created.id).await.unwrap();
        service.list().await.unwrap();
        service
            .update(created.id, UpdateMessageRequest { text: "edited".to_string() })
            .await
            .unwrap();
        service.delete(created.id).await.unwrap();

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn empty_text_rejected_on_create_and_update() {
        let (service, _rx) = service_with_lane();

        let err = service.create(create_req("   ")).await.unwrap_err();
        assert!(matches!(err, MessageError::InvalidText(_)));

        let created = service.create(create_req("ok")).await.unwrap();
        let err = service
            .update(created.id, UpdateMessageRequest { text: "".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, MessageError::InvalidText(_)));
    }

    #[tokio::test]
    async fn oversized_text_rejected() {
        let (service, _rx) = service_with_lane();
        let err = service
            .create(create_req(&"x".repeat(MAX_TEXT_BYTES + 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, MessageError::InvalidText(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (service, _rx) = service_with_lane();
        let created = service.create(create_req("bye")).await.unwrap();

        service.delete(created.id).await.unwrap();
        let err = service.get(created.id).await.unwrap_err();
        assert!(matches!(err, MessageError::NotFound));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_everywhere() {
        let (service, _rx) = service_with_lane();

        assert!(matches!(service.get(42).await, Err(MessageError::NotFound)));
        assert!(matches!(
            service
                .update(42, UpdateMessageRequest { text: "x".to_string() })
                .await,
            Err(MessageError::NotFound)
        ));
        assert!(matches!(service.delete(42).await, Err(MessageError::NotFound)));
    }

    #[tokio::test]
    async fn update_changes_text_and_keeps_id() {
        let (service, _rx) = service_with_lane();
        let created = service.create(create_req("before")).await.unwrap();

        let updated = service
            .update(created.id, UpdateMessageRequest { text: "after".to_string() })
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.text, "after");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn full_lane_never_fails_create() {
        let mut bus = NotificationBus::new();
        let _rx = bus.open_lane(BotKind::Echo, 1);
        let service = MessageService::new(MemoryRepository::default(), Arc::new(bus));

        for i in 0..10 {
            service.create(create_req(&format!("m{i}"))).await.unwrap();
        }
        assert_eq!(service.list().await.unwrap().len(), 10);
    }
}
