use thiserror::Error;

/// Errors surfaced by message operations.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("message not found")]
    NotFound,

    #[error("invalid message text: {0}")]
    InvalidText(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in chatterbox-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

impl From<RepositoryError> for MessageError {
    fn from(e: RepositoryError) -> Self {
        MessageError::Storage(e.to_string())
    }
}

/// Errors from a bot's outbound post to the message API.
#[derive(Debug, Error)]
pub enum BotCallError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_error_display() {
        let err = MessageError::InvalidText("text must not be empty".to_string());
        assert_eq!(err.to_string(), "invalid message text: text must not be empty");
    }

    #[test]
    fn test_repository_error_maps_to_storage() {
        let err: MessageError = RepositoryError::Query("syntax error".to_string()).into();
        assert!(matches!(err, MessageError::Storage(_)));
        assert!(err.to_string().contains("syntax error"));
    }

    #[test]
    fn test_bot_call_error_display() {
        let err = BotCallError::Status(503);
        assert_eq!(err.to_string(), "unexpected status 503");
    }
}
