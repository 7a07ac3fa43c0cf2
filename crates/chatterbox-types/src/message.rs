//! Message domain types for Chatterbox.
//!
//! A `Message` is the single persisted entity of the board: a text payload
//! with store-assigned id and timestamps. Bots consume created messages and
//! post new ones through the same API as external clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted message text length, in bytes.
pub const MAX_TEXT_BYTES: usize = 4096;

/// A single board message.
///
/// The id is assigned by the store on insert and is monotonically
/// increasing; it never changes afterwards. `updated_at` is refreshed on
/// every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Store-assigned monotonic id.
    pub id: i64,
    /// UTF-8 text payload.
    pub text: String,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
    /// When the message was last mutated.
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /api/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub text: String,
}

/// Request body for `PUT /api/messages/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMessageRequest {
    pub text: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> Message {
        Message {
            id: 1,
            text: "hello".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_message_json_roundtrip() {
        let msg = sample_message();
        let json_str = serde_json::to_string(&msg).unwrap();

        assert!(json_str.contains("\"id\":1"));
        assert!(json_str.contains("\"text\":\"hello\""));
        assert!(json_str.contains("created_at"));
        assert!(json_str.contains("updated_at"));

        let parsed: Message = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_create_request_deserializes_from_plain_body() {
        let req: CreateMessageRequest = serde_json::from_str(r#"{"text":"hi there"}"#).unwrap();
        assert_eq!(req.text, "hi there");
    }

    #[test]
    fn test_update_request_deserializes_from_plain_body() {
        let req: UpdateMessageRequest = serde_json::from_str(r#"{"text":"edited"}"#).unwrap();
        assert_eq!(req.text, "edited");
    }
}
