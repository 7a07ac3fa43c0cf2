//! Loopback HTTP client the bots use to post replies.
//!
//! Bots are ordinary clients of the board: they call `POST /api/messages`
//! against the service's own listening address rather than invoking the
//! service in-process. A 10-second request timeout bounds worst-case
//! behavior; there is no retry -- a failed post is the caller's to log.

use chatterbox_core::bot::worker::MessagePoster;
use chatterbox_types::error::BotCallError;
use chatterbox_types::message::{CreateMessageRequest, Message};

/// Request timeout for bot posts.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// reqwest-backed implementation of `MessagePoster`.
pub struct HttpMessagePoster {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMessagePoster {
    /// Create a poster targeting `{base_url}/api/messages`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, BotCallError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BotCallError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl MessagePoster for HttpMessagePoster {
    async fn post_message(&self, text: &str) -> Result<Message, BotCallError> {
        let response = self
            .client
            .post(format!("{}/api/messages", self.base_url))
            .json(&CreateMessageRequest {
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| BotCallError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotCallError::Status(status.as_u16()));
        }

        response
            .json::<Message>()
            .await
            .map_err(|e| BotCallError::Request(e.to_string()))
    }
}
