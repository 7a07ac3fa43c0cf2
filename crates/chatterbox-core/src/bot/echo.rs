//! Echo bot: deterministic templated reply.

use chatterbox_types::message::Message;

use super::{Responder, is_bot_marked};

/// Replies to every client-originated message with a templated echo.
///
/// Messages already carrying a bot marker are ignored so the bot never
/// replies to its own (or the gacha bot's) output.
#[derive(Debug, Default)]
pub struct EchoResponder;

impl EchoResponder {
    pub fn new() -> Self {
        Self
    }
}

impl Responder for EchoResponder {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn respond(&mut self, msg: &Message) -> Option<String> {
        if is_bot_marked(&msg.text) {
            return None;
        }
        Some(format!("[echo] {}", msg.text))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn message_with(text: &str) -> Message {
        Message {
            id: 1,
            text: text.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn echoes_client_message() {
        let mut bot = EchoResponder::new();
        let reply = bot.respond(&message_with("hello")).unwrap();
        assert_eq!(reply, "[echo] hello");
    }

    #[test]
    fn echo_is_deterministic() {
        let mut bot = EchoResponder::new();
        let a = bot.respond(&message_with("same input"));
        let b = bot.respond(&message_with("same input"));
        assert_eq!(a, b);
    }

    #[test]
    fn ignores_bot_output() {
        let mut bot = EchoResponder::new();
        assert!(bot.respond(&message_with("[echo] hello")).is_none());
        assert!(bot.respond(&message_with("[gacha] you drew R")).is_none());
    }
}
