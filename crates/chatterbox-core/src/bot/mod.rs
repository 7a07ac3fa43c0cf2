//! Bot workers: lane consumers that post derived messages back through the
//! public API.
//!
//! A bot is an ordinary client of the board. It consumes created-message
//! events from its notification lane, computes a response with a
//! [`Responder`], and posts the response over loopback HTTP via a
//! [`worker::MessagePoster`] -- the same interface external clients use.

pub mod echo;
pub mod gacha;
pub mod worker;

use chatterbox_types::message::Message;

/// Prefixes a bot stamps onto its own output.
///
/// Responders skip marked messages, which bounds bot-to-bot feedback to a
/// single hop: a bot reply is published like any other creation, but no
/// responder reacts to it a second time.
const BOT_MARKERS: [&str; 2] = ["[echo]", "[gacha]"];

/// Whether a text was produced by one of the bots.
pub(crate) fn is_bot_marked(text: &str) -> bool {
    BOT_MARKERS.iter().any(|m| text.trim_start().starts_with(m))
}

/// Computes a bot's reaction to a created message.
///
/// Returns `Some(reply_text)` to post a new message, or `None` to consume
/// the event silently. Takes `&mut self` so stateful responders (the gacha
/// RNG) need no interior mutability.
pub trait Responder: Send {
    /// Human-readable bot name for logs.
    fn name(&self) -> &'static str;

    /// Compute the reply text for a created message, if any.
    fn respond(&mut self, msg: &Message) -> Option<String>;
}
