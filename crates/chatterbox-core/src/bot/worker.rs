//! Long-running bot worker loop.
//!
//! A worker owns one notification lane receiver, a [`Responder`], and a
//! [`MessagePoster`]. It suspends on `recv()` until an event arrives,
//! computes a response, and posts it back through the public API. Posting
//! failures are logged and the loop resumes; only cancellation or a closed
//! lane ends the loop.

use chatterbox_types::error::BotCallError;
use chatterbox_types::message::Message;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::Responder;

/// Outbound port for posting a bot's reply as a new board message.
///
/// The production implementation (chatterbox-infra) speaks loopback HTTP to
/// the running service, keeping bots ordinary clients of the same interface
/// external callers use.
pub trait MessagePoster: Send + Sync {
    /// Create a new message with the given text via `POST /api/messages`.
    fn post_message(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Message, BotCallError>> + Send;
}

/// A bot's consumer loop over its dedicated notification lane.
pub struct BotWorker<R: Responder, P: MessagePoster> {
    responder: R,
    poster: P,
    rx: mpsc::Receiver<Message>,
    cancel: CancellationToken,
}

impl<R: Responder, P: MessagePoster> BotWorker<R, P> {
    pub fn new(
        responder: R,
        poster: P,
        rx: mpsc::Receiver<Message>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            responder,
            poster,
            rx,
            cancel,
        }
    }

    /// Run until cancelled or the lane sender is dropped.
    pub async fn run(mut self) {
        let bot = self.responder.name();
        info!(bot, "bot worker started");
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!(bot, "bot worker cancelled");
                    break;
                }
                received = self.rx.recv() => match received {
                    Some(msg) => self.handle(msg).await,
                    None => {
                        info!(bot, "notification lane closed");
                        break;
                    }
                },
            }
        }
    }

    async fn handle(&mut self, msg: Message) {
        let bot = self.responder.name();
        let Some(reply) = self.responder.respond(&msg) else {
            debug!(bot, message_id = msg.id, "no response for message");
            return;
        };

        match self.poster.post_message(&reply).await {
            Ok(posted) => {
                debug!(bot, message_id = msg.id, reply_id = posted.id, "posted reply");
            }
            Err(err) => {
                // Never fatal: the event is lost, the loop continues.
                warn!(bot, message_id = msg.id, %err, "failed to post reply");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::echo::EchoResponder;
    use chrono::Utc;
    use std::sync::Arc;
    use std::sync::Mutex;

    fn sample_message(id: i64, text: &str) -> Message {
        Message {
            id,
            text: text.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Records posted texts; optionally fails every call.
    #[derive(Clone, Default)]
    struct RecordingPoster {
        posts: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl MessagePoster for RecordingPoster {
        async fn post_message(&self, text: &str) -> Result<Message, BotCallError> {
            if self.fail {
                return Err(BotCallError::Status(500));
            }
            self.posts.lock().unwrap().push(text.to_string());
            Ok(sample_message(99, text))
        }
    }

    #[tokio::test]
    async fn posts_responder_output() {
        let (tx, rx) = mpsc::channel(8);
        let poster = RecordingPoster::default();
        let posts = Arc::clone(&poster.posts);
        let cancel = CancellationToken::new();

        let worker = BotWorker::new(EchoResponder::new(), poster, rx, cancel.clone());
        let handle = tokio::spawn(worker.run());

        tx.send(sample_message(1, "hello")).await.unwrap();
        tx.send(sample_message(2, "[echo] hello")).await.unwrap();
        drop(tx);
        handle.await.unwrap();

        let recorded = posts.lock().unwrap();
        assert_eq!(recorded.as_slice(), ["[echo] hello"]);
    }

    #[tokio::test]
    async fn survives_poster_failure() {
        let (tx, rx) = mpsc::channel(8);
        let poster = RecordingPoster {
            fail: true,
            ..Default::default()
        };
        let cancel = CancellationToken::new();

        let worker = BotWorker::new(EchoResponder::new(), poster, rx, cancel.clone());
        let handle = tokio::spawn(worker.run());

        tx.send(sample_message(1, "first")).await.unwrap();
        tx.send(sample_message(2, "second")).await.unwrap();
        drop(tx);

        // The loop drains both events and exits on lane close, not on error.
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn stops_on_cancellation() {
        let (_tx, rx) = mpsc::channel::<Message>(8);
        let cancel = CancellationToken::new();

        let worker = BotWorker::new(EchoResponder::new(), RecordingPoster::default(), rx, cancel.clone());
        let handle = tokio::spawn(worker.run());

        cancel.cancel();
        handle.await.unwrap();
    }
}
