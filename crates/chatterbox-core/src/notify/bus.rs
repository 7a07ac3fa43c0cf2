//! Per-bot fan-out bus with bounded, non-blocking lanes.
//!
//! Each bot kind owns one bounded `mpsc` lane. `publish` fans a created
//! message out to every lane with `try_send` and never blocks: a lane at
//! capacity drops the incoming message for that lane only, so under burst
//! load bots see gaps rather than clients seeing latency. Delivery is
//! at-most-once and best-effort; within a lane, order equals publish order.

use std::sync::atomic::{AtomicU64, Ordering};

use chatterbox_types::bot::BotKind;
use chatterbox_types::message::Message;
use tokio::sync::mpsc;
use tracing::debug;

/// Default lane capacity. Fixed at lane-open time, never resized.
pub const DEFAULT_LANE_CAPACITY: usize = 100;

struct Lane {
    kind: BotKind,
    tx: mpsc::Sender<Message>,
    dropped: AtomicU64,
}

/// Fan-out bus delivering created messages to every open lane.
///
/// Lanes are opened once at startup and live for the process lifetime.
/// Publishing is fire-and-forget; lanes are fully independent, so a full
/// lane for one bot never delays or drops delivery to another.
pub struct NotificationBus {
    lanes: Vec<Lane>,
}

impl NotificationBus {
    /// Create a bus with no lanes.
    pub fn new() -> Self {
        Self { lanes: Vec::new() }
    }

    /// Open a bounded lane for a bot kind and return its receiver.
    ///
    /// The returned `mpsc::Receiver` is the bot's only view of the lane;
    /// the worker suspends on `recv()` until a message arrives.
    pub fn open_lane(&mut self, kind: BotKind, capacity: usize) -> mpsc::Receiver<Message> {
        let (tx, rx) = mpsc::channel(capacity);
        self.lanes.push(Lane {
            kind,
            tx,
            dropped: AtomicU64::new(0),
        });
        debug!(bot = %kind, capacity, "opened notification lane");
        rx
    }

    /// Publish a message to every lane, without blocking.
    ///
    /// A full lane drops the incoming message for that lane only and bumps
    /// its drop counter. A closed lane (worker gone) is treated the same
    /// way. The caller never observes a failure.
    pub fn publish(&self, msg: &Message) {
        for lane in &self.lanes {
            match lane.tx.try_send(msg.clone()) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    lane.dropped.fetch_add(1, Ordering::Relaxed);
                    debug!(bot = %lane.kind, message_id = msg.id, "lane full, dropping event");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    lane.dropped.fetch_add(1, Ordering::Relaxed);
                    debug!(bot = %lane.kind, message_id = msg.id, "lane closed, dropping event");
                }
            }
        }
    }

    /// Number of events dropped so far for a bot's lane.
    pub fn dropped(&self, kind: BotKind) -> u64 {
        self.lanes
            .iter()
            .find(|l| l.kind == kind)
            .map(|l| l.dropped.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Number of open lanes.
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBus")
            .field("lanes", &self.lanes.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
