//! Cancellable deferred bot replies.
//!
//! The simulated reply latency is cosmetic, not a correctness boundary.
//! A pending reply belongs to its conversation, never an ambient timer:
//! tearing the conversation down, or sending another message before the
//! delay elapses, discards it and replies never stack.

use jiff::{Span, Timestamp};
use rand::Rng;

const BASE_DELAY_MS: i64 = 1000;
const JITTER_MS: i64 = 1000;

/// Produces reply delays of 1000–2000 ms from an injected random source,
/// so tests can seed the jitter.
pub struct ReplyTiming<R: Rng> {
    rng: R,
}

impl<R: Rng> ReplyTiming<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn delay(&mut self) -> Span {
        let jitter = self.rng.random_range(0..=JITTER_MS);
        Span::new().milliseconds(BASE_DELAY_MS + jitter)
    }
}

/// A scripted bot reply, with the optional high-risk encouragement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotReply {
    pub body: &'static str,
    pub follow_up: Option<&'static str>,
}

/// A reply scheduled but not yet delivered.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingReply {
    pub due_at: Timestamp,
    pub reply: BotReply,
}
