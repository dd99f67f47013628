use jiff::Timestamp;
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use psychetech_core::levels::RiskLevel;

use crate::classifier::score_message;
use crate::deferred::{BotReply, PendingReply, ReplyTiming};
use crate::events::HandoffEvent;
use crate::responder::{HIGH_RISK_FOLLOW_UP, WELCOME, select_reply};

/// Sender of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sender {
    User,
    Assistant,
}

/// A single message in a conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// Risk score of the message text; always 0 for assistant messages.
    pub risk_score: u8,
    pub timestamp: Timestamp,
}

/// What one `append_user` call did to the conversation.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct MessageOutcome {
    /// Risk score of this message alone.
    pub risk_score: u8,
    /// Running peak across the conversation.
    pub peak_score: u8,
    /// Level derived from the peak.
    pub level: RiskLevel,
    /// True exactly once per conversation: the call on which the peak
    /// first reached the high-risk threshold.
    pub handoff_triggered: bool,
}

/// One chat session and its risk state.
///
/// The peak score is monotonically non-decreasing, so the derived level
/// only ever moves `Low → Medium → High` and `High` is terminal within a
/// session. Not persisted; torn down with the conversation view.
pub struct Conversation {
    id: Uuid,
    messages: Vec<ChatMessage>,
    peak_score: u8,
    level: RiskLevel,
    handoff_disclosed: bool,
    pending: Option<PendingReply>,
}

impl Conversation {
    /// Open a conversation, seeded with the assistant's greeting.
    pub fn open(now: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage {
                text: WELCOME.to_string(),
                sender: Sender::Assistant,
                risk_score: 0,
                timestamp: now,
            }],
            peak_score: 0,
            level: RiskLevel::Low,
            handoff_disclosed: false,
            pending: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn peak_score(&self) -> u8 {
        self.peak_score
    }

    pub fn level(&self) -> RiskLevel {
        self.level
    }

    pub fn has_pending_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Append a user message: score it, raise the peak, derive the level,
    /// and schedule the scripted reply. Any reply still pending from an
    /// earlier message is discarded, so replies never stack.
    ///
    /// `handoff_triggered` fires on the transition into `High` and never
    /// again within this conversation.
    pub fn append_user<R: Rng>(
        &mut self,
        text: &str,
        now: Timestamp,
        timing: &mut ReplyTiming<R>,
    ) -> MessageOutcome {
        let risk_score = score_message(text);
        self.messages.push(ChatMessage {
            text: text.to_string(),
            sender: Sender::User,
            risk_score,
            timestamp: now,
        });

        self.peak_score = self.peak_score.max(risk_score);
        self.level = RiskLevel::from_peak(self.peak_score);

        let handoff_triggered = self.level == RiskLevel::High && !self.handoff_disclosed;
        if handoff_triggered {
            self.handoff_disclosed = true;
            HandoffEvent {
                conversation_id: self.id,
                peak_score: self.peak_score,
            }
            .emit();
        }

        let reply = BotReply {
            body: select_reply(text),
            follow_up: (self.level == RiskLevel::High).then_some(HIGH_RISK_FOLLOW_UP),
        };
        self.pending = Some(PendingReply {
            due_at: now
                .saturating_add(timing.delay())
                .expect("reply delay is a millisecond span and cannot overflow the timestamp range"),
            reply,
        });

        MessageOutcome {
            risk_score,
            peak_score: self.peak_score,
            level: self.level,
            handoff_triggered,
        }
    }

    /// Deliver the pending reply if its delay has elapsed. The reply (and
    /// its follow-up line, when present) is appended to the transcript
    /// stamped with `now`. Returns `None` while the reply is still
    /// pending or nothing is scheduled.
    pub fn poll_reply(&mut self, now: Timestamp) -> Option<BotReply> {
        let pending = self.pending?;
        if now < pending.due_at {
            return None;
        }
        self.pending = None;

        self.messages.push(ChatMessage {
            text: pending.reply.body.to_string(),
            sender: Sender::Assistant,
            risk_score: 0,
            timestamp: now,
        });
        if let Some(follow_up) = pending.reply.follow_up {
            self.messages.push(ChatMessage {
                text: follow_up.to_string(),
                sender: Sender::Assistant,
                risk_score: 0,
                timestamp: now,
            });
        }
        Some(pending.reply)
    }

    /// Discard any undelivered reply, e.g. when the view is torn down.
    pub fn cancel_pending_reply(&mut self) {
        self.pending = None;
    }
}
