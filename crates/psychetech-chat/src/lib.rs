//! psychetech-chat
//!
//! The conversational risk classifier and scripted chat engine. Every
//! user utterance is scored against a weighted keyword lexicon; the
//! conversation tracks the running peak score and discloses hand-off
//! options once the high-risk threshold is first crossed. Reply
//! selection is a separate pure function; the scripted bot replies are
//! independent of the risk calculation.

pub mod classifier;
pub mod conversation;
pub mod deferred;
pub mod events;
pub mod lexicon;
pub mod responder;

pub use classifier::{MAX_RISK_SCORE, score_message};
pub use conversation::{ChatMessage, Conversation, MessageOutcome, Sender};
pub use deferred::{BotReply, ReplyTiming};
pub use responder::select_reply;
