use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// A structured event recording a hand-off disclosure.
///
/// Emitted via `tracing` exactly once per conversation, at the moment the
/// peak score first crosses the high-risk threshold.
#[derive(Debug, Clone, Serialize)]
pub struct HandoffEvent {
    pub conversation_id: Uuid,
    pub peak_score: u8,
}

impl HandoffEvent {
    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            handoff.conversation_id = %self.conversation_id,
            handoff.peak_score = self.peak_score,
            "high-risk hand-off disclosed"
        );
    }
}
