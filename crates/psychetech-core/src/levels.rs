use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity band a completed assessment falls into.
///
/// Ordered from least to most severe so the recommendation ladder can
/// compare ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityLevel {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl SeverityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SeverityLevel::Minimal => "minimal",
            SeverityLevel::Mild => "mild",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::ModeratelySevere => "moderately severe",
            SeverityLevel::Severe => "severe",
        }
    }
}

/// Risk level of a conversation, derived from its peak message score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Peak score at or above which a conversation is high risk.
    pub const HIGH_THRESHOLD: u8 = 7;
    /// Peak score at or above which a conversation is medium risk.
    pub const MEDIUM_THRESHOLD: u8 = 4;

    /// Classify a peak score. Applied to the running peak, never to the
    /// instantaneous message score, so the level never moves backwards
    /// within a conversation.
    pub fn from_peak(peak: u8) -> Self {
        if peak >= Self::HIGH_THRESHOLD {
            RiskLevel::High
        } else if peak >= Self::MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}
