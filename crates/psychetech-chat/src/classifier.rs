//! Per-message risk scoring.

use crate::lexicon::{
    HIGH_RISK, HIGH_WEIGHT, LOW_RISK, LOW_WEIGHT, MEDIUM_RISK, MEDIUM_WEIGHT,
};

/// Per-message scores are clamped here regardless of keyword hit count.
pub const MAX_RISK_SCORE: u8 = 10;

/// Score one utterance against the lexicon.
///
/// Case-insensitive substring presence: each distinct keyword counts once
/// per message no matter how often it repeats. The tiers are scanned
/// independently with no mutual exclusion, so a phrase matching keywords
/// in two tiers accrues both weights. Never fails; text with no keyword
/// hits (including the empty string) scores 0.
pub fn score_message(text: &str) -> u8 {
    let lowered = text.to_lowercase();
    let tiers: [(&[&str], u8); 3] = [
        (HIGH_RISK, HIGH_WEIGHT),
        (MEDIUM_RISK, MEDIUM_WEIGHT),
        (LOW_RISK, LOW_WEIGHT),
    ];

    let mut score = 0u32;
    for (keywords, weight) in tiers {
        let hits = keywords.iter().filter(|kw| lowered.contains(**kw)).count() as u32;
        score += hits * weight as u32;
    }
    score.min(MAX_RISK_SCORE as u32) as u8
}
