//! Scripted reply selection.
//!
//! A pure mapping from lower-cased input substrings to canned reply
//! templates, first match wins. Intentionally independent of risk
//! scoring: both are pure functions over the same input text.

/// Greeting shown when a conversation opens.
pub const WELCOME: &str = "Hello! I'm your PsycheTech AI assistant. I'm here to provide support, resources, and guidance for your mental wellness. How can I help you today?";

/// Encouragement appended to replies once a conversation is high risk.
pub const HIGH_RISK_FOLLOW_UP: &str = "I want to emphasize that professional support is available whenever you're ready. Your wellbeing is important, and there are people who want to help.";

const RULES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi", "hey"],
        "Hello! I'm here to support you. How are you feeling today?",
    ),
    (
        &["anxious", "nervous", "worried"],
        "I understand that feeling anxious can be really challenging. Would you like to try a quick breathing exercise, or would you prefer to talk about what's making you feel this way?",
    ),
    (
        &["depressed", "sad", "down"],
        "I'm sorry you're feeling this way. It takes courage to talk about these feelings. Remember that support is available, and you don't have to go through this alone.",
    ),
    (
        &["sleep", "insomnia"],
        "Sleep issues can really affect your wellbeing. I can share some sleep hygiene tips, or we can explore what might be affecting your sleep patterns.",
    ),
    (
        &["study", "exam", "test"],
        "Academic pressure can be overwhelming. Let's talk about some stress management techniques that might help you prepare while taking care of your mental health.",
    ),
    (
        &["help", "support"],
        "I'm here to help. Whether you need someone to talk to, resources for support, or guidance on next steps, I'm available 24/7. What specific support are you looking for right now?",
    ),
];

const FALLBACK: &str = "Thank you for sharing that with me. It sounds like you're going through a difficult time. I'm here to listen and support you. Could you tell me more about how you're feeling?";

/// Pick the canned reply for an utterance. First matching rule wins;
/// anything unmatched gets the default empathetic reply.
pub fn select_reply(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK)
}
