//! Risk keyword lexicon.
//!
//! Three disjoint tiers of keywords, matched as lower-cased substrings.
//! Static keyword lists — zero allocation.

/// Keywords indicating acute crisis.
pub const HIGH_RISK: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "want to die",
    "harm myself",
    "overdose",
    "jump off",
    "cut myself",
];

/// Keywords indicating sustained distress.
pub const MEDIUM_RISK: &[&str] = &[
    "depressed",
    "hopeless",
    "can't go on",
    "give up",
    "alone",
    "worthless",
    "useless",
    "anxiety",
    "panic",
    "overwhelmed",
];

/// Keywords indicating everyday stressors.
pub const LOW_RISK: &[&str] = &[
    "sad", "stressed", "worried", "nervous", "tired", "sleep", "study", "exam",
];

pub const HIGH_WEIGHT: u8 = 3;
pub const MEDIUM_WEIGHT: u8 = 2;
pub const LOW_WEIGHT: u8 = 1;
