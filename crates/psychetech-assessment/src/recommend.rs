use serde::{Deserialize, Serialize};
use ts_rs::TS;

use psychetech_core::levels::SeverityLevel;

/// A support suggestion shown with an assessment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

fn rec(title: &str, description: &str) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Derive the support suggestions for a severity level.
///
/// A monotonic escalation ladder: every level gets the baseline pair,
/// peer support joins at `Mild`, professional referral at `Moderate`,
/// emergency support at `Severe`. Each level's list is a superset of
/// every lower level's list.
pub fn recommendations(level: SeverityLevel) -> Vec<Recommendation> {
    let mut recs = vec![
        rec(
            "Chat Support",
            "Connect with our AI assistant for immediate guidance and support.",
        ),
        rec(
            "Educational Resources",
            "Access articles and tools for mental health management.",
        ),
    ];

    if level >= SeverityLevel::Mild {
        recs.push(rec(
            "Peer Support",
            "Connect with trained student volunteers who understand your experience.",
        ));
    }
    if level >= SeverityLevel::Moderate {
        recs.push(rec(
            "Professional Help",
            "Consider booking a session with a licensed counselor.",
        ));
    }
    if level >= SeverityLevel::Severe {
        recs.push(rec(
            "Emergency Support",
            "Immediate connection to crisis services if needed.",
        ));
    }
    recs
}

/// Interpretation text shown beneath the score gauge.
pub fn interpretation(level: SeverityLevel) -> &'static str {
    match level {
        SeverityLevel::Minimal => {
            "This suggests you're currently experiencing minimal symptoms. Continue practicing good self-care habits."
        }
        SeverityLevel::Mild => {
            "You may be experiencing mild symptoms. Consider implementing stress management techniques."
        }
        SeverityLevel::Moderate => {
            "Moderate symptoms suggest it may be helpful to seek additional support and resources."
        }
        SeverityLevel::ModeratelySevere => {
            "Consider discussing these results with a healthcare professional."
        }
        SeverityLevel::Severe => {
            "Severe symptoms indicate that professional support could be beneficial for your wellbeing."
        }
    }
}
