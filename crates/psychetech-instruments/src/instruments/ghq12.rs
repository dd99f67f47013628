use std::sync::LazyLock;

use psychetech_core::bands::ScoreBand;
use psychetech_core::levels::SeverityLevel;

use crate::Instrument;
use crate::types::AnswerOption;

/// GHQ-12: General Health Questionnaire, twelve items.
/// Each item rated 0–3 against the respondent's usual state. Total 0–36.
///
/// The published scale labels its bands by probability of disorder
/// (low/medium/high); those canonicalize here to the platform-wide
/// severity levels while the band descriptions keep the original wording.
pub struct Ghq12;

static QUESTIONS: LazyLock<Vec<String>> = LazyLock::new(|| {
    [
        "Been able to concentrate on whatever you're doing?",
        "Lost much sleep over worry?",
        "Felt that you are playing a useful part in things?",
        "Felt capable of making decisions about things?",
        "Felt constantly under strain?",
        "Felt you couldn't overcome your difficulties?",
        "Been able to enjoy your normal day-to-day activities?",
        "Been able to face up to your problems?",
        "Been feeling unhappy or depressed?",
        "Been losing confidence in yourself?",
        "Been thinking of yourself as a worthless person?",
        "Been feeling reasonably happy, all things considered?",
    ]
    .iter()
    .map(|q| q.to_string())
    .collect()
});

static OPTIONS: LazyLock<Vec<AnswerOption>> = LazyLock::new(|| {
    [
        ("Better than usual", 0),
        ("Same as usual", 1),
        ("Less than usual", 2),
        ("Much less than usual", 3),
    ]
    .iter()
    .map(|&(label, value)| AnswerOption {
        label: label.to_string(),
        value,
    })
    .collect()
});

static BANDS: LazyLock<Vec<ScoreBand>> = LazyLock::new(|| {
    [
        (0, 11, SeverityLevel::Minimal, "Low probability of disorder"),
        (12, 20, SeverityLevel::Moderate, "Medium probability of disorder"),
        (21, 36, SeverityLevel::Severe, "High probability of disorder"),
    ]
    .iter()
    .map(|&(min, max, level, description)| ScoreBand {
        min,
        max,
        level,
        description: description.to_string(),
    })
    .collect()
});

impl Instrument for Ghq12 {
    fn id(&self) -> &str {
        "ghq12"
    }

    fn title(&self) -> &str {
        "GHQ-12 General Health Assessment"
    }

    fn instruction(&self) -> &str {
        "Recently, have you experienced:"
    }

    fn questions(&self) -> &[String] {
        &QUESTIONS
    }

    fn options(&self) -> &[AnswerOption] {
        &OPTIONS
    }

    fn bands(&self) -> &[ScoreBand] {
        &BANDS
    }
}
