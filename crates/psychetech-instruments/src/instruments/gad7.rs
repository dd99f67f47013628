use std::sync::LazyLock;

use psychetech_core::bands::ScoreBand;
use psychetech_core::levels::SeverityLevel;

use crate::Instrument;
use crate::types::{AnswerOption, frequency_options};

/// GAD-7: Generalized Anxiety Disorder scale, seven items.
/// Each item rated 0–3 over the last two weeks. Total 0–21.
pub struct Gad7;

static QUESTIONS: LazyLock<Vec<String>> = LazyLock::new(|| {
    [
        "Feeling nervous, anxious, or on edge",
        "Not being able to stop or control worrying",
        "Worrying too much about different things",
        "Trouble relaxing",
        "Being so restless that it is hard to sit still",
        "Becoming easily annoyed or irritable",
        "Feeling afraid as if something awful might happen",
    ]
    .iter()
    .map(|q| q.to_string())
    .collect()
});

static OPTIONS: LazyLock<Vec<AnswerOption>> = LazyLock::new(frequency_options);

static BANDS: LazyLock<Vec<ScoreBand>> = LazyLock::new(|| {
    [
        (0, 4, SeverityLevel::Minimal, "Minimal anxiety"),
        (5, 9, SeverityLevel::Mild, "Mild anxiety"),
        (10, 14, SeverityLevel::Moderate, "Moderate anxiety"),
        (15, 21, SeverityLevel::Severe, "Severe anxiety"),
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

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn title(&self) -> &str {
        "GAD-7 Anxiety Assessment"
    }

    fn instruction(&self) -> &str {
        "Over the last 2 weeks, how often have you been bothered by the following problems?"
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
