use std::sync::LazyLock;

use psychetech_core::bands::ScoreBand;
use psychetech_core::levels::SeverityLevel;

use crate::Instrument;
use crate::types::{AnswerOption, frequency_options};

/// PHQ-9: Patient Health Questionnaire, nine items.
/// Each item rated 0–3 over the last two weeks. Total 0–27.
pub struct Phq9;

static QUESTIONS: LazyLock<Vec<String>> = LazyLock::new(|| {
    [
        "Little interest or pleasure in doing things",
        "Feeling down, depressed, or hopeless",
        "Trouble falling or staying asleep, or sleeping too much",
        "Feeling tired or having little energy",
        "Poor appetite or overeating",
        "Feeling bad about yourself — or that you are a failure or have let yourself or your family down",
        "Trouble concentrating on things, such as reading the newspaper or watching television",
        "Moving or speaking so slowly that other people could have noticed? Or the opposite — being so fidgety or restless that you have been moving around a lot more than usual",
        "Thoughts that you would be better off dead or of hurting yourself in some way",
    ]
    .iter()
    .map(|q| q.to_string())
    .collect()
});

static OPTIONS: LazyLock<Vec<AnswerOption>> = LazyLock::new(frequency_options);

static BANDS: LazyLock<Vec<ScoreBand>> = LazyLock::new(|| {
    [
        (0, 4, SeverityLevel::Minimal, "Minimal depression"),
        (5, 9, SeverityLevel::Mild, "Mild depression"),
        (10, 14, SeverityLevel::Moderate, "Moderate depression"),
        (15, 19, SeverityLevel::ModeratelySevere, "Moderately severe depression"),
        (20, 27, SeverityLevel::Severe, "Severe depression"),
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

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn title(&self) -> &str {
        "PHQ-9 Depression Assessment"
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
