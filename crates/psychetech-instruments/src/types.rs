use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An answer option shared by all questions of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub value: u32,
}

/// The frequency option set shared by PHQ-9 and GAD-7.
pub(crate) fn frequency_options() -> Vec<AnswerOption> {
    [
        ("Not at all", 0),
        ("Several days", 1),
        ("More than half the days", 2),
        ("Nearly every day", 3),
    ]
    .iter()
    .map(|&(label, value)| AnswerOption {
        label: label.to_string(),
        value,
    })
    .collect()
}
