use thiserror::Error;

/// Validation failures on malformed caller input. All recoverable: the
/// view layer re-prompts the user and the session stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("option index {index} is out of range (instrument has {options} options)")]
    IndexOutOfRange { index: usize, options: usize },

    #[error("question {question} has no recorded answer")]
    AnswerRequired { question: usize },

    #[error("{missing} question(s) still unanswered")]
    IncompleteResponses { missing: usize },

    #[error("no scoring band covers total {total} for instrument '{instrument_id}'")]
    UnscorableTotal { instrument_id: String, total: u32 },
}
