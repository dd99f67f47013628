use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use psychetech_core::bands::find_band;
use psychetech_core::levels::SeverityLevel;
use psychetech_core::records::AssessmentRecord;
use psychetech_instruments::{Instrument, get_instrument};

use crate::error::AssessmentError;

/// Outcome of a navigation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    /// Already at the first (retreat) or last (advance) question; the
    /// session is unchanged.
    AtBoundary,
}

/// Result of submitting a completed response set.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreOutcome {
    pub total: u32,
    pub level: SeverityLevel,
    pub description: String,
    pub max_score: u32,
}

/// A single pass through one instrument.
///
/// The session owns all mutable questionnaire state: the current question
/// index and the recorded responses. One unanswered sentinel per question
/// until the user picks an option.
pub struct AssessmentSession {
    id: Uuid,
    instrument: Box<dyn Instrument>,
    current_question: usize,
    responses: Vec<Option<u32>>,
}

impl AssessmentSession {
    /// Begin a fresh session at question 0 with an empty response set.
    pub fn start(instrument_id: &str) -> Result<Self, AssessmentError> {
        let instrument = get_instrument(instrument_id)
            .ok_or_else(|| AssessmentError::UnknownInstrument(instrument_id.to_string()))?;
        let responses = vec![None; instrument.question_count()];
        Ok(Self {
            id: Uuid::new_v4(),
            instrument,
            current_question: 0,
            responses,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    /// Zero-based index of the question currently shown.
    pub fn current_question(&self) -> usize {
        self.current_question
    }

    /// Prompt text for the current question.
    pub fn current_prompt(&self) -> &str {
        &self.instrument.questions()[self.current_question]
    }

    /// The recorded value for the current question, if any.
    pub fn current_response(&self) -> Option<u32> {
        self.responses[self.current_question]
    }

    pub fn is_complete(&self) -> bool {
        self.responses.iter().all(Option::is_some)
    }

    /// Record the option at `option_index` as the answer to the current
    /// question, overwriting any prior answer. Re-answering is always
    /// allowed and idempotent per question.
    pub fn select_answer(&mut self, option_index: usize) -> Result<(), AssessmentError> {
        let options = self.instrument.options();
        let option = options
            .get(option_index)
            .ok_or(AssessmentError::IndexOutOfRange {
                index: option_index,
                options: options.len(),
            })?;
        self.responses[self.current_question] = Some(option.value);
        Ok(())
    }

    /// Move to the next question. The current question must be answered
    /// first; at the last question this is a signalled no-op, never an
    /// error.
    pub fn advance(&mut self) -> Result<Step, AssessmentError> {
        if self.responses[self.current_question].is_none() {
            return Err(AssessmentError::AnswerRequired {
                question: self.current_question,
            });
        }
        if self.current_question + 1 == self.instrument.question_count() {
            return Ok(Step::AtBoundary);
        }
        self.current_question += 1;
        Ok(Step::Moved)
    }

    /// Move to the previous question. No-op at question 0. Recorded
    /// answers are never cleared, so earlier questions stay reviewable
    /// and editable.
    pub fn retreat(&mut self) -> Step {
        if self.current_question == 0 {
            return Step::AtBoundary;
        }
        self.current_question -= 1;
        Step::Moved
    }

    /// Score the completed response set against the instrument's bands.
    pub fn submit(&self) -> Result<ScoreOutcome, AssessmentError> {
        let missing = self.responses.iter().filter(|r| r.is_none()).count();
        if missing > 0 {
            return Err(AssessmentError::IncompleteResponses { missing });
        }
        let total: u32 = self.responses.iter().flatten().sum();
        let band = find_band(self.instrument.bands(), total).ok_or_else(|| {
            AssessmentError::UnscorableTotal {
                instrument_id: self.instrument.id().to_string(),
                total,
            }
        })?;
        Ok(ScoreOutcome {
            total,
            level: band.level,
            description: band.description.clone(),
            max_score: self.instrument.max_possible_score(),
        })
    }

    /// Produce the persistable record for a completed session.
    pub fn to_record(&self, now: jiff::Timestamp) -> Result<AssessmentRecord, AssessmentError> {
        let outcome = self.submit()?;
        Ok(AssessmentRecord {
            id: self.id,
            instrument_id: self.instrument.id().to_string(),
            total_score: outcome.total,
            level: outcome.level,
            responses: self.responses.iter().flatten().copied().collect(),
            recorded_at: now,
        })
    }
}
