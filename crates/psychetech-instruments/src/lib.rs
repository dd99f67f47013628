//! psychetech-instruments
//!
//! Self-report screening instrument definitions. Pure data — no engine
//! logic. Defines the questions, answer options, and scoring bands for
//! each supported instrument.

pub mod error;
pub mod instruments;
pub mod types;

use psychetech_core::bands::{self, ScoreBand};

use error::DefinitionError;
use types::AnswerOption;

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable title (e.g., "PHQ-9 Depression Assessment").
    fn title(&self) -> &str;

    /// The instruction shown above every question.
    fn instruction(&self) -> &str;

    /// Question prompts, in presentation order.
    fn questions(&self) -> &[String];

    /// Answer options shared by every question of this instrument.
    fn options(&self) -> &[AnswerOption];

    /// Scoring bands covering every reachable total score.
    fn bands(&self) -> &[ScoreBand];

    fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Highest total a fully answered response set can reach.
    fn max_possible_score(&self) -> u32 {
        let highest = self.options().iter().map(|o| o.value).max().unwrap_or(0);
        highest * self.questions().len() as u32
    }

    /// Validate this definition: it must have questions and options, and
    /// its bands must partition `[0, max_possible_score]`.
    fn validate(&self) -> Result<(), DefinitionError> {
        if self.questions().is_empty() {
            return Err(DefinitionError::NoQuestions {
                instrument_id: self.id().to_string(),
            });
        }
        if self.options().is_empty() {
            return Err(DefinitionError::NoOptions {
                instrument_id: self.id().to_string(),
            });
        }
        bands::validate_bands(self.bands(), self.max_possible_score()).map_err(|source| {
            DefinitionError::Bands {
                instrument_id: self.id().to_string(),
                source,
            }
        })
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
        Box::new(instruments::ghq12::Ghq12),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
