//! psychetech-assessment
//!
//! The questionnaire engine: a linearly-navigable session over a fixed
//! instrument, answer recording, banded submission scoring, and the
//! recommendation ladder. The view layer drives a session one user
//! action at a time and renders what comes back.

pub mod error;
pub mod recommend;
pub mod session;

pub use error::AssessmentError;
pub use recommend::{Recommendation, interpretation, recommendations};
pub use session::{AssessmentSession, ScoreOutcome, Step};
