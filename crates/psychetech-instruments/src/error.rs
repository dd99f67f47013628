use thiserror::Error;

use psychetech_core::bands::BandError;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("instrument '{instrument_id}' has no questions")]
    NoQuestions { instrument_id: String },

    #[error("instrument '{instrument_id}' has no answer options")]
    NoOptions { instrument_id: String },

    #[error("instrument '{instrument_id}' has an invalid band table: {source}")]
    Bands {
        instrument_id: String,
        #[source]
        source: BandError,
    },
}
