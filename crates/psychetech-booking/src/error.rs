use thiserror::Error;

/// Validation failures while stepping through the booking flow. All
/// recoverable: the view re-prompts and the flow stays where it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("unknown specialist: {0}")]
    UnknownSpecialist(String),

    #[error("select a counsellor before proceeding")]
    SpecialistRequired,

    #[error("select a date and time before proceeding")]
    SlotRequired,

    #[error("{time} is not an offered slot time")]
    SlotUnavailable { time: jiff::civil::Time },

    #[error("booking is not ready to confirm")]
    NotConfirmable,
}
