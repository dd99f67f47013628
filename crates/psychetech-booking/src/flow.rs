use jiff::Timestamp;
use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use psychetech_core::records::BookingRecord;

use crate::error::BookingError;
use crate::schedule::SLOT_TIMES;
use crate::specialists::{Specialist, get_specialist};

/// The three steps of the booking flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BookingStep {
    ChooseSpecialist,
    ChooseSlot,
    Confirm,
}

/// A linearly-navigable booking in progress.
///
/// Selections survive moving back and forth between steps; `next_step`
/// refuses to leave a step whose selection is missing.
pub struct BookingFlow {
    step: BookingStep,
    specialist: Option<&'static Specialist>,
    date: Option<Date>,
    time: Option<Time>,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            step: BookingStep::ChooseSpecialist,
            specialist: None,
            date: None,
            time: None,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn specialist(&self) -> Option<&'static Specialist> {
        self.specialist
    }

    pub fn selection(&self) -> Option<(Date, Time)> {
        self.date.zip(self.time)
    }

    /// Record the chosen specialist. Re-selection is always allowed.
    pub fn select_specialist(&mut self, id: &str) -> Result<(), BookingError> {
        let specialist =
            get_specialist(id).ok_or_else(|| BookingError::UnknownSpecialist(id.to_string()))?;
        self.specialist = Some(specialist);
        Ok(())
    }

    /// Record the chosen date and start time. The time must be one of the
    /// offered slot times.
    pub fn select_slot(&mut self, date: Date, slot_time: Time) -> Result<(), BookingError> {
        if !SLOT_TIMES.contains(&slot_time) {
            return Err(BookingError::SlotUnavailable { time: slot_time });
        }
        self.date = Some(date);
        self.time = Some(slot_time);
        Ok(())
    }

    /// Move to the next step, validating the current one. At the final
    /// step this is a no-op.
    pub fn next_step(&mut self) -> Result<BookingStep, BookingError> {
        match self.step {
            BookingStep::ChooseSpecialist => {
                if self.specialist.is_none() {
                    return Err(BookingError::SpecialistRequired);
                }
                self.step = BookingStep::ChooseSlot;
            }
            BookingStep::ChooseSlot => {
                if self.date.is_none() || self.time.is_none() {
                    return Err(BookingError::SlotRequired);
                }
                self.step = BookingStep::Confirm;
            }
            BookingStep::Confirm => {}
        }
        Ok(self.step)
    }

    /// Move to the previous step. No-op at the first step; selections are
    /// kept.
    pub fn back(&mut self) -> BookingStep {
        self.step = match self.step {
            BookingStep::ChooseSpecialist => BookingStep::ChooseSpecialist,
            BookingStep::ChooseSlot => BookingStep::ChooseSpecialist,
            BookingStep::Confirm => BookingStep::ChooseSlot,
        };
        self.step
    }

    /// Confirm the booking, producing the persistable record. Only valid
    /// on the final step with every selection made.
    pub fn complete(&self, now: Timestamp) -> Result<BookingRecord, BookingError> {
        if self.step != BookingStep::Confirm {
            return Err(BookingError::NotConfirmable);
        }
        let (specialist, date, time) = match (self.specialist, self.date, self.time) {
            (Some(s), Some(d), Some(t)) => (s, d, t),
            _ => return Err(BookingError::NotConfirmable),
        };
        Ok(BookingRecord {
            id: Uuid::new_v4(),
            specialist_id: specialist.id.clone(),
            date,
            time,
            duration_minutes: specialist.session_minutes,
            booked_at: now,
        })
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}
