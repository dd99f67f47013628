//! psychetech-booking
//!
//! The booking flow core: specialist registry, schedule generation with
//! simulated availability, and the three-step booking state machine.
//! Slot availability is mock data; the randomness behind it is injected
//! so tests can fix the seed.

pub mod error;
pub mod flow;
pub mod schedule;
pub mod specialists;

pub use error::BookingError;
pub use flow::{BookingFlow, BookingStep};
pub use schedule::{BOOKING_WINDOW_DAYS, SLOT_TIMES, Slot, day_slots, upcoming_dates};
pub use specialists::{Specialist, all_specialists, get_specialist};
