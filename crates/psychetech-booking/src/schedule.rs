use jiff::Span;
use jiff::civil::{Date, Time, time};
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How far ahead the date grid reaches.
pub const BOOKING_WINDOW_DAYS: u16 = 14;

/// Session start times offered each day.
pub const SLOT_TIMES: [Time; 8] = [
    time(9, 0, 0, 0),
    time(10, 0, 0, 0),
    time(11, 0, 0, 0),
    time(13, 0, 0, 0),
    time(14, 0, 0, 0),
    time(15, 0, 0, 0),
    time(16, 0, 0, 0),
    time(17, 0, 0, 0),
];

/// Probability that a slot is offered as available.
const AVAILABILITY_P: f64 = 0.7;

/// One bookable time slot on a given day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Slot {
    pub time: Time,
    pub available: bool,
}

/// The selectable date window starting at `today`, inclusive.
pub fn upcoming_dates(today: Date, days: u16) -> Vec<Date> {
    (0..days)
        .map(|i| today.saturating_add(Span::new().days(i as i64)))
        .collect()
}

/// Simulated availability for one day's slots. There is no real calendar
/// behind this; each slot is offered with probability 0.7 from the
/// injected random source.
pub fn day_slots<R: Rng>(rng: &mut R) -> Vec<Slot> {
    SLOT_TIMES
        .iter()
        .map(|&t| Slot {
            time: t,
            available: rng.random_bool(AVAILABILITY_P),
        })
        .collect()
}
