use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::levels::SeverityLevel;

/// A completed self-report assessment, as handed to the persistence
/// boundary. `recorded_at` serializes as an ISO-8601 instant.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub instrument_id: String,
    pub total_score: u32,
    pub level: SeverityLevel,
    pub responses: Vec<u32>,
    pub recorded_at: jiff::Timestamp,
}

/// A confirmed counselling booking.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookingRecord {
    pub id: Uuid,
    pub specialist_id: String,
    pub date: jiff::civil::Date,
    pub time: jiff::civil::Time,
    pub duration_minutes: u16,
    pub booked_at: jiff::Timestamp,
}
