//! Store key conventions.
//!
//! Pure string functions — no storage dependency. These define the
//! canonical layout of records in the platform's key-value store.

use uuid::Uuid;

pub fn assessment(id: Uuid) -> String {
    format!("assessments/{id}.json")
}

pub fn booking(id: Uuid) -> String {
    format!("bookings/{id}.json")
}
