//! psychetech-core
//!
//! Pure domain types, score-band utilities, and store key conventions.
//! No engine logic — this is the shared vocabulary of the PsycheTech
//! platform.

pub mod bands;
pub mod levels;
pub mod records;
pub mod store_keys;
