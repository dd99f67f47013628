use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A bookable counselling specialist.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Specialist {
    pub id: String,
    pub name: String,
    pub role: String,
    pub session_minutes: u16,
}

static SPECIALISTS: LazyLock<Vec<Specialist>> = LazyLock::new(|| {
    [
        ("dr-smith", "Dr. Smith", "Clinical Psychologist", 50),
        ("dr-johnson", "Dr. Johnson", "Counselling Psychologist", 45),
        ("ms-garcia", "Ms. Garcia", "Licensed Counsellor", 60),
    ]
    .iter()
    .map(|&(id, name, role, session_minutes)| Specialist {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        session_minutes,
    })
    .collect()
});

/// All bookable specialists.
pub fn all_specialists() -> &'static [Specialist] {
    &SPECIALISTS
}

/// Look up a specialist by ID.
pub fn get_specialist(id: &str) -> Option<&'static Specialist> {
    SPECIALISTS.iter().find(|s| s.id == id)
}
