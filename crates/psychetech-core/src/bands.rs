use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::levels::SeverityLevel;

/// A closed integer score range mapped to a severity level.
///
/// An instrument's band table must partition `[0, max_possible_score]`:
/// contiguous, non-overlapping, in ascending `min` order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBand {
    pub min: u32,
    pub max: u32,
    pub level: SeverityLevel,
    pub description: String,
}

/// A defect in a band table, reported by [`validate_bands`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandError {
    #[error("band table is empty")]
    Empty,

    #[error("band table must start at 0, got {0}")]
    Start(u32),

    #[error("band {min}..={max} is inverted")]
    Inverted { min: u32, max: u32 },

    #[error("expected a band starting at {expected}, found one starting at {found}")]
    Discontinuity { expected: u32, found: u32 },

    #[error("band table covers up to {found}, expected {expected}")]
    Coverage { expected: u32, found: u32 },
}

/// Find the band containing `total`. Bands are checked in table order,
/// which for a valid table equals ascending `min` order; exactly one
/// band matches any total in `[0, max_possible_score]`.
pub fn find_band(bands: &[ScoreBand], total: u32) -> Option<&ScoreBand> {
    bands.iter().find(|b| b.min <= total && total <= b.max)
}

/// Check that `bands` partitions `[0, max_score]` with no gaps and no
/// overlaps.
pub fn validate_bands(bands: &[ScoreBand], max_score: u32) -> Result<(), BandError> {
    let first = bands.first().ok_or(BandError::Empty)?;
    if first.min != 0 {
        return Err(BandError::Start(first.min));
    }

    let mut next_min = 0u32;
    for band in bands {
        if band.max < band.min {
            return Err(BandError::Inverted {
                min: band.min,
                max: band.max,
            });
        }
        if band.min != next_min {
            return Err(BandError::Discontinuity {
                expected: next_min,
                found: band.min,
            });
        }
        next_min = band.max + 1;
    }

    if next_min != max_score + 1 {
        return Err(BandError::Coverage {
            expected: max_score,
            found: next_min - 1,
        });
    }
    Ok(())
}
