use psychetech_core::bands::{BandError, ScoreBand, find_band, validate_bands};
use psychetech_core::levels::{RiskLevel, SeverityLevel};

fn band(min: u32, max: u32, level: SeverityLevel) -> ScoreBand {
    ScoreBand {
        min,
        max,
        level,
        description: format!("{} range", level.label()),
    }
}

fn sample_bands() -> Vec<ScoreBand> {
    vec![
        band(0, 4, SeverityLevel::Minimal),
        band(5, 9, SeverityLevel::Mild),
        band(10, 14, SeverityLevel::Moderate),
        band(15, 19, SeverityLevel::ModeratelySevere),
        band(20, 27, SeverityLevel::Severe),
    ]
}

#[test]
fn valid_table_passes_validation() {
    assert_eq!(validate_bands(&sample_bands(), 27), Ok(()));
}

#[test]
fn every_total_matches_exactly_one_band() {
    let bands = sample_bands();
    for total in 0..=27 {
        let matches = bands
            .iter()
            .filter(|b| b.min <= total && total <= b.max)
            .count();
        assert_eq!(matches, 1, "total {total} matched {matches} bands");
    }
}

#[test]
fn find_band_picks_boundaries_correctly() {
    let bands = sample_bands();
    assert_eq!(find_band(&bands, 4).map(|b| b.level), Some(SeverityLevel::Minimal));
    assert_eq!(find_band(&bands, 5).map(|b| b.level), Some(SeverityLevel::Mild));
    assert_eq!(find_band(&bands, 27).map(|b| b.level), Some(SeverityLevel::Severe));
    assert!(find_band(&bands, 28).is_none());
}

#[test]
fn empty_table_is_rejected() {
    assert_eq!(validate_bands(&[], 10), Err(BandError::Empty));
}

#[test]
fn table_not_starting_at_zero_is_rejected() {
    let bands = vec![band(1, 10, SeverityLevel::Minimal)];
    assert_eq!(validate_bands(&bands, 10), Err(BandError::Start(1)));
}

#[test]
fn gap_between_bands_is_rejected() {
    let bands = vec![
        band(0, 4, SeverityLevel::Minimal),
        band(6, 10, SeverityLevel::Mild),
    ];
    assert_eq!(
        validate_bands(&bands, 10),
        Err(BandError::Discontinuity {
            expected: 5,
            found: 6
        })
    );
}

#[test]
fn overlapping_bands_are_rejected() {
    let bands = vec![
        band(0, 5, SeverityLevel::Minimal),
        band(4, 10, SeverityLevel::Mild),
    ];
    assert_eq!(
        validate_bands(&bands, 10),
        Err(BandError::Discontinuity {
            expected: 6,
            found: 4
        })
    );
}

#[test]
fn short_coverage_is_rejected() {
    let bands = vec![band(0, 8, SeverityLevel::Minimal)];
    assert_eq!(
        validate_bands(&bands, 10),
        Err(BandError::Coverage {
            expected: 10,
            found: 8
        })
    );
}

#[test]
fn severity_levels_order_by_rank() {
    assert!(SeverityLevel::Minimal < SeverityLevel::Mild);
    assert!(SeverityLevel::Moderate < SeverityLevel::ModeratelySevere);
    assert!(SeverityLevel::ModeratelySevere < SeverityLevel::Severe);
}

#[test]
fn risk_level_thresholds() {
    assert_eq!(RiskLevel::from_peak(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_peak(3), RiskLevel::Low);
    assert_eq!(RiskLevel::from_peak(4), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_peak(6), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_peak(7), RiskLevel::High);
    assert_eq!(RiskLevel::from_peak(10), RiskLevel::High);
}
