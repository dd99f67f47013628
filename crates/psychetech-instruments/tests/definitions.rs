use psychetech_core::bands::find_band;
use psychetech_core::levels::SeverityLevel;
use psychetech_instruments::{all_instruments, get_instrument};

#[test]
fn every_registered_instrument_validates() {
    for instrument in all_instruments() {
        instrument
            .validate()
            .unwrap_or_else(|e| panic!("{}: {e}", instrument.id()));
    }
}

#[test]
fn registry_round_trips_by_id() {
    for instrument in all_instruments() {
        let found = get_instrument(instrument.id()).expect("registered id must resolve");
        assert_eq!(found.title(), instrument.title());
    }
    assert!(get_instrument("mmpi").is_none());
}

#[test]
fn instrument_shapes_match_the_published_scales() {
    let phq9 = get_instrument("phq9").unwrap();
    assert_eq!(phq9.question_count(), 9);
    assert_eq!(phq9.max_possible_score(), 27);
    assert_eq!(phq9.options().len(), 4);

    let gad7 = get_instrument("gad7").unwrap();
    assert_eq!(gad7.question_count(), 7);
    assert_eq!(gad7.max_possible_score(), 21);

    let ghq12 = get_instrument("ghq12").unwrap();
    assert_eq!(ghq12.question_count(), 12);
    assert_eq!(ghq12.max_possible_score(), 36);
}

#[test]
fn options_ascend_from_zero() {
    for instrument in all_instruments() {
        let values: Vec<u32> = instrument.options().iter().map(|o| o.value).collect();
        assert_eq!(values, vec![0, 1, 2, 3], "{}", instrument.id());
    }
}

#[test]
fn phq9_band_boundaries() {
    let phq9 = get_instrument("phq9").unwrap();
    let cases = [
        (0, SeverityLevel::Minimal),
        (4, SeverityLevel::Minimal),
        (5, SeverityLevel::Mild),
        (10, SeverityLevel::Moderate),
        (15, SeverityLevel::ModeratelySevere),
        (19, SeverityLevel::ModeratelySevere),
        (20, SeverityLevel::Severe),
        (27, SeverityLevel::Severe),
    ];
    for (total, expected) in cases {
        let band = find_band(phq9.bands(), total).unwrap();
        assert_eq!(band.level, expected, "total {total}");
    }
}

#[test]
fn ghq12_bands_keep_original_descriptions() {
    let ghq12 = get_instrument("ghq12").unwrap();
    let severe = find_band(ghq12.bands(), 36).unwrap();
    assert_eq!(severe.level, SeverityLevel::Severe);
    assert_eq!(severe.description, "High probability of disorder");
}
