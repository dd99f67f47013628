use psychetech_assessment::{AssessmentError, AssessmentSession, Step, recommendations};
use psychetech_core::levels::SeverityLevel;

fn answer_all(session: &mut AssessmentSession, option_index: usize) {
    loop {
        session.select_answer(option_index).unwrap();
        if session.advance().unwrap() == Step::AtBoundary {
            break;
        }
    }
}

#[test]
fn unknown_instrument_is_rejected() {
    assert_eq!(
        AssessmentSession::start("mmpi").err(),
        Some(AssessmentError::UnknownInstrument("mmpi".to_string()))
    );
}

#[test]
fn fresh_session_starts_empty_at_question_zero() {
    let session = AssessmentSession::start("phq9").unwrap();
    assert_eq!(session.current_question(), 0);
    assert_eq!(session.current_response(), None);
    assert!(!session.is_complete());
    assert_eq!(
        session.current_prompt(),
        "Little interest or pleasure in doing things"
    );
}

#[test]
fn phq9_all_twos_scores_moderately_severe() {
    let mut session = AssessmentSession::start("phq9").unwrap();
    answer_all(&mut session, 2);

    let outcome = session.submit().unwrap();
    assert_eq!(outcome.total, 18);
    assert_eq!(outcome.level, SeverityLevel::ModeratelySevere);
    assert_eq!(outcome.description, "Moderately severe depression");
    assert_eq!(outcome.max_score, 27);
}

#[test]
fn out_of_range_option_is_rejected() {
    let mut session = AssessmentSession::start("gad7").unwrap();
    assert_eq!(
        session.select_answer(4).err(),
        Some(AssessmentError::IndexOutOfRange {
            index: 4,
            options: 4
        })
    );
}

#[test]
fn advancing_without_an_answer_fails() {
    let mut session = AssessmentSession::start("phq9").unwrap();
    assert_eq!(
        session.advance().err(),
        Some(AssessmentError::AnswerRequired { question: 0 })
    );
}

#[test]
fn advance_at_last_question_is_a_signalled_no_op() {
    let mut session = AssessmentSession::start("gad7").unwrap();
    answer_all(&mut session, 0);
    assert_eq!(session.current_question(), 6);
    assert_eq!(session.advance().unwrap(), Step::AtBoundary);
    assert_eq!(session.current_question(), 6);
}

#[test]
fn retreat_at_first_question_is_a_no_op() {
    let mut session = AssessmentSession::start("phq9").unwrap();
    assert_eq!(session.retreat(), Step::AtBoundary);
    assert_eq!(session.current_question(), 0);
}

#[test]
fn retreat_keeps_recorded_answers_editable() {
    let mut session = AssessmentSession::start("phq9").unwrap();
    session.select_answer(3).unwrap();
    session.advance().unwrap();
    session.select_answer(1).unwrap();

    assert_eq!(session.retreat(), Step::Moved);
    assert_eq!(session.current_response(), Some(3));

    // Re-answering overwrites; a repeated selection changes nothing.
    session.select_answer(0).unwrap();
    session.select_answer(0).unwrap();
    assert_eq!(session.current_response(), Some(0));
}

#[test]
fn submitting_an_incomplete_session_fails() {
    let mut session = AssessmentSession::start("ghq12").unwrap();
    session.select_answer(2).unwrap();
    session.advance().unwrap();
    assert_eq!(
        session.submit().err(),
        Some(AssessmentError::IncompleteResponses { missing: 11 })
    );
}

#[test]
fn totals_stay_within_instrument_range() {
    for option_index in 0..4 {
        let mut session = AssessmentSession::start("gad7").unwrap();
        answer_all(&mut session, option_index);
        let outcome = session.submit().unwrap();
        assert_eq!(outcome.total, option_index as u32 * 7);
        assert!(outcome.total <= outcome.max_score);
    }
}

#[test]
fn completed_session_produces_a_record() {
    let now: jiff::Timestamp = "2026-02-03T09:30:00Z".parse().unwrap();
    let mut session = AssessmentSession::start("phq9").unwrap();
    answer_all(&mut session, 1);

    let record = session.to_record(now).unwrap();
    assert_eq!(record.instrument_id, "phq9");
    assert_eq!(record.total_score, 9);
    assert_eq!(record.level, SeverityLevel::Mild);
    assert_eq!(record.responses, vec![1; 9]);
    assert_eq!(record.recorded_at, now);
    assert_eq!(record.id, session.id());
}

#[test]
fn recommendations_escalate_monotonically() {
    let ladder = [
        SeverityLevel::Minimal,
        SeverityLevel::Mild,
        SeverityLevel::Moderate,
        SeverityLevel::ModeratelySevere,
        SeverityLevel::Severe,
    ];
    for pair in ladder.windows(2) {
        let lower = recommendations(pair[0]);
        let higher = recommendations(pair[1]);
        for rec in &lower {
            assert!(
                higher.contains(rec),
                "{:?} recommendation missing at {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn recommendation_ladder_contents() {
    let titles = |level| -> Vec<String> {
        recommendations(level).into_iter().map(|r| r.title).collect()
    };

    assert_eq!(
        titles(SeverityLevel::Minimal),
        vec!["Chat Support", "Educational Resources"]
    );
    assert!(titles(SeverityLevel::Mild).contains(&"Peer Support".to_string()));
    assert!(titles(SeverityLevel::Moderate).contains(&"Professional Help".to_string()));
    assert!(!titles(SeverityLevel::Mild).contains(&"Professional Help".to_string()));
    assert!(titles(SeverityLevel::Severe).contains(&"Emergency Support".to_string()));
    assert!(!titles(SeverityLevel::ModeratelySevere).contains(&"Emergency Support".to_string()));
}
