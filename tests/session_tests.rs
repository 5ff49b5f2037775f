// Unit tests for the interview dialogue core
//
// These cover the session lifecycle: start, submission, prompt
// advancement, completion, and the error paths.

use interview_service::session::{
    InterviewSession, SessionConfig, SessionError, SessionStatus, Speaker, CLOSING_MESSAGE,
    DEFAULT_PROMPTS,
};

fn config_with_prompts(prompts: &[&str]) -> SessionConfig {
    SessionConfig {
        prompts: prompts.iter().map(|s| s.to_string()).collect(),
        ..SessionConfig::default()
    }
}

#[test]
fn test_start_delivers_first_prompt() {
    let session = InterviewSession::start(config_with_prompts(&["Q1", "Q2"])).expect("session");

    assert_eq!(session.transcript().len(), 1);
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.status(), SessionStatus::InProgress);
    assert!(!session.is_complete());

    let opening = session.transcript().last().expect("opening turn");
    assert_eq!(opening.speaker, Speaker::Interviewer);
    assert_eq!(opening.text, "Q1");
    assert_eq!(opening.sequence, 0);
}

#[test]
fn test_start_with_empty_prompts_fails() {
    let err = InterviewSession::start(config_with_prompts(&[])).expect_err("should fail");
    assert_eq!(err, SessionError::InvalidInput);
}

#[test]
fn test_default_config_uses_five_question_script() {
    let session = InterviewSession::start(SessionConfig::default()).expect("session");

    assert_eq!(session.prompts().len(), 5);
    assert_eq!(session.prompts()[0], DEFAULT_PROMPTS[0]);
    assert!(session.session_id().starts_with("interview-"));
}

#[test]
fn test_submit_appends_candidate_and_next_prompt() {
    let mut session = InterviewSession::start(config_with_prompts(&["Q1", "Q2"])).expect("session");

    let outcome = session.submit("A1").expect("submit");

    assert_eq!(outcome.candidate_turn.speaker, Speaker::Candidate);
    assert_eq!(outcome.candidate_turn.text, "A1");
    assert_eq!(outcome.candidate_turn.sequence, 1);
    assert_eq!(outcome.interviewer_turn.speaker, Speaker::Interviewer);
    assert_eq!(outcome.interviewer_turn.text, "Q2");
    assert_eq!(outcome.interviewer_turn.sequence, 2);
    assert_eq!(outcome.status, SessionStatus::InProgress);

    assert_eq!(session.transcript().len(), 3);
    assert_eq!(session.cursor(), 1);
}

#[test]
fn test_final_answer_completes_session() {
    let mut session = InterviewSession::start(config_with_prompts(&["Q1", "Q2"])).expect("session");

    session.submit("A1").expect("first submit");
    let outcome = session.submit("A2").expect("final submit");

    assert_eq!(outcome.status, SessionStatus::Completed);
    assert_eq!(outcome.candidate_turn.text, "A2");
    assert_eq!(outcome.candidate_turn.sequence, 3);
    assert_eq!(outcome.interviewer_turn.text, CLOSING_MESSAGE);
    assert_eq!(outcome.interviewer_turn.sequence, 4);

    assert!(session.is_complete());
    assert_eq!(session.transcript().len(), 5);
    // The cursor stays on the final prompt; only the closing message is
    // appended past it
    assert_eq!(session.cursor(), 1);
}

#[test]
fn test_single_prompt_session_completes_on_first_answer() {
    let mut session = InterviewSession::start(config_with_prompts(&["Q1"])).expect("session");

    let outcome = session.submit("A1").expect("submit");

    assert_eq!(outcome.status, SessionStatus::Completed);
    assert_eq!(outcome.interviewer_turn.text, CLOSING_MESSAGE);
    assert_eq!(session.transcript().len(), 3);
}

#[test]
fn test_blank_response_is_rejected_without_mutation() {
    let mut session = InterviewSession::start(config_with_prompts(&["Q1", "Q2"])).expect("session");

    for blank in ["", "   ", "\t\n "] {
        let err = session.submit(blank).expect_err("should fail");
        assert_eq!(err, SessionError::EmptyResponse);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    // The session is still usable after rejected input
    session.submit("A1").expect("submit after rejection");
    assert_eq!(session.transcript().len(), 3);
}

#[test]
fn test_response_text_is_trimmed() {
    let mut session = InterviewSession::start(config_with_prompts(&["Q1"])).expect("session");

    let outcome = session.submit("  my answer  ").expect("submit");
    assert_eq!(outcome.candidate_turn.text, "my answer");
}

#[test]
fn test_submit_after_completion_fails_without_mutation() {
    let mut session = InterviewSession::start(config_with_prompts(&["Q1"])).expect("session");
    session.submit("A1").expect("submit");
    assert!(session.is_complete());

    let len_before = session.transcript().len();

    let err = session.submit("one more thing").expect_err("should fail");
    assert_eq!(err, SessionError::SessionClosed);
    assert_eq!(session.transcript().len(), len_before);
    assert_eq!(session.status(), SessionStatus::Completed);

    // Completed is terminal: repeated attempts keep failing the same way
    let err = session.submit("again").expect_err("should fail");
    assert_eq!(err, SessionError::SessionClosed);
}

#[test]
fn test_transcript_sequences_are_contiguous() {
    let mut session =
        InterviewSession::start(config_with_prompts(&["Q1", "Q2", "Q3"])).expect("session");
    session.submit("A1").expect("submit");
    session.submit("A2").expect("submit");
    session.submit("A3").expect("submit");

    let turns = session.transcript().turns();
    assert_eq!(turns.len(), 7);
    for (i, turn) in turns.iter().enumerate() {
        assert_eq!(turn.sequence, i as u64);
        assert!(!turn.text.is_empty());
    }

    // Interviewer and candidate strictly alternate until the closing turn
    for pair in turns.windows(2) {
        assert_ne!(pair[0].speaker, pair[1].speaker);
    }
}

#[test]
fn test_advancement_is_content_blind() {
    let script = ["Q1", "Q2", "Q3"];

    let mut a = InterviewSession::start(config_with_prompts(&script)).expect("session");
    let mut b = InterviewSession::start(config_with_prompts(&script)).expect("session");

    let next_a = a.submit("a short answer").expect("submit");
    let next_b = b
        .submit("a completely different, much longer answer about Q3 and Q2")
        .expect("submit");

    // The answer never influences which prompt comes next
    assert_eq!(next_a.interviewer_turn.text, next_b.interviewer_turn.text);
}

#[test]
fn test_stats_track_progress() {
    let mut session = InterviewSession::start(config_with_prompts(&["Q1", "Q2"])).expect("session");

    let stats = session.stats();
    assert_eq!(stats.status, SessionStatus::InProgress);
    assert_eq!(stats.prompts_total, 2);
    assert_eq!(stats.prompts_answered, 0);
    assert_eq!(stats.transcript_turns, 1);
    assert!(stats.duration_secs >= 0.0);

    session.submit("A1").expect("submit");
    session.submit("A2").expect("submit");

    let stats = session.stats();
    assert_eq!(stats.status, SessionStatus::Completed);
    assert_eq!(stats.prompts_answered, 2);
    assert_eq!(stats.transcript_turns, 5);
}
