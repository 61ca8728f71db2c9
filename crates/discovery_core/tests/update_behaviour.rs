use std::sync::Once;
use std::time::Duration;

use discovery_core::{
    update, validate_submission, AppState, Effect, InvalidSubmission, Msg, SearchError,
    SearchPhase, StageStatus,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(discovery_logging::initialize_for_tests);
}

fn submit_query(state: AppState, query: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::QueryChanged(query.to_string()));
    update(state, Msg::SearchSubmitted)
}

#[test]
fn form_defaults_to_english() {
    let view = AppState::new().view();

    assert_eq!(view.phase, SearchPhase::Idle);
    assert_eq!(view.query, "");
    assert_eq!(view.selected_languages, vec!["en".to_string()]);
    assert!(!view.dirty);
}

#[test]
fn submit_starts_first_stage_and_requests_search() {
    init_logging();
    let (mut state, effects) = submit_query(AppState::new(), "  DP in C++  ");
    let view = state.view();

    assert_eq!(view.phase, SearchPhase::Processing);
    assert_eq!(view.submitted_query.as_deref(), Some("DP in C++"));
    assert_eq!(view.current_stage, 0);
    assert_eq!(view.stage_progress, 0);
    assert_eq!(view.stages[0].status, StageStatus::Active);
    assert_eq!(view.stages[1].status, StageStatus::Pending);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
    assert_eq!(
        effects,
        vec![
            Effect::SearchRequested {
                run_id: 1,
                query: "DP in C++".to_string(),
                languages: vec!["en".to_string()],
            },
            Effect::ProgressChanged {
                run_id: 1,
                stage_index: 0,
                percent: 0,
            },
            Effect::ScheduleTimer {
                run_id: 1,
                delay: Duration::from_millis(75),
            },
        ]
    );
}

#[test]
fn blank_query_never_starts_a_run() {
    init_logging();
    let (state, effects) = submit_query(AppState::new(), "   \t ");
    let view = state.view();

    assert_eq!(view.phase, SearchPhase::Idle);
    assert!(effects.is_empty());
    assert_eq!(state.active_run(), None);
    assert_eq!(
        view.last_error,
        Some(SearchError::InvalidSubmission(InvalidSubmission::EmptyQuery))
    );
}

#[test]
fn deselecting_every_language_blocks_submission() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LanguageToggled("en".to_string()));
    assert!(state.view().selected_languages.is_empty());

    let (state, effects) = submit_query(state, "rust async");

    assert_eq!(state.phase(), SearchPhase::Idle);
    assert!(effects.is_empty());
    assert_eq!(
        state.view().last_error,
        Some(SearchError::InvalidSubmission(InvalidSubmission::NoLanguages))
    );
}

#[test]
fn language_toggle_keeps_selection_order_and_ignores_unknown_codes() {
    let (state, _) = update(AppState::new(), Msg::LanguageToggled("hi".to_string()));
    let (state, _) = update(state, Msg::LanguageToggled("JA".to_string()));
    let (mut state, _) = update(state, Msg::LanguageToggled("xx".to_string()));

    assert_eq!(
        state.view().selected_languages,
        vec!["en".to_string(), "hi".to_string(), "ja".to_string()]
    );
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::LanguageToggled("xx".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn programmatic_submission_validates_languages() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::SubmitSearch {
            query: "graphs".to_string(),
            languages: vec!["en".to_string(), "klingon".to_string()],
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.phase(), SearchPhase::Idle);
    assert_eq!(
        state.view().last_error,
        Some(SearchError::InvalidSubmission(
            InvalidSubmission::UnknownLanguage("klingon".to_string())
        ))
    );
}

#[test]
fn validation_normalizes_and_dedupes_codes() {
    let request = validate_submission(" trees ", &["EN", "hi", "en"]).unwrap();

    assert_eq!(request.query, "trees");
    assert_eq!(request.languages, vec!["en".to_string(), "hi".to_string()]);
    assert_eq!(
        validate_submission::<&str>("trees", &[]),
        Err(InvalidSubmission::NoLanguages)
    );
}

#[test]
fn resubmitting_mid_run_cancels_and_restarts() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "first");
    let (state, _) = update(state, Msg::TimerFired { run_id: 1 });
    let (state, _) = update(state, Msg::TimerFired { run_id: 1 });
    assert_eq!(state.view().stage_progress, 10);

    let (state, effects) = update(
        state,
        Msg::SubmitSearch {
            query: "second".to_string(),
            languages: vec!["fr".to_string()],
        },
    );
    let view = state.view();

    assert_eq!(effects[0], Effect::CancelTimer);
    assert_eq!(
        effects.last(),
        Some(&Effect::ScheduleTimer {
            run_id: 2,
            delay: Duration::from_millis(75),
        })
    );
    assert_eq!(state.active_run(), Some(2));
    assert_eq!(view.current_stage, 0);
    assert_eq!(view.stage_progress, 0);
    assert_eq!(view.submitted_query.as_deref(), Some("second"));
    assert_eq!(
        view.last_error,
        Some(SearchError::RunAlreadyActive { active: 1 })
    );
}

#[test]
fn stale_timer_from_replaced_run_changes_nothing() {
    init_logging();
    let (state, _) = submit_query(AppState::new(), "first");
    let (state, _) = submit_query(state, "second");
    let (mut state, _) = update(state, Msg::TimerFired { run_id: 2 });
    assert!(state.consume_dirty());
    let before = state.clone();

    let (next, effects) = update(state, Msg::TimerFired { run_id: 1 });

    assert!(effects.is_empty());
    assert_eq!(next, before);
}

#[test]
fn new_search_mid_run_cancels_timer_and_resets_form() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LanguageToggled("de".to_string()));
    let (state, _) = submit_query(state, "compilers");
    let (state, _) = update(state, Msg::TimerFired { run_id: 1 });

    let (state, effects) = update(state, Msg::NewSearchClicked);
    let view = state.view();

    assert_eq!(effects, vec![Effect::CancelTimer]);
    assert_eq!(view.phase, SearchPhase::Idle);
    assert_eq!(view.query, "");
    assert_eq!(view.selected_languages, vec!["en".to_string()]);
    assert_eq!(view.stage_progress, 0);
    assert_eq!(state.active_run(), None);

    let (_, effects) = update(state, Msg::TimerFired { run_id: 1 });
    assert!(effects.is_empty());
}
