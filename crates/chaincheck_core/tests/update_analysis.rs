use std::time::Duration;

use chaincheck_core::{
    content, update, AnalysisStatus, AnalysisTicket, AppState, Effect, InputMode, Msg,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    chaincheck_logging::initialize_for_tests();
}

fn scheduled_ticket(effects: &[Effect]) -> AnalysisTicket {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleAnalysisReset { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("reset effect")
}

#[test]
fn analyze_moves_idle_to_running_in_same_update() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.status(), AnalysisStatus::Idle);

    let (state, effects) = update(state, Msg::AnalyzeClicked);

    assert_eq!(state.status(), AnalysisStatus::Running);
    assert_eq!(
        effects,
        vec![Effect::ScheduleAnalysisReset {
            ticket: 1,
            delay: Duration::from_millis(3000),
        }]
    );
    let view = state.view();
    assert!(view.dirty);
    assert!(view.show_scanning_banner);
    assert!(view.analyze_button.busy);
    assert!(!view.analyze_button.enabled);
    assert_eq!(view.analyze_button.label, content::ANALYZING_LABEL);
}

#[test]
fn elapsed_delay_returns_to_idle_and_nothing_else() {
    init_logging();
    let (running, effects) = update(AppState::new(), Msg::AnalyzeClicked);
    let ticket = scheduled_ticket(&effects);

    let before = running.view();
    let (mut idle, effects) = update(running, Msg::AnalysisDelayElapsed { ticket });
    let after = idle.view();

    assert!(effects.is_empty());
    assert_eq!(idle.status(), AnalysisStatus::Idle);
    assert_eq!(idle.pending_ticket(), None);
    assert_eq!(after.analyze_button.label, content::ANALYZE_LABEL);
    assert!(after.analyze_button.enabled);
    assert!(!after.show_scanning_banner);
    // Input side is exactly what it was while running.
    assert_eq!(before.mode, after.mode);
    assert_eq!(before.text, after.text);
    assert_eq!(before.url, after.url);
    assert_eq!(before.file_label, after.file_label);
    assert!(idle.consume_dirty());
}

#[test]
fn analyze_while_running_is_inert() {
    init_logging();
    let (mut running, _) = update(AppState::new(), Msg::AnalyzeClicked);
    assert!(running.consume_dirty());
    let snapshot = running.clone();

    let (mut next, effects) = update(running, Msg::AnalyzeClicked);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, snapshot);
}

#[test]
fn stale_reset_is_ignored() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::AnalyzeClicked);
    let first = scheduled_ticket(&effects);
    let (state, _) = update(state, Msg::AnalysisDelayElapsed { ticket: first });

    let (mut state, effects) = update(state, Msg::AnalyzeClicked);
    let second = scheduled_ticket(&effects);
    assert_ne!(first, second);
    assert!(state.consume_dirty());

    // A late duplicate of the first reset must not end the second run.
    let (mut state, effects) = update(state, Msg::AnalysisDelayElapsed { ticket: first });
    assert!(effects.is_empty());
    assert_eq!(state.status(), AnalysisStatus::Running);
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::AnalysisDelayElapsed { ticket: second });
    assert_eq!(state.status(), AnalysisStatus::Idle);
}

#[test]
fn reset_while_idle_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::AnalysisDelayElapsed { ticket: 1 });

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn configured_delay_is_carried_by_effect() {
    init_logging();
    let delay = Duration::from_millis(250);
    let (_, effects) = update(AppState::with_analysis_delay(delay), Msg::AnalyzeClicked);

    assert_eq!(
        effects,
        vec![Effect::ScheduleAnalysisReset { ticket: 1, delay }]
    );
}

#[test]
fn trigger_ignores_input_and_leaves_it_untouched() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.input().text(), "");

    let (state, _) = update(state, Msg::TextChanged("hello".to_string()));
    assert_eq!(state.input().text(), "hello");

    let (state, effects) = update(state, Msg::AnalyzeClicked);
    assert_eq!(state.status(), AnalysisStatus::Running);
    assert_eq!(state.input().text(), "hello");
    let ticket = scheduled_ticket(&effects);

    let (state, _) = update(state, Msg::AnalysisDelayElapsed { ticket });
    assert_eq!(state.status(), AnalysisStatus::Idle);
    assert_eq!(state.input().text(), "hello");
    assert_eq!(state.input().mode(), InputMode::Text);
}

#[test]
fn editing_while_running_is_allowed() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::AnalyzeClicked);
    let ticket = scheduled_ticket(&effects);

    let (state, _) = update(state, Msg::ModeSelected(InputMode::Url));
    let (state, _) = update(state, Msg::UrlChanged("https://example.com".to_string()));
    assert_eq!(state.status(), AnalysisStatus::Running);

    let (state, _) = update(state, Msg::AnalysisDelayElapsed { ticket });
    assert_eq!(state.status(), AnalysisStatus::Idle);
    assert_eq!(state.input().url(), "https://example.com");
}
