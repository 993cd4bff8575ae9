use std::sync::Once;

use postcraft_core::{
    update, AppState, CopyFailure, CopyId, Effect, Msg, NotificationKind, Tone, UserError,
    ValidationError, COPY_FEEDBACK_WINDOW,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(postcraft_logging::initialize_for_tests);
}

fn with_post(post: &str) -> AppState {
    let (state, _) = update(AppState::new(), Msg::TopicChanged("Remote work tips".into()));
    let (state, _) = update(state, Msg::ToneSelected(Tone::Casual));
    let (state, _) = update(state, Msg::GenerateClicked);
    let request_id = state.in_flight().unwrap();
    let (state, _) = update(
        state,
        Msg::GenerationDone {
            request_id,
            result: Ok(post.to_string()),
        },
    );
    state
}

fn copy_succeeded(state: AppState) -> (AppState, CopyId) {
    let (state, effects) = update(state, Msg::CopyDone { result: Ok(()) });
    let copy_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleCopyReset { copy_id, after } => {
                assert_eq!(*after, COPY_FEEDBACK_WINDOW);
                Some(*copy_id)
            }
            _ => None,
        })
        .expect("copy reset scheduled");
    (state, copy_id)
}

#[test]
fn copy_with_empty_post_never_touches_clipboard() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::CopyClicked);

    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::CopyToClipboard { .. })));
    assert!(!state.copied());
    assert_eq!(
        state.last_error(),
        Some(&UserError::Validation(ValidationError::NothingToCopy))
    );
    assert_eq!(state.notification().unwrap().title, "Nothing to Copy");
}

#[test]
fn copy_requests_clipboard_write_of_current_post() {
    init_logging();
    let (_state, effects) = update(with_post("Hello network"), Msg::CopyClicked);

    assert_eq!(
        effects,
        vec![Effect::CopyToClipboard {
            text: "Hello network".to_string()
        }]
    );
}

#[test]
fn copied_flag_set_then_reset_after_window() {
    init_logging();
    let (state, copy_id) = copy_succeeded(with_post("post"));
    assert!(state.copied());
    assert!(state.view().copied);
    assert_eq!(state.notification().unwrap().kind, NotificationKind::Success);

    let (state, effects) = update(state, Msg::CopyResetElapsed { copy_id });
    assert!(effects.is_empty());
    assert!(!state.copied());
}

#[test]
fn second_copy_restarts_window() {
    init_logging();
    let (state, first) = copy_succeeded(with_post("post"));
    let (state, second) = copy_succeeded(state);
    assert_ne!(first, second);

    // The first window elapsing must not cut the second one short.
    let (state, _) = update(state, Msg::CopyResetElapsed { copy_id: first });
    assert!(state.copied());

    let (state, _) = update(state, Msg::CopyResetElapsed { copy_id: second });
    assert!(!state.copied());
}

#[test]
fn clipboard_failure_reports_error_without_copied_flag() {
    init_logging();
    let (state, effects) = update(
        with_post("post"),
        Msg::CopyDone {
            result: Err(CopyFailure {
                reason: "no display".to_string(),
            }),
        },
    );

    assert!(!state.copied());
    assert!(matches!(
        state.last_error(),
        Some(UserError::Copy(CopyFailure { .. }))
    ));
    let notification = state.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.title, "Copy Failed");
    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::ScheduleCopyReset { .. })));
}

#[test]
fn notification_expires_only_for_current_id() {
    init_logging();
    let state = with_post("post");
    let stale_id = state.notification().unwrap().id;
    let (state, _) = copy_succeeded(state);
    let current_id = state.notification().unwrap().id;

    let (state, _) = update(
        state,
        Msg::NotificationExpired {
            notification_id: stale_id,
        },
    );
    assert!(state.notification().is_some());

    let (state, _) = update(
        state,
        Msg::NotificationExpired {
            notification_id: current_id,
        },
    );
    assert!(state.notification().is_none());
}

#[test]
fn notification_can_be_dismissed() {
    init_logging();
    let (state, _) = update(with_post("post"), Msg::NotificationDismissed);
    assert!(state.notification().is_none());
    assert!(state.view().notification.is_none());
}

#[test]
fn copy_stays_pending_until_clipboard_reports_back() {
    init_logging();
    let state = with_post("Hello LinkedIn");
    assert!(!state.is_copying());

    let (state, effects) = update(state, Msg::CopyClicked);
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::CopyToClipboard { .. })));
    assert!(state.is_copying());

    let (state, _) = update(
        state,
        Msg::CopyDone {
            result: Err(CopyFailure {
                reason: "no display".to_string(),
            }),
        },
    );
    assert!(!state.is_copying());
}

#[test]
fn rejected_copy_is_never_pending() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::CopyClicked);

    assert!(!state.is_copying());
}
