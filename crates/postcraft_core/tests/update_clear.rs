use postcraft_core::{update, AppState, AppViewModel, Effect, Msg, NotificationKind, Tone};
use pretty_assertions::assert_eq;

fn populated() -> AppState {
    let (state, _) = update(AppState::new(), Msg::TopicChanged("Remote work tips".into()));
    let (state, _) = update(state, Msg::ToneSelected(Tone::Casual));
    let (state, _) = update(state, Msg::GenerateClicked);
    let request_id = state.in_flight().unwrap();
    let (state, _) = update(
        state,
        Msg::GenerationDone {
            request_id,
            result: Ok("A post".to_string()),
        },
    );
    let (state, _) = update(state, Msg::CopyDone { result: Ok(()) });
    state
}

/// The parts of the view that `clear` is responsible for.
fn form(view: &AppViewModel) -> (String, Tone, bool, bool, String, Option<Tone>, bool) {
    (
        view.topic.clone(),
        view.tone,
        view.topic_warning,
        view.is_generating,
        view.current_post.clone(),
        view.tone_badge,
        view.copied,
    )
}

#[test]
fn clear_resets_form_to_initial_state() {
    let (state, effects) = update(populated(), Msg::ClearClicked);

    assert_eq!(form(&state.view()), form(&AppState::new().view()));
    assert_eq!(state.tone(), Tone::Professional);
    assert_eq!(state.last_error(), None);
    let notification = state.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Info);
    assert_eq!(notification.title, "Cleared");
    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleNotificationExpiry { .. }]
    ));
}

#[test]
fn clear_is_idempotent() {
    let (once, _) = update(populated(), Msg::ClearClicked);
    let (twice, _) = update(once.clone(), Msg::ClearClicked);

    assert_eq!(form(&once.view()), form(&twice.view()));
}

#[test]
fn clear_resets_short_topic_warning() {
    let (state, _) = update(AppState::new(), Msg::TopicChanged("ab".into()));
    assert!(state.topic_warning());

    let (state, _) = update(state, Msg::ClearClicked);
    assert!(!state.topic_warning());
}

#[test]
fn clear_during_flight_keeps_request_alive() {
    let (state, _) = update(AppState::new(), Msg::TopicChanged("Remote work tips".into()));
    let (state, _) = update(state, Msg::GenerateClicked);
    let request_id = state.in_flight().unwrap();

    let (state, _) = update(state, Msg::ClearClicked);
    assert!(state.is_generating());

    let (state, _) = update(
        state,
        Msg::GenerationDone {
            request_id,
            result: Ok("late post".to_string()),
        },
    );
    assert!(!state.is_generating());
    assert_eq!(state.current_post(), "late post");
}
