use crate::{
    AppState, CopyFailure, Effect, GenerationFailure, GenerationRequest, Msg, NotificationKind,
    RequestId, UserError, ValidationError, COPY_FEEDBACK_WINDOW,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TopicChanged(topic) => {
            state.set_topic(topic);
            Vec::new()
        }
        Msg::ToneSelected(tone) => {
            state.set_tone(tone);
            Vec::new()
        }
        Msg::GenerateClicked | Msg::TopicSubmitted => generate(&mut state),
        Msg::GenerationDone { request_id, result } => {
            generation_done(&mut state, request_id, result)
        }
        Msg::CopyClicked => {
            if state.current_post().is_empty() {
                vec![reject(&mut state, ValidationError::NothingToCopy)]
            } else {
                state.begin_copy();
                vec![Effect::CopyToClipboard {
                    text: state.current_post().to_string(),
                }]
            }
        }
        Msg::CopyDone { result } => copy_done(&mut state, result),
        Msg::CopyResetElapsed { copy_id } => {
            state.end_copy_window(copy_id);
            Vec::new()
        }
        Msg::ClearClicked => {
            state.reset_form();
            vec![state.notify(
                NotificationKind::Info,
                "Cleared",
                "Form cleared. Ready for a new post!",
            )]
        }
        Msg::NotificationExpired { notification_id } => {
            state.expire_notification(notification_id);
            Vec::new()
        }
        Msg::NotificationDismissed => {
            state.dismiss_notification();
            Vec::new()
        }
    };

    (state, effects)
}

fn generate(state: &mut AppState) -> Vec<Effect> {
    // The trigger is disabled while a request is in flight; a stray click is rejected.
    if state.is_generating() {
        return Vec::new();
    }

    match GenerationRequest::new(state.topic(), state.tone()) {
        Ok(request) => {
            let request_id = state.begin_request(&request);
            vec![Effect::Generate {
                request_id,
                request,
            }]
        }
        Err(err) => vec![reject(state, err)],
    }
}

fn generation_done(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<String, GenerationFailure>,
) -> Vec<Effect> {
    let Some(tone) = state.finish_request(request_id) else {
        return Vec::new();
    };

    match result {
        Ok(post) => {
            state.set_post(post, tone);
            vec![state.notify(
                NotificationKind::Success,
                "Success!",
                "Your LinkedIn post has been generated successfully.",
            )]
        }
        Err(failure) => {
            let message = failure.user_message();
            state.set_error(UserError::Generation(failure));
            vec![state.notify(NotificationKind::Error, "Generation Failed", message)]
        }
    }
}

fn copy_done(state: &mut AppState, result: Result<(), CopyFailure>) -> Vec<Effect> {
    state.finish_copy();
    match result {
        Ok(()) => {
            let copy_id = state.begin_copy_window();
            vec![
                Effect::ScheduleCopyReset {
                    copy_id,
                    after: COPY_FEEDBACK_WINDOW,
                },
                state.notify(
                    NotificationKind::Success,
                    "Copied!",
                    "Post copied to clipboard successfully.",
                ),
            ]
        }
        Err(failure) => {
            state.set_error(UserError::Copy(failure));
            vec![state.notify(
                NotificationKind::Error,
                "Copy Failed",
                "Unable to copy to clipboard. Please copy manually.",
            )]
        }
    }
}

fn reject(state: &mut AppState, err: ValidationError) -> Effect {
    state.set_error(UserError::Validation(err));
    state.notify(NotificationKind::Error, err.title(), err.message())
}
