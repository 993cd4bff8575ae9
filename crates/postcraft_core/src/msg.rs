#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the topic input.
    TopicChanged(String),
    /// User picked a tone.
    ToneSelected(crate::Tone),
    /// User clicked Generate.
    GenerateClicked,
    /// User pressed Enter in the topic input.
    TopicSubmitted,
    /// Generation client resolved a request.
    GenerationDone {
        request_id: crate::RequestId,
        result: Result<String, crate::GenerationFailure>,
    },
    /// User clicked Copy.
    CopyClicked,
    /// Clipboard write finished (fallback already attempted on failure).
    CopyDone {
        result: Result<(), crate::CopyFailure>,
    },
    /// The "Copied!" display window elapsed.
    CopyResetElapsed { copy_id: crate::CopyId },
    /// User clicked Clear.
    ClearClicked,
    /// Auto-dismiss timer for a notification fired.
    NotificationExpired {
        notification_id: crate::NotificationId,
    },
    /// User dismissed the visible notification.
    NotificationDismissed,
}
