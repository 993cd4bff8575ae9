use crate::{NotificationKind, Tone};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub topic: String,
    pub tone: Tone,
    /// Topic has content but is shorter than the minimum.
    pub topic_warning: bool,
    pub is_generating: bool,
    /// Front-ends disable the generate trigger while this is false.
    pub generate_enabled: bool,
    pub current_post: String,
    /// Tone the displayed post was generated with.
    pub tone_badge: Option<Tone>,
    pub copy_enabled: bool,
    pub copied: bool,
    pub notification: Option<NotificationView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}
