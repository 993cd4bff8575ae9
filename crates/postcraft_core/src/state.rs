use std::time::Duration;

use crate::request::is_topic_too_short;
use crate::view_model::{AppViewModel, NotificationView};
use crate::{
    Effect, GenerationRequest, Notification, NotificationId, NotificationKind, Tone, UserError,
    NOTIFICATION_WINDOW,
};

pub type RequestId = u64;
pub type CopyId = u64;

/// How long the "Copied!" confirmation stays visible.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Generating { request_id: RequestId, tone: Tone },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    topic: String,
    tone: Tone,
    topic_warning: bool,
    phase: Phase,
    current_post: String,
    post_tone: Option<Tone>,
    copied: bool,
    copies_in_flight: usize,
    copy_id: CopyId,
    notification: Option<Notification>,
    last_error: Option<UserError>,
    next_request_id: RequestId,
    next_notification_id: NotificationId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let has_post = !self.current_post.is_empty();
        AppViewModel {
            topic: self.topic.clone(),
            tone: self.tone,
            topic_warning: self.topic_warning,
            is_generating: self.is_generating(),
            generate_enabled: !self.is_generating(),
            current_post: self.current_post.clone(),
            tone_badge: if has_post { self.post_tone } else { None },
            copy_enabled: has_post,
            copied: self.copied,
            notification: self.notification.as_ref().map(|n| NotificationView {
                kind: n.kind,
                title: n.title.clone(),
                message: n.message.clone(),
            }),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.phase, Phase::Generating { .. })
    }

    /// Id of the request currently in flight, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        match self.phase {
            Phase::Generating { request_id, .. } => Some(request_id),
            Phase::Idle => None,
        }
    }

    pub fn current_post(&self) -> &str {
        &self.current_post
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    /// A clipboard write has been requested and not yet reported back.
    pub fn is_copying(&self) -> bool {
        self.copies_in_flight > 0
    }

    pub fn topic_warning(&self) -> bool {
        self.topic_warning
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn last_error(&self) -> Option<&UserError> {
        self.last_error.as_ref()
    }

    /// Returns whether the state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_topic(&mut self, topic: String) {
        self.topic_warning = is_topic_too_short(&topic);
        self.topic = topic;
        self.mark_dirty();
    }

    pub(crate) fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
        self.mark_dirty();
    }

    pub(crate) fn begin_request(&mut self, request: &GenerationRequest) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.phase = Phase::Generating {
            request_id,
            tone: request.tone(),
        };
        self.mark_dirty();
        request_id
    }

    /// Returns the tone captured at dispatch when `request_id` is the one in flight.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> Option<Tone> {
        match self.phase {
            Phase::Generating {
                request_id: current,
                tone,
            } if current == request_id => {
                self.phase = Phase::Idle;
                self.mark_dirty();
                Some(tone)
            }
            _ => None,
        }
    }

    pub(crate) fn set_post(&mut self, post: String, tone: Tone) {
        self.current_post = post;
        self.post_tone = Some(tone);
        self.last_error = None;
        self.mark_dirty();
    }

    pub(crate) fn set_error(&mut self, error: UserError) {
        self.last_error = Some(error);
        self.mark_dirty();
    }

    pub(crate) fn begin_copy(&mut self) {
        self.copies_in_flight += 1;
    }

    pub(crate) fn finish_copy(&mut self) {
        self.copies_in_flight = self.copies_in_flight.saturating_sub(1);
    }

    pub(crate) fn begin_copy_window(&mut self) -> CopyId {
        self.copy_id += 1;
        self.copied = true;
        self.last_error = None;
        self.mark_dirty();
        self.copy_id
    }

    pub(crate) fn end_copy_window(&mut self, copy_id: CopyId) {
        if self.copied && copy_id == self.copy_id {
            self.copied = false;
            self.mark_dirty();
        }
    }

    /// Replaces the visible notification and returns its expiry effect.
    pub(crate) fn notify(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Effect {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notification = Some(Notification {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        });
        self.mark_dirty();
        Effect::ScheduleNotificationExpiry {
            notification_id: id,
            after: NOTIFICATION_WINDOW,
        }
    }

    pub(crate) fn expire_notification(&mut self, notification_id: NotificationId) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.id == notification_id)
        {
            self.notification = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Back to the initial form. An in-flight request keeps running.
    pub(crate) fn reset_form(&mut self) {
        self.topic.clear();
        self.tone = Tone::default();
        self.topic_warning = false;
        self.current_post.clear();
        self.post_tone = None;
        self.copied = false;
        self.last_error = None;
        self.mark_dirty();
    }
}
