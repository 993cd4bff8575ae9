//! Postcraft core: pure form/state machine and view-model helpers.
mod effect;
mod msg;
mod notification;
mod outcome;
mod request;
mod state;
mod tone;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use notification::{Notification, NotificationId, NotificationKind, NOTIFICATION_WINDOW};
pub use outcome::{CopyFailure, GenerationFailure, UserError, ValidationError};
pub use request::{GenerationRequest, MIN_TOPIC_CHARS};
pub use state::{AppState, CopyId, RequestId, COPY_FEEDBACK_WINDOW};
pub use tone::{Tone, UnknownTone};
pub use update::update;
pub use view_model::{AppViewModel, NotificationView};
