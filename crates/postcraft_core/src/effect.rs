use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Generate {
        request_id: crate::RequestId,
        request: crate::GenerationRequest,
    },
    CopyToClipboard { text: String },
    ScheduleCopyReset {
        copy_id: crate::CopyId,
        after: Duration,
    },
    ScheduleNotificationExpiry {
        notification_id: crate::NotificationId,
        after: Duration,
    },
}
