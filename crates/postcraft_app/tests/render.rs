use postcraft_app::render;
use postcraft_core::{AppViewModel, NotificationKind, NotificationView, Tone};

#[test]
fn idle_view_shows_defaults() {
    let frame = render(&AppViewModel::default());

    assert!(frame.contains("Topic: (none)"));
    assert!(frame.contains("Tone:  Professional"));
    assert!(frame.contains("Status: Ready"));
    assert!(!frame.contains("Your post"));
}

#[test]
fn post_is_shown_with_badge_and_copy_state() {
    let view = AppViewModel {
        topic: "Remote work tips".to_string(),
        tone: Tone::Casual,
        current_post: "Work from anywhere.".to_string(),
        tone_badge: Some(Tone::Casual),
        copy_enabled: true,
        copied: true,
        ..AppViewModel::default()
    };

    let frame = render(&view);

    assert!(frame.contains("Your post [Casual]"));
    assert!(frame.contains("Work from anywhere."));
    assert!(frame.contains("Copied!"));
}

#[test]
fn copy_hint_follows_copy_enabled() {
    let mut view = AppViewModel {
        current_post: "Work from anywhere.".to_string(),
        copy_enabled: true,
        ..AppViewModel::default()
    };
    assert!(render(&view).contains("/copy to copy"));

    view.copy_enabled = false;
    let frame = render(&view);
    assert!(frame.contains("Work from anywhere."));
    assert!(!frame.contains("/copy to copy"));
}

#[test]
fn generating_and_error_notification_are_visible() {
    let view = AppViewModel {
        topic: "ab".to_string(),
        topic_warning: true,
        is_generating: true,
        notification: Some(NotificationView {
            kind: NotificationKind::Error,
            title: "Generation Failed".to_string(),
            message: "HTTP error! status: 500".to_string(),
        }),
        ..AppViewModel::default()
    };

    let frame = render(&view);

    assert!(frame.contains("Generating your post..."));
    assert!(frame.contains("at least 3 characters needed"));
    assert!(frame.contains("[error] Generation Failed: HTTP error! status: 500"));
}
