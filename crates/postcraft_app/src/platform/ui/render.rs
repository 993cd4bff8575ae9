use std::fmt::Write;

use postcraft_core::{AppViewModel, NotificationKind, MIN_TOPIC_CHARS};

const RULE: &str = "----------------------------------------";

/// Renders the view model as a block of terminal text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let topic = if view.topic.trim().is_empty() {
        "(none)"
    } else {
        view.topic.as_str()
    };

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Topic: {topic}");
    if view.topic_warning {
        let _ = writeln!(out, "  ! at least {MIN_TOPIC_CHARS} characters needed");
    }
    let _ = writeln!(out, "Tone:  {}", view.tone);

    let status = if view.is_generating {
        "Generating your post..."
    } else {
        "Ready"
    };
    let _ = writeln!(out, "Status: {status}");

    if !view.current_post.is_empty() {
        let badge = view
            .tone_badge
            .map(|tone| format!(" [{tone}]"))
            .unwrap_or_default();
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Your post{badge}");
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", view.current_post);
        let _ = writeln!(out);
        if view.copied {
            let _ = writeln!(out, "Copied!");
        } else if view.copy_enabled {
            let _ = writeln!(out, "/copy to copy");
        }
    }

    if let Some(notification) = &view.notification {
        let marker = match notification.kind {
            NotificationKind::Success => "[ok]",
            NotificationKind::Error => "[error]",
            NotificationKind::Info => "[info]",
        };
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(
            out,
            "{marker} {}: {}",
            notification.title, notification.message
        );
    }

    let _ = write!(out, "{RULE}");
    out
}
