//! Transient user notices via desktop notifications.
//!
//! The `format` command runs from a hotkey with no terminal attached, so
//! progress and errors surface as desktop notifications. Delivery is
//! best-effort: a notification daemon that is missing or broken must never
//! fail the clipboard flow, so errors fall back to stderr.

use notify_rust::Notification;

/// How loudly to present a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    fn summary(self) -> &'static str {
        match self {
            Severity::Info => "clipform",
            Severity::Success => "clipform ✓",
            Severity::Error => "clipform — error",
        }
    }
}

/// Post a desktop notification. Failures degrade to stderr.
pub fn notify(severity: Severity, message: &str) {
    let mut notification = Notification::new();
    notification.summary(severity.summary()).body(message);

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        use notify_rust::Urgency;
        let urgency = match severity {
            Severity::Info | Severity::Success => Urgency::Normal,
            Severity::Error => Urgency::Critical,
        };
        notification.urgency(urgency);
    }

    if let Err(e) = notification.show() {
        eprintln!("{}: {} (notification failed: {})", severity.summary(), message, e);
    }
}
