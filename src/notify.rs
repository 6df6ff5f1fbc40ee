// src/notify.rs
//! Fire-and-forget notification boundary
//!
//! Screens outside the monitor raise transient messages through this
//! seam. The monitor's own alert banner is an inline snapshot field and
//! does not pass through here.

use serde::{Deserialize, Serialize};

/// Notice severity, matching the client's toast variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    Default,
    Destructive,
}

/// One transient message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: NoticeSeverity,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NoticeSeverity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NoticeSeverity::Destructive,
        }
    }
}

/// Notification sink
pub trait Notifier: Send + Sync {
    /// Deliver a notice; delivery is best-effort and never fails
    fn notify(&self, notice: Notice);
}

/// Notifier that emits notices as tracing events
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            NoticeSeverity::Default => {
                tracing::info!(title = %notice.title, description = %notice.description, "notice")
            }
            NoticeSeverity::Destructive => {
                tracing::error!(title = %notice.title, description = %notice.description, "notice")
            }
        }
    }
}

/// Notifier that records notices for later inspection
#[derive(Default)]
pub struct RecordingNotifier {
    notices: parking_lot::Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_captures_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::success("Profile Updated", "Saved."));
        notifier.notify(Notice::destructive("Connection Error", "Connect first."));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].severity, NoticeSeverity::Default);
        assert_eq!(notices[1].title, "Connection Error");
    }
}
