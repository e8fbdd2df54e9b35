use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message shown by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
    pub closable: bool,
}

impl Notification {
    pub const DEFAULT_DURATION_MS: u64 = 4000;

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }

    fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            duration_ms: Self::DEFAULT_DURATION_MS,
            closable: true,
        }
    }
}

/// Shows notifications on the rendering surface.
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notification: Notification);
}
