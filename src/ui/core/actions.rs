//! Actions delivered from background tasks to the UI loop.

use crate::records::Record;

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A user-visible outcome. The core raises these; the toast overlay
/// renders them.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Info)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Success)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, Severity::Error)
    }

    fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Results flowing back from background fetch/commit tasks.
#[derive(Debug, Clone)]
pub enum Action {
    /// A fetch or post-commit refresh produced a fresh collection;
    /// replaces the store contents wholesale.
    RecordsLoaded(Vec<Record>),
    /// A load/refresh cycle ended (success or failure); clears loading.
    FetchFinished,
    /// A commit cycle ended (success or failure); clears loading and
    /// runs the gesture cleanup so no drag state outlives its commit.
    CommitFinished,
    /// A user-visible outcome to toast.
    Notify(Notification),
}
