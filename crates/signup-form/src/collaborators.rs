// File: src/collaborators.rs
// Purpose: Narrow interfaces to the notifier and navigator the form drives

use std::sync::Arc;

use crate::registration::Registration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast/alert request: kind, title and description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Presents notices to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Screen navigation
pub trait Navigator: Send + Sync {
    /// The user asked to return to the previous screen
    fn go_back(&self);

    /// Leave the form after a completed registration
    fn return_to_sign_in(&self);
}

/// Everything outside the form that a submission talks to
#[derive(Clone)]
pub struct Collaborators {
    pub registration: Arc<dyn Registration>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

impl Collaborators {
    pub fn new(
        registration: Arc<dyn Registration>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            registration,
            notifier,
            navigator,
        }
    }
}
