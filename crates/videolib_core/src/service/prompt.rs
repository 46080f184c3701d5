//! Blocking user-prompt capability consumed by the controller.
//!
//! # Responsibility
//! - Abstract yes/no confirmation, free-text input and notifications.
//!
//! # Invariants
//! - Every call returns only after the user has answered.

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Message shown to the user in a blocking notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Presentation-side dialogs.
///
/// Implementations may block on a modal window or answer from a test script.
pub trait Prompt {
    /// Asks a yes/no question. `true` means the user confirmed.
    fn confirm(&mut self, title: &str, question: &str) -> bool;
    /// Asks for free text. `None` means the user cancelled the dialog.
    fn ask_text(&mut self, title: &str, prompt: &str) -> Option<String>;
    fn notify(&mut self, notice: Notice);
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn confirm(&mut self, title: &str, question: &str) -> bool {
        (**self).confirm(title, question)
    }

    fn ask_text(&mut self, title: &str, prompt: &str) -> Option<String> {
        (**self).ask_text(title, prompt)
    }

    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice)
    }
}
