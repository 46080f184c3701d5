//! Channel messages between the window and the controller thread.
//!
//! # Responsibility
//! - Define requests sent by the window and messages sent back to it.
//! - Implement the core `Prompt` capability as a blocking round-trip to the
//!   window's modal dialogs.
//!
//! # Invariants
//! - Every dialog request is answered by exactly one `DialogReply`.
//! - A closed window answers every pending question negatively.

use log::warn;
use std::sync::mpsc;
use std::sync::Arc;
use videolib_core::{AppState, Command, FormField, Notice, Prompt, VideoStatus};

/// Wakes the window so it drains new messages.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Window input forwarded to the controller thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiRequest {
    SetField(FormField, String),
    SetStatus(VideoStatus),
    Select(usize),
    Run(Command),
}

/// Controller-thread output drained by the window each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Snapshot after a request was applied.
    State(AppState),
    Dialog(DialogRequest),
    /// The last `UiRequest::Run` has returned.
    CommandFinished,
    /// The inventory cannot be used; shown instead of the main view.
    Fatal(String),
}

/// Modal dialog the controller is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogRequest {
    Confirm { title: String, question: String },
    AskText { title: String, prompt: String },
    Notice(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogReply {
    Confirmed(bool),
    /// `None` when the dialog was cancelled.
    Text(Option<String>),
    Acknowledged,
}

/// `Prompt` that blocks the controller thread until the window answers.
pub struct ChannelPrompt {
    messages: mpsc::Sender<AppMessage>,
    replies: mpsc::Receiver<DialogReply>,
    wake: Waker,
}

impl ChannelPrompt {
    pub fn new(
        messages: mpsc::Sender<AppMessage>,
        replies: mpsc::Receiver<DialogReply>,
        wake: Waker,
    ) -> Self {
        Self {
            messages,
            replies,
            wake,
        }
    }

    /// Sends a snapshot or status message to the window.
    pub fn post(&self, message: AppMessage) {
        if self.messages.send(message).is_err() {
            warn!("event=ui_post module=gui status=error error_code=window_closed");
        }
        (self.wake)();
    }

    fn ask(&mut self, request: DialogRequest) -> Option<DialogReply> {
        self.post(AppMessage::Dialog(request));
        match self.replies.recv() {
            Ok(reply) => Some(reply),
            Err(_) => {
                warn!("event=dialog_reply module=gui status=error error_code=window_closed");
                None
            }
        }
    }
}

impl Prompt for ChannelPrompt {
    fn confirm(&mut self, title: &str, question: &str) -> bool {
        let request = DialogRequest::Confirm {
            title: title.to_string(),
            question: question.to_string(),
        };
        matches!(self.ask(request), Some(DialogReply::Confirmed(true)))
    }

    fn ask_text(&mut self, title: &str, prompt: &str) -> Option<String> {
        let request = DialogRequest::AskText {
            title: title.to_string(),
            prompt: prompt.to_string(),
        };
        match self.ask(request) {
            Some(DialogReply::Text(text)) => text,
            _ => None,
        }
    }

    fn notify(&mut self, notice: Notice) {
        let _ = self.ask(DialogRequest::Notice(notice));
    }
}
