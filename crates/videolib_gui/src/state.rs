//! Window-side view model.
//!
//! # Responsibility
//! - Mirror the controller's last `AppState` for rendering.
//! - Hold the editable form buffers and the open modal dialog.
//! - Turn widget interaction into `UiRequest`s and dialog answers into
//!   `DialogReply`s.
//!
//! # Invariants
//! - While a dialog is open or a command runs, no new request is produced.
//! - Form buffers follow the controller only when no request is in flight,
//!   so typing is never overwritten by an older snapshot.

use crate::bridge::{AppMessage, DialogReply, DialogRequest, UiRequest};
use videolib_core::{AppState, Command, FormField, FormState, VideoStatus, NOT_ISSUED_CARD_ID};

/// Modal dialog waiting for an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDialog {
    pub request: DialogRequest,
    /// Text typed into an `AskText` dialog.
    pub text: String,
}

#[derive(Debug, Default)]
pub struct UiModel {
    /// Last snapshot from the controller thread.
    pub state: AppState,
    /// Form buffers bound to the text inputs.
    pub form: FormState,
    pub dialog: Option<OpenDialog>,
    /// A command is running on the controller thread.
    pub busy: bool,
    pub fatal: Option<String>,
    in_flight: usize,
}

impl UiModel {
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::State(state) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.in_flight == 0 {
                    self.form = state.form.clone();
                }
                self.state = state;
            }
            AppMessage::Dialog(request) => {
                self.dialog = Some(OpenDialog {
                    request,
                    text: String::new(),
                });
            }
            AppMessage::CommandFinished => self.busy = false,
            AppMessage::Fatal(message) => self.fatal = Some(message),
        }
    }

    /// Widgets accept input only when nothing is pending.
    pub fn is_interactive(&self) -> bool {
        self.dialog.is_none() && !self.busy && self.fatal.is_none()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    /// Stores a typed value and forwards it; the id is read-only during an update.
    pub fn edit_field(&mut self, field: FormField, value: String) -> Option<UiRequest> {
        if !self.is_interactive() || (field == FormField::VideoId && self.is_editing()) {
            return None;
        }
        let slot = match field {
            FormField::VideoName => &mut self.form.video_name,
            FormField::VideoId => &mut self.form.video_id,
            FormField::DirectorName => &mut self.form.director_name,
        };
        slot.clone_from(&value);
        Some(self.send(UiRequest::SetField(field, value)))
    }

    pub fn pick_status(&mut self, status: VideoStatus) -> Option<UiRequest> {
        if !self.is_interactive() || self.form.status == status {
            return None;
        }
        self.form.status = status;
        Some(self.send(UiRequest::SetStatus(status)))
    }

    pub fn select_row(&mut self, index: usize) -> Option<UiRequest> {
        if !self.is_interactive() || self.state.selected == Some(index) {
            return None;
        }
        Some(self.send(UiRequest::Select(index)))
    }

    /// Starts a command; the window stays locked until `CommandFinished`.
    pub fn run(&mut self, command: Command) -> Option<UiRequest> {
        if !self.is_interactive() || !self.command_enabled(command) {
            return None;
        }
        self.busy = true;
        Some(self.send(UiRequest::Run(command)))
    }

    /// Buttons shown for the current mode.
    pub fn command_enabled(&self, command: Command) -> bool {
        let editing = self.is_editing();
        match command {
            Command::ConfirmUpdate | Command::CancelUpdate => editing,
            Command::Refresh => true,
            Command::Add
            | Command::View
            | Command::BeginUpdate
            | Command::DeleteSelected
            | Command::DeleteAll
            | Command::ToggleAvailability
            | Command::ClearFields => !editing,
        }
    }

    /// Issuer card id of the form, or the "not issued" sentinel.
    pub fn issuer_card_label(&self) -> &str {
        let card_id = self.form.issuer_card_id.trim();
        if card_id.is_empty() {
            NOT_ISSUED_CARD_ID
        } else {
            card_id
        }
    }

    /// Closes the dialog with "Yes"/"OK"/"Submit" (`accepted`) or "No"/"Cancel".
    pub fn answer_dialog(&mut self, accepted: bool) -> Option<DialogReply> {
        let dialog = self.dialog.take()?;
        let reply = match dialog.request {
            DialogRequest::Confirm { .. } => DialogReply::Confirmed(accepted),
            DialogRequest::AskText { .. } => DialogReply::Text(accepted.then_some(dialog.text)),
            DialogRequest::Notice(_) => DialogReply::Acknowledged,
        };
        Some(reply)
    }

    fn send(&mut self, request: UiRequest) -> UiRequest {
        self.in_flight += 1;
        request
    }
}
