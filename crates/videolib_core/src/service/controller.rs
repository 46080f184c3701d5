//! Interaction controller for the inventory window.
//!
//! # Responsibility
//! - Hold the form mirror, the displayed rows and the current selection.
//! - Run each user command to completion against the repository.
//! - Report every failure through [`Prompt::notify`].
//!
//! # Invariants
//! - The id field is read-only while an update is in progress.
//! - While editing, only field edits, selection, refresh, save and cancel run;
//!   the form keeps mirroring the record being edited.
//! - Store mutations happen only after every required prompt succeeded.
//! - Failed commands leave the store unchanged.

use crate::model::video::{is_usable_card_id, VideoRecord, VideoStatus, NOT_ISSUED_CARD_ID};
use crate::repo::video_repo::{RepoError, VideoChanges, VideoRepository};
use crate::service::prompt::{Notice, Prompt};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ISSUER_PROMPT_TITLE: &str = "Issuer Card ID";
const ISSUER_PROMPT_TEXT: &str = "Enter Issuer Card ID:";

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Errors surfaced to the user by controller commands.
#[derive(Debug)]
pub enum ControllerError {
    /// A required value was left empty; names the missing input.
    InputRequired(&'static str),
    /// The command needs a selected row.
    SelectionRequired,
    /// Add hit an existing video id.
    DuplicateKey(String),
    /// The targeted video no longer exists.
    NotFound(String),
    /// Command is unavailable while an update is in progress.
    EditInProgress,
    /// Update confirmation or cancel without a pending update.
    NotEditing,
    /// The id field cannot change while editing.
    FieldLocked,
    Repo(RepoError),
}

impl ControllerError {
    /// Short dialog title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InputRequired(_) => "Input required",
            Self::SelectionRequired => "Select a row!",
            Self::DuplicateKey(_) => "Video ID already exists!",
            Self::NotFound(_) => "Video not found",
            Self::EditInProgress | Self::NotEditing | Self::FieldLocked => "Not allowed",
            Self::Repo(_) => "Error!",
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::InputRequired(_) => "input_required",
            Self::SelectionRequired => "selection_required",
            Self::DuplicateKey(_) => "duplicate_key",
            Self::NotFound(_) => "not_found",
            Self::EditInProgress => "edit_in_progress",
            Self::NotEditing => "not_editing",
            Self::FieldLocked => "field_locked",
            Self::Repo(_) => "repo_error",
        }
    }
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputRequired(what) => write!(f, "please provide a valid {what}"),
            Self::SelectionRequired => write!(f, "please select a video in the table first"),
            Self::DuplicateKey(id) => write!(f, "video id `{id}` already exists"),
            Self::NotFound(id) => write!(f, "video `{id}` no longer exists"),
            Self::EditInProgress => write!(f, "finish or cancel the current update first"),
            Self::NotEditing => write!(f, "no update is in progress"),
            Self::FieldLocked => write!(f, "video id cannot change while updating a record"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ControllerError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicateKey(id) => Self::DuplicateKey(id),
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    VideoName,
    VideoId,
    DirectorName,
}

/// Transient, unvalidated mirror of the record being entered or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub video_name: String,
    pub video_id: String,
    pub director_name: String,
    pub status: VideoStatus,
    pub issuer_card_id: String,
}

impl FormState {
    fn load(&mut self, record: &VideoRecord) {
        self.video_name = record.video_name.clone();
        self.video_id = record.video_id.clone();
        self.director_name = record.director_name.clone();
        self.status = record.status;
        self.issuer_card_id = record.issuer_card_id.clone();
    }

    fn to_record(&self) -> VideoRecord {
        VideoRecord {
            video_name: self.video_name.clone(),
            video_id: self.video_id.clone(),
            director_name: self.director_name.clone(),
            status: self.status,
            issuer_card_id: self.issuer_card_id.clone(),
        }
    }
}

/// Whether an update is pending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    /// Holds the id captured when editing began.
    Editing { video_id: String },
}

/// Everything the presentation surface renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub form: FormState,
    /// Rows in store order, as last read by a refresh.
    pub rows: Vec<VideoRecord>,
    /// Index into `rows`.
    pub selected: Option<usize>,
    pub mode: EditMode,
}

impl AppState {
    pub fn selected_record(&self) -> Option<&VideoRecord> {
        self.selected.and_then(|index| self.rows.get(index))
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }
}

/// User commands mapped to window buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    View,
    BeginUpdate,
    ConfirmUpdate,
    CancelUpdate,
    DeleteSelected,
    DeleteAll,
    ToggleAvailability,
    ClearFields,
    Refresh,
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::View => "view",
            Self::BeginUpdate => "begin_update",
            Self::ConfirmUpdate => "confirm_update",
            Self::CancelUpdate => "cancel_update",
            Self::DeleteSelected => "delete_selected",
            Self::DeleteAll => "delete_all",
            Self::ToggleAvailability => "toggle_availability",
            Self::ClearFields => "clear_fields",
            Self::Refresh => "refresh",
        }
    }
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(String),
    Loaded(String),
    EditingStarted(String),
    Updated(String),
    EditCancelled,
    Deleted(String),
    /// Number of rows removed.
    InventoryCleared(usize),
    Issued { video_id: String, card_id: String },
    Returned(String),
    FieldsCleared,
    /// Number of rows now displayed.
    Refreshed(usize),
    /// The user answered "no" to a confirmation; nothing changed.
    Declined,
}

/// Mediates between the inventory window and the repository.
pub struct InventoryController<R, P> {
    repo: R,
    prompt: P,
    state: AppState,
}

impl<R: VideoRepository, P: Prompt> InventoryController<R, P> {
    /// Creates a controller with an empty list view.
    pub fn new(repo: R, prompt: P) -> Self {
        Self {
            repo,
            prompt,
            state: AppState::default(),
        }
    }

    /// Creates a controller and loads the current rows.
    pub fn start(repo: R, prompt: P) -> ControllerResult<Self> {
        let mut controller = Self::new(repo, prompt);
        controller.refresh()?;
        Ok(controller)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Gives the front-end its own dialog surface between commands.
    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    /// Writes one text field of the form.
    ///
    /// # Errors
    /// - `FieldLocked` when changing the id during an update.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> ControllerResult<()> {
        let value = value.into();
        let editing = self.state.is_editing();
        let form = &mut self.state.form;
        match field {
            FormField::VideoName => form.video_name = value,
            FormField::DirectorName => form.director_name = value,
            FormField::VideoId if editing => return Err(ControllerError::FieldLocked),
            FormField::VideoId => form.video_id = value,
        }
        Ok(())
    }

    pub fn set_status(&mut self, status: VideoStatus) {
        self.state.form.status = status;
    }

    /// Selects the row at `index` in the list view.
    pub fn select(&mut self, index: usize) -> ControllerResult<()> {
        if index >= self.state.rows.len() {
            return Err(ControllerError::SelectionRequired);
        }
        self.state.selected = Some(index);
        Ok(())
    }

    /// Selects the displayed row holding `video_id`.
    pub fn select_video_id(&mut self, video_id: &str) -> ControllerResult<()> {
        let index = self
            .state
            .rows
            .iter()
            .position(|row| row.video_id == video_id)
            .ok_or(ControllerError::SelectionRequired)?;
        self.state.selected = Some(index);
        Ok(())
    }

    /// Runs one command and reports any failure to the user.
    ///
    /// The controller stays usable after every error.
    pub fn dispatch(&mut self, command: Command) -> ControllerResult<CommandOutcome> {
        let result = match command {
            Command::Add => self.add(),
            Command::View => self.view(),
            Command::BeginUpdate => self.begin_update(),
            Command::ConfirmUpdate => self.confirm_update(),
            Command::CancelUpdate => self.cancel_update(),
            Command::DeleteSelected => self.delete_selected(),
            Command::DeleteAll => self.delete_all(),
            Command::ToggleAvailability => self.toggle_availability(),
            Command::ClearFields => self.clear_fields(),
            Command::Refresh => self.refresh(),
        };

        match &result {
            Ok(outcome) => info!(
                "event=command module=controller status=ok command={} declined={}",
                command.name(),
                *outcome == CommandOutcome::Declined
            ),
            Err(err) => {
                warn!(
                    "event=command module=controller status=error command={} error_code={}",
                    command.name(),
                    err.code()
                );
                self.prompt.notify(Notice::error(err.title(), err.to_string()));
            }
        }

        result
    }

    fn add(&mut self) -> ControllerResult<CommandOutcome> {
        self.ensure_idle()?;
        if self.state.form.video_id.trim().is_empty() {
            return Err(ControllerError::InputRequired("video id"));
        }

        let card_id = self.resolve_issuer_card(self.state.form.status)?;
        self.state.form.issuer_card_id = card_id;

        if !self
            .prompt
            .confirm("Are you sure?", "Do you want to add this record?")
        {
            return Ok(CommandOutcome::Declined);
        }

        let record = self.state.form.to_record();
        self.repo.insert(&record)?;

        self.clear_and_display()?;
        self.prompt
            .notify(Notice::info("Record added", "New record successfully added"));
        Ok(CommandOutcome::Added(record.video_id))
    }

    fn view(&mut self) -> ControllerResult<CommandOutcome> {
        self.ensure_idle()?;
        let record = self.selected_record()?;
        self.state.form.load(&record);
        Ok(CommandOutcome::Loaded(record.video_id))
    }

    fn begin_update(&mut self) -> ControllerResult<CommandOutcome> {
        self.ensure_idle()?;
        let record = self.selected_record()?;
        self.state.form.load(&record);
        self.state.mode = EditMode::Editing {
            video_id: record.video_id.clone(),
        };
        Ok(CommandOutcome::EditingStarted(record.video_id))
    }

    fn confirm_update(&mut self) -> ControllerResult<CommandOutcome> {
        let video_id = match &self.state.mode {
            EditMode::Editing { video_id } => video_id.clone(),
            EditMode::Idle => return Err(ControllerError::NotEditing),
        };

        // An empty issuer answer keeps the update pending so it can be retried.
        let card_id = self.resolve_issuer_card(self.state.form.status)?;
        self.state.form.issuer_card_id = card_id;

        let changes = VideoChanges::from_record(&self.state.form.to_record());
        self.state.mode = EditMode::Idle;
        self.repo.update(&video_id, &changes)?;

        self.clear_and_display()?;
        Ok(CommandOutcome::Updated(video_id))
    }

    fn cancel_update(&mut self) -> ControllerResult<CommandOutcome> {
        if !self.state.is_editing() {
            return Err(ControllerError::NotEditing);
        }
        self.state.mode = EditMode::Idle;
        Ok(CommandOutcome::EditCancelled)
    }

    fn delete_selected(&mut self) -> ControllerResult<CommandOutcome> {
        self.ensure_idle()?;
        let record = self.selected_record()?;
        self.repo.delete_one(&record.video_id)?;

        self.clear_and_display()?;
        self.prompt.notify(Notice::info(
            "Done",
            "The record you wanted deleted was successfully deleted.",
        ));
        Ok(CommandOutcome::Deleted(record.video_id))
    }

    fn delete_all(&mut self) -> ControllerResult<CommandOutcome> {
        self.ensure_idle()?;
        if !self.prompt.confirm(
            "Are you sure?",
            "Are you sure you want to delete the entire inventory?\n\nThis command cannot be reversed",
        ) {
            return Ok(CommandOutcome::Declined);
        }

        let removed = self.repo.delete_all()?;
        self.refresh()?;
        Ok(CommandOutcome::InventoryCleared(removed))
    }

    fn toggle_availability(&mut self) -> ControllerResult<CommandOutcome> {
        self.ensure_idle()?;
        let record = self.selected_record()?;

        let outcome = match record.status {
            VideoStatus::Issued => {
                if self
                    .prompt
                    .confirm("Is return confirmed?", "Has the video been returned to you?")
                {
                    self.repo.set_availability(
                        &record.video_id,
                        VideoStatus::Available,
                        NOT_ISSUED_CARD_ID,
                    )?;
                    CommandOutcome::Returned(record.video_id)
                } else {
                    self.prompt.notify(Notice::info(
                        "Cannot be returned",
                        "The video status cannot be set to Available unless it has been returned",
                    ));
                    CommandOutcome::Declined
                }
            }
            VideoStatus::Available => {
                let card_id = self.resolve_issuer_card(VideoStatus::Issued)?;
                self.repo
                    .set_availability(&record.video_id, VideoStatus::Issued, &card_id)?;
                CommandOutcome::Issued {
                    video_id: record.video_id,
                    card_id,
                }
            }
        };

        self.clear_and_display()?;
        Ok(outcome)
    }

    fn clear_fields(&mut self) -> ControllerResult<CommandOutcome> {
        self.ensure_idle()?;
        self.state.form = FormState::default();
        self.state.selected = None;
        Ok(CommandOutcome::FieldsCleared)
    }

    fn refresh(&mut self) -> ControllerResult<CommandOutcome> {
        self.state.rows = self.repo.list_all()?;
        self.state.selected = None;
        Ok(CommandOutcome::Refreshed(self.state.rows.len()))
    }

    fn clear_and_display(&mut self) -> ControllerResult<()> {
        self.state.form = FormState::default();
        self.refresh()?;
        Ok(())
    }

    /// Rejects commands that rewrite the form or the rows while an update is open.
    fn ensure_idle(&self) -> ControllerResult<()> {
        if self.state.is_editing() {
            return Err(ControllerError::EditInProgress);
        }
        Ok(())
    }

    fn selected_record(&self) -> ControllerResult<VideoRecord> {
        self.state
            .selected_record()
            .cloned()
            .ok_or(ControllerError::SelectionRequired)
    }

    /// Returns the sentinel for available videos, or asks for a card id.
    fn resolve_issuer_card(&mut self, status: VideoStatus) -> ControllerResult<String> {
        match status {
            VideoStatus::Available => Ok(NOT_ISSUED_CARD_ID.to_string()),
            VideoStatus::Issued => self
                .prompt
                .ask_text(ISSUER_PROMPT_TITLE, ISSUER_PROMPT_TEXT)
                .map(|answer| answer.trim().to_string())
                .filter(|answer| is_usable_card_id(answer))
                .ok_or(ControllerError::InputRequired("issuer card id")),
        }
    }
}
