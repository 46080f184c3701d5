//! Core logic for the video rental inventory.
//! This crate owns the record invariants, persistence and command handling;
//! front-ends only render state and answer prompts.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{init_logging, logging_status, LogLevel, LoggingError};
pub use model::video::{VideoRecord, VideoStatus, VideoValidationError, NOT_ISSUED_CARD_ID};
pub use repo::video_repo::{
    RepoError, RepoResult, SqliteVideoRepository, VideoChanges, VideoRepository,
};
pub use service::controller::{
    AppState, Command, CommandOutcome, ControllerError, ControllerResult, EditMode, FormField,
    FormState, InventoryController,
};
pub use service::prompt::{Notice, NoticeLevel, Prompt};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
