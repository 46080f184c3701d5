//! Video inventory record.
//!
//! # Responsibility
//! - Define the canonical record persisted in the `Library` table.
//! - Validate status/issuer consistency before persistence.
//!
//! # Invariants
//! - `video_id` is non-blank and never changes after creation.
//! - `Issued` implies a real issuer card id (non-blank, not the sentinel).
//! - `Available` implies the issuer card id is exactly [`NOT_ISSUED_CARD_ID`].

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Placeholder issuer value stored while a video is on the shelf.
pub const NOT_ISSUED_CARD_ID: &str = "N/A";

/// Availability state of one video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VideoStatus {
    /// On the shelf and free to lend.
    #[default]
    Available,
    /// Lent to the holder of `issuer_card_id`.
    Issued,
}

impl VideoStatus {
    /// Text stored in `Library.VIDEO_STATUS` and shown in the list view.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Issued => "Issued",
        }
    }
}

impl Display for VideoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when status text is not one of the known spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVideoStatusError(pub String);

impl Display for ParseVideoStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown video status `{}`", self.0)
    }
}

impl Error for ParseVideoStatusError {}

impl FromStr for VideoStatus {
    type Err = ParseVideoStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Available" => Ok(Self::Available),
            "Issued" => Ok(Self::Issued),
            other => Err(ParseVideoStatusError(other.to_string())),
        }
    }
}

/// Validation failures for [`VideoRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoValidationError {
    /// `video_id` is empty or whitespace only.
    MissingVideoId,
    /// Record is issued but carries no usable issuer card id.
    MissingIssuerCardId { video_id: String },
    /// Record is available but still carries an issuer card id.
    UnexpectedIssuerCardId { video_id: String, card_id: String },
}

impl Display for VideoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingVideoId => write!(f, "video id must not be blank"),
            Self::MissingIssuerCardId { video_id } => {
                write!(f, "issued video `{video_id}` requires an issuer card id")
            }
            Self::UnexpectedIssuerCardId { video_id, card_id } => write!(
                f,
                "available video `{video_id}` must not carry issuer card id `{card_id}`"
            ),
        }
    }
}

impl Error for VideoValidationError {}

/// One inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_name: String,
    /// Primary key.
    pub video_id: String,
    pub director_name: String,
    pub status: VideoStatus,
    /// Meaningful only when `status == VideoStatus::Issued`.
    pub issuer_card_id: String,
}

impl VideoRecord {
    /// Creates an available record with the sentinel issuer card id.
    pub fn available(
        video_name: impl Into<String>,
        video_id: impl Into<String>,
        director_name: impl Into<String>,
    ) -> Self {
        Self {
            video_name: video_name.into(),
            video_id: video_id.into(),
            director_name: director_name.into(),
            status: VideoStatus::Available,
            issuer_card_id: NOT_ISSUED_CARD_ID.to_string(),
        }
    }

    /// Creates a record lent to `issuer_card_id`.
    pub fn issued(
        video_name: impl Into<String>,
        video_id: impl Into<String>,
        director_name: impl Into<String>,
        issuer_card_id: impl Into<String>,
    ) -> Self {
        Self {
            video_name: video_name.into(),
            video_id: video_id.into(),
            director_name: director_name.into(),
            status: VideoStatus::Issued,
            issuer_card_id: issuer_card_id.into(),
        }
    }

    /// Returns whether the video is currently lent out.
    pub fn is_issued(&self) -> bool {
        self.status == VideoStatus::Issued
    }

    /// Checks id presence and status/issuer consistency.
    pub fn validate(&self) -> Result<(), VideoValidationError> {
        if self.video_id.trim().is_empty() {
            return Err(VideoValidationError::MissingVideoId);
        }
        validate_issuer(&self.video_id, self.status, &self.issuer_card_id)
    }
}

/// Returns whether `card_id` can identify a borrower.
pub fn is_usable_card_id(card_id: &str) -> bool {
    let trimmed = card_id.trim();
    !trimmed.is_empty() && trimmed != NOT_ISSUED_CARD_ID
}

pub(crate) fn validate_issuer(
    video_id: &str,
    status: VideoStatus,
    card_id: &str,
) -> Result<(), VideoValidationError> {
    match status {
        VideoStatus::Issued if !is_usable_card_id(card_id) => {
            Err(VideoValidationError::MissingIssuerCardId {
                video_id: video_id.to_string(),
            })
        }
        VideoStatus::Available if card_id != NOT_ISSUED_CARD_ID => {
            Err(VideoValidationError::UnexpectedIssuerCardId {
                video_id: video_id.to_string(),
                card_id: card_id.to_string(),
            })
        }
        _ => Ok(()),
    }
}
