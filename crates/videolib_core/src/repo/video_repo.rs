//! Video repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide point CRUD operations over the `Library` table.
//! - Translate constraint violations into semantic errors.
//!
//! # Invariants
//! - `video_id` is the identity of a row and is never rewritten.
//! - Duplicate inserts leave the table unchanged.

use crate::db::DbError;
use crate::model::video::{validate_issuer, VideoRecord, VideoStatus, VideoValidationError};
use log::{debug, info, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const VIDEO_SELECT_SQL: &str = "SELECT
    VIDEO_NAME,
    VIDEO_ID,
    DIRECTOR_NAME,
    VIDEO_STATUS,
    CARD_ID
FROM Library";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for inventory persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(VideoValidationError),
    Db(DbError),
    /// Insert hit an existing `video_id`.
    DuplicateKey(String),
    /// Update matched no row.
    NotFound(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateKey(id) => write!(f, "video id already exists: {id}"),
            Self::NotFound(id) => write!(f, "video not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted video data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateKey(_) | Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<VideoValidationError> for RepoError {
    fn from(value: VideoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Replacement values for an in-place update. The id is passed separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoChanges {
    pub video_name: String,
    pub director_name: String,
    pub status: VideoStatus,
    pub issuer_card_id: String,
}

impl VideoChanges {
    /// Takes every mutable field from `record`.
    pub fn from_record(record: &VideoRecord) -> Self {
        Self {
            video_name: record.video_name.clone(),
            director_name: record.director_name.clone(),
            status: record.status,
            issuer_card_id: record.issuer_card_id.clone(),
        }
    }
}

/// Persistence Store contract.
pub trait VideoRepository {
    /// Returns every row in storage order.
    fn list_all(&self) -> RepoResult<Vec<VideoRecord>>;
    fn get(&self, video_id: &str) -> RepoResult<Option<VideoRecord>>;
    /// Fails with [`RepoError::DuplicateKey`] when the id is taken.
    fn insert(&self, record: &VideoRecord) -> RepoResult<()>;
    /// Fails with [`RepoError::NotFound`] when no row matches `video_id`.
    fn update(&self, video_id: &str, changes: &VideoChanges) -> RepoResult<()>;
    /// Rewrites only status and issuer card id.
    fn set_availability(
        &self,
        video_id: &str,
        status: VideoStatus,
        issuer_card_id: &str,
    ) -> RepoResult<()>;
    /// Returns whether a row was removed; absent ids are not an error.
    fn delete_one(&self, video_id: &str) -> RepoResult<bool>;
    /// Returns the number of rows removed.
    fn delete_all(&self) -> RepoResult<usize>;
}

/// SQLite-backed video repository.
pub struct SqliteVideoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteVideoRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl VideoRepository for SqliteVideoRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<VideoRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{VIDEO_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_video_row(row)?);
        }

        debug!(
            "event=video_list module=repo status=ok count={}",
            records.len()
        );
        Ok(records)
    }

    fn get(&self, video_id: &str) -> RepoResult<Option<VideoRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{VIDEO_SELECT_SQL} WHERE VIDEO_ID = ?1;"))?;
        let mut rows = stmt.query([video_id])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_video_row(row)?)),
            None => Ok(None),
        }
    }

    fn insert(&self, record: &VideoRecord) -> RepoResult<()> {
        record.validate()?;

        let result = self.conn.execute(
            "INSERT INTO Library (
                VIDEO_NAME,
                VIDEO_ID,
                DIRECTOR_NAME,
                VIDEO_STATUS,
                CARD_ID
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                record.video_name.as_str(),
                record.video_id.as_str(),
                record.director_name.as_str(),
                record.status.as_str(),
                record.issuer_card_id.as_str(),
            ],
        );

        match result {
            Ok(_) => {
                info!("event=video_insert module=repo status=ok");
                Ok(())
            }
            Err(err) if is_primary_key_violation(&err) => {
                warn!("event=video_insert module=repo status=error error_code=duplicate_key");
                Err(RepoError::DuplicateKey(record.video_id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn update(&self, video_id: &str, changes: &VideoChanges) -> RepoResult<()> {
        validate_issuer(video_id, changes.status, &changes.issuer_card_id)?;

        let changed = self.conn.execute(
            "UPDATE Library
             SET
                VIDEO_NAME = ?1,
                VIDEO_STATUS = ?2,
                DIRECTOR_NAME = ?3,
                CARD_ID = ?4
             WHERE VIDEO_ID = ?5;",
            params![
                changes.video_name.as_str(),
                changes.status.as_str(),
                changes.director_name.as_str(),
                changes.issuer_card_id.as_str(),
                video_id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(video_id.to_string()));
        }

        info!("event=video_update module=repo status=ok");
        Ok(())
    }

    fn set_availability(
        &self,
        video_id: &str,
        status: VideoStatus,
        issuer_card_id: &str,
    ) -> RepoResult<()> {
        validate_issuer(video_id, status, issuer_card_id)?;

        let changed = self.conn.execute(
            "UPDATE Library SET VIDEO_STATUS = ?1, CARD_ID = ?2 WHERE VIDEO_ID = ?3;",
            params![status.as_str(), issuer_card_id, video_id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(video_id.to_string()));
        }

        info!(
            "event=video_availability module=repo status=ok video_status={}",
            status
        );
        Ok(())
    }

    fn delete_one(&self, video_id: &str) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM Library WHERE VIDEO_ID = ?1;", [video_id])?;
        info!("event=video_delete module=repo status=ok removed={removed}");
        Ok(removed > 0)
    }

    fn delete_all(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM Library;", [])?;
        info!("event=video_delete_all module=repo status=ok removed={removed}");
        Ok(removed)
    }
}

fn is_primary_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

fn parse_video_row(row: &Row<'_>) -> RepoResult<VideoRecord> {
    let video_id: String = row.get("VIDEO_ID")?;
    let status_text = text_or_empty(row, "VIDEO_STATUS")?;
    let status = status_text.parse::<VideoStatus>().map_err(|err| {
        RepoError::InvalidData(format!("{err} in Library.VIDEO_STATUS for `{video_id}`"))
    })?;

    // Legacy rows may hold NULL text columns; they read back as empty strings.
    Ok(VideoRecord {
        video_name: text_or_empty(row, "VIDEO_NAME")?,
        director_name: text_or_empty(row, "DIRECTOR_NAME")?,
        issuer_card_id: text_or_empty(row, "CARD_ID")?,
        video_id,
        status,
    })
}

fn text_or_empty(row: &Row<'_>, column: &str) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}
