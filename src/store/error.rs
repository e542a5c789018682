//! Store error taxonomy.

use crate::domain::{NoteId, ParseNoteError};
use crate::infra::ContentError;
use thiserror::Error;

/// The three failure classes the session distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// The referenced note is absent or soft-deleted.
    NotFound,
    /// The backing store could not complete the request.
    Unavailable,
    /// A persisted record could not be read as a note.
    Corrupt,
}

/// Errors returned by [`NoteStore`](super::NoteStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note not found: {id}")]
    NotFound { id: NoteId },

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("content file error: {0}")]
    Content(ContentError),

    #[error("corrupt note record: {0}")]
    Corrupt(String),
}

impl StoreError {
    pub fn not_found(id: &NoteId) -> Self {
        Self::NotFound { id: id.clone() }
    }

    /// Classifies this error for the session.
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            Self::NotFound { .. } => StoreErrorKind::NotFound,
            Self::Unavailable(_) | Self::Database(_) | Self::Content(_) => {
                StoreErrorKind::Unavailable
            }
            Self::Corrupt(_) => StoreErrorKind::Corrupt,
        }
    }
}

impl From<ContentError> for StoreError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::InvalidEncoding { .. } => Self::Corrupt(err.to_string()),
            other => Self::Content(other),
        }
    }
}

impl From<ParseNoteError> for StoreError {
    fn from(err: ParseNoteError) -> Self {
        Self::Corrupt(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
