//! Note summaries, loaded notes, and the title policies shared by stores.

use crate::domain::NoteId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Placeholder title given to notes created without one.
pub const UNTITLED: &str = "Untitled";

/// The kind of error that occurred when building a note summary.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseNoteErrorKind {
    DeletionMismatch { is_deleted: bool },
    InvalidTimestamp { field: &'static str, value: i64 },
    NegativeWordCount(i64),
    BlankId,
}

/// Error returned when a persisted record does not form a valid note summary.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    id: String,
    kind: ParseNoteErrorKind,
}

impl ParseNoteError {
    /// Returns the raw identifier of the offending record.
    pub fn record_id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseNoteErrorKind::DeletionMismatch { is_deleted: true } => write!(
                f,
                "note '{}' is marked deleted but has no deletion time",
                self.id
            ),
            ParseNoteErrorKind::DeletionMismatch { is_deleted: false } => write!(
                f,
                "note '{}' has a deletion time but is not marked deleted",
                self.id
            ),
            ParseNoteErrorKind::InvalidTimestamp { field, value } => {
                write!(f, "note '{}' has invalid {}: {}", self.id, field, value)
            }
            ParseNoteErrorKind::NegativeWordCount(count) => {
                write!(f, "note '{}' has negative word count: {}", self.id, count)
            }
            ParseNoteErrorKind::BlankId => write!(f, "note record has a blank id"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A note row exactly as a store persists it.
///
/// Timestamps are unix seconds. Converting into a [`NoteSummary`] validates
/// the record; stores surface a failed conversion as a corrupt record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    pub id: String,
    pub title: String,
    pub content_path: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub word_count: i64,
    pub is_deleted: bool,
    pub deleted_at: Option<i64>,
}

/// Listing metadata for one note.
///
/// Holds everything the note list renders; the body is not included.
///
/// # Invariants
/// - `deleted_at` is set if and only if `is_deleted` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSummary {
    id: NoteId,
    title: String,
    content_path: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    word_count: u64,
    is_deleted: bool,
    deleted_at: Option<DateTime<Utc>>,
}

impl NoteSummary {
    /// Creates a summary for a live (non-deleted) note.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content_path: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        word_count: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content_path: content_path.into(),
            created_at,
            updated_at,
            word_count,
            is_deleted: false,
            deleted_at: None,
        }
    }

    /// Returns a copy of this summary marked deleted at `at`.
    pub fn deleted(mut self, at: DateTime<Utc>) -> Self {
        self.is_deleted = true;
        self.deleted_at = Some(at);
        self
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title (possibly empty for foreign stores).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the opaque content location.
    pub fn content_path(&self) -> &str {
        &self.content_path
    }

    /// Returns when the note was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the note was last updated.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the store-computed word count.
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// Returns true if the note is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns when the note was soft-deleted, if it was.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Replaces the title without touching store-computed fields.
    pub(crate) fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}

impl TryFrom<NoteRecord> for NoteSummary {
    type Error = ParseNoteError;

    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        let fail = |kind| ParseNoteError {
            id: record.id.clone(),
            kind,
        };

        let id: NoteId = record
            .id
            .parse()
            .map_err(|_| fail(ParseNoteErrorKind::BlankId))?;
        let created_at = timestamp("created_at", record.created_at).map_err(&fail)?;
        let updated_at = timestamp("updated_at", record.updated_at).map_err(&fail)?;
        let word_count = u64::try_from(record.word_count)
            .map_err(|_| fail(ParseNoteErrorKind::NegativeWordCount(record.word_count)))?;

        let deleted_at = match (record.is_deleted, record.deleted_at) {
            (true, Some(at)) => Some(timestamp("deleted_at", at).map_err(&fail)?),
            (false, None) => None,
            (is_deleted, _) => {
                return Err(fail(ParseNoteErrorKind::DeletionMismatch { is_deleted }));
            }
        };

        Ok(Self {
            id,
            title: record.title,
            content_path: record.content_path,
            created_at,
            updated_at,
            word_count,
            is_deleted: record.is_deleted,
            deleted_at,
        })
    }
}

fn timestamp(field: &'static str, value: i64) -> Result<DateTime<Utc>, ParseNoteErrorKind> {
    DateTime::from_timestamp(value, 0).ok_or(ParseNoteErrorKind::InvalidTimestamp { field, value })
}

/// A summary paired with its full content, valid while the note is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedNote {
    #[serde(flatten)]
    summary: NoteSummary,
    content: String,
}

impl LoadedNote {
    pub fn new(summary: NoteSummary, content: impl Into<String>) -> Self {
        Self {
            summary,
            content: content.into(),
        }
    }

    pub fn summary(&self) -> &NoteSummary {
        &self.summary
    }

    pub fn id(&self) -> &NoteId {
        self.summary.id()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn summary_mut(&mut self) -> &mut NoteSummary {
        &mut self.summary
    }

    pub(crate) fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

/// Returns the title a new note is created with.
///
/// A blank title becomes [`UNTITLED`]; anything else is kept exactly.
pub fn title_for_create(title: &str) -> &str {
    if title.trim().is_empty() {
        UNTITLED
    } else {
        title
    }
}

/// Returns the title change an update should apply.
///
/// A blank title means "leave the title alone", so an update can never erase
/// an existing title.
pub fn title_update_intent(title: Option<&str>) -> Option<&str> {
    title.filter(|t| !t.trim().is_empty())
}

/// Counts whitespace-separated words.
pub fn count_words(content: &str) -> u64 {
    content.split_whitespace().count() as u64
}
