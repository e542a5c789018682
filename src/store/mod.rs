//! Store client boundary: the `NoteStore` trait, its error taxonomy, and
//! the SQLite-backed implementation.

mod error;
pub mod sqlite;

pub use error::{StoreError, StoreErrorKind, StoreResult};
pub use sqlite::SqliteStore;

use crate::domain::{LoadedNote, NoteId, NoteSummary};
use async_trait::async_trait;
use std::sync::Arc;

/// Operations against the persistent note store.
///
/// Every call is one atomic round trip: it either succeeds completely or
/// fails without a visible partial effect.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Lists note summaries in store-defined order.
    ///
    /// Soft-deleted notes are included only when `include_deleted` is set.
    async fn list(&self, include_deleted: bool) -> StoreResult<Vec<NoteSummary>>;

    /// Loads one live note with its content.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the note is absent or soft-deleted.
    async fn fetch_one(&self, id: &NoteId) -> StoreResult<LoadedNote>;

    /// Creates a note. A blank title is stored as `"Untitled"`.
    async fn create(&self, title: &str, content: &str) -> StoreResult<NoteSummary>;

    /// Updates the supplied fields of a live note.
    ///
    /// `None` leaves a field unchanged; a blank title counts as `None`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the note is absent or soft-deleted.
    async fn update(
        &self,
        id: &NoteId,
        title: Option<&str>,
        content: Option<&str>,
    ) -> StoreResult<()>;

    /// Marks a note deleted. Deleting an already-deleted note succeeds.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no note with this id was ever created.
    async fn soft_delete(&self, id: &NoteId) -> StoreResult<()>;

    /// Clears the deleted mark of a note.
    async fn restore(&self, id: &NoteId) -> StoreResult<()>;

    /// Lists notes whose title contains `query`, in store-defined order.
    async fn search_titles(
        &self,
        query: &str,
        include_deleted: bool,
    ) -> StoreResult<Vec<NoteSummary>>;
}

#[async_trait]
impl<S: NoteStore + ?Sized> NoteStore for Arc<S> {
    async fn list(&self, include_deleted: bool) -> StoreResult<Vec<NoteSummary>> {
        (**self).list(include_deleted).await
    }

    async fn fetch_one(&self, id: &NoteId) -> StoreResult<LoadedNote> {
        (**self).fetch_one(id).await
    }

    async fn create(&self, title: &str, content: &str) -> StoreResult<NoteSummary> {
        (**self).create(title, content).await
    }

    async fn update(
        &self,
        id: &NoteId,
        title: Option<&str>,
        content: Option<&str>,
    ) -> StoreResult<()> {
        (**self).update(id, title, content).await
    }

    async fn soft_delete(&self, id: &NoteId) -> StoreResult<()> {
        (**self).soft_delete(id).await
    }

    async fn restore(&self, id: &NoteId) -> StoreResult<()> {
        (**self).restore(id).await
    }

    async fn search_titles(
        &self,
        query: &str,
        include_deleted: bool,
    ) -> StoreResult<Vec<NoteSummary>> {
        (**self).search_titles(query, include_deleted).await
    }
}
