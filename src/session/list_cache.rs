//! Note list cache: the last listing fetched from the store.

use crate::domain::NoteSummary;
use crate::store::{NoteStore, StoreResult};

/// The ordered non-deleted summaries from the most recent `list(false)`.
///
/// Never edited in place: a successful refresh replaces the whole sequence
/// in store order, a failed one keeps the previous snapshot.
#[derive(Debug, Clone, Default)]
pub struct NoteListCache {
    notes: Vec<NoteSummary>,
}

impl NoteListCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches live notes and replaces the snapshot.
    pub async fn refresh<S: NoteStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> StoreResult<&[NoteSummary]> {
        let notes = store.list(false).await?;
        log::debug!("note list refreshed ({} notes)", notes.len());
        self.notes = notes;
        Ok(&self.notes)
    }

    /// Returns the last snapshot without touching the store.
    pub fn current(&self) -> &[NoteSummary] {
        &self.notes
    }
}
