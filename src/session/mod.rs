//! The editing session: which note is open, what the editor holds, the
//! cached note list, and the status shown to the user.
//!
//! [`Session`] owns the state machine and talks to a [`NoteStore`].
//! [`Controller`] wraps it for a presentation layer: gestures in, render
//! snapshots out.

mod controller;
mod editor;
mod flight;
mod list_cache;
mod status;


pub use controller::Controller;
pub use editor::{EditorFields, EditorSlot, SlotKind};
pub use flight::{FlightPermit, SingleFlight};
pub use list_cache::NoteListCache;
pub use status::{Phase, Status, StatusReporter};

use crate::domain::{LoadedNote, NoteId, NoteSummary, title_update_intent};
use crate::store::{NoteStore, StoreError, StoreErrorKind};
use serde::Serialize;
use tokio::sync::watch;

/// Result of a single gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The transition ran to completion.
    Applied,
    /// A store call failed; the error is on the status line.
    Failed(StoreErrorKind),
    /// Another transition was in flight. Nothing happened.
    Rejected,
    /// The gesture does not apply to the current state.
    Ignored,
    /// The user declined the confirmation.
    Cancelled,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Asked before a bound note is deleted.
pub trait ConfirmDelete {
    fn confirm_delete(&self, note: &NoteSummary) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: Fn(&NoteSummary) -> bool,
{
    fn confirm_delete(&self, note: &NoteSummary) -> bool {
        self(note)
    }
}

/// Everything a renderer needs, published after every transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub state: SlotKind,
    pub bound: Option<NoteSummary>,
    pub fields: EditorFields,
    pub dirty: bool,
    pub notes: Vec<NoteSummary>,
}

/// Editing session over a note store.
///
/// Store-backed transitions take a [`FlightPermit`] first; while one is held
/// every other gesture returns [`Outcome::Rejected`] without touching the
/// store.
pub struct Session<S> {
    store: S,
    slot: EditorSlot,
    list: NoteListCache,
    status: StatusReporter,
    flight: SingleFlight,
    view: watch::Sender<SessionView>,
}

impl<S: NoteStore> Session<S> {
    /// Starts a session with an empty draft and an empty list.
    ///
    /// Nothing is fetched until [`Session::refresh_list`] runs.
    pub fn new(store: S) -> Self {
        let slot = EditorSlot::draft();
        let list = NoteListCache::new();
        let (view, _rx) = watch::channel(Self::render(&slot, &list));
        Self {
            store,
            slot,
            list,
            status: StatusReporter::new(),
            flight: SingleFlight::new(),
            view,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn slot(&self) -> &EditorSlot {
        &self.slot
    }

    pub fn state(&self) -> SlotKind {
        self.slot.kind()
    }

    pub fn fields(&self) -> &EditorFields {
        self.slot.fields()
    }

    pub fn notes(&self) -> &[NoteSummary] {
        self.list.current()
    }

    pub fn status(&self) -> Status {
        self.status.current()
    }

    pub fn is_busy(&self) -> bool {
        self.flight.is_busy()
    }

    pub fn is_dirty(&self) -> bool {
        self.slot.is_dirty()
    }

    pub fn flight(&self) -> &SingleFlight {
        &self.flight
    }

    pub fn subscribe_status(&self) -> watch::Receiver<Status> {
        self.status.subscribe()
    }

    pub fn subscribe_view(&self) -> watch::Receiver<SessionView> {
        self.view.subscribe()
    }

    /// Discards local fields and opens an empty draft. No store call.
    pub fn new_draft(&mut self) -> Outcome {
        if self.flight.is_busy() {
            return Outcome::Rejected;
        }
        log::debug!("new draft");
        self.slot = EditorSlot::draft();
        self.status.report(Phase::Ready);
        self.publish();
        Outcome::Applied
    }

    /// Records what the editor currently shows. No store call.
    pub fn edit(&mut self, title: impl Into<String>, content: impl Into<String>) -> Outcome {
        if self.flight.is_busy() {
            return Outcome::Rejected;
        }
        *self.slot.fields_mut() = EditorFields::new(title, content);
        self.publish();
        Outcome::Applied
    }

    /// Re-fetches the live note list.
    pub async fn refresh_list(&mut self) -> Outcome {
        let Some(_permit) = self.flight.try_begin() else {
            return Outcome::Rejected;
        };
        self.status.report(Phase::Loading);
        let outcome = match self.list.refresh(&self.store).await.map(|_| ()) {
            Ok(()) => self.ready(),
            Err(err) => self.fail("refresh", err),
        };
        self.publish();
        outcome
    }

    /// Opens a note. On failure the previous slot is kept as it was.
    pub async fn select(&mut self, id: &NoteId) -> Outcome {
        let Some(_permit) = self.flight.try_begin() else {
            return Outcome::Rejected;
        };
        let outcome = match self.load(id).await {
            Ok(()) => self.ready(),
            Err(err) => self.fail("select", err),
        };
        self.publish();
        outcome
    }

    /// Saves the given fields: creates a note from a draft, or updates the
    /// bound note.
    ///
    /// The fields are kept locally first, so nothing typed is lost when the
    /// store call fails.
    pub async fn save(&mut self, title: impl Into<String>, content: impl Into<String>) -> Outcome {
        let Some(_permit) = self.flight.try_begin() else {
            return Outcome::Rejected;
        };
        *self.slot.fields_mut() = EditorFields::new(title, content);
        self.status.report(Phase::Saving);

        let outcome = match self.slot.bound_id().cloned() {
            None => self.create_from_draft().await,
            Some(id) => self.update_bound(&id).await,
        };
        self.publish();
        outcome
    }

    /// Soft-deletes the bound note after confirmation, then opens a draft.
    ///
    /// From a draft this is ignored: there is nothing persisted to delete.
    pub async fn delete<C>(&mut self, confirm: &C) -> Outcome
    where
        C: ConfirmDelete + ?Sized,
    {
        if self.flight.is_busy() {
            return Outcome::Rejected;
        }
        let Some(note) = self.slot.bound_note() else {
            log::debug!("delete ignored: draft has no note");
            return Outcome::Ignored;
        };
        if !confirm.confirm_delete(note.summary()) {
            log::debug!("delete of {} declined", note.id());
            return Outcome::Cancelled;
        }
        let id = note.id().clone();

        let Some(_permit) = self.flight.try_begin() else {
            return Outcome::Rejected;
        };
        self.status.report(Phase::Deleting);
        let outcome = match self.store.soft_delete(&id).await {
            Ok(()) => {
                log::info!("deleted note {id}");
                let refreshed = self.list.refresh(&self.store).await.map(|_| ());
                self.slot = EditorSlot::draft();
                match refreshed {
                    Ok(()) => self.ready(),
                    Err(err) => self.fail("refresh", err),
                }
            }
            Err(err) => self.fail("delete", err),
        };
        self.publish();
        outcome
    }

    /// Restores a soft-deleted note and refreshes the list. The editor slot
    /// is left alone.
    pub async fn restore(&mut self, id: &NoteId) -> Outcome {
        let Some(_permit) = self.flight.try_begin() else {
            return Outcome::Rejected;
        };
        self.status.report(Phase::Saving);
        let outcome = match self.store.restore(id).await {
            Ok(()) => {
                log::info!("restored note {id}");
                self.refresh_after_mutation().await
            }
            Err(err) => self.fail("restore", err),
        };
        self.publish();
        outcome
    }

    async fn create_from_draft(&mut self) -> Outcome {
        let EditorFields { title, content } = self.slot.fields().clone();
        let created = match self.store.create(&title, &content).await {
            Ok(summary) => summary,
            Err(err) => return self.fail("create", err),
        };
        log::info!("created note {} ({:?})", created.id(), created.title());

        let refreshed = self.list.refresh(&self.store).await.map(|_| ());
        let loaded = self.load(created.id()).await;
        if loaded.is_err() {
            // The note exists now; staying in Draft would create it twice.
            self.slot = EditorSlot::bound(LoadedNote::new(created, content));
        }
        match (refreshed, loaded) {
            (_, Err(err)) => self.fail("select", err),
            (Err(err), Ok(())) => self.fail("refresh", err),
            (Ok(()), Ok(())) => self.ready(),
        }
    }

    async fn update_bound(&mut self, id: &NoteId) -> Outcome {
        let EditorFields { title, content } = self.slot.fields().clone();
        let new_title = title_update_intent(Some(&title));
        if let Err(err) = self.store.update(id, new_title, Some(&content)).await {
            return self.fail("update", err);
        }
        log::info!("updated note {id}");

        // Word count and timestamps stay as loaded until the next select;
        // the refreshed list has the stored values.
        if let EditorSlot::Bound { note, .. } = &mut self.slot {
            if let Some(new_title) = new_title {
                note.summary_mut().set_title(new_title);
            }
            note.set_content(content);
        }
        self.refresh_after_mutation().await
    }

    async fn refresh_after_mutation(&mut self) -> Outcome {
        match self.list.refresh(&self.store).await.map(|_| ()) {
            Ok(()) => self.ready(),
            Err(err) => self.fail("refresh", err),
        }
    }

    async fn load(&mut self, id: &NoteId) -> Result<(), StoreError> {
        log::debug!("loading note {id}");
        self.status.report(Phase::Loading);
        let note = self.store.fetch_one(id).await?;
        self.slot = EditorSlot::bound(note);
        Ok(())
    }

    fn ready(&self) -> Outcome {
        self.status.report(Phase::Ready);
        Outcome::Applied
    }

    fn fail(&self, action: &str, err: StoreError) -> Outcome {
        log::warn!("{action} failed: {err}");
        self.status.report(Phase::Error(err.to_string()));
        Outcome::Failed(err.kind())
    }

    fn publish(&self) {
        self.view.send_replace(Self::render(&self.slot, &self.list));
    }

    fn render(slot: &EditorSlot, list: &NoteListCache) -> SessionView {
        SessionView {
            state: slot.kind(),
            bound: slot.bound_note().map(|note| note.summary().clone()),
            fields: slot.fields().clone(),
            dirty: slot.is_dirty(),
            notes: list.current().to_vec(),
        }
    }
}
