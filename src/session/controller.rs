//! Presentation binding: gestures in, render snapshots out.

use super::{ConfirmDelete, EditorFields, Outcome, Session, SessionView, SingleFlight, Status};
use crate::domain::{NoteId, NoteSummary};
use crate::store::NoteStore;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, watch};

/// Routes user gestures to a [`Session`] and exposes what to render.
///
/// Gestures arriving while a transition is in flight are rejected without
/// waiting. Render accessors read the last published snapshot and never
/// wait on the session either.
pub struct Controller<S> {
    session: Arc<Mutex<Session<S>>>,
    flight: SingleFlight,
    status: watch::Receiver<Status>,
    view: watch::Receiver<SessionView>,
}

impl<S> Clone for Controller<S> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            flight: self.flight.clone(),
            status: self.status.clone(),
            view: self.view.clone(),
        }
    }
}

impl<S: NoteStore> Controller<S> {
    pub fn new(session: Session<S>) -> Self {
        let flight = session.flight().clone();
        let status = session.subscribe_status();
        let view = session.subscribe_view();
        Self {
            session: Arc::new(Mutex::new(session)),
            flight,
            status,
            view,
        }
    }

    pub fn on_new_clicked(&self) -> Outcome {
        match self.acquire() {
            Some(mut session) => session.new_draft(),
            None => Outcome::Rejected,
        }
    }

    pub fn on_edit(&self, title: impl Into<String>, content: impl Into<String>) -> Outcome {
        match self.acquire() {
            Some(mut session) => session.edit(title, content),
            None => Outcome::Rejected,
        }
    }

    pub async fn on_note_clicked(&self, id: &NoteId) -> Outcome {
        match self.acquire() {
            Some(mut session) => session.select(id).await,
            None => Outcome::Rejected,
        }
    }

    pub async fn on_save_clicked(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Outcome {
        match self.acquire() {
            Some(mut session) => session.save(title, content).await,
            None => Outcome::Rejected,
        }
    }

    pub async fn on_delete_clicked<C>(&self, confirm: &C) -> Outcome
    where
        C: ConfirmDelete + ?Sized,
    {
        match self.acquire() {
            Some(mut session) => session.delete(confirm).await,
            None => Outcome::Rejected,
        }
    }

    pub async fn on_refresh_clicked(&self) -> Outcome {
        match self.acquire() {
            Some(mut session) => session.refresh_list().await,
            None => Outcome::Rejected,
        }
    }

    pub async fn on_restore_clicked(&self, id: &NoteId) -> Outcome {
        match self.acquire() {
            Some(mut session) => session.restore(id).await,
            None => Outcome::Rejected,
        }
    }

    pub fn current_status(&self) -> Status {
        self.status.borrow().clone()
    }

    pub fn current_list_snapshot(&self) -> Vec<NoteSummary> {
        self.view.borrow().notes.clone()
    }

    pub fn current_editor_fields(&self) -> EditorFields {
        self.view.borrow().fields.clone()
    }

    pub fn current_view(&self) -> SessionView {
        self.view.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.flight.is_busy()
    }

    fn acquire(&self) -> Option<MutexGuard<'_, Session<S>>> {
        if self.flight.is_busy() {
            log::debug!("gesture rejected: transition in flight");
            return None;
        }
        self.session.try_lock().ok()
    }
}
