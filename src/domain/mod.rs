//! Core types: NoteId, NoteSummary, LoadedNote, and title policies

mod note;
mod note_id;

pub use note::{
    LoadedNote, NoteRecord, NoteSummary, ParseNoteError, UNTITLED, count_words, title_for_create,
    title_update_intent,
};
pub use note_id::{NoteId, ParseNoteIdError};
