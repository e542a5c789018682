//! The editor slot: either an unsaved draft or a persisted note.

use crate::domain::{LoadedNote, NoteId, title_update_intent};
use serde::Serialize;

/// Title and content as currently shown in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditorFields {
    pub title: String,
    pub content: String,
}

impl EditorFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Draft,
    Bound,
}

/// What the editor is holding.
///
/// A draft carries no id; a bound slot always carries the loaded note it
/// was opened from, plus the local edits made since.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSlot {
    Draft {
        fields: EditorFields,
    },
    Bound {
        note: LoadedNote,
        fields: EditorFields,
    },
}

impl EditorSlot {
    pub fn draft() -> Self {
        Self::Draft {
            fields: EditorFields::default(),
        }
    }

    /// Opens a loaded note, seeding the local fields from it.
    pub fn bound(note: LoadedNote) -> Self {
        let fields = EditorFields::new(note.summary().title(), note.content());
        Self::Bound { note, fields }
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            Self::Draft { .. } => SlotKind::Draft,
            Self::Bound { .. } => SlotKind::Bound,
        }
    }

    pub fn fields(&self) -> &EditorFields {
        match self {
            Self::Draft { fields } | Self::Bound { fields, .. } => fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut EditorFields {
        match self {
            Self::Draft { fields } | Self::Bound { fields, .. } => fields,
        }
    }

    pub fn bound_note(&self) -> Option<&LoadedNote> {
        match self {
            Self::Draft { .. } => None,
            Self::Bound { note, .. } => Some(note),
        }
    }

    pub fn bound_id(&self) -> Option<&NoteId> {
        self.bound_note().map(LoadedNote::id)
    }

    /// Whether saving now would change anything.
    ///
    /// A blank local title on a bound note counts as unchanged, since an
    /// update ignores it.
    pub fn is_dirty(&self) -> bool {
        match self {
            Self::Draft { fields } => !fields.is_empty(),
            Self::Bound { note, fields } => {
                let title_changed = title_update_intent(Some(&fields.title))
                    .is_some_and(|title| title != note.summary().title());
                title_changed || fields.content != note.content()
            }
        }
    }
}

impl Default for EditorSlot {
    fn default() -> Self {
        Self::draft()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteSummary;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn loaded(title: &str, content: &str) -> LoadedNote {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let summary = NoteSummary::new(
            "note-1".parse().unwrap(),
            title,
            "notes/note-1-x.md",
            at,
            at,
            1,
        );
        LoadedNote::new(summary, content)
    }

    #[test]
    fn draft_starts_empty_and_clean() {
        let slot = EditorSlot::draft();
        assert_eq!(slot.kind(), SlotKind::Draft);
        assert_eq!(slot.fields(), &EditorFields::default());
        assert!(slot.bound_id().is_none());
        assert!(!slot.is_dirty());
    }

    #[test]
    fn draft_with_text_is_dirty() {
        let mut slot = EditorSlot::draft();
        slot.fields_mut().content = "x".into();
        assert!(slot.is_dirty());
    }

    #[test]
    fn bound_seeds_fields_from_note() {
        let slot = EditorSlot::bound(loaded("Groceries", "eggs"));
        assert_eq!(slot.kind(), SlotKind::Bound);
        assert_eq!(slot.fields(), &EditorFields::new("Groceries", "eggs"));
        assert_eq!(slot.bound_id().map(NoteId::as_str), Some("note-1"));
        assert!(!slot.is_dirty());
    }

    #[test]
    fn bound_dirty_tracks_title_and_content() {
        let mut slot = EditorSlot::bound(loaded("Groceries", "eggs"));
        slot.fields_mut().title = "Shopping".into();
        assert!(slot.is_dirty());

        let mut slot = EditorSlot::bound(loaded("Groceries", "eggs"));
        slot.fields_mut().content = "eggs, milk".into();
        assert!(slot.is_dirty());
    }

    #[test]
    fn bound_blank_title_is_not_a_change() {
        let mut slot = EditorSlot::bound(loaded("Groceries", "eggs"));
        slot.fields_mut().title = "  ".into();
        assert!(!slot.is_dirty());
    }
}
