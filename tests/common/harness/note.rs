//! Builder for test notes with sensible defaults.

// Allow dead code since not every test binary uses every builder method
#![allow(dead_code)]

/// Builder for notes seeded directly into a test store.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    content: String,
    deleted: bool,
}

impl TestNote {
    /// Creates a new test note with the given title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            deleted: false,
        }
    }

    /// Sets the content (builder method).
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Moves the note to the trash after creating it.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn get_content(&self) -> &str {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Plain");
        assert_eq!(note.title(), "Plain");
        assert_eq!(note.get_content(), "");
        assert!(!note.is_deleted());
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Trashed").content("old words").deleted();
        assert_eq!(note.get_content(), "old words");
        assert!(note.is_deleted());
    }
}
