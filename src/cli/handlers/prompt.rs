//! Line input shared by confirmation prompts and the shell.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::domain::NoteSummary;
use crate::session::ConfirmDelete;

/// Reads lines from `R`; also answers delete confirmations from it.
pub(crate) struct Prompt<R> {
    input: RefCell<R>,
}

impl<R: BufRead> Prompt<R> {
    pub(crate) fn new(input: R) -> Self {
        Self {
            input: RefCell::new(input),
        }
    }

    /// Returns the next line without its terminator, or `None` at EOF.
    pub(crate) fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead> ConfirmDelete for Prompt<R> {
    fn confirm_delete(&self, note: &NoteSummary) -> bool {
        eprint!("Delete '{}' [{}]? [y/N] ", note.title(), note.id().prefix());
        let _ = io::stderr().flush();
        match self.read_line() {
            Ok(Some(answer)) => answer_is_yes(&answer),
            Ok(None) => false,
            Err(err) => {
                log::warn!("failed to read confirmation: {err}");
                false
            }
        }
    }
}

pub(crate) fn answer_is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
