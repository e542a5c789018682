//! Command handlers for the CLI.
//!
//! Every handler drives a [`Controller`] the same way an interactive
//! front end would: refresh, pick a note, then one gesture.

mod delete;
mod edit;
mod list;
mod new;
mod prompt;
mod resolve;
mod shell;
mod show;


use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::domain::NoteSummary;
use crate::session::{Controller, Outcome, Session};
use crate::store::{NoteStore, SqliteStore};

pub use delete::{handle_restore, handle_rm};
pub use edit::handle_edit;
pub use list::{handle_list, handle_search};
pub use new::handle_new;
pub use resolve::{ResolveResult, resolve_note};
pub use shell::{handle_shell, run_shell};
pub use show::handle_show;

#[cfg(test)]
pub(crate) use edit::{EditorLauncher, handle_edit_impl};
#[cfg(test)]
pub(crate) use list::write_notes;
#[cfg(test)]
pub(crate) use prompt::{Prompt, answer_is_yes};
#[cfg(test)]
pub(crate) use show::write_note;

// ===========================================
// Shared Utilities
// ===========================================

/// Database file name inside the data directory.
pub(crate) const DB_FILE: &str = "jot.db";

/// Returns the database path for a data directory.
pub(crate) fn db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE)
}

/// Opens (creating if needed) the store under `data_dir`.
pub fn open_store(data_dir: &Path) -> Result<SqliteStore> {
    let db = db_path(data_dir);
    SqliteStore::open(&db, data_dir)
        .with_context(|| format!("failed to open note store at {}", db.display()))
}

pub(crate) fn controller_for<S: NoteStore>(store: S) -> Controller<S> {
    Controller::new(Session::new(store))
}

/// Loads the live note list through the controller.
pub(crate) async fn refreshed_list<S: NoteStore>(
    controller: &Controller<S>,
) -> Result<Vec<NoteSummary>> {
    let outcome = controller.on_refresh_clicked().await;
    ensure_applied(controller, outcome).context("failed to list notes")?;
    Ok(controller.current_list_snapshot())
}

/// Turns a gesture outcome into an error carrying the session status.
///
/// `Cancelled` is not an error; callers report it themselves.
pub(crate) fn ensure_applied<S: NoteStore>(
    controller: &Controller<S>,
    outcome: Outcome,
) -> Result<()> {
    match outcome {
        Outcome::Applied | Outcome::Cancelled => Ok(()),
        Outcome::Failed(_) => {
            let status = controller.current_status();
            let message = status.text.strip_prefix("Error: ").unwrap_or(&status.text);
            bail!("{message}")
        }
        Outcome::Rejected => bail!("another operation is still in progress"),
        Outcome::Ignored => bail!("no note is open"),
    }
}

/// Reads all of stdin as note content.
pub(crate) fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read content from stdin")?;
    Ok(content)
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
