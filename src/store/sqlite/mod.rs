//! SQLite-backed note store with markdown content files.

mod connection;
mod repo_impl;
mod schema;
mod transaction;


use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::Mutex;

pub use schema::{SCHEMA_VERSION, create_schema, get_schema_version};
pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed note store.
///
/// Note metadata lives in the `notes` table; bodies live in markdown files
/// under `<data_dir>/notes/`, addressed by each row's `content_path`.
///
/// The `NoteStore` methods do their SQLite and file I/O inline: the future
/// blocks the thread it is polled on until the call finishes. Every call is
/// a single short statement on a local file, and the CLI drives one session
/// on a current-thread runtime, so there is no other task to starve. A host
/// that shares its runtime with latency-sensitive tasks should wrap the
/// store in `tokio::task::spawn_blocking` calls.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    data_dir: PathBuf,
}
