//! Connection management for SqliteStore.

use super::SqliteStore;
use super::schema::create_schema;
use crate::store::{StoreError, StoreResult};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Directory (relative to the data dir) holding content files.
pub(crate) const NOTES_SUBDIR: &str = "notes";

impl SqliteStore {
    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates a store with its database at `db_path` and content
    /// files under `data_dir`.
    ///
    /// Creates missing directories and initializes the schema.
    pub fn open(db_path: &Path, data_dir: &Path) -> StoreResult<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir(parent)?;
        }
        create_dir(&data_dir.join(NOTES_SUBDIR))?;

        let conn = Connection::open(db_path)?;
        Self::from_connection(conn, data_dir)
    }

    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens a store with an in-memory database.
    ///
    /// Content files still go to `data_dir`; used by tests and benchmarks.
    pub fn open_in_memory(data_dir: &Path) -> StoreResult<Self> {
        create_dir(&data_dir.join(NOTES_SUBDIR))?;
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn, data_dir)
    }

    fn from_connection(conn: Connection, data_dir: &Path) -> StoreResult<Self> {
        create_schema(&conn)?;
        log::debug!("opened note store (data dir {})", data_dir.display());
        Ok(Self {
            conn: Mutex::new(conn),
            data_dir: data_dir.to_path_buf(),
        })
    }

    // ===========================================
    // Accessors
    // ===========================================

    /// Returns the directory content paths are resolved against.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolves a row's `content_path` to a file path.
    pub(crate) fn content_file(&self, content_path: &str) -> PathBuf {
        self.data_dir.join(content_path)
    }

    /// Locks the connection for one operation.
    pub(crate) fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))
    }
}

fn create_dir(path: &Path) -> StoreResult<()> {
    fs::create_dir_all(path).map_err(|e| {
        StoreError::Unavailable(format!("cannot create {}: {}", path.display(), e))
    })
}
