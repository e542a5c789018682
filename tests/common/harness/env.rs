//! Isolated test environment with temp directory.

use super::{JotCommand, TestNote};
use jot::domain::NoteSummary;
use jot::store::{NoteStore, SqliteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// The directory holds the database, content files, and an empty config
/// home so the developer's own config file is never read.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
    /// Path used as XDG_CONFIG_HOME
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().join("data");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_home).expect("Failed to create config home");
        Self {
            _temp_dir: temp_dir,
            data_dir,
            config_home,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path of the SQLite database.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("jot.db")
    }

    /// Returns the directory holding content files.
    pub fn notes_dir(&self) -> PathBuf {
        self.data_dir.join("notes")
    }

    /// Returns the config home handed to the binary.
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// Opens the environment's store directly.
    pub fn store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path(), &self.data_dir).expect("Failed to open store")
    }

    /// Seeds a note through the store and returns its summary.
    pub fn add_note(&self, test_note: &TestNote) -> NoteSummary {
        let store = self.store();
        block_on(async {
            let created = store
                .create(test_note.title(), test_note.get_content())
                .await
                .expect("Failed to create test note");
            if test_note.is_deleted() {
                store
                    .soft_delete(created.id())
                    .await
                    .expect("Failed to delete test note");
            }
            created
        })
    }

    /// Lists notes straight from the store.
    pub fn list(&self, include_deleted: bool) -> Vec<NoteSummary> {
        let store = self.store();
        block_on(store.list(include_deleted)).expect("Failed to list notes")
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new()
            .config_home(&self.config_home)
            .dir(&self.data_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build runtime")
        .block_on(future)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.data_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.data_dir().to_string_lossy());
    }

    #[test]
    fn test_env_add_note_writes_content_file() {
        let env = TestEnv::new();
        let created = env.add_note(&TestNote::new("Seeded").content("some words"));

        let file = env.data_dir().join(created.content_path());
        assert!(file.starts_with(env.notes_dir()));
        assert_eq!(std::fs::read_to_string(file).unwrap(), "some words");
        assert!(env.db_path().exists());
    }

    #[test]
    fn test_env_add_deleted_note() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("Live"));
        env.add_note(&TestNote::new("Gone").deleted());

        assert_eq!(env.list(false).len(), 1);
        assert_eq!(env.list(true).len(), 2);
    }
}
