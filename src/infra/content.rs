//! Content file I/O with atomic writes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during content file operations.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid UTF-8 in {path}")]
    InvalidEncoding { path: PathBuf },
}

/// Reads a note body.
///
/// A missing file reads as an empty body: the metadata row is authoritative
/// and a note whose body was never written is simply empty.
pub fn read_content(path: &Path) -> Result<String, ContentError> {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8(bytes).map_err(|_| ContentError::InvalidEncoding {
            path: path.into(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(ContentError::Io {
            path: path.into(),
            source: e,
        }),
    }
}

/// Writes a note body atomically (temp file in the same directory + rename).
///
/// Creates the parent directory if needed.
pub fn write_content(path: &Path, content: &str) -> Result<(), ContentError> {
    write_bytes(path, content.as_bytes())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), ContentError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| ContentError::Io {
        path: parent.into(),
        source: e,
    })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| ContentError::Io {
        path: path.into(),
        source: e,
    })?;
    temp.write_all(bytes).map_err(|e| ContentError::Io {
        path: path.into(),
        source: e,
    })?;
    temp.persist(path).map_err(|e| ContentError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;
    Ok(())
}

/// The bytes a content file held at some point, or its absence.
#[derive(Debug)]
pub struct ContentSnapshot {
    path: PathBuf,
    bytes: Option<Vec<u8>>,
}

impl ContentSnapshot {
    /// Captures the file as it is now. The bytes are kept raw, so a body
    /// that does not decode can still be put back.
    pub fn take(path: &Path) -> Result<Self, ContentError> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(ContentError::Io {
                    path: path.into(),
                    source: e,
                });
            }
        };
        Ok(Self {
            path: path.into(),
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Puts the captured state back: rewrites the old bytes, or removes the
    /// file if there was none.
    pub fn restore(self) -> Result<(), ContentError> {
        match self.bytes {
            Some(bytes) => write_bytes(&self.path, &bytes),
            None => remove_content(&self.path),
        }
    }
}

/// Removes a content file, ignoring a file that is already gone.
pub fn remove_content(path: &Path) -> Result<(), ContentError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ContentError::Io {
            path: path.into(),
            source: e,
        }),
    }
}
