//! Whole-file access to ADIF logs.
//!
//! The core pipeline only consumes and produces text; these helpers are
//! the scoped-acquisition I/O around it. Errors carry the path so a
//! failed run names the file involved.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File access failure.
#[derive(Debug)]
pub enum PersistError {
    /// Reading an input log failed.
    Read {
        /// Log path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Writing the output log failed.
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

/// Convenience alias for fallible file operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Reads the full text of the log at `path`.
pub fn read_log(path: impl AsRef<Path>) -> PersistResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| PersistError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes serialized output text, replacing any existing file.
pub fn write_log(path: impl AsRef<Path>, text: &str) -> PersistResult<()> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })
}
