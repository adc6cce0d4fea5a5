use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The target directory could not be listed. Fatal to the run.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Invalid directory {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A file header could not be opened or read
#[derive(Debug, Error)]
#[error("Cannot read header of {}: {source}", path.display())]
pub struct DetectionError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// A stat or rename on a single file failed
#[derive(Debug, Error)]
pub enum FileOperationError {
    #[error("Cannot stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot check whether {} exists: {source}", path.display())]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileOperationError {
    /// Returns the underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            FileOperationError::Stat { source, .. }
            | FileOperationError::Probe { source, .. }
            | FileOperationError::Rename { source, .. } => source,
        }
    }
}
