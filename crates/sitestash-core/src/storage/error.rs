//! Errors surfaced by the file writer.

use std::io;
use std::path::{Path, PathBuf};

/// A filesystem failure while storing a resource. The underlying
/// `io::Error` is kept as-is and exposed through [`StoreError::io_error`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to create file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Bytes were handed to the OS but closing (syncing) the file failed,
    /// so the data may not be durable.
    #[error("failed to close file {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            StoreError::CreateDir { path, .. }
            | StoreError::CreateFile { path, .. }
            | StoreError::Write { path, .. }
            | StoreError::Close { path, .. } => path,
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            StoreError::CreateDir { source, .. }
            | StoreError::CreateFile { source, .. }
            | StoreError::Write { source, .. }
            | StoreError::Close { source, .. } => source,
        }
    }
}
