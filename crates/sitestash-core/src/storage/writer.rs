//! Whole-buffer file writer with cleanup on failure.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use super::dir::resolve_parent_dir;
use super::error::StoreError;
use crate::events::{EventSink, StoreEvent};

/// An open destination. `close` is the last step of a successful write and
/// its failure is reported to the caller.
pub trait Destination: Write {
    fn close(self) -> io::Result<()>;
}

/// File opened by [`FileWriter`]. Closing syncs contents to disk when
/// `sync` is set, otherwise only flushes.
pub struct OutputFile {
    file: File,
    sync: bool,
}

impl OutputFile {
    /// Create or truncate `path` for writing.
    pub fn create(path: &Path, sync: bool) -> io::Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(Self { file, sync })
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Destination for OutputFile {
    fn close(mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.sync {
            self.file.sync_all()?;
        }
        Ok(())
    }
}

/// Writes complete buffers to their destination paths.
///
/// Holds no per-path state and is shared by all workers of a crawl. Two
/// resources that map to the same path are not serialized against each
/// other: the last write wins.
#[derive(Clone)]
pub struct FileWriter {
    host: String,
    events: Arc<dyn EventSink>,
    sync_writes: bool,
}

impl FileWriter {
    /// `host` is the crawl root's host, used to rebase degenerate parents.
    pub fn new(host: impl Into<String>, events: Arc<dyn EventSink>) -> Self {
        Self {
            host: host.into(),
            events,
            sync_writes: true,
        }
    }

    pub fn with_sync_writes(mut self, sync_writes: bool) -> Self {
        self.sync_writes = sync_writes;
        self
    }

    /// Create missing parent directories, then write `data` to `path`,
    /// replacing any existing file.
    ///
    /// If the write fails the partial file is removed and the write error is
    /// returned. A failed close is reported even though the bytes were
    /// written. No retries.
    pub fn write(&self, path: &Path, data: &[u8]) -> Result<(), StoreError> {
        let sync = self.sync_writes;
        self.write_with(path, data, |p| OutputFile::create(p, sync))
    }

    pub(crate) fn write_with<D, F>(&self, path: &Path, data: &[u8], open: F) -> Result<(), StoreError>
    where
        D: Destination,
        F: FnOnce(&Path) -> io::Result<D>,
    {
        let dir = resolve_parent_dir(path, &self.host);
        self.events.record(&StoreEvent::CreatingDir, &dir);
        fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        self.events.record(&StoreEvent::CreatingFile, path);
        let mut dest = open(path).map_err(|source| StoreError::CreateFile {
            path: path.to_path_buf(),
            source,
        })?;

        if let Err(source) = dest.write_all(data) {
            drop(dest);
            // Cleanup is best effort; the write error is what gets reported.
            if fs::remove_file(path).is_ok() {
                self.events.record(&StoreEvent::RemovedPartial, path);
            }
            return Err(StoreError::Write {
                path: path.to_path_buf(),
                source,
            });
        }

        dest.close().map_err(|source| StoreError::Close {
            path: path.to_path_buf(),
            source,
        })
    }
}
