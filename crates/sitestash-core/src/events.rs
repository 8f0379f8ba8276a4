//! Debug events emitted while storing a resource.
//!
//! Components receive an [`EventSink`] instead of reaching for a global
//! logger. Sinks only observe; nothing they do feeds back into control flow.

use std::path::Path;

use crate::recode::{MediaType, RecodeTarget};

/// Something worth noting about a single store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// About to create the parent directory tree.
    CreatingDir,
    /// About to create (or truncate) the destination file.
    CreatingFile,
    /// A failed write left a partial file which was removed.
    RemovedPartial,
    /// Sniffing recognised the buffer.
    FileTypeDetected { media: MediaType },
    /// An image recoder produced a replacement buffer.
    Recoded {
        target: RecodeTarget,
        before: usize,
        after: usize,
    },
}

/// Receiver for `(event, path)` pairs.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &StoreEvent, path: &Path);
}

/// Forwards every event to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &StoreEvent, path: &Path) {
        match event {
            StoreEvent::CreatingDir => {
                tracing::debug!(path = %path.display(), "creating dir");
            }
            StoreEvent::CreatingFile => {
                tracing::debug!(path = %path.display(), "creating file");
            }
            StoreEvent::RemovedPartial => {
                tracing::debug!(path = %path.display(), "removed partial file after failed write");
            }
            StoreEvent::FileTypeDetected { media } => {
                let (kind, subtype) = media.mime();
                tracing::debug!(path = %path.display(), kind, subtype, "file type detected");
            }
            StoreEvent::Recoded {
                target,
                before,
                after,
            } => {
                tracing::debug!(
                    path = %path.display(),
                    ?target,
                    before,
                    after,
                    "image recoded"
                );
            }
        }
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &StoreEvent, _path: &Path) {}
}
