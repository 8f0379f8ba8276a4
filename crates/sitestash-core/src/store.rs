//! Map → recode → write, for one crawl session.

use std::path::PathBuf;
use std::sync::Arc;
use url::Url;

use crate::config::StoreConfig;
use crate::events::EventSink;
use crate::recode::{ImageRecoder, RecodeDispatcher};
use crate::storage::{FileWriter, StoreError};
use crate::url_model::{CrawlRoot, Layout, ResourceKind};

/// Stores fetched resources for one crawl root.
///
/// Holds only immutable session values, so a single instance can be shared
/// by reference across crawl workers.
#[derive(Clone)]
pub struct SiteStore {
    layout: Layout,
    dispatcher: RecodeDispatcher,
    writer: FileWriter,
}

impl SiteStore {
    pub fn new(
        config: &StoreConfig,
        root: CrawlRoot,
        recoder: Arc<dyn ImageRecoder>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        let writer = FileWriter::new(root.host(), events.clone()).with_sync_writes(config.sync_writes);
        let dispatcher = RecodeDispatcher::new(recoder, config.image_quality(), events);
        let layout = Layout::new(config.output_directory.clone(), root);
        Self {
            layout,
            dispatcher,
            writer,
        }
    }

    /// Store `data` fetched from `url` and return the path it was written to.
    ///
    /// Only filesystem failures are returned; recoding problems silently fall
    /// back to the fetched bytes.
    pub fn save(&self, url: &Url, kind: ResourceKind, data: Vec<u8>) -> Result<PathBuf, StoreError> {
        let path = self.layout.map_path(url, kind);
        let data = self.dispatcher.maybe_recode(&path, data);
        self.writer.write(&path, &data)?;
        tracing::debug!(url = %url, path = %path.display(), bytes = data.len(), "stored resource");
        Ok(path)
    }
}
