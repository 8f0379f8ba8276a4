//! URL modeling and destination path derivation.
//!
//! Maps a fetched resource URL to the file it is stored in:
//! `output_dir/<root host>/[_<external host>/]<path>`. Mapping is pure and
//! total; it never touches the filesystem.

mod page;
mod segments;

use std::path::PathBuf;
use url::Url;

pub use page::{extension, page_file_name, PAGE_DIR_INDEX, PAGE_EXTENSION};
pub use segments::{clean_segments, percent_decode, segment_to_os};

/// Directory prefix that marks resources hosted outside the crawl root.
pub const EXTERNAL_PREFIX: &str = "_";

/// Whether a resource is a crawled page (stored as HTML) or a raw asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Page,
    Asset,
}

impl ResourceKind {
    pub fn from_is_page(is_page: bool) -> Self {
        if is_page {
            ResourceKind::Page
        } else {
            ResourceKind::Asset
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RootError {
    #[error("invalid crawl root URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("crawl root URL has no host: {0}")]
    NoHost(Url),
}

/// Host and port of `url` as one string (`example.com`, `example.com:8080`).
/// Default ports are already dropped by the URL parser.
///
/// Host-less URLs (`file:`, `data:`) have an empty authority. Against a crawl
/// root, which always has a host, they count as external and get the bare
/// `_` marker.
pub fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// The site being crawled. Fixed for a crawl session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRoot {
    host: String,
}

impl CrawlRoot {
    pub fn new(url: Url) -> Result<Self, RootError> {
        if url.host_str().map_or(true, str::is_empty) {
            return Err(RootError::NoHost(url));
        }
        Ok(Self {
            host: authority(&url),
        })
    }

    pub fn parse(input: &str) -> Result<Self, RootError> {
        Self::new(Url::parse(input)?)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// True when `resource` lives on a different host than the crawl root.
    pub fn is_external(&self, resource: &Url) -> bool {
        authority(resource) != self.host
    }

    /// `_<host>` for external resources, `None` for same-site ones.
    pub fn external_marker(&self, resource: &Url) -> Option<String> {
        if self.is_external(resource) {
            Some(format!("{EXTERNAL_PREFIX}{}", authority(resource)))
        } else {
            None
        }
    }
}

/// Where a crawl session's files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    output_dir: PathBuf,
    root: CrawlRoot,
}

impl Layout {
    pub fn new(output_dir: impl Into<PathBuf>, root: CrawlRoot) -> Self {
        Self {
            output_dir: output_dir.into(),
            root,
        }
    }

    pub fn root(&self) -> &CrawlRoot {
        &self.root
    }

    /// Destination file for `resource`.
    ///
    /// The URL path is percent-decoded, page names are normalized to `.html`
    /// and the result is joined lexically so it stays inside
    /// `output_dir/<root host>`. Query and fragment are ignored. Decoded
    /// bytes are kept as they are, so distinct escapes give distinct names.
    ///
    /// Assets are stored under their raw path, so an asset at `/` maps to
    /// `output_dir/<root host>` itself. Writing it creates a file where the
    /// site directory belongs and later writes for that site fail; crawl
    /// loops should store root documents as pages.
    ///
    /// # Examples
    ///
    /// - `http://example.com/blog/post` (page) → `<out>/example.com/blog/post.html`
    /// - `http://cdn.example.net/img.png` (asset) → `<out>/example.com/_cdn.example.net/img.png`
    pub fn map_path(&self, resource: &Url, kind: ResourceKind) -> PathBuf {
        let decoded = percent_decode(resource.path());
        let file_name = match kind {
            ResourceKind::Page => page_file_name(&decoded),
            ResourceKind::Asset => decoded,
        };

        let mut path = self.output_dir.join(&self.root.host);
        if let Some(marker) = self.root.external_marker(resource) {
            path.push(marker);
        }
        for segment in clean_segments(&file_name) {
            path.push(segment_to_os(segment));
        }
        path
    }
}
