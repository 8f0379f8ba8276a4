//! CLI command handlers, one per file.

mod path;
mod save;
mod sniff;

pub use path::run_path;
pub use save::run_save;
pub use sniff::run_sniff;

use anyhow::{Context, Result};
use sitestash_core::url_model::CrawlRoot;
use url::Url;

fn parse_root(root: &str) -> Result<CrawlRoot> {
    CrawlRoot::parse(root).with_context(|| format!("bad crawl root: {root}"))
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).with_context(|| format!("bad resource URL: {url}"))
}
