//! `sitestash path <root> <url>` – show the destination file for a URL.

use anyhow::Result;
use sitestash_core::config::StoreConfig;
use sitestash_core::url_model::{Layout, ResourceKind};

use super::{parse_root, parse_url};

pub fn run_path(cfg: &StoreConfig, root: &str, url: &str, page: bool) -> Result<()> {
    let layout = Layout::new(cfg.output_directory.clone(), parse_root(root)?);
    let path = layout.map_path(&parse_url(url)?, ResourceKind::from_is_page(page));
    println!("{}", path.display());
    Ok(())
}
