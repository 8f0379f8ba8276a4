//! `sitestash save <root> <url>` – store fetched bytes.

use anyhow::{Context, Result};
use sitestash_core::config::StoreConfig;
use sitestash_core::events::TracingSink;
use sitestash_core::recode::PassthroughRecoder;
use sitestash_core::store::SiteStore;
use sitestash_core::url_model::ResourceKind;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use super::{parse_root, parse_url};

pub fn run_save(
    cfg: &StoreConfig,
    root: &str,
    url: &str,
    page: bool,
    input: Option<&Path>,
) -> Result<()> {
    cfg.validate()?;
    let store = SiteStore::new(
        cfg,
        parse_root(root)?,
        Arc::new(PassthroughRecoder),
        Arc::new(TracingSink),
    );
    let url = parse_url(url)?;
    let data = read_input(input)?;

    let path = store.save(&url, ResourceKind::from_is_page(page), data)?;
    println!("{}", path.display());
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
