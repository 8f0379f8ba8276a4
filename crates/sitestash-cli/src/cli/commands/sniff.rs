//! `sitestash sniff <file>` – print the detected content type.

use anyhow::{Context, Result};
use sitestash_core::recode::sniff;
use std::path::Path;

pub fn run_sniff(path: &Path) -> Result<()> {
    let data = std::fs::read(path).with_context(|| format!("open {}", path.display()))?;
    match sniff(&data) {
        Ok(Some(media)) => println!("{}  {}", media, path.display()),
        Ok(None) => println!("unknown  {}", path.display()),
        Err(e) => println!("unknown ({})  {}", e, path.display()),
    }
    Ok(())
}
