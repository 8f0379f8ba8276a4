use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::recode::ImageQuality;

/// Highest accepted `image_quality` value.
pub const MAX_IMAGE_QUALITY: u8 = 100;

/// Global configuration loaded from `~/.config/sitestash/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root directory under which every crawled site is written.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
    /// JPEG/PNG recode quality, 1-100. 0 disables recoding.
    #[serde(default)]
    pub image_quality: u8,
    /// Sync file contents to disk before a write is reported as successful.
    #[serde(default = "default_sync_writes")]
    pub sync_writes: bool,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_sync_writes() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            image_quality: 0,
            sync_writes: default_sync_writes(),
        }
    }
}

impl StoreConfig {
    /// Reject values the rest of the crate cannot represent.
    pub fn validate(&self) -> Result<()> {
        if self.image_quality > MAX_IMAGE_QUALITY {
            anyhow::bail!(
                "image_quality must be between 0 and {}, got {}",
                MAX_IMAGE_QUALITY,
                self.image_quality
            );
        }
        Ok(())
    }

    /// Recode quality, or `None` when recoding is disabled.
    pub fn image_quality(&self) -> Option<ImageQuality> {
        ImageQuality::from_setting(self.image_quality)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitestash")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<StoreConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = StoreConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<StoreConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: StoreConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
