//! CLI for sitestash.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sitestash_core::config;
use std::path::PathBuf;

use commands::{run_path, run_save, run_sniff};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sitestash")]
#[command(about = "sitestash: store crawled web resources on disk", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the file a resource URL would be stored in.
    Path {
        /// URL of the site being crawled.
        root: String,
        /// URL of the resource.
        url: String,
        /// Treat the resource as a page (stored with an .html name).
        #[arg(long)]
        page: bool,
        /// Output directory (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Store a fetched resource read from a file or stdin.
    Save {
        /// URL of the site being crawled.
        root: String,
        /// URL the bytes were fetched from.
        url: String,
        /// Treat the resource as a page (stored with an .html name).
        #[arg(long)]
        page: bool,
        /// Read the resource from this file instead of stdin.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Output directory (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// JPEG/PNG recode quality 1-100, 0 disables (overrides config).
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=100))]
        image_quality: Option<u8>,
    },

    /// Print the content type detected from a file's magic bytes.
    Sniff {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Path {
                root,
                url,
                page,
                output_dir,
            } => {
                let mut cfg = config::load_or_init()?;
                if let Some(dir) = output_dir {
                    cfg.output_directory = dir;
                }
                run_path(&cfg, &root, &url, page)?;
            }
            CliCommand::Save {
                root,
                url,
                page,
                input,
                output_dir,
                image_quality,
            } => {
                let mut cfg = config::load_or_init()?;
                if let Some(dir) = output_dir {
                    cfg.output_directory = dir;
                }
                if let Some(q) = image_quality {
                    cfg.image_quality = q;
                }
                tracing::debug!("effective config: {:?}", cfg);
                run_save(&cfg, &root, &url, page, input.as_deref())?;
            }
            CliCommand::Sniff { path } => run_sniff(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
