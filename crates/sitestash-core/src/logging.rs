//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,sitestash=debug,sitestash_core=debug";

/// Writer that is either the log file or stderr (used when cloning the file handle fails).
enum LogTarget {
    File(std::fs::File),
    Stderr,
}

impl io::Write for LogTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogTarget::File(f) => f.write(buf),
            LogTarget::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogTarget::File(f) => f.flush(),
            LogTarget::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Filter from `RUST_LOG`, or the crate default when unset or unparsable.
fn env_filter() -> EnvFilter {
    filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to `~/.local/state/sitestash/sitestash.log`.
/// On failure (e.g. state dir unwritable) returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitestash")?;
    let log_file_path: PathBuf = xdg_dirs.place_state_file("sitestash.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct FileMakeWriter(std::fs::File);

    impl<'a> MakeWriter<'a> for FileMakeWriter {
        type Writer = LogTarget;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(LogTarget::File)
                .unwrap_or(LogTarget::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!("sitestash logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only. Use when `init_logging()` fails so the CLI keeps running.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
