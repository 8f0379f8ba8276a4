//! Disk I/O for crawled resources.
//!
//! Creates parent directories (idempotently, so concurrent workers can race
//! on the same tree), writes each buffer in one go, and removes the file
//! again if the write fails part way.

mod dir;
mod error;
mod writer;

pub use dir::resolve_parent_dir;
pub use error::StoreError;
pub use writer::{Destination, FileWriter, OutputFile};
