//! Parent directory resolution for destination files.

use std::path::{Component, Path, PathBuf};

/// Directory to create before writing `path`.
///
/// Normally the parent of `path`. When that parent is shorter than the crawl
/// root's host name (the file would land at or next to the filesystem root)
/// the directory is rebased to `./<host>/<parent>` instead, so nothing is
/// created outside the working tree.
pub fn resolve_parent_dir(path: &Path, host: &str) -> PathBuf {
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let shown = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    if shown.as_os_str().len() >= host.len() {
        return parent.to_path_buf();
    }

    let mut dir = PathBuf::from(".");
    dir.push(host);
    for component in parent.components() {
        if let Component::Normal(part) = component {
            dir.push(part);
        }
    }
    dir
}
