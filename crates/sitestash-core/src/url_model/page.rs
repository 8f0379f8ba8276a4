//! File names for crawled pages.
//!
//! Pages are always serialized as HTML, so whatever the URL looks like the
//! stored name ends in `.html`. Names are handled as decoded bytes.

/// Extension that stored pages carry.
pub const PAGE_EXTENSION: &str = ".html";

/// File name of the index document for a directory URL.
pub const PAGE_DIR_INDEX: &str = "index.html";

/// Extension of the last segment of `path`, including the leading dot.
///
/// Everything from the last `.` of the last segment counts, so `.htaccess`
/// is all extension and `file.` has the extension `.`. Empty when the last
/// segment has no dot.
pub fn extension(path: &[u8]) -> &[u8] {
    let last = path.iter().rposition(|b| *b == b'/').map_or(0, |i| i + 1);
    match path[last..].iter().rposition(|b| *b == b'.') {
        Some(dot) => &path[last + dot..],
        None => &[],
    }
}

/// Normalize a decoded URL path into the name a page is stored under.
///
/// - `""` and `"/"` become `index.html`
/// - a trailing `/` gets `index.html` appended
/// - no extension gets `.html` appended
/// - any other extension is replaced by `.html` (compared case-sensitively,
///   so `.HTML` is replaced too)
pub fn page_file_name(path: &[u8]) -> Vec<u8> {
    if path.is_empty() || path == b"/" {
        return PAGE_DIR_INDEX.as_bytes().to_vec();
    }
    if path.ends_with(b"/") {
        return [path, PAGE_DIR_INDEX.as_bytes()].concat();
    }
    let ext = extension(path);
    if ext == PAGE_EXTENSION.as_bytes() {
        return path.to_vec();
    }
    [&path[..path.len() - ext.len()], PAGE_EXTENSION.as_bytes()].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> String {
        String::from_utf8(page_file_name(path.as_bytes())).unwrap()
    }

    #[test]
    fn extension_of_last_segment_only() {
        assert_eq!(extension(b"/a.b/c"), b"");
        assert_eq!(extension(b"/a/c.php"), b".php");
        assert_eq!(extension(b"/a/archive.tar.gz"), b".gz");
        assert_eq!(extension(b"/a/.htaccess"), b".htaccess");
        assert_eq!(extension(b"/a/file."), b".");
        assert_eq!(extension(b"noslash.txt"), b".txt");
    }

    #[test]
    fn root_maps_to_index() {
        assert_eq!(page(""), "index.html");
        assert_eq!(page("/"), "index.html");
    }

    #[test]
    fn directory_gets_index() {
        assert_eq!(page("/blog/"), "/blog/index.html");
        assert_eq!(page("/a/b.php/"), "/a/b.php/index.html");
    }

    #[test]
    fn extensionless_gets_html() {
        assert_eq!(page("/blog/post"), "/blog/post.html");
        assert_eq!(page("/v1.2/route"), "/v1.2/route.html");
    }

    #[test]
    fn html_is_kept() {
        assert_eq!(page("/about.html"), "/about.html");
    }

    #[test]
    fn other_extensions_are_replaced() {
        assert_eq!(page("/index.php"), "/index.html");
        assert_eq!(page("/page.htm"), "/page.html");
        assert_eq!(page("/a/.htaccess"), "/a/.html");
    }

    #[test]
    fn extension_compare_is_case_sensitive() {
        assert_eq!(page("/UPPER.HTML"), "/UPPER.html");
    }

    #[test]
    fn non_utf8_names_keep_their_bytes() {
        assert_eq!(page_file_name(b"/\xFE.php"), b"/\xFE.html");
    }
}
