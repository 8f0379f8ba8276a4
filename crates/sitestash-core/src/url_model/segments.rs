//! Decoding and lexical cleaning of URL paths.
//!
//! Paths stay raw bytes from decoding until they become an OS path segment,
//! so two different escapes never collapse into one file name.

use std::ffi::OsString;

/// Percent-decode a URL path into raw bytes. Invalid escapes are kept
/// literally.
pub fn percent_decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Split `path` into clean relative segments.
///
/// Empty and `.` segments are dropped; `..` removes the previous segment and
/// is ignored at the top, so the result never climbs above its base.
pub fn clean_segments(path: &[u8]) -> Vec<&[u8]> {
    let mut out: Vec<&[u8]> = Vec::new();
    for segment in path.split(|b| *b == b'/') {
        match segment {
            b"" | b"." => {}
            b".." => {
                out.pop();
            }
            s => out.push(s),
        }
    }
    out
}

/// One path segment as an OS string, byte for byte.
#[cfg(unix)]
pub fn segment_to_os(segment: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(segment).to_os_string()
}

/// One path segment as an OS string. Bytes that are not valid UTF-8 are
/// written back as `%XX` escapes; `%` itself is escaped too so the result
/// stays unambiguous.
#[cfg(not(unix))]
pub fn segment_to_os(segment: &[u8]) -> OsString {
    match std::str::from_utf8(segment) {
        Ok(s) if !s.contains('%') => OsString::from(s),
        _ => {
            let mut out = String::with_capacity(segment.len());
            for chunk in segment.utf8_chunks() {
                for c in chunk.valid().chars() {
                    if c == '%' {
                        out.push_str("%25");
                    } else {
                        out.push(c);
                    }
                }
                for b in chunk.invalid() {
                    out.push_str(&format!("%{b:02X}"));
                }
            }
            OsString::from(out)
        }
    }
}
