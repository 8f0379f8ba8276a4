//! Content type detection from leading magic bytes.

use std::fmt;

/// Sniffing can not say anything about an empty buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SniffError {
    #[error("empty buffer")]
    Empty,
}

/// Types recognised by [`sniff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Jpeg,
    Png,
    Gif,
    Webp,
    Bmp,
    Tiff,
    Ico,
    Pdf,
    Zip,
    Gzip,
}

impl MediaType {
    /// MIME type and subtype, e.g. `("image", "jpeg")`.
    pub fn mime(self) -> (&'static str, &'static str) {
        match self {
            MediaType::Jpeg => ("image", "jpeg"),
            MediaType::Png => ("image", "png"),
            MediaType::Gif => ("image", "gif"),
            MediaType::Webp => ("image", "webp"),
            MediaType::Bmp => ("image", "bmp"),
            MediaType::Tiff => ("image", "tiff"),
            MediaType::Ico => ("image", "vnd.microsoft.icon"),
            MediaType::Pdf => ("application", "pdf"),
            MediaType::Zip => ("application", "zip"),
            MediaType::Gzip => ("application", "gzip"),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, subtype) = self.mime();
        write!(f, "{}/{}", kind, subtype)
    }
}

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// DIB header sizes of the BMP variants in use (CORE, INFO, V2-V5).
const BMP_DIB_HEADER_SIZES: [u32; 7] = [12, 40, 52, 56, 64, 108, 124];

/// `BM` alone is too common in text; also require a known DIB header size
/// right after the 14-byte file header.
fn is_bmp(data: &[u8]) -> bool {
    if data.len() < 18 || !data.starts_with(b"BM") {
        return false;
    }
    let dib = u32::from_le_bytes([data[14], data[15], data[16], data[17]]);
    BMP_DIB_HEADER_SIZES.contains(&dib)
}

/// Detect the content type of `data` from its magic bytes.
///
/// Filenames and declared content types play no part. `Ok(None)` means the
/// bytes are not recognised.
pub fn sniff(data: &[u8]) -> Result<Option<MediaType>, SniffError> {
    if data.is_empty() {
        return Err(SniffError::Empty);
    }

    let media = if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        MediaType::Jpeg
    } else if data.starts_with(&PNG_SIGNATURE) {
        MediaType::Png
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        MediaType::Gif
    } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        MediaType::Webp
    } else if is_bmp(data) {
        MediaType::Bmp
    } else if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
        || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
    {
        MediaType::Tiff
    } else if data.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
        MediaType::Ico
    } else if data.starts_with(b"%PDF") {
        MediaType::Pdf
    } else if data.starts_with(&[0x50, 0x4B, 0x03, 0x04]) {
        MediaType::Zip
    } else if data.starts_with(&[0x1F, 0x8B, 0x08]) {
        MediaType::Gzip
    } else {
        return Ok(None);
    };
    Ok(Some(media))
}
