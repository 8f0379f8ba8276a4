//! Image recoder seam.

use std::path::Path;

use super::ImageQuality;

/// Re-encodes image bytes in their own format.
///
/// `None` (or an empty buffer) means the recoder could not improve the input
/// and the original should be stored. `path` is for diagnostics only.
pub trait ImageRecoder: Send + Sync {
    fn recode_jpeg(&self, path: &Path, data: &[u8], quality: ImageQuality) -> Option<Vec<u8>>;

    fn recode_png(&self, path: &Path, data: &[u8], quality: ImageQuality) -> Option<Vec<u8>>;
}

/// Never recodes anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughRecoder;

impl ImageRecoder for PassthroughRecoder {
    fn recode_jpeg(&self, _path: &Path, _data: &[u8], _quality: ImageQuality) -> Option<Vec<u8>> {
        None
    }

    fn recode_png(&self, _path: &Path, _data: &[u8], _quality: ImageQuality) -> Option<Vec<u8>> {
        None
    }
}
