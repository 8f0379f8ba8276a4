//! Optional re-encoding of image resources before they are stored.
//!
//! The decision is made from sniffed magic bytes, never from the URL or a
//! declared content type. Every failure path falls back to the original
//! buffer: losing an optimization is fine, losing the resource is not.

mod recoder;
mod sniff;

use std::num::NonZeroU8;
use std::path::Path;
use std::sync::Arc;

use crate::config::MAX_IMAGE_QUALITY;
use crate::events::{EventSink, StoreEvent};

pub use recoder::{ImageRecoder, PassthroughRecoder};
pub use sniff::{sniff, MediaType, SniffError};

/// Recode quality in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImageQuality(NonZeroU8);

impl ImageQuality {
    /// Map a configured value to a quality. `0` means disabled; values above
    /// 100 are clamped.
    pub fn from_setting(value: u8) -> Option<Self> {
        NonZeroU8::new(value.min(MAX_IMAGE_QUALITY)).map(ImageQuality)
    }

    pub fn get(self) -> u8 {
        self.0.get()
    }
}

/// Formats the dispatcher can hand to a recoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecodeTarget {
    Jpeg,
    Png,
    Other,
}

impl From<MediaType> for RecodeTarget {
    fn from(media: MediaType) -> Self {
        match media {
            MediaType::Jpeg => RecodeTarget::Jpeg,
            MediaType::Png => RecodeTarget::Png,
            _ => RecodeTarget::Other,
        }
    }
}

/// Routes buffers to the matching recoder, or passes them through.
#[derive(Clone)]
pub struct RecodeDispatcher {
    recoder: Arc<dyn ImageRecoder>,
    quality: Option<ImageQuality>,
    events: Arc<dyn EventSink>,
}

impl RecodeDispatcher {
    pub fn new(
        recoder: Arc<dyn ImageRecoder>,
        quality: Option<ImageQuality>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            recoder,
            quality,
            events,
        }
    }

    /// Return the recoded buffer for JPEG and PNG content when recoding is
    /// enabled and the recoder produced something; otherwise `data` unchanged.
    pub fn maybe_recode(&self, path: &Path, data: Vec<u8>) -> Vec<u8> {
        let Some(quality) = self.quality else {
            return data;
        };

        let media = match sniff(&data) {
            Ok(Some(media)) => media,
            Ok(None) | Err(_) => return data,
        };
        self.events
            .record(&StoreEvent::FileTypeDetected { media }, path);

        let target = RecodeTarget::from(media);
        let recoded = match target {
            RecodeTarget::Jpeg => self.recoder.recode_jpeg(path, &data, quality),
            RecodeTarget::Png => self.recoder.recode_png(path, &data, quality),
            RecodeTarget::Other => None,
        };

        match recoded {
            Some(out) if !out.is_empty() => {
                self.events.record(
                    &StoreEvent::Recoded {
                        target,
                        before: data.len(),
                        after: out.len(),
                    },
                    path,
                );
                out
            }
            _ => data,
        }
    }
}
