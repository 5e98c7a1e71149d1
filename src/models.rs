use image::ImageFormat;

use crate::error::ConvertError;
use crate::formats::TargetFormat;

/// An encoded image held in memory, tagged with its container format when
/// known. Buffers are immutable once produced and move by ownership between
/// the rasterizer, the converter and the host.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    bytes: Vec<u8>,
    format: Option<ImageFormat>,
}

impl ImageBuffer {
    /// Wrap raw bytes whose container format is unknown; the decoder will
    /// guess it from magic bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            format: None,
        }
    }

    /// Wrap bytes whose container format is already known.
    pub fn with_format(bytes: Vec<u8>, format: ImageFormat) -> Self {
        Self {
            bytes,
            format: Some(format),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A requested output size in pixels. A zero component means "use the source
/// size for this axis"; [`Dimensions::or_source`] resolves that before
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Replace zero components with the corresponding source dimension.
    pub fn or_source(self, source: (u32, u32)) -> Self {
        Self {
            width: if self.width == 0 { source.0 } else { self.width },
            height: if self.height == 0 { source.1 } else { self.height },
        }
    }

    /// Reject dimensions outside `1..=max` for the target format (256 for
    /// ICO, 8192 otherwise).
    pub fn validate(self, format: TargetFormat) -> Result<(), ConvertError> {
        let max = format.max_dimension();
        if self.width == 0 || self.height == 0 || self.width > max || self.height > max {
            return Err(ConvertError::UnsupportedDimensions {
                width: self.width,
                height: self.height,
                max,
                format: format.label(),
            });
        }
        Ok(())
    }
}
