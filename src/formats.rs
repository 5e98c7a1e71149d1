use image::{ColorType, ImageFormat};

use crate::error::ConvertError;

/// Largest edge allowed for ICO output; the container stores entry sizes in a
/// single byte (0 meaning 256).
pub const MAX_ICO_DIMENSION: u32 = 256;

/// Largest edge accepted for every other container.
pub const MAX_DIMENSION: u32 = 8192;

/// The fixed set of output containers the converter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
    Webp,
    Ico,
}

/// Color-model fix applied to decoded pixels before they reach an encoder.
///
/// Kept as an explicit tagged rule rather than conditionals inside the convert
/// loop, so each format's constraint can be tested on its own and new rules
/// (say, WEBP-specific alpha handling) are a one-line table edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Pixels pass through exactly as decoded.
    Keep,
    /// Flatten to 8-bit RGB by dropping the alpha channel outright, without
    /// compositing over any background color.
    DropAlpha,
    /// Expand to 8-bit RGBA, adding an opaque alpha channel when absent.
    ExpandToRgba,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 7] = [
        TargetFormat::Jpeg,
        TargetFormat::Png,
        TargetFormat::Gif,
        TargetFormat::Bmp,
        TargetFormat::Tiff,
        TargetFormat::Webp,
        TargetFormat::Ico,
    ];

    /// Parse a user-supplied format name, case-insensitively. `jpg` and `tif`
    /// are accepted as aliases.
    pub fn parse(input: &str) -> Result<Self, ConvertError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "gif" => Ok(Self::Gif),
            "bmp" => Ok(Self::Bmp),
            "tif" | "tiff" => Ok(Self::Tiff),
            "webp" => Ok(Self::Webp),
            "ico" => Ok(Self::Ico),
            other => Err(ConvertError::UnknownFormat(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Tiff => "TIFF",
            Self::Webp => "WEBP",
            Self::Ico => "ICO",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Webp => "webp",
            Self::Ico => "ico",
        }
    }

    /// MIME suggestion for the download layer, of the form `image/<extension>`.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::Webp => "image/webp",
            Self::Ico => "image/ico",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Gif => ImageFormat::Gif,
            Self::Bmp => ImageFormat::Bmp,
            Self::Tiff => ImageFormat::Tiff,
            Self::Webp => ImageFormat::WebP,
            Self::Ico => ImageFormat::Ico,
        }
    }

    pub fn max_dimension(self) -> u32 {
        match self {
            Self::Ico => MAX_ICO_DIMENSION,
            _ => MAX_DIMENSION,
        }
    }

    /// Default name for the converted file offered to the user.
    pub fn suggested_filename(self) -> String {
        format!("converted_image.{}", self.extension())
    }

    /// The normalization rule for this format given the current color mode,
    /// listed per format so each constraint stays independently visible.
    ///
    /// ICO stores its single entry as an RGBA PNG, so anything else is
    /// expanded first. JPEG has no alpha channel, so alpha is dropped before
    /// encoding. Indexed sources never reach this table: the decoder expands
    /// palette data to direct color at decode time, regardless of target
    /// format.
    pub fn normalization(self, color: ColorType) -> Normalization {
        match self {
            Self::Ico if color != ColorType::Rgba8 => Normalization::ExpandToRgba,
            Self::Ico => Normalization::Keep,
            Self::Jpeg if color.has_alpha() => Normalization::DropAlpha,
            Self::Jpeg => Normalization::Keep,
            Self::Png | Self::Gif | Self::Bmp | Self::Tiff | Self::Webp => Normalization::Keep,
        }
    }
}
