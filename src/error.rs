use thiserror::Error;

/// Failures surfaced by the conversion core. Invalid input is always rejected
/// with a typed variant; the only sanctioned best-effort behavior is the
/// color-model normalization applied before encoding.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The vector markup could not be parsed as SVG.
    #[error("failed to parse SVG: {0}")]
    Parse(String),

    /// The input bytes are not a recognized raster container.
    #[error("failed to decode input image")]
    Decode(#[source] image::ImageError),

    /// A requested dimension is zero or exceeds the target format's maximum.
    #[error("unsupported dimensions {width}x{height} for {format} (allowed range: 1..={max})")]
    UnsupportedDimensions {
        width: u32,
        height: u32,
        max: u32,
        format: &'static str,
    },

    /// The encoder rejected the final image, e.g. an unsupported color mode.
    #[error("failed to encode {format} output")]
    Encode {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },

    /// Rasterization failed after a successful parse (allocation or PNG write).
    #[error("failed to rasterize SVG: {0}")]
    Rasterize(String),

    /// The requested target format name is not one of the supported set.
    #[error("unknown target format: {0}")]
    UnknownFormat(String),
}
