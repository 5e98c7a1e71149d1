use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::error::ConvertError;
use crate::formats::{Normalization, TargetFormat};
use crate::models::{Dimensions, ImageBuffer};

/// Decode `input`, resize it to exactly `width` x `height` and re-encode it
/// as `format`.
///
/// The resize does not preserve aspect ratio: the caller supplies the exact
/// output size it wants. Before encoding, the per-format normalization rule
/// is applied so the pixels never reach an encoder in a color mode its
/// container forbids (alpha for JPEG, non-RGBA for ICO). ICO output embeds
/// exactly one size, the requested one.
pub fn convert(
    input: ImageBuffer,
    format: TargetFormat,
    width: u32,
    height: u32,
) -> Result<ImageBuffer, ConvertError> {
    Dimensions::new(width, height).validate(format)?;

    let decoded = decode(&input)?;
    let resized = decoded.resize_exact(width, height, FilterType::Triangle);

    let normalized = match format.normalization(resized.color()) {
        Normalization::Keep => resized,
        Normalization::DropAlpha => DynamicImage::ImageRgb8(resized.to_rgb8()),
        Normalization::ExpandToRgba => DynamicImage::ImageRgba8(resized.to_rgba8()),
    };

    let mut out = Cursor::new(Vec::new());
    normalized
        .write_to(&mut out, format.image_format())
        .map_err(|source| ConvertError::Encode {
            format: format.label(),
            source,
        })?;

    Ok(ImageBuffer::with_format(out.into_inner(), format.image_format()))
}

/// Decoded dimensions of an encoded buffer, used by the host to default the
/// requested output size to the source size.
pub fn probe_size(input: &ImageBuffer) -> Result<(u32, u32), ConvertError> {
    Ok(decode(input)?.dimensions())
}

fn decode(input: &ImageBuffer) -> Result<DynamicImage, ConvertError> {
    let result = match input.format() {
        Some(format) => image::load_from_memory_with_format(input.bytes(), format),
        None => image::load_from_memory(input.bytes()),
    };
    result.map_err(ConvertError::Decode)
}
