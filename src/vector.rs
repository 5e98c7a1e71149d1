use image::ImageFormat;
use resvg::usvg::{self, Tree};
use tiny_skia::Pixmap;

use crate::error::ConvertError;
use crate::formats::MAX_DIMENSION;
use crate::models::ImageBuffer;

/// Read the intrinsic size an SVG declares through its root `viewBox`
/// attribute (four numbers: min-x, min-y, width, height). Width and height
/// are truncated to whole pixels.
///
/// Returns `None` when the attribute is missing or the markup is not
/// well-formed XML; an SVG without an intrinsic size is expected input, not
/// an error.
pub fn probe_intrinsic_size(svg: &str) -> Option<(u32, u32)> {
    let doc = roxmltree::Document::parse(svg).ok()?;
    let viewbox = doc.root_element().attribute("viewBox")?;

    // Exactly four numbers; a token that fails to parse means no usable size.
    let mut parts = viewbox.split_whitespace();
    let _min_x: f64 = parts.next()?.parse().ok()?;
    let _min_y: f64 = parts.next()?.parse().ok()?;
    let width: f64 = parts.next()?.parse().ok()?;
    let height: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || width <= 0.0 || height <= 0.0 {
        return None;
    }

    Some((width as u32, height as u32))
}

/// Render SVG source to a PNG buffer at exactly `size` pixels, scaling each
/// axis independently (the caller owns the aspect ratio). With `None`, the
/// document's own declared size is used.
///
/// The source slice is only borrowed, so the same bytes can be rasterized
/// again at a different size afterwards.
pub fn rasterize(svg: &[u8], size: Option<(u32, u32)>) -> Result<ImageBuffer, ConvertError> {
    // Load system fonts so <text> elements render instead of disappearing.
    let options = usvg::Options::default();
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();

    let tree = Tree::from_data(svg, &options, &fontdb)
        .map_err(|e| ConvertError::Parse(e.to_string()))?;

    let doc_size = tree.size();
    let (width, height) = size.unwrap_or_else(|| {
        (
            doc_size.width().ceil() as u32,
            doc_size.height().ceil() as u32,
        )
    });
    if width == 0 || height == 0 {
        return Err(ConvertError::UnsupportedDimensions {
            width,
            height,
            max: MAX_DIMENSION,
            format: "PNG",
        });
    }

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| ConvertError::Rasterize(format!("failed to allocate {width}x{height} pixmap")))?;

    let sx = width as f32 / doc_size.width();
    let sy = height as f32 / doc_size.height();
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let png = pixmap
        .encode_png()
        .map_err(|e| ConvertError::Rasterize(e.to_string()))?;

    Ok(ImageBuffer::with_format(png, ImageFormat::Png))
}
