use anyhow::{Context, Result};
use clap::Parser;
use imgcast::{convert, probe_intrinsic_size, probe_size, rasterize, Dimensions, ImageBuffer, TargetFormat};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imgcast")]
#[command(about = "Convert raster or SVG images to another format and size", long_about = None)]
struct Args {
    /// Path to the input image (raster or SVG)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Target format: jpeg, png, gif, bmp, tiff, webp or ico
    #[arg(short, long, value_name = "FORMAT")]
    format: String,

    /// Output width in pixels (0 or omitted: use the source width)
    #[arg(long, default_value_t = 0)]
    width: u32,

    /// Output height in pixels (0 or omitted: use the source height)
    #[arg(long, default_value_t = 0)]
    height: u32,

    /// Output file path (defaults to converted_image.<format>)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Declared media type of the input, e.g. image/svg+xml
    /// (defaults to deciding by file extension)
    #[arg(long, value_name = "MIME")]
    media_type: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let format = TargetFormat::parse(&args.format)?;

    let bytes = fs::read(&args.input)
        .with_context(|| format!("Failed to read input file: {:?}", args.input))?;

    // Route by declared media type; fall back to the file extension.
    let is_svg = match &args.media_type {
        Some(mime) => mime == "image/svg+xml",
        None => args
            .input
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg")),
    };

    let converted = if is_svg {
        let text = String::from_utf8_lossy(&bytes);
        match probe_intrinsic_size(&text) {
            Some((w, h)) => println!("SVG intrinsic size (from viewBox): {w} x {h}"),
            None => println!("No size information found in the SVG file."),
        }

        // First pass at the document's own size gives us the default output
        // size; the source bytes stay intact for the second pass.
        let preview = rasterize(&bytes, None)?;
        let source_size = probe_size(&preview)?;

        let dims = Dimensions::new(args.width, args.height).or_source(source_size);
        dims.validate(format)?;
        let raster = rasterize(&bytes, Some((dims.width, dims.height)))?;
        convert(raster, format, dims.width, dims.height)?
    } else {
        let buffer = ImageBuffer::new(bytes);
        let source_size = probe_size(&buffer)?;
        println!("Source image size: {} x {}", source_size.0, source_size.1);

        let dims = Dimensions::new(args.width, args.height).or_source(source_size);
        convert(buffer, format, dims.width, dims.height)?
    };

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format.suggested_filename()));

    fs::write(&output_path, converted.bytes())
        .with_context(|| format!("Failed to write output file: {output_path:?}"))?;

    println!(
        "Successfully converted {} to {} ({})",
        args.input.display(),
        output_path.display(),
        format.mime()
    );

    Ok(())
}
