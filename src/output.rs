//! # Output Module
//!
//! Serializes a rendered [`Framebuffer`] to disk. The format follows the
//! output path's extension:
//!
//! - `.ppm`: ASCII P3, the renderer's native format
//! - `.png`: 8-bit RGB through the `image` crate
//! - `.exr`: 32-bit float linear RGB through the `exr` crate
//!
//! PPM and PNG share one quantization: scale by 255, round, clamp to
//! [0, 255]. No gamma curve or tone mapping is applied, so values above 1.0
//! simply saturate. EXR keeps the raw linear values.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, ImageFormat, Rgb};
use log::{debug, info};

use crate::camera::Framebuffer;
use crate::error::{TraceError, TraceResult};

/// Output encodings selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ppm,
    Png,
    Exr,
}

impl OutputFormat {
    /// Pick the encoding for `path`, ignoring extension case.
    pub fn from_path(path: &Path) -> TraceResult<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "ppm" => Ok(Self::Ppm),
            "png" => Ok(Self::Png),
            "exr" => Ok(Self::Exr),
            _ => Err(TraceError::UnsupportedFormat(extension)),
        }
    }
}

/// Map a linear channel value to an 8-bit level.
pub fn quantize(channel: f32) -> u8 {
    // NaN falls through the clamp and casts to 0.
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Write `image` as ASCII PPM (P3) to any writer.
///
/// Header is `P3\n{W} {H}\n255\n`, followed by one `"r g b "` triple per
/// pixel in row-major order and a single trailing newline.
pub fn write_ppm<W: Write>(image: &Framebuffer, mut writer: W) -> io::Result<()> {
    write!(writer, "P3\n{} {}\n255\n", image.width(), image.height())?;
    for pixel in image.pixels() {
        let [r, g, b] = pixel.0.map(quantize);
        write!(writer, "{} {} {} ", r, g, b)?;
    }
    writeln!(writer)?;
    writer.flush()
}

/// Save as ASCII PPM.
pub fn save_image_as_ppm(image: &Framebuffer, output_path: &Path) -> TraceResult<()> {
    let file = File::create(output_path)?;
    write_ppm(image, BufWriter::new(file))?;
    Ok(())
}

/// Save as 8-bit PNG using the PPM quantization.
pub fn save_image_as_png(image: &Framebuffer, output_path: &Path) -> TraceResult<()> {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            Rgb(image.get_pixel(x, y).0.map(quantize))
        });

    u8_image.save_with_format(output_path, ImageFormat::Png)?;
    Ok(())
}

/// Save as OpenEXR with full linear precision.
pub fn save_image_as_exr(image: &Framebuffer, output_path: &Path) -> TraceResult<()> {
    write_rgb_file(
        output_path,
        image.width() as usize,
        image.height() as usize,
        |x, y| {
            let [r, g, b] = image.get_pixel(x as u32, y as u32).0;
            (r, g, b)
        },
    )?;
    Ok(())
}

/// Save `image` in the format implied by `output_path`'s extension.
pub fn save_image(image: &Framebuffer, output_path: &Path) -> TraceResult<()> {
    let format = OutputFormat::from_path(output_path)?;
    debug!(
        "Writing {}x{} image as {:?} to {}",
        image.width(),
        image.height(),
        format,
        output_path.display()
    );

    match format {
        OutputFormat::Ppm => save_image_as_ppm(image, output_path)?,
        OutputFormat::Png => save_image_as_png(image, output_path)?,
        OutputFormat::Exr => save_image_as_exr(image, output_path)?,
    }

    info!("Image saved as {}", output_path.display());
    Ok(())
}
