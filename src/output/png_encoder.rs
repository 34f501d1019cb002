//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. Canvases are written as
//! 8-bit grayscale: set pixels black, unset pixels white.

use crate::canvas::{Canvas, PixelBuffer};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Gray level of a set pixel.
const INK: u8 = 0;
/// Gray level of an unset pixel.
const PAPER: u8 = 255;

/// PNG encoder for canvas output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a canvas to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(canvas, BufWriter::new(file))
    }

    /// Encode a canvas to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(canvas: &Canvas) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(canvas, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(canvas: &Canvas, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, canvas.width() as u32, canvas.height() as u32);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&Self::gray_pixels(canvas))?;

        Ok(())
    }

    /// One gray byte per pixel, row-major, no padding.
    fn gray_pixels(canvas: &Canvas) -> Vec<u8> {
        let mut data = Vec::with_capacity(canvas.pixel_count());
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                data.push(if canvas.get_pixel(x, y) { INK } else { PAPER });
            }
        }
        data
    }
}
