//! Grayscale noise textures and sprite rasterization.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{Error, Result};
use crate::fbm;
use crate::field::NoiseField;
use crate::params::OctaveParams;

/// Square RGBA8 pixel buffer (row-major, origin top-left)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBuffer {
    size: u32,
    pixels: Vec<u8>,
}

impl TextureBuffer {
    fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![0u8; size as usize * size as usize * 4],
        }
    }

    /// Side length in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw RGBA bytes, 4 per pixel, ready for texture upload
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel at (x, y)
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.size + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
        let idx = ((y * self.size + x) * 4) as usize;
        self.pixels[idx..idx + 4].copy_from_slice(&color);
    }

    /// Encode as PNG and write to `path`
    pub fn write_png(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        let encoder = PngEncoder::new(writer);
        encoder.write_image(&self.pixels, self.size, self.size, ExtendedColorType::Rgba8)?;
        Ok(())
    }
}

/// Rasterize a grayscale fractal-noise texture
///
/// Every pixel samples the composited noise at its normalized grid
/// coordinate (x / size, y / size) and stores the intensity as an opaque
/// gray RGBA pixel. The output is fully deterministic for a fixed size,
/// parameter set, and field seed; pixels have no ordering dependency on
/// each other.
pub fn generate(size: u32, params: &OctaveParams, field: &NoiseField) -> Result<TextureBuffer> {
    if size == 0 {
        return Err(Error::InvalidArgument(
            "texture size must be at least 1".into(),
        ));
    }
    params.validate()?;

    let mut buffer = TextureBuffer::new(size);
    for y in 0..size {
        for x in 0..size {
            let nx = x as f64 / size as f64;
            let ny = y as f64 / size as f64;
            let intensity = fbm::composite(nx, ny, params, field)?;
            // Clamp before quantizing: unusual persistence/lacunarity mixes
            // can nudge the composite slightly outside [0, 1].
            let gray = (intensity.clamp(0.0, 1.0) * 255.0).round() as u8;
            buffer.set_pixel(x, y, [gray, gray, gray, 255]);
        }
    }
    Ok(buffer)
}

/// Rasterize a filled circle sprite
///
/// The circle is inscribed in the square buffer; pixels outside it stay
/// fully transparent. Coverage is decided at pixel centers.
pub fn circle(size: u32, color: [u8; 4]) -> Result<TextureBuffer> {
    if size == 0 {
        return Err(Error::InvalidArgument(
            "sprite size must be at least 1".into(),
        ));
    }

    let mut buffer = TextureBuffer::new(size);
    let center = size as f64 / 2.0;
    let radius = size as f64 / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f64 + 0.5 - center;
            let dy = y as f64 + 0.5 - center;
            if (dx * dx + dy * dy).sqrt() <= radius {
                buffer.set_pixel(x, y, color);
            }
        }
    }
    Ok(buffer)
}
