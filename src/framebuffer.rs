use crate::prelude::*;
use std::io::{self, Write};

pub const BYTES_PER_PIXEL: usize = 4;

/// Row-major RGBA8 pixel grid with the origin at the top-left corner.
///
/// The bytes can be handed straight to a display surface via [`FrameBuffer::as_bytes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    /// A buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Bytes in one row.
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} frame",
            self.width,
            self.height
        );
        y as usize * self.stride() + x as usize * BYTES_PER_PIXEL
    }

    /// # Panics
    /// If `(x, y)` is outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Color {
        let i = self.offset(x, y);
        let mut rgba = [0; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.pixels[i..i + BYTES_PER_PIXEL]);
        Color::from_array(rgba)
    }

    /// # Panics
    /// If `(x, y)` is outside the frame.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.offset(x, y);
        self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| self.get(x, y)))
    }

    /// Write the frame as a plain-text PPM (P3). Alpha is dropped.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "255")?;

        for color in self.pixels() {
            writeln!(out, "{color}")?;
        }

        Ok(())
    }
}
