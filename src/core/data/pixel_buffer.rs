use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;
pub const OPAQUE: u8 = 255;

fn raster_to_buffer_size(raster: Raster) -> usize {
    raster.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, raster: Raster },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, raster } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} raster",
                    pixel.x,
                    pixel.y,
                    raster.width(),
                    raster.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA frame, four bytes per pixel, alpha always opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    raster: Raster,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Creates an opaque black frame.
    #[must_use]
    pub fn new(raster: Raster) -> Self {
        let mut buffer = vec![0; raster_to_buffer_size(raster)];

        for pixel in buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = OPAQUE;
        }

        Self { raster, buffer }
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.raster
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.raster.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                raster: self.raster,
            });
        }

        let row_start = pixel.y as usize * self.raster.width() as usize;

        Ok((row_start + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = OPAQUE;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}
