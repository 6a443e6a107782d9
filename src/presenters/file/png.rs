use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageBuffer, ImageFormat, Rgba};
use std::io;
use std::path::Path;

/// Writes frames as 8-bit RGBA PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
        let raster = buffer.raster();
        let image = ImageBuffer::<Rgba<u8>, _>::from_raw(
            raster.width(),
            raster.height(),
            buffer.buffer().as_slice(),
        )
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "pixel buffer smaller than raster"))?;

        image
            .save_with_format(filepath, ImageFormat::Png)
            .map_err(io::Error::other)
    }
}
