use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        write_ppm(&mut file, buffer)?;
        file.flush()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

fn write_ppm(out: &mut impl Write, buffer: &PixelBuffer) -> std::io::Result<()> {
    let raster = buffer.raster();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", raster.width(), raster.height())?;
    writeln!(out, "255")?;
    out.write_all(&rgba_to_rgb(buffer.buffer()))
}
