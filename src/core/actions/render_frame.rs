use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::data::complex::Complex;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, OPAQUE, PixelBuffer};
use crate::core::data::raster::Raster;
use crate::core::data::view_rect::ViewRect;
use crate::core::fractals::mandelbrot::algorithm::escape_time;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::util::pixel_to_complex_coords::map_pixel_to_plane;

/// Renders a full frame of `view` into an RGBA buffer.
///
/// Rows are rendered in parallel on rayon's pool. Every pixel is independent,
/// so the output is identical to a sequential render.
#[must_use]
pub fn render_frame(
    view: ViewRect,
    max_iterations: u32,
    scheme: ColourScheme,
    raster: Raster,
) -> PixelBuffer {
    match render_frame_cancelable(view, max_iterations, scheme, raster, &NeverCancel) {
        Ok(frame) => frame,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`render_frame`], but polls `cancel` at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row.
///
/// A cancelled render yields no buffer at all, so a stale partial frame can
/// never reach a presenter.
pub fn render_frame_cancelable<C: CancelToken>(
    view: ViewRect,
    max_iterations: u32,
    scheme: ColourScheme,
    raster: Raster,
    cancel: &C,
) -> Result<PixelBuffer, Cancelled> {
    let start = Instant::now();
    let width = f64::from(raster.width());
    let height = f64::from(raster.height());
    let row_bytes = raster.width() as usize * BYTES_PER_PIXEL;

    let mut frame = PixelBuffer::new(raster);

    frame
        .as_mut_bytes()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each(|(y, row)| {
            let imag = map_pixel_to_plane(y as f64, height, view.y_min(), view.y_max());

            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                if x % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                let real = map_pixel_to_plane(x as f64, width, view.x_min(), view.x_max());
                let escape = escape_time(Complex { real, imag }, max_iterations);
                let colour = scheme.colour(max_iterations, escape);

                pixel.copy_from_slice(&[colour.r, colour.g, colour.b, OPAQUE]);
            }

            Ok(())
        })?;

    debug!(
        width = raster.width(),
        height = raster.height(),
        max_iterations,
        scheme = scheme.key(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "frame rendered"
    );

    Ok(frame)
}
