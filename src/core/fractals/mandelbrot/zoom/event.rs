use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::zoom::view_state_codec::PersistedView;

/// Navigation input, decoupled from whatever produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomEvent {
    /// Primary action: halve the zoom level around the pixel.
    ZoomIn(Point),
    /// Secondary action: double the zoom level around the pixel.
    ZoomOut(Point),
    Reset,
    Restore(PersistedView),
}
