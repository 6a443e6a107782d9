use crate::core::data::raster::Raster;
use crate::core::data::view_rect::ViewRect;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::zoom::state::ZoomState;

/// Snapshot of everything a single render job needs.
///
/// `PartialEq` lets callers skip submitting a request identical to the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub view: ViewRect,
    pub max_iterations: u32,
    pub scheme: ColourScheme,
    pub raster: Raster,
}

impl RenderRequest {
    #[must_use]
    pub fn from_state(state: &ZoomState, scheme: ColourScheme, raster: Raster) -> Self {
        Self {
            view: state.view,
            max_iterations: state.max_iterations,
            scheme,
            raster,
        }
    }
}
