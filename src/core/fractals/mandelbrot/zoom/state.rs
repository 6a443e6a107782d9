use crate::core::data::complex::Complex;
use crate::core::data::view_rect::ViewRect;

pub const DEFAULT_X_MIN: f64 = -2.0;
pub const DEFAULT_X_MAX: f64 = 2.0;
pub const DEFAULT_Y_MIN: f64 = -1.0;
pub const DEFAULT_Y_MAX: f64 = 1.0;
pub const DEFAULT_ZOOM_LEVEL: f64 = 4.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 150;
/// Initial point of interest shown in the status readout.
pub const DEFAULT_FOCUS: Complex = Complex::new(-0.34375, -0.4218590398365679);

pub(crate) fn default_view() -> ViewRect {
    ViewRect::new(DEFAULT_X_MIN, DEFAULT_X_MAX, DEFAULT_Y_MIN, DEFAULT_Y_MAX)
        .expect("default view region is valid")
}

/// Iteration budget for a view of the given extents. Narrower views get more
/// iterations to resolve boundary detail.
#[must_use]
pub fn derive_max_iterations(dx: f64, dy: f64) -> u32 {
    let f = (0.001 + 2.0 * dx.abs().min(dy.abs())).sqrt();

    (223.0 / f).floor() as u32
}

/// Everything needed to reproduce the current frame.
///
/// `zoom_level` is the width of `view` along the real axis, `focus` the plane
/// coordinate of the last navigation event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub view: ViewRect,
    pub zoom_level: f64,
    pub focus: Complex,
    pub max_iterations: u32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            view: default_view(),
            zoom_level: DEFAULT_ZOOM_LEVEL,
            focus: DEFAULT_FOCUS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl ZoomState {
    /// User-facing magnification, the inverse of the zoom level.
    #[must_use]
    pub fn magnification(&self) -> f64 {
        1.0 / self.zoom_level
    }
}
