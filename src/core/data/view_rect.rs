use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewRectError {
    NonFinite {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "view bounds must be finite: x [{}, {}] y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
            Self::InvalidSize { width, height } => {
                write!(f, "view size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewRectError {}

/// Axis-aligned region of the complex plane mapped onto the raster.
///
/// `x` runs along the real axis and `y` along the imaginary axis. Both extents
/// are strictly positive and all bounds are finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewRect {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl ViewRect {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewRectError> {
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return Err(ViewRectError::NonFinite {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        let width = x_max - x_min;
        let height = y_max - y_min;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewRectError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Builds a rectangle of the given width centred on `centre`, with a height
    /// of `width / aspect_ratio` so that it matches a raster of that ratio.
    pub fn centred_on(
        centre: Complex,
        width: f64,
        aspect_ratio: f64,
    ) -> Result<Self, ViewRectError> {
        let x_min = centre.real - width / 2.0;
        let x_max = centre.real + width / 2.0;

        let span = (x_min - x_max).abs();
        let y_min = centre.imag - (span / aspect_ratio) / 2.0;
        let y_max = centre.imag + (span / aspect_ratio) / 2.0;

        Self::new(x_min, x_max, y_min, y_max)
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
