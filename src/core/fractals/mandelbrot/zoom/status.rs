use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::zoom::state::ZoomState;
use std::fmt;

/// Human-readable summary of a [`ZoomState`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReadout {
    pub x_interval: (f64, f64),
    pub y_interval: (f64, f64),
    pub magnification: f64,
    pub iterations: u32,
    pub focus: Complex,
}

impl StatusReadout {
    #[must_use]
    pub fn from_state(state: &ZoomState) -> Self {
        Self {
            x_interval: (state.view.x_min(), state.view.x_max()),
            y_interval: (state.view.y_min(), state.view.y_max()),
            magnification: state.magnification(),
            iterations: state.max_iterations,
            focus: state.focus,
        }
    }
}

impl fmt::Display for StatusReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "X Interval: [{}, {}]", self.x_interval.0, self.x_interval.1)?;
        writeln!(f, "Y Interval: [{}, {}]", self.y_interval.0, self.y_interval.1)?;
        writeln!(f, "Zoom: {}", self.magnification)?;
        writeln!(f, "Iterations: {}", self.iterations)?;
        write!(f, "Looking at: ({}, {})", self.focus.real, self.focus.imag)
    }
}
