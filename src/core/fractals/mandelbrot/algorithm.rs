use crate::core::data::complex::Complex;

/// Squared bailout radius; an orbit that leaves the disk of radius 2 never returns.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating a single point.
///
/// `real_squared` and `imag_squared` are the squared components of the last
/// orbit value, which the smooth colour schemes feed into their logarithm.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeResult {
    pub iterations: u32,
    pub real_squared: f64,
    pub imag_squared: f64,
}

impl EscapeResult {
    #[must_use]
    pub fn escaped(&self, max_iterations: u32) -> bool {
        self.iterations < max_iterations
    }
}

/// Escape-time iteration of `z <- z² + c`.
///
/// The orbit is seeded at `c`, the result of the first step from the origin,
/// so index 0 tests `|c|² > 4` directly. Points that never escape report
/// `max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeResult {
    let mut z = c;

    for iteration in 0..max_iterations {
        let real_squared = z.real * z.real;
        let imag_squared = z.imag * z.imag;

        if real_squared + imag_squared > ESCAPE_RADIUS_SQUARED {
            return EscapeResult {
                iterations: iteration,
                real_squared,
                imag_squared,
            };
        }

        z = z * z + c;
    }

    EscapeResult {
        iterations: max_iterations,
        real_squared: z.real * z.real,
        imag_squared: z.imag * z.imag,
    }
}
