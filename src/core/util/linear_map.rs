/// Maps `value` from `[from_min, from_max]` onto `[to_min, to_max]` along a
/// straight line. Values outside the source range extrapolate.
///
/// `from_min` and `from_max` must differ.
#[must_use]
pub fn linear_map(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    (value - from_min) * (to_max - to_min) / (from_max - from_min) + to_min
}
