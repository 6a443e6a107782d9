/// Bounds on the zoom level (the width of the view along the real axis).
///
/// The lower bound sits well above where `f64` spacing would collapse the
/// view for coordinates near the set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min_zoom_level: f64,
    pub max_zoom_level: f64,
}

impl ZoomLimits {
    #[must_use]
    pub fn contains(&self, zoom_level: f64) -> bool {
        zoom_level.is_finite()
            && zoom_level >= self.min_zoom_level
            && zoom_level <= self.max_zoom_level
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_zoom_level: 1.0 / 549_755_813_888.0,
            max_zoom_level: 8.0,
        }
    }
}
