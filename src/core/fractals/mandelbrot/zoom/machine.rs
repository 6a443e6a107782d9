use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::data::view_rect::ViewRect;
use crate::core::fractals::mandelbrot::zoom::event::ZoomEvent;
use crate::core::fractals::mandelbrot::zoom::limits::ZoomLimits;
use crate::core::fractals::mandelbrot::zoom::state::{
    DEFAULT_FOCUS, ZoomState, derive_max_iterations,
};
use crate::core::fractals::mandelbrot::zoom::view_state_codec::{
    PersistedView, decode_view_state,
};
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use tracing::{debug, warn};

/// Pure transition function for [`ZoomState`], bound to a raster size.
///
/// Every produced view is aspect-correct for the raster and has a zoom level
/// inside the limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStateMachine {
    raster: Raster,
    limits: ZoomLimits,
}

impl ZoomStateMachine {
    #[must_use]
    pub fn new(raster: Raster, limits: ZoomLimits) -> Self {
        Self { raster, limits }
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.raster
    }

    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Starting state: restored from `query` when one is given, defaults otherwise
    /// or when the query cannot be decoded.
    #[must_use]
    pub fn initial_state(&self, query: Option<&str>) -> ZoomState {
        let defaults = ZoomState::default();

        let Some(query) = query.filter(|q| !q.trim().trim_start_matches('?').is_empty()) else {
            return defaults;
        };

        match decode_view_state(query) {
            Ok(persisted) => self.handle_event(&defaults, &ZoomEvent::Restore(persisted)),
            Err(err) => {
                warn!(%err, query, "ignoring malformed view state");
                defaults
            }
        }
    }

    /// Applies `event`, returning the unchanged state when it is rejected.
    #[must_use]
    pub fn handle_event(&self, state: &ZoomState, event: &ZoomEvent) -> ZoomState {
        self.transition(state, event).unwrap_or(*state)
    }

    /// Returns the next state, or `None` when the event is rejected and no
    /// re-render is needed.
    #[must_use]
    pub fn transition(&self, state: &ZoomState, event: &ZoomEvent) -> Option<ZoomState> {
        match *event {
            ZoomEvent::ZoomIn(pixel) => {
                let zoom_level = state.zoom_level * 0.5;

                if !(zoom_level >= self.limits.min_zoom_level) {
                    debug!(zoom_level = state.zoom_level, "zoom in rejected at minimum zoom level");
                    return None;
                }

                self.recentre(state, pixel, zoom_level)
            }
            ZoomEvent::ZoomOut(pixel) => {
                let zoom_level = state.zoom_level / 0.5;

                if !(zoom_level <= self.limits.max_zoom_level) {
                    debug!(zoom_level = state.zoom_level, "zoom out rejected at maximum zoom level");
                    return None;
                }

                self.recentre(state, pixel, zoom_level)
            }
            // The home view is the fixed [-2, 2] x [-1, 1] span on every raster,
            // so it is only aspect-correct for 2:1 rasters until the next zoom.
            ZoomEvent::Reset => Some(ZoomState::default()),
            ZoomEvent::Restore(persisted) => Some(self.restore(state, persisted)),
        }
    }

    fn recentre(&self, state: &ZoomState, pixel: Point, zoom_level: f64) -> Option<ZoomState> {
        let focus: Complex = pixel_to_complex_coords(pixel, self.raster, state.view);

        let view = match ViewRect::centred_on(focus, zoom_level, self.raster.aspect_ratio()) {
            Ok(view) => view,
            Err(err) => {
                debug!(%err, "navigation rejected: view would be degenerate");
                return None;
            }
        };

        Some(ZoomState {
            view,
            zoom_level,
            focus,
            max_iterations: derive_max_iterations(view.width(), view.height()),
        })
    }

    // The iteration budget is not persisted; it carries over until the next
    // navigation derives it from the geometry.
    fn restore(&self, state: &ZoomState, persisted: PersistedView) -> ZoomState {
        if !self.limits.contains(persisted.zoom_level) {
            warn!(
                zoom_level = persisted.zoom_level,
                "restored zoom level outside limits, using defaults"
            );
            return ZoomState::default();
        }

        ZoomState {
            view: persisted.view,
            zoom_level: persisted.zoom_level,
            focus: DEFAULT_FOCUS,
            max_iterations: state.max_iterations,
        }
    }
}
