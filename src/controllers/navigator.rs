use tracing::{debug, info};

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::render_frame::render_frame;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::raster::Raster;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::fractals::mandelbrot::zoom::event::ZoomEvent;
use crate::core::fractals::mandelbrot::zoom::limits::ZoomLimits;
use crate::core::fractals::mandelbrot::zoom::machine::ZoomStateMachine;
use crate::core::fractals::mandelbrot::zoom::state::ZoomState;
use crate::core::fractals::mandelbrot::zoom::status::StatusReadout;
use crate::core::fractals::mandelbrot::zoom::view_state_codec::encode_view_state;

/// Owns the current [`ZoomState`] and the selected colour scheme for one raster.
///
/// Input handlers feed it [`ZoomEvent`]s; whenever [`Navigator::handle`]
/// reports a change the caller re-renders.
#[derive(Debug, Clone)]
pub struct Navigator {
    machine: ZoomStateMachine,
    state: ZoomState,
    scheme: ColourScheme,
}

impl Navigator {
    #[must_use]
    pub fn new(raster: Raster, scheme: ColourScheme) -> Self {
        Self::with_limits(raster, scheme, ZoomLimits::default())
    }

    #[must_use]
    pub fn with_limits(raster: Raster, scheme: ColourScheme, limits: ZoomLimits) -> Self {
        Self {
            machine: ZoomStateMachine::new(raster, limits),
            state: ZoomState::default(),
            scheme,
        }
    }

    /// Replaces the state with one decoded from `query`, or the defaults when
    /// the query is absent or malformed.
    pub fn restore(&mut self, query: Option<&str>) {
        self.state = self.machine.initial_state(query);

        info!(
            zoom = self.state.magnification(),
            max_iterations = self.state.max_iterations,
            "view restored"
        );
    }

    /// Applies `event`. Returns `true` when the state changed and the frame
    /// must be redrawn.
    pub fn handle(&mut self, event: ZoomEvent) -> bool {
        let Some(next) = self.machine.transition(&self.state, &event) else {
            return false;
        };

        if next == self.state {
            debug!(?event, "event left the view unchanged");
            return false;
        }

        self.state = next;

        info!(
            ?event,
            zoom = self.state.magnification(),
            max_iterations = self.state.max_iterations,
            "view changed"
        );

        true
    }

    #[must_use]
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.machine.raster()
    }

    #[must_use]
    pub fn colour_scheme(&self) -> ColourScheme {
        self.scheme
    }

    /// Returns `true` when the scheme differs from the current one.
    pub fn set_colour_scheme(&mut self, scheme: ColourScheme) -> bool {
        if scheme == self.scheme {
            return false;
        }

        info!(scheme = scheme.key(), "colour scheme changed");
        self.scheme = scheme;

        true
    }

    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest::from_state(&self.state, self.scheme, self.raster())
    }

    #[must_use]
    pub fn render(&self) -> PixelBuffer {
        render_frame(
            self.state.view,
            self.state.max_iterations,
            self.scheme,
            self.raster(),
        )
    }

    #[must_use]
    pub fn status(&self) -> StatusReadout {
        StatusReadout::from_state(&self.state)
    }

    /// Query string that reproduces the current view through [`Navigator::restore`].
    #[must_use]
    pub fn query_string(&self) -> String {
        encode_view_state(&self.state)
    }
}
