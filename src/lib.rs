mod adapters;
mod controllers;
mod core;
mod presenters;

pub use controllers::cli::navigation_step::{InvalidNavigationStep, NavigationStep};
pub use controllers::cli::render_command::CliRenderController;
pub use controllers::interactive::{
    FrameData, FramePresenterPort, InteractiveController, RenderRequest,
};
pub use controllers::navigator::Navigator;
pub use controllers::ports::file_presenter::FilePresenterPort;

pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_frame::{render_frame, render_frame_cancelable};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster::{Raster, RasterError};
pub use crate::core::data::view_rect::{ViewRect, ViewRectError};
pub use crate::core::fractals::mandelbrot::algorithm::{EscapeResult, escape_time};
pub use crate::core::fractals::mandelbrot::colour_mapping::hsv::hsv_to_rgb;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::{ColourScheme, UnknownColourScheme};
pub use crate::core::fractals::mandelbrot::colour_mapping::map::smooth_iteration_count;
pub use crate::core::fractals::mandelbrot::zoom::event::ZoomEvent;
pub use crate::core::fractals::mandelbrot::zoom::limits::ZoomLimits;
pub use crate::core::fractals::mandelbrot::zoom::machine::ZoomStateMachine;
pub use crate::core::fractals::mandelbrot::zoom::state::{
    DEFAULT_FOCUS, DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM_LEVEL, ZoomState, derive_max_iterations,
};
pub use crate::core::fractals::mandelbrot::zoom::status::StatusReadout;
pub use crate::core::fractals::mandelbrot::zoom::view_state_codec::{
    PersistedView, ViewStateError, decode_view_state, encode_view_state,
};
pub use crate::core::util::pixel_to_complex_coords::{map_pixel_to_plane, pixel_to_complex_coords};

pub use presenters::file::png::PngFilePresenter;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::file::{FrameFileFormat, UnsupportedFormat, presenter_for_path};
