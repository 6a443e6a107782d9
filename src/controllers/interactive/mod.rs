//! Background rendering for interactive exploration.
//!
//! The caller commits a new [`RenderRequest`] after every navigation event. A
//! single worker thread renders the most recent request, abandoning a render
//! as soon as a newer one is submitted, and hands completed frames to a
//! [`FramePresenterPort`].

mod controller;
pub mod data;
pub mod ports;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use ports::presenter_port::FramePresenterPort;
