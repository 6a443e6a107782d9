use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives completed frames from the render worker. Only frames whose
/// generation is still current are delivered.
pub trait FramePresenterPort: Send + Sync {
    fn present(&self, frame: FrameData);
}
