use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::cli::navigation_step::NavigationStep;
use crate::controllers::navigator::Navigator;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Replays navigation steps on a [`Navigator`], renders the resulting view and
/// hands it to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    navigator: Navigator,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, navigator: Navigator) -> Self {
        Self {
            presenter,
            navigator,
            buffer: None,
        }
    }

    /// Applies `steps` in order and returns how many of them changed the view.
    pub fn navigate(&mut self, steps: &[NavigationStep]) -> usize {
        let applied = steps
            .iter()
            .filter(|step| self.navigator.handle(step.to_event()))
            .count();

        if applied != steps.len() {
            info!(
                requested = steps.len(),
                applied,
                "some navigation steps were rejected"
            );
        }

        applied
    }

    pub fn generate(&mut self) {
        let raster = self.navigator.raster();
        let start = Instant::now();

        let buffer = self.navigator.render();

        info!(
            width = raster.width(),
            height = raster.height(),
            max_iterations = self.navigator.state().max_iterations,
            scheme = self.navigator.colour_scheme().key(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "rendered frame"
        );

        self.buffer = Some(buffer);
    }

    pub fn write(&self, filepath: &Path) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?;
            info!(path = %filepath.display(), "frame written");
        }

        Ok(())
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::data::raster::Raster;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn controller() -> CliRenderController<RecordingPresenter> {
        let navigator = Navigator::new(Raster::new(16, 8).unwrap(), ColourScheme::default());
        CliRenderController::new(RecordingPresenter::default(), navigator)
    }

    #[test]
    fn test_write_before_generate_writes_nothing() {
        let controller = controller();

        controller.write(Path::new("frame.png")).unwrap();

        assert!(controller.presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_frame() {
        let mut controller = controller();

        controller.generate();
        controller.write(Path::new("frame.png")).unwrap();

        assert_eq!(
            *controller.presenter.written.borrow(),
            vec![(PathBuf::from("frame.png"), 16 * 8 * 4)]
        );
    }

    #[test]
    fn test_navigate_counts_applied_steps() {
        let mut controller = controller();
        let centre = Point { x: 8, y: 4 };

        // the second zoom out would exceed the maximum zoom level
        let applied = controller.navigate(&[
            NavigationStep::ZoomOut(centre),
            NavigationStep::ZoomOut(centre),
            NavigationStep::ZoomIn(centre),
        ]);

        assert_eq!(applied, 2);
        assert_eq!(controller.navigator().state().zoom_level, 4.0);
    }
}
