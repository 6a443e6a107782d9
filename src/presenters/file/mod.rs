//! File output for rendered frames.

pub mod png;
pub mod ppm;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use self::png::PngFilePresenter;
use self::ppm::PpmFilePresenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFileFormat {
    Png,
    Ppm,
}

impl FrameFileFormat {
    /// Picks the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFormat> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("ppm") => Ok(Self::Ppm),
            _ => Err(UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFormat {
    pub path: PathBuf,
}

impl fmt::Display for UnsupportedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot write '{}': expected a .png or .ppm file",
            self.path.display()
        )
    }
}

impl Error for UnsupportedFormat {}

pub fn presenter_for_path(path: &Path) -> Result<Box<dyn FilePresenterPort>, UnsupportedFormat> {
    Ok(match FrameFileFormat::from_path(path)? {
        FrameFileFormat::Png => Box::new(PngFilePresenter::new()),
        FrameFileFormat::Ppm => Box::new(PpmFilePresenter::new()),
    })
}
