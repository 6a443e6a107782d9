use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The selectable colouring schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourScheme {
    #[default]
    BandedGrayscale,
    LinearGrayscale,
    SmoothHsv,
}

impl ColourScheme {
    pub const ALL: &'static [Self] = &[
        Self::BandedGrayscale,
        Self::LinearGrayscale,
        Self::SmoothHsv,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BandedGrayscale => "Banded grayscale",
            Self::LinearGrayscale => "Linear grayscale",
            Self::SmoothHsv => "Smooth HSV",
        }
    }

    /// Identifier used on the command line and in settings.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BandedGrayscale => "banded-grayscale",
            Self::LinearGrayscale => "linear-grayscale",
            Self::SmoothHsv => "smooth-hsv",
        }
    }
}

impl fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourScheme(pub String);

impl fmt::Display for UnknownColourScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown colour scheme '{}' (expected banded-grayscale, linear-grayscale or smooth-hsv)",
            self.0
        )
    }
}

impl Error for UnknownColourScheme {}

impl FromStr for ColourScheme {
    type Err = UnknownColourScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "banded-grayscale" | "grayscale1" => Ok(Self::BandedGrayscale),
            "linear-grayscale" | "grayscale2" => Ok(Self::LinearGrayscale),
            "smooth-hsv" | "hsv" => Ok(Self::SmoothHsv),
            _ => Err(UnknownColourScheme(s.to_string())),
        }
    }
}
