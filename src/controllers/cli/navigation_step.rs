use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::zoom::event::ZoomEvent;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// A scripted navigation action: `in:X,Y`, `out:X,Y` or `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationStep {
    ZoomIn(Point),
    ZoomOut(Point),
    Reset,
}

impl NavigationStep {
    #[must_use]
    pub fn to_event(self) -> ZoomEvent {
        match self {
            Self::ZoomIn(pixel) => ZoomEvent::ZoomIn(pixel),
            Self::ZoomOut(pixel) => ZoomEvent::ZoomOut(pixel),
            Self::Reset => ZoomEvent::Reset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidNavigationStep(pub String);

impl fmt::Display for InvalidNavigationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid navigation step '{}' (expected in:X,Y, out:X,Y or reset)",
            self.0
        )
    }
}

impl Error for InvalidNavigationStep {}

impl FromStr for NavigationStep {
    type Err = InvalidNavigationStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidNavigationStep(s.to_string());
        let trimmed = s.trim();

        if trimmed.eq_ignore_ascii_case("reset") {
            return Ok(Self::Reset);
        }

        let (action, coords) = trimmed.split_once(':').ok_or_else(invalid)?;
        let (x, y) = coords.split_once(',').ok_or_else(invalid)?;
        let pixel = Point {
            x: x.trim().parse().map_err(|_| invalid())?,
            y: y.trim().parse().map_err(|_| invalid())?,
        };

        match action.trim().to_ascii_lowercase().as_str() {
            "in" => Ok(Self::ZoomIn(pixel)),
            "out" => Ok(Self::ZoomOut(pixel)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_step_kinds() {
        assert_eq!(
            "in:400,300".parse(),
            Ok(NavigationStep::ZoomIn(Point { x: 400, y: 300 }))
        );
        assert_eq!(
            "OUT: 10, 20".parse(),
            Ok(NavigationStep::ZoomOut(Point { x: 10, y: 20 }))
        );
        assert_eq!("reset".parse(), Ok(NavigationStep::Reset));
    }

    #[test]
    fn rejects_malformed_steps() {
        for input in ["", "in", "in:1", "in:a,b", "sideways:1,2", "reset:1,2"] {
            assert_eq!(
                input.parse::<NavigationStep>(),
                Err(InvalidNavigationStep(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn converts_to_zoom_events() {
        let pixel = Point { x: 1, y: 2 };

        assert_eq!(NavigationStep::ZoomIn(pixel).to_event(), ZoomEvent::ZoomIn(pixel));
        assert_eq!(NavigationStep::ZoomOut(pixel).to_event(), ZoomEvent::ZoomOut(pixel));
        assert_eq!(NavigationStep::Reset.to_event(), ZoomEvent::Reset);
    }
}
