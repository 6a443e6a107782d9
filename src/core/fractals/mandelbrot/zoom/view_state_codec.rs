//! Flat key-value encoding of the view, suitable for a shareable link query.
//!
//! `zoom=<magnification>&xrange=<x_min>%2C<x_max>&yrange=<y_min>%2C<y_max>`
//!
//! The magnification is `1 / zoom_level`. The iteration budget is not part of
//! the encoding.

use crate::core::data::view_rect::{ViewRect, ViewRectError};
use crate::core::fractals::mandelbrot::zoom::state::ZoomState;
use std::error::Error;
use std::fmt;

pub const ZOOM_KEY: &str = "zoom";
pub const X_RANGE_KEY: &str = "xrange";
pub const Y_RANGE_KEY: &str = "yrange";

/// View geometry recovered from a persisted query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistedView {
    pub view: ViewRect,
    pub zoom_level: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewStateError {
    MissingField { key: &'static str },
    InvalidNumber { key: &'static str, value: String },
    InvalidRange { key: &'static str, value: String },
    InvalidView(ViewRectError),
    InvalidZoom { magnification: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { key } => write!(f, "missing field '{}'", key),
            Self::InvalidNumber { key, value } => {
                write!(f, "field '{}' is not a number: '{}'", key, value)
            }
            Self::InvalidRange { key, value } => {
                write!(f, "field '{}' must hold two comma-separated numbers: '{}'", key, value)
            }
            Self::InvalidView(err) => write!(f, "invalid view: {}", err),
            Self::InvalidZoom { magnification } => {
                write!(f, "zoom must be a positive finite magnification: {}", magnification)
            }
        }
    }
}

impl Error for ViewStateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidView(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewRectError> for ViewStateError {
    fn from(err: ViewRectError) -> Self {
        Self::InvalidView(err)
    }
}

#[must_use]
pub fn encode_view_state(state: &ZoomState) -> String {
    let view = state.view;

    format!(
        "{}={}&{}={}%2C{}&{}={}%2C{}",
        ZOOM_KEY,
        state.magnification(),
        X_RANGE_KEY,
        view.x_min(),
        view.x_max(),
        Y_RANGE_KEY,
        view.y_min(),
        view.y_max(),
    )
}

/// Parses a query produced by [`encode_view_state`]. A leading `?`, extra keys
/// and any key order are accepted. Later duplicates of a key are ignored.
pub fn decode_view_state(query: &str) -> Result<PersistedView, ViewStateError> {
    let query = query.trim().trim_start_matches('?');

    let mut zoom = None;
    let mut x_range = None;
    let mut y_range = None;

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let slot = match percent_decode(key).as_str() {
            ZOOM_KEY => &mut zoom,
            X_RANGE_KEY => &mut x_range,
            Y_RANGE_KEY => &mut y_range,
            _ => continue,
        };

        if slot.is_none() {
            *slot = Some(percent_decode(value));
        }
    }

    let zoom = zoom.ok_or(ViewStateError::MissingField { key: ZOOM_KEY })?;
    let x_range = x_range.ok_or(ViewStateError::MissingField { key: X_RANGE_KEY })?;
    let y_range = y_range.ok_or(ViewStateError::MissingField { key: Y_RANGE_KEY })?;

    let magnification = parse_number(ZOOM_KEY, &zoom)?;
    let zoom_level = 1.0 / magnification;

    if !(magnification.is_finite() && magnification > 0.0 && zoom_level.is_finite()) {
        return Err(ViewStateError::InvalidZoom { magnification });
    }

    let (x_min, x_max) = parse_range(X_RANGE_KEY, &x_range)?;
    let (y_min, y_max) = parse_range(Y_RANGE_KEY, &y_range)?;

    Ok(PersistedView {
        view: ViewRect::new(x_min, x_max, y_min, y_max)?,
        zoom_level,
    })
}

fn parse_number(key: &'static str, value: &str) -> Result<f64, ViewStateError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ViewStateError::InvalidNumber {
            key,
            value: value.to_string(),
        })
}

fn parse_range(key: &'static str, value: &str) -> Result<(f64, f64), ViewStateError> {
    let mut parts = value.split(',');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(min), Some(max), None) => Ok((parse_number(key, min)?, parse_number(key, max)?)),
        _ => Err(ViewStateError::InvalidRange {
            key,
            value: value.to_string(),
        }),
    }
}

/// Decodes `+` and `%XX` escapes. Malformed escapes are kept verbatim.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();

                match hex.and_then(|hex| u8::from_str_radix(hex, 16).ok()) {
                    Some(byte) => {
                        decoded.push(byte);
                        i += 3;
                    }
                    None => {
                        decoded.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                decoded.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn state_with_view(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> ZoomState {
        ZoomState {
            view: ViewRect::new(x_min, x_max, y_min, y_max).unwrap(),
            zoom_level: x_max - x_min,
            focus: Complex::ORIGIN,
            max_iterations: 300,
        }
    }

    #[test]
    fn test_encode_default_state() {
        assert_eq!(
            encode_view_state(&ZoomState::default()),
            "zoom=0.25&xrange=-2%2C2&yrange=-1%2C1"
        );
    }

    #[test]
    fn test_round_trip_reproduces_view() {
        let state = state_with_view(-0.7453, -0.7421, 0.1102, 0.1126);

        let decoded = decode_view_state(&encode_view_state(&state)).unwrap();

        assert_eq!(decoded.view, state.view);
        assert!((decoded.zoom_level - state.zoom_level).abs() < 1e-15);
    }

    #[test]
    fn test_decode_accepts_literal_commas_question_mark_and_any_order() {
        let decoded = decode_view_state("?yrange=-1,1&xrange=-2,2&zoom=0.25&extra=1").unwrap();

        assert_eq!(decoded.view, ViewRect::new(-2.0, 2.0, -1.0, 1.0).unwrap());
        assert_eq!(decoded.zoom_level, 4.0);
    }

    #[test]
    fn test_decode_accepts_exponent_notation() {
        let decoded =
            decode_view_state("zoom=2e3&xrange=1e-4%2C6e-4&yrange=-2.5e-4%2C1.25e-4").unwrap();

        assert_eq!(decoded.zoom_level, 0.0005);
        assert_eq!(decoded.view.x_min(), 1e-4);
    }

    #[test]
    fn test_decode_missing_field() {
        assert_eq!(
            decode_view_state("zoom=0.25&xrange=-2,2"),
            Err(ViewStateError::MissingField { key: Y_RANGE_KEY })
        );
        assert_eq!(
            decode_view_state(""),
            Err(ViewStateError::MissingField { key: ZOOM_KEY })
        );
    }

    #[test]
    fn test_decode_invalid_number() {
        assert_eq!(
            decode_view_state("zoom=abc&xrange=-2,2&yrange=-1,1"),
            Err(ViewStateError::InvalidNumber {
                key: ZOOM_KEY,
                value: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_decode_invalid_range_arity() {
        assert_eq!(
            decode_view_state("zoom=1&xrange=-2&yrange=-1,1"),
            Err(ViewStateError::InvalidRange {
                key: X_RANGE_KEY,
                value: "-2".to_string()
            })
        );
        assert!(matches!(
            decode_view_state("zoom=1&xrange=-2,2&yrange=-1,0,1"),
            Err(ViewStateError::InvalidRange { key: Y_RANGE_KEY, .. })
        ));
    }

    #[test]
    fn test_decode_rejects_degenerate_view() {
        assert!(matches!(
            decode_view_state("zoom=1&xrange=2,-2&yrange=-1,1"),
            Err(ViewStateError::InvalidView(ViewRectError::InvalidSize { .. }))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_magnification() {
        for zoom in ["0", "-1", "inf", "NaN"] {
            let query = format!("zoom={}&xrange=-2,2&yrange=-1,1", zoom);
            assert!(
                matches!(decode_view_state(&query), Err(ViewStateError::InvalidZoom { .. })),
                "zoom={} should be rejected",
                zoom
            );
        }
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("-2%2C2"), "-2,2");
        assert_eq!(percent_decode("-2%2c2"), "-2,2");
        assert_eq!(percent_decode("a+b"), "a b");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz1"), "%zz1");
    }

    #[test]
    fn test_invalid_view_error_has_source() {
        let err = ViewStateError::from(ViewRectError::InvalidSize {
            width: 0.0,
            height: 1.0,
        });

        assert!(err.source().is_some());
    }
}
