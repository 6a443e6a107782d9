use crate::core::data::colour::{Colour, channel_from_f64};

/// Converts hue (degrees), saturation and value to RGB using the six-sector
/// decomposition. `value` is capped at 1. Hues outside `[0, 360)` match no
/// sector and contribute only the grey offset.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let value = value.min(1.0);
    let sector = hue / 60.0;
    let chroma = value * saturation;
    let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

    let (r, g, b) = if (0.0..1.0).contains(&sector) {
        (chroma, x, 0.0)
    } else if (1.0..2.0).contains(&sector) {
        (x, chroma, 0.0)
    } else if (2.0..3.0).contains(&sector) {
        (0.0, chroma, x)
    } else if (3.0..4.0).contains(&sector) {
        (0.0, x, chroma)
    } else if (4.0..5.0).contains(&sector) {
        (x, 0.0, chroma)
    } else if (5.0..6.0).contains(&sector) {
        (chroma, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    let m = value - chroma;

    Colour {
        r: channel_from_f64((r + m) * 255.0),
        g: channel_from_f64((g + m) * 255.0),
        b: channel_from_f64((b + m) * 255.0),
    }
}
