#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn grey(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }
}

/// Rounds a channel value to the nearest integer and saturates it into `0..=255`.
#[must_use]
pub fn channel_from_f64(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    value.round() as u8
}
