pub mod hsv;
pub mod kinds;
pub mod map;
