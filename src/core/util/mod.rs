pub mod linear_map;
pub mod pixel_to_complex_coords;
