use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::raster::Raster;
use crate::core::data::view_rect::ViewRect;
use crate::core::util::linear_map::linear_map;

/// Linearly maps a pixel coordinate in `[0, pixel_extent]` onto `[plane_min, plane_max]`.
///
/// `pixel_extent` must be non-zero. Coordinates outside the extent extrapolate
/// along the same line.
#[must_use]
pub fn map_pixel_to_plane(pixel_coord: f64, pixel_extent: f64, plane_min: f64, plane_max: f64) -> f64 {
    linear_map(pixel_coord, 0.0, pixel_extent, plane_min, plane_max)
}

/// Maps a raster cell onto the complex plane. Column 0 lands on `x_min`, row 0
/// on `y_min`; the far edges (`width`, `height`) would land on the maxima.
#[must_use]
pub fn pixel_to_complex_coords(pixel_position: Point, raster: Raster, view: ViewRect) -> Complex {
    Complex {
        real: map_pixel_to_plane(
            f64::from(pixel_position.x),
            f64::from(raster.width()),
            view.x_min(),
            view.x_max(),
        ),
        imag: map_pixel_to_plane(
            f64::from(pixel_position.y),
            f64::from(raster.height()),
            view.y_min(),
            view.y_max(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_view() -> ViewRect {
        ViewRect::new(-2.0, 2.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_map_is_exact_at_boundaries() {
        assert_eq!(map_pixel_to_plane(0.0, 800.0, -2.0, 2.0), -2.0);
        assert_eq!(map_pixel_to_plane(800.0, 800.0, -2.0, 2.0), 2.0);
        assert_eq!(map_pixel_to_plane(0.0, 3.0, 0.1, 0.7), 0.1);
        assert!((map_pixel_to_plane(3.0, 3.0, 0.1, 0.7) - 0.7).abs() < 1e-15);
    }

    #[test]
    fn test_map_midpoint() {
        assert_eq!(map_pixel_to_plane(400.0, 800.0, -2.0, 2.0), 0.0);
        assert_eq!(map_pixel_to_plane(1.0, 4.0, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_map_extrapolates_outside_extent() {
        assert_eq!(map_pixel_to_plane(-100.0, 100.0, 0.0, 1.0), -1.0);
        assert_eq!(map_pixel_to_plane(200.0, 100.0, 0.0, 1.0), 2.0);
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let raster = Raster::new(100, 100).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, raster, default_view());

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_complex_centre() {
        let raster = Raster::new(4, 4).unwrap();

        let result = pixel_to_complex_coords(Point { x: 2, y: 2 }, raster, default_view());

        assert_eq!(result, Complex::ORIGIN);
    }

    #[test]
    fn test_pixel_to_complex_far_edge_hits_maxima() {
        let raster = Raster::new(100, 50).unwrap();

        let result = pixel_to_complex_coords(Point { x: 100, y: 50 }, raster, default_view());

        assert_eq!(result, Complex::new(2.0, 1.0));
    }
}
