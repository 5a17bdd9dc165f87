//! Geometry helpers for hit-testing and image placement.

use kurbo::{Point, Rect, Size};

/// Check whether a point lies inside a rectangle, edges included.
///
/// `kurbo::Rect::contains` excludes the right and bottom edges, which would
/// make the far corner handles a pixel smaller than the near ones.
pub fn point_in_rect(point: Point, rect: Rect) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// A square of side `size` centred on `center`.
pub fn square_around(center: Point, size: f64) -> Rect {
    let half = size / 2.0;
    Rect::new(center.x - half, center.y - half, center.x + half, center.y + half)
}

/// Width over height.
pub fn aspect_ratio(size: Size) -> f64 {
    size.width / size.height
}

/// Scale `native` so that its longer side equals `max_dim`, preserving aspect ratio.
///
/// Landscape images are fitted by width; portrait and square images by height.
pub fn fit_longest_side(native: Size, max_dim: f64) -> Size {
    if native.width > native.height {
        Size::new(max_dim, native.height / native.width * max_dim)
    } else {
        Size::new(native.width / native.height * max_dim, max_dim)
    }
}

/// Origin that centres a box of `size` on a surface of `surface` size.
pub fn centered_origin(size: Size, surface: Size) -> Point {
    Point::new(
        (surface.width - size.width) / 2.0,
        (surface.height - size.height) / 2.0,
    )
}

/// Initial rectangle for a newly placed bitmap.
///
/// The bitmap is scaled to `fraction` of the smaller surface dimension and
/// centred on the surface.
pub fn initial_placement(native: Size, surface: Size, fraction: f64) -> Rect {
    let max_dim = surface.width.min(surface.height) * fraction;
    let size = fit_longest_side(native, max_dim);
    Rect::from_origin_size(centered_origin(size, surface), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_point_in_rect_includes_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(point_in_rect(Point::new(10.0, 10.0), rect));
        assert!(point_in_rect(Point::new(20.0, 20.0), rect));
        assert!(point_in_rect(Point::new(15.0, 12.0), rect));
        assert!(!point_in_rect(Point::new(20.1, 15.0), rect));
        assert!(!point_in_rect(Point::new(15.0, 9.9), rect));
    }

    #[test]
    fn test_square_around() {
        let rect = square_around(Point::new(100.0, 50.0), 10.0);
        assert!(approx(rect.x0, 95.0));
        assert!(approx(rect.y0, 45.0));
        assert!(approx(rect.width(), 10.0));
        assert!(approx(rect.height(), 10.0));
    }

    #[test]
    fn test_landscape_placement() {
        let rect = initial_placement(Size::new(200.0, 100.0), Size::new(800.0, 600.0), 0.7);
        assert!(approx(rect.width(), 420.0));
        assert!(approx(rect.height(), 210.0));
        assert!(approx(rect.x0, 190.0));
        assert!(approx(rect.y0, 195.0));
    }

    #[test]
    fn test_portrait_placement_fits_height() {
        let rect = initial_placement(Size::new(300.0, 900.0), Size::new(1000.0, 500.0), 0.7);
        assert!(approx(rect.height(), 350.0));
        assert!(approx(rect.width(), 350.0 / 3.0));
        assert!(approx(rect.y0, 75.0));
    }

    #[test]
    fn test_square_placement() {
        let size = fit_longest_side(Size::new(64.0, 64.0), 100.0);
        assert!(approx(size.width, 100.0));
        assert!(approx(size.height, 100.0));
    }

    #[test]
    fn test_aspect_ratio() {
        assert!(approx(aspect_ratio(Size::new(200.0, 100.0)), 2.0));
    }
}
