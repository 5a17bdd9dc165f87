//! Resize handles and the aspect-locked resize algorithm.

use crate::geometry::{point_in_rect, square_around};
use crate::shapes::PlacedImage;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Handle size in canvas pixels.
pub const HANDLE_SIZE: f64 = 10.0;

/// Images are never resized narrower than this.
pub const MIN_IMAGE_WIDTH: f64 = 20.0;

/// Corner positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners, in hit-test priority order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Kebab-case name, also used as the overlay element's CSS class.
    pub fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

/// A resize handle with its position and corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    /// Position in canvas coordinates.
    pub position: Point,
    /// Which corner of the image it sits on.
    pub corner: Corner,
}

impl Handle {
    /// Create a new handle.
    pub fn new(position: Point, corner: Corner) -> Self {
        Self { position, corner }
    }

    /// Check if a point hits this handle's square.
    pub fn hit_test(&self, point: Point, size: f64) -> bool {
        point_in_rect(point, square_around(self.position, size))
    }
}

/// The four corner handles of an image, in `Corner::ALL` order.
pub fn image_handles(image: &PlacedImage) -> [Handle; 4] {
    let bounds = image.as_rect();
    Corner::ALL.map(|corner| {
        let position = match corner {
            Corner::TopLeft => Point::new(bounds.x0, bounds.y0),
            Corner::TopRight => Point::new(bounds.x1, bounds.y0),
            Corner::BottomLeft => Point::new(bounds.x0, bounds.y1),
            Corner::BottomRight => Point::new(bounds.x1, bounds.y1),
        };
        Handle::new(position, corner)
    })
}

/// Find which handle (if any) is hit at the given point.
pub fn hit_test_handles(image: &PlacedImage, point: Point, size: f64) -> Option<Corner> {
    image_handles(image)
        .into_iter()
        .find(|handle| handle.hit_test(point, size))
        .map(|handle| handle.corner)
}

/// Resize `image` by one pointer step while keeping its native aspect ratio.
///
/// Only the horizontal component of `delta` drives the resize; height is always
/// derived from width. When the width would fall below `min_width` it is pinned
/// there without adjusting the position.
pub fn apply_resize(image: &mut PlacedImage, corner: Corner, delta: Vec2, min_width: f64) {
    let aspect = image.aspect_ratio();
    let dx = delta.x;

    match corner {
        Corner::TopLeft => {
            image.width -= dx;
            image.position.x += dx;
            image.position.y += dx / aspect;
        }
        Corner::TopRight => {
            image.width += dx;
            image.position.y -= dx / aspect;
        }
        Corner::BottomLeft => {
            image.width -= dx;
            image.position.x += dx;
        }
        Corner::BottomRight => {
            image.width += dx;
        }
    }
    image.height = image.width / aspect;

    if image.width < min_width {
        image.width = min_width;
        image.height = min_width / aspect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn image() -> PlacedImage {
        // 2:1 aspect, displayed at 200x100 from (100, 100)
        PlacedImage::new(Uuid::new_v4(), 400, 200, Point::new(100.0, 100.0))
            .with_rect(kurbo::Rect::new(100.0, 100.0, 300.0, 200.0))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_handles_sit_on_corners() {
        let handles = image_handles(&image());
        assert_eq!(handles[0].position, Point::new(100.0, 100.0));
        assert_eq!(handles[1].position, Point::new(300.0, 100.0));
        assert_eq!(handles[2].position, Point::new(100.0, 200.0));
        assert_eq!(handles[3].position, Point::new(300.0, 200.0));
        assert_eq!(handles[3].corner, Corner::BottomRight);
    }

    #[test]
    fn test_handle_hit_area() {
        let img = image();
        assert_eq!(hit_test_handles(&img, Point::new(96.0, 104.0), HANDLE_SIZE), Some(Corner::TopLeft));
        assert_eq!(hit_test_handles(&img, Point::new(305.0, 205.0), HANDLE_SIZE), Some(Corner::BottomRight));
        assert_eq!(hit_test_handles(&img, Point::new(306.0, 205.0), HANDLE_SIZE), None);
        assert_eq!(hit_test_handles(&img, Point::new(200.0, 150.0), HANDLE_SIZE), None);
    }

    #[test]
    fn test_top_left_resize() {
        let mut img = image();
        apply_resize(&mut img, Corner::TopLeft, Vec2::new(10.0, 10.0), MIN_IMAGE_WIDTH);
        assert!(approx(img.width, 190.0));
        assert!(approx(img.height, 95.0));
        assert!(approx(img.position.x, 110.0));
        assert!(approx(img.position.y, 105.0));
    }

    #[test]
    fn test_top_right_resize() {
        let mut img = image();
        apply_resize(&mut img, Corner::TopRight, Vec2::new(20.0, -50.0), MIN_IMAGE_WIDTH);
        assert!(approx(img.width, 220.0));
        assert!(approx(img.height, 110.0));
        assert!(approx(img.position.x, 100.0));
        assert!(approx(img.position.y, 90.0));
    }

    #[test]
    fn test_bottom_left_resize() {
        let mut img = image();
        apply_resize(&mut img, Corner::BottomLeft, Vec2::new(-30.0, 0.0), MIN_IMAGE_WIDTH);
        assert!(approx(img.width, 230.0));
        assert!(approx(img.height, 115.0));
        assert!(approx(img.position.x, 70.0));
        assert!(approx(img.position.y, 100.0));
    }

    #[test]
    fn test_bottom_right_ignores_vertical_delta() {
        let mut img = image();
        apply_resize(&mut img, Corner::BottomRight, Vec2::new(0.0, 80.0), MIN_IMAGE_WIDTH);
        assert!(approx(img.width, 200.0));
        assert!(approx(img.height, 100.0));
    }

    #[test]
    fn test_clamp_pins_width_without_moving_origin() {
        let mut img = image();
        apply_resize(&mut img, Corner::TopLeft, Vec2::new(190.0, 0.0), MIN_IMAGE_WIDTH);
        assert!(approx(img.width, MIN_IMAGE_WIDTH));
        assert!(approx(img.height, 10.0));
        // The origin follows the raw delta, so the image jumps to the right of
        // where the fixed bottom-right corner would put it.
        assert!(approx(img.position.x, 290.0));
        assert!(approx(img.position.y, 195.0));
    }

    #[test]
    fn test_aspect_preserved_over_many_steps() {
        let mut img = image();
        let steps = [3.5, -12.25, 40.0, -7.125, 0.3, -150.0, 60.0];
        for (i, dx) in steps.iter().enumerate() {
            let corner = Corner::ALL[i % 4];
            apply_resize(&mut img, corner, Vec2::new(*dx, -dx), MIN_IMAGE_WIDTH);
            assert!(img.width >= MIN_IMAGE_WIDTH);
            assert!((img.height - img.width / img.aspect_ratio()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_corner_names() {
        let names: Vec<_> = Corner::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["top-left", "top-right", "bottom-left", "bottom-right"]);
    }
}
