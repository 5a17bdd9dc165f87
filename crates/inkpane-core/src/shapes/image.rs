//! Placed image: a positioned, resizable instance of a decoded bitmap.

use crate::geometry::{aspect_ratio, point_in_rect};
use kurbo::{Point, Rect, Size};
use uuid::Uuid;

/// Key of a decoded bitmap held by the platform shell.
pub type BitmapId = Uuid;

/// A bitmap placed on the canvas.
///
/// Position and size are canvas coordinates and only relate to the bitmap's
/// native resolution through the aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedImage {
    /// The decoded bitmap this image draws.
    pub bitmap: BitmapId,
    /// Intrinsic bitmap width in pixels.
    pub native_width: u32,
    /// Intrinsic bitmap height in pixels.
    pub native_height: u32,
    /// Top-left corner.
    pub position: Point,
    /// Display width.
    pub width: f64,
    /// Display height.
    pub height: f64,
}

impl PlacedImage {
    /// Place a bitmap at its native size.
    pub fn new(bitmap: BitmapId, native_width: u32, native_height: u32, position: Point) -> Self {
        Self {
            bitmap,
            native_width,
            native_height,
            position,
            width: native_width as f64,
            height: native_height as f64,
        }
    }

    /// Place a bitmap into the given rectangle.
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.position = rect.origin();
        self.width = rect.width();
        self.height = rect.height();
        self
    }

    /// Native bitmap size.
    pub fn native_size(&self) -> Size {
        Size::new(self.native_width as f64, self.native_height as f64)
    }

    /// Native width / native height. Fixed for the image's lifetime.
    pub fn aspect_ratio(&self) -> f64 {
        aspect_ratio(self.native_size())
    }

    /// Current bounds on the canvas.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    /// Whether `point` falls on the image (edges included).
    pub fn hit_test(&self, point: Point) -> bool {
        point_in_rect(point, self.as_rect())
    }

    /// Move the top-left corner to `origin`.
    pub fn move_to(&mut self, origin: Point) {
        self.position = origin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_placement() {
        let img = PlacedImage::new(Uuid::new_v4(), 100, 50, Point::new(10.0, 20.0));
        let bounds = img.as_rect();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
        assert!((img.aspect_ratio() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_edges() {
        let img = PlacedImage::new(Uuid::new_v4(), 100, 50, Point::ZERO);
        assert!(img.hit_test(Point::new(0.0, 0.0)));
        assert!(img.hit_test(Point::new(100.0, 50.0)));
        assert!(!img.hit_test(Point::new(100.5, 25.0)));
    }

    #[test]
    fn test_with_rect_keeps_native_size() {
        let img = PlacedImage::new(Uuid::new_v4(), 200, 100, Point::ZERO)
            .with_rect(Rect::new(190.0, 195.0, 610.0, 405.0));
        assert!((img.width - 420.0).abs() < 1e-9);
        assert!((img.height - 210.0).abs() < 1e-9);
        assert_eq!(img.native_width, 200);
        assert!((img.aspect_ratio() - 2.0).abs() < f64::EPSILON);
    }
}
