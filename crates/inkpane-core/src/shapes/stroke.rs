//! Freehand stroke path.

use super::RgbaColor;
use kurbo::Point;

/// One continuous freehand drag: a polyline with a fixed color and width.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePath {
    /// Stroke color.
    pub color: RgbaColor,
    /// Stroke width in canvas pixels.
    pub size: f64,
    /// Points in the order they were drawn.
    pub points: Vec<Point>,
}

impl StrokePath {
    /// Start a new path at `start`.
    pub fn new(start: Point, color: RgbaColor, size: f64) -> Self {
        Self {
            color,
            size,
            points: vec![start],
        }
    }

    /// Add a point to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The most recently added segment.
    pub fn last_segment(&self) -> Option<(Point, Point)> {
        match self.points.as_slice() {
            [.., a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}
