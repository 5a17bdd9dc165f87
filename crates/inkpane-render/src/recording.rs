//! Painter that records draw calls instead of rasterizing them.

use crate::renderer::{Painter, RenderResult, RendererError};
use inkpane_core::shapes::{BitmapId, PlacedImage, RgbaColor};
use kurbo::{Point, Rect, Size};
use peniko::Color;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Size),
    Image { bitmap: BitmapId, rect: Rect },
    Rect { rect: Rect, color: RgbaColor, width: f64 },
    Polyline { points: Vec<Point>, color: RgbaColor, width: f64 },
    Circle { center: Point, radius: f64, color: RgbaColor },
}

/// Records every call in order. Useful for headless checks of the redraw loop.
///
/// `clear` starts a new frame, so `commands` only ever holds the latest frame
/// plus any incremental draws made since.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub commands: Vec<DrawCommand>,
    fail_images: bool,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report every bitmap as not loaded.
    pub fn failing_images(mut self) -> Self {
        self.fail_images = true;
        self
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, size: Size) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(size));
    }

    fn draw_image(&mut self, image: &PlacedImage) -> RenderResult<()> {
        if self.fail_images {
            return Err(RendererError::MissingBitmap(image.bitmap));
        }
        self.commands.push(DrawCommand::Image {
            bitmap: image.bitmap,
            rect: image.as_rect(),
        });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color: color.into(),
            width,
        });
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color: color.into(),
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.into(),
        });
    }
}
