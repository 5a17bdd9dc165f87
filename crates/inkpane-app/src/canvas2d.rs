//! Painter backed by a browser `CanvasRenderingContext2d`.

use inkpane_core::shapes::{BitmapId, PlacedImage, RgbaColor};
use inkpane_render::{Painter, RenderResult, RendererError};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use std::collections::HashMap;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// Draws onto a 2D canvas context. Decoded bitmaps are cached by id.
pub struct Canvas2dPainter {
    ctx: CanvasRenderingContext2d,
    bitmaps: HashMap<BitmapId, HtmlImageElement>,
}

impl Canvas2dPainter {
    /// Acquire the 2D context of `canvas`.
    pub fn new(canvas: &HtmlCanvasElement) -> RenderResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| RendererError::InitFailed(format!("{:?}", e)))?
            .ok_or_else(|| RendererError::InitFailed("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RendererError::InitFailed("not a 2d context".to_string()))?;
        Ok(Self {
            ctx,
            bitmaps: HashMap::new(),
        })
    }

    /// Register a decoded bitmap for later `draw_image` calls.
    pub fn insert_bitmap(&mut self, id: BitmapId, element: HtmlImageElement) {
        self.bitmaps.insert(id, element);
    }

    /// Drop bitmaps no placed image refers to any more.
    pub fn retain_bitmaps(&mut self, images: &[PlacedImage]) {
        self.bitmaps
            .retain(|id, _| images.iter().any(|image| image.bitmap == *id));
    }

    fn set_round_stroke(&self, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(width);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }
}

/// CSS color string for a peniko color.
fn css_color(color: Color) -> String {
    let rgba = RgbaColor::from(color);
    if rgba.a == 255 {
        rgba.to_hex()
    } else {
        format!("rgba({}, {}, {}, {:.3})", rgba.r, rgba.g, rgba.b, rgba.a as f64 / 255.0)
    }
}

impl Painter for Canvas2dPainter {
    fn clear(&mut self, size: Size) {
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn draw_image(&mut self, image: &PlacedImage) -> RenderResult<()> {
        let element = self
            .bitmaps
            .get(&image.bitmap)
            .ok_or(RendererError::MissingBitmap(image.bitmap))?;
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                element,
                image.position.x,
                image.position.y,
                image.width,
                image.height,
            )
            .map_err(|e| RendererError::RenderFailed(format!("{:?}", e)))
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(width);
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for point in rest {
            self.ctx.line_to(point.x, point.y);
        }
        self.set_round_stroke(color, width);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(center.x, center.y, radius, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill();
    }
}
