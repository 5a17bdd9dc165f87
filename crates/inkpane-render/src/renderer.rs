//! Painter trait abstraction.

use inkpane_core::Editor;
use inkpane_core::shapes::PlacedImage;
use kurbo::{Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Bitmap not loaded: {0}")]
    MissingBitmap(inkpane_core::BitmapId),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single redraw.
pub struct RenderContext<'a> {
    /// The editor whose state is drawn.
    pub editor: &'a Editor,
    /// Outline color of the selected image.
    pub highlight_color: Color,
    /// Outline width of the selected image.
    pub highlight_width: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context using the editor's configured highlight.
    pub fn new(editor: &'a Editor) -> Self {
        let config = editor.config();
        Self {
            editor,
            highlight_color: config.highlight_color.into(),
            highlight_width: config.highlight_width,
        }
    }
}

/// Immediate-mode drawing backend.
///
/// Implementations map these calls onto a concrete surface such as a browser
/// 2D context. Strokes always use round caps and joins.
pub trait Painter {
    /// Clear the whole surface.
    fn clear(&mut self, size: Size);

    /// Blit an image's bitmap into its current rectangle.
    fn draw_image(&mut self, image: &PlacedImage) -> RenderResult<()>;

    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Stroke a connected polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Point], color: Color, width: f64);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
}
