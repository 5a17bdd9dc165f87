//! Inkpane Render Library
//!
//! Painter abstraction and the redraw loop for Inkpane. Backends implement
//! [`Painter`]; the browser shell provides a 2D-context implementation.

mod recording;
mod renderer;
mod scene;

pub use recording::{DrawCommand, RecordingPainter};
pub use renderer::{Painter, RenderContext, RenderResult, RendererError};
pub use scene::{render_scene, render_stroke, render_stroke_tail};
