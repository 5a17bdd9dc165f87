//! Inkpane Core Library
//!
//! Platform-agnostic data structures and interaction logic for the Inkpane
//! canvas editor: placed images, freehand strokes, resize handles and the
//! pointer-driven state machine that ties them together.

pub mod canvas;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod ingest;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::Canvas;
pub use config::EditorConfig;
pub use editor::{Editor, Gesture, Redraw, Response};
pub use error::{EditorError, EditorResult};
pub use ingest::{DecodedBitmap, check_mime};
pub use input::{PointerEvent, TouchPhase};
pub use selection::{Corner, Handle};
pub use shapes::{BitmapId, PlacedImage, RgbaColor, StrokePath};
pub use tools::{BrushSettings, Mode};
