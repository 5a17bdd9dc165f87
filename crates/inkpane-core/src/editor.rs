//! Interaction state machine.
//!
//! [`Editor`] owns the canvas content and all interaction state. The platform
//! shell feeds it normalized input and acts on the returned [`Response`]:
//! repaint what it asks for and rebuild the handle overlay when told to.

use crate::canvas::Canvas;
use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::geometry::initial_placement;
use crate::ingest::DecodedBitmap;
use crate::input::PointerEvent;
use crate::selection::{Corner, Handle, apply_resize, hit_test_handles, image_handles};
use crate::shapes::{PlacedImage, StrokePath};
use crate::tools::{BrushSettings, Mode};
use kurbo::{Point, Size, Vec2};

/// The single pointer interaction in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Appending points to the last stroke path.
    Drawing,
    /// Moving the selected image; `offset` is pointer minus image origin at grab time.
    Dragging { offset: Vec2 },
    /// Resizing the selected image from `corner`; `last` is the previous pointer position.
    Resizing { corner: Corner, last: Point },
}

/// What the surface needs repainted after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Redraw {
    #[default]
    None,
    /// Redraw everything from retained state.
    Full,
    /// Only the newest segment (or dot) of the last stroke path.
    StrokeTail,
}

/// Outcome of an editor operation, for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    pub redraw: Redraw,
    /// The resize handle overlay must be recomputed.
    pub handles_changed: bool,
}

impl Response {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn full() -> Self {
        Self {
            redraw: Redraw::Full,
            handles_changed: true,
        }
    }

    fn stroke_tail() -> Self {
        Self {
            redraw: Redraw::StrokeTail,
            handles_changed: false,
        }
    }
}

/// Editor context: retained content plus interaction state.
#[derive(Debug, Clone)]
pub struct Editor {
    canvas: Canvas,
    mode: Mode,
    /// Index into the canvas image list.
    selected: Option<usize>,
    gesture: Gesture,
    brush: BrushSettings,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor with an empty default-sized canvas.
    pub fn new(config: EditorConfig) -> Self {
        let brush = BrushSettings::new(
            config.brush_color,
            config.brush_size,
            config.brush_size_min..=config.brush_size_max,
        );
        Self {
            canvas: Canvas::default(),
            mode: Mode::default(),
            selected: None,
            gesture: Gesture::default(),
            brush,
            config,
        }
    }

    /// Create an editor for a surface of the given size.
    pub fn with_size(config: EditorConfig, size: Size) -> Self {
        let mut editor = Self::new(config);
        editor.canvas.set_size(size);
        editor
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    /// Index of the selected image, if it still exists.
    pub fn selected(&self) -> Option<usize> {
        self.selected.filter(|&index| index < self.canvas.images().len())
    }

    pub fn selected_image(&self) -> Option<&PlacedImage> {
        self.selected().and_then(|index| self.canvas.image(index))
    }

    /// Switch modes. An in-progress gesture is left alone.
    pub fn set_mode(&mut self, mode: Mode) -> Response {
        if self.mode != mode {
            log::debug!("Mode: {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
        // The selection highlight is only painted in move mode.
        Response::full()
    }

    /// Set the brush size; returns the size actually applied.
    pub fn set_brush_size(&mut self, size: u32) -> u32 {
        self.brush.set_size(size)
    }

    /// Set the brush color from a CSS hex string.
    pub fn set_brush_color(&mut self, hex: &str) -> EditorResult<()> {
        self.brush.set_color_hex(hex)
    }

    /// The surface was resized to fit its container.
    pub fn resize_surface(&mut self, size: Size) -> Response {
        self.canvas.set_size(size);
        Response::full()
    }

    /// Remove all images and strokes. Does nothing unless `confirmed`.
    pub fn clear(&mut self, confirmed: bool) -> Response {
        if !confirmed {
            log::debug!("Clear declined");
            return Response::none();
        }
        self.canvas.clear();
        self.selected = None;
        self.gesture = Gesture::Idle;
        log::info!("Canvas cleared");
        Response::full()
    }

    /// Place a decoded bitmap, select it and switch to move mode.
    pub fn insert_image(&mut self, bitmap: DecodedBitmap) -> EditorResult<Response> {
        bitmap.validate()?;
        let rect = initial_placement(bitmap.size(), self.canvas.size(), self.config.placement_fraction);
        let image = PlacedImage::new(bitmap.id, bitmap.width, bitmap.height, rect.origin()).with_rect(rect);
        let index = self.canvas.add_image(image);
        self.selected = Some(index);
        self.mode = Mode::Move;
        log::info!(
            "Placed {}x{} bitmap at ({:.1}, {:.1}) size {:.1}x{:.1}",
            bitmap.width,
            bitmap.height,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height()
        );
        Ok(Response::full())
    }

    /// Dispatch a normalized pointer event.
    pub fn pointer(&mut self, event: PointerEvent) -> Response {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up | PointerEvent::Leave => self.pointer_up(),
        }
    }

    pub fn pointer_down(&mut self, position: Point) -> Response {
        match self.mode {
            Mode::Draw => self.start_stroke(position),
            Mode::Move => {
                // Handles of the current selection win over image bodies.
                if let Some(corner) = self
                    .selected_image()
                    .and_then(|image| hit_test_handles(image, position, self.config.handle_size))
                {
                    self.gesture = Gesture::Resizing { corner, last: position };
                    return Response::none();
                }

                match self.canvas.image_at(position) {
                    Some(index) => {
                        let origin = self.canvas.images()[index].position;
                        self.selected = Some(index);
                        self.gesture = Gesture::Dragging {
                            offset: position - origin,
                        };
                    }
                    None => {
                        self.selected = None;
                        self.gesture = Gesture::Idle;
                    }
                }
                Response::full()
            }
        }
    }

    pub fn pointer_move(&mut self, position: Point) -> Response {
        match (self.mode, self.gesture) {
            (Mode::Draw, Gesture::Drawing) => self.continue_stroke(position),
            (Mode::Move, Gesture::Resizing { corner, last }) => {
                let min_width = self.config.min_image_width;
                let Some(image) = self.selected_image_mut() else {
                    return Response::none();
                };
                apply_resize(image, corner, position - last, min_width);
                self.gesture = Gesture::Resizing { corner, last: position };
                Response::full()
            }
            (Mode::Move, Gesture::Dragging { offset }) => {
                let Some(image) = self.selected_image_mut() else {
                    return Response::none();
                };
                image.move_to(position - offset);
                Response::full()
            }
            _ => Response::none(),
        }
    }

    /// End whatever gesture is active. The last paint already shows its result.
    pub fn pointer_up(&mut self) -> Response {
        self.gesture = Gesture::Idle;
        Response::none()
    }

    /// Corner handles of the selected image, when they should be shown.
    pub fn handle_positions(&self) -> Option<[Handle; 4]> {
        if self.mode != Mode::Move {
            return None;
        }
        self.selected_image().map(image_handles)
    }

    fn selected_image_mut(&mut self) -> Option<&mut PlacedImage> {
        let index = self.selected()?;
        self.canvas.image_mut(index)
    }

    fn start_stroke(&mut self, position: Point) -> Response {
        let path = StrokePath::new(position, self.brush.color(), self.brush.width());
        self.canvas.add_path(path);
        self.gesture = Gesture::Drawing;
        Response::stroke_tail()
    }

    fn continue_stroke(&mut self, position: Point) -> Response {
        match self.canvas.last_path_mut() {
            Some(path) => {
                path.add_point(position);
                Response::stroke_tail()
            }
            None => Response::none(),
        }
    }
}
