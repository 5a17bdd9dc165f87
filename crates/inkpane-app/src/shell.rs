//! DOM-side state: the editor, its painter and the page elements it drives.

use crate::canvas2d::Canvas2dPainter;
use crate::ids;
use inkpane_core::{DecodedBitmap, Editor, EditorConfig, Mode, PointerEvent, Redraw, Response};
use inkpane_render::{RenderContext, render_scene, render_stroke_tail};
use kurbo::{Point, Size};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, HtmlImageElement, HtmlInputElement};

/// Look up an element by id and cast it to the expected type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element #{} has unexpected type", id)))
}

/// The running editor and everything it paints into.
pub struct Shell {
    editor: Editor,
    painter: Canvas2dPainter,
    document: Document,
    canvas: HtmlCanvasElement,
    container: HtmlElement,
    draw_tool: Element,
    move_tool: Element,
    draw_options: HtmlElement,
    brush_size: HtmlInputElement,
    brush_color: HtmlInputElement,
    size_value: Element,
}

impl Shell {
    pub fn new(document: &Document, config: EditorConfig) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = element_by_id(document, ids::CANVAS)?;
        let painter = Canvas2dPainter::new(&canvas).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let shell = Self {
            editor: Editor::new(config),
            painter,
            document: document.clone(),
            canvas,
            container: element_by_id(document, ids::CONTAINER)?,
            draw_tool: element_by_id(document, ids::DRAW_TOOL)?,
            move_tool: element_by_id(document, ids::MOVE_TOOL)?,
            draw_options: element_by_id(document, ids::DRAW_OPTIONS)?,
            brush_size: element_by_id(document, ids::BRUSH_SIZE)?,
            brush_color: element_by_id(document, ids::BRUSH_COLOR)?,
            size_value: element_by_id(document, ids::SIZE_VALUE)?,
        };
        shell.sync_brush_ui();
        shell.sync_mode_ui();
        Ok(shell)
    }

    /// Top-left of the canvas in client coordinates.
    pub fn surface_origin(&self) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }

    /// Convert a client-space position to canvas coordinates.
    pub fn client_to_surface(&self, client_x: i32, client_y: i32) -> Point {
        inkpane_core::input::to_surface(Point::new(client_x as f64, client_y as f64), self.surface_origin())
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        let response = self.editor.pointer(event);
        self.apply(response);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        let response = self.editor.set_mode(mode);
        self.sync_mode_ui();
        self.apply(response);
    }

    /// Resize the canvas to fill its container and redraw.
    pub fn fit_to_container(&mut self) {
        let width = self.container.client_width().max(0) as u32;
        let height = self.container.client_height().max(0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        log::debug!("Surface resized to {}x{}", width, height);
        let response = self
            .editor
            .resize_surface(Size::new(width as f64, height as f64));
        self.apply(response);
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.editor.set_brush_size(size);
        self.sync_brush_ui();
    }

    pub fn set_brush_color(&mut self, value: &str) {
        if let Err(e) = self.editor.set_brush_color(value) {
            log::warn!("{}", e);
        }
    }

    pub fn clear(&mut self, confirmed: bool) {
        let response = self.editor.clear(confirmed);
        if response.redraw == Redraw::Full {
            self.painter.retain_bitmaps(self.editor.canvas().images());
        }
        self.apply(response);
    }

    /// Hand a freshly decoded bitmap to the painter and place it.
    pub fn insert_bitmap(&mut self, bitmap: DecodedBitmap, element: HtmlImageElement) {
        self.painter.insert_bitmap(bitmap.id, element);
        match self.editor.insert_image(bitmap) {
            Ok(response) => {
                self.sync_mode_ui();
                self.apply(response);
            }
            Err(e) => {
                log::warn!("Image dropped: {}", e);
                self.painter.retain_bitmaps(self.editor.canvas().images());
            }
        }
    }

    /// Repaint and refresh the overlay as the editor asked.
    fn apply(&mut self, response: Response) {
        match response.redraw {
            Redraw::None => {}
            Redraw::Full => render_scene(&RenderContext::new(&self.editor), &mut self.painter),
            Redraw::StrokeTail => {
                if let Some(path) = self.editor.canvas().last_path() {
                    render_stroke_tail(path, &mut self.painter);
                }
            }
        }
        if response.handles_changed {
            if let Err(e) = self.update_handles() {
                log::warn!("Failed to update resize handles: {:?}", e);
            }
        }
    }

    /// Recreate the resize handle overlay from scratch.
    fn update_handles(&self) -> Result<(), JsValue> {
        let existing = self
            .document
            .query_selector_all(&format!(".{}", ids::HANDLE_CLASS))?;
        for i in 0..existing.length() {
            if let Some(element) = existing.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                element.remove();
            }
        }

        let Some(handles) = self.editor.handle_positions() else {
            return Ok(());
        };
        for handle in handles {
            let element = self
                .document
                .create_element("div")?
                .dyn_into::<HtmlElement>()?;
            element.set_class_name(&format!("{} {}", ids::HANDLE_CLASS, handle.corner.name()));
            self.container.append_child(&element)?;
            let style = element.style();
            style.set_property("left", &format!("{}px", handle.position.x))?;
            style.set_property("top", &format!("{}px", handle.position.y))?;
        }
        Ok(())
    }

    fn sync_mode_ui(&self) {
        let drawing = self.editor.mode() == Mode::Draw;
        let toggles = [
            (&self.draw_tool, "active", drawing),
            (&self.move_tool, "active", !drawing),
            (self.canvas.as_ref(), "drawing", drawing),
        ];
        for (element, class, on) in toggles {
            if let Err(e) = element.class_list().toggle_with_force(class, on) {
                log::warn!("Failed to toggle class {}: {:?}", class, e);
            }
        }
        let display = if drawing { "flex" } else { "none" };
        if let Err(e) = self.draw_options.style().set_property("display", display) {
            log::warn!("Failed to toggle draw options: {:?}", e);
        }
    }

    fn sync_brush_ui(&self) {
        let brush = self.editor.brush();
        let (min, max) = brush.size_range();
        self.brush_size.set_min(&min.to_string());
        self.brush_size.set_max(&max.to_string());
        self.brush_size.set_value(&brush.size().to_string());
        self.brush_color.set_value(&brush.color().to_hex());
        self.size_value.set_text_content(Some(&format!("{}px", brush.size())));
    }
}
