//! WebAssembly entry point and DOM event wiring.

use crate::ids;
use crate::params::{UrlParams, apply_params, load_config, parse_params};
use crate::shell::{Shell, element_by_id};
use inkpane_core::input::pointer_from_touches;
use inkpane_core::{DecodedBitmap, EditorConfig, Mode, PointerEvent, TouchPhase, check_mime};
use kurbo::Point;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AddEventListenerOptions, Document, Event, EventTarget, File, HtmlElement, HtmlImageElement,
    HtmlInputElement, MouseEvent, TouchEvent, Url, Window,
};

type SharedShell = Rc<RefCell<Shell>>;

/// Read brush overrides from the page URL. The query string wins over the hash.
pub fn get_url_params(window: &Window) -> UrlParams {
    let location = window.location();
    let query = location
        .search()
        .map(|s| parse_params(&s))
        .unwrap_or_default();
    let hash = location.hash().map(|s| parse_params(&s)).unwrap_or_default();
    query.or(hash)
}

/// Embedded JSON config (if any) with URL overrides applied.
fn startup_config(window: &Window, document: &Document) -> EditorConfig {
    let json = document
        .get_element_by_id(ids::CONFIG)
        .and_then(|element| element.text_content());
    let mut config = load_config(json.as_deref());
    let params = get_url_params(window);
    if let Some(size) = params.brush {
        log::info!("Brush size from URL: {}", size);
    }
    apply_params(&mut config, &params);
    config
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to initialize logger: {}", e)))?;

    log::info!("Starting Inkpane (WASM)");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let missing: Vec<&str> = ids::REQUIRED
        .iter()
        .copied()
        .filter(|id| document.get_element_by_id(id).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(JsValue::from_str(&format!(
            "Page is missing elements: {}",
            missing.join(", ")
        )));
    }

    let config = startup_config(&window, &document);
    let shell = Rc::new(RefCell::new(Shell::new(&document, config)?));
    shell.borrow_mut().fit_to_container();

    wire_toolbar(&window, &document, &shell)?;
    wire_mouse(&document, &shell)?;
    wire_touch(&document, &shell)?;
    wire_upload(&document, &shell)?;

    let resize_shell = shell.clone();
    listen(&window, "resize", move |_: Event| {
        resize_shell.borrow_mut().fit_to_container();
    })?;

    Ok(())
}

/// Attach `handler` for `event`, skipping events that are not an `E`.
fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    listen_with_options(target, event, &AddEventListenerOptions::new(), handler)
}

fn listen_with_options<E>(
    target: &EventTarget,
    event: &str,
    options: &AddEventListenerOptions,
    mut handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: JsCast + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        options,
    )?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn wire_toolbar(window: &Window, document: &Document, shell: &SharedShell) -> Result<(), JsValue> {
    let draw_tool: HtmlElement = element_by_id(document, ids::DRAW_TOOL)?;
    let s = shell.clone();
    listen(&draw_tool, "click", move |_: Event| {
        s.borrow_mut().set_mode(Mode::Draw);
    })?;

    let move_tool: HtmlElement = element_by_id(document, ids::MOVE_TOOL)?;
    let s = shell.clone();
    listen(&move_tool, "click", move |_: Event| {
        s.borrow_mut().set_mode(Mode::Move);
    })?;

    let clear: HtmlElement = element_by_id(document, ids::CLEAR)?;
    let s = shell.clone();
    let w = window.clone();
    listen(&clear, "click", move |_: Event| {
        let confirmed = w
            .confirm_with_message("Are you sure you want to clear the canvas?")
            .unwrap_or(false);
        s.borrow_mut().clear(confirmed);
    })?;

    let brush_size: HtmlInputElement = element_by_id(document, ids::BRUSH_SIZE)?;
    let s = shell.clone();
    let input = brush_size.clone();
    listen(&brush_size, "input", move |_: Event| match input.value().parse::<u32>() {
        Ok(size) => s.borrow_mut().set_brush_size(size),
        Err(e) => log::debug!("Ignoring brush size {:?}: {}", input.value(), e),
    })?;

    let brush_color: HtmlInputElement = element_by_id(document, ids::BRUSH_COLOR)?;
    let s = shell.clone();
    let input = brush_color.clone();
    listen(&brush_color, "input", move |_: Event| {
        s.borrow_mut().set_brush_color(&input.value());
    })?;

    Ok(())
}

fn wire_mouse(document: &Document, shell: &SharedShell) -> Result<(), JsValue> {
    let canvas: HtmlElement = element_by_id(document, ids::CANVAS)?;

    let s = shell.clone();
    listen(&canvas, "mousedown", move |e: MouseEvent| {
        let mut shell = s.borrow_mut();
        let position = shell.client_to_surface(e.client_x(), e.client_y());
        shell.pointer(PointerEvent::Down { position });
    })?;

    let s = shell.clone();
    listen(&canvas, "mousemove", move |e: MouseEvent| {
        let mut shell = s.borrow_mut();
        let position = shell.client_to_surface(e.client_x(), e.client_y());
        shell.pointer(PointerEvent::Move { position });
    })?;

    let s = shell.clone();
    listen(&canvas, "mouseup", move |_: MouseEvent| {
        s.borrow_mut().pointer(PointerEvent::Up);
    })?;

    let s = shell.clone();
    listen(&canvas, "mouseleave", move |_: MouseEvent| {
        s.borrow_mut().pointer(PointerEvent::Leave);
    })?;

    Ok(())
}

/// Client positions of the touches currently on the surface.
fn touch_points(event: &TouchEvent) -> Vec<Point> {
    let touches = event.touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64))
        .collect()
}

fn wire_touch(document: &Document, shell: &SharedShell) -> Result<(), JsValue> {
    let canvas: HtmlElement = element_by_id(document, ids::CANVAS)?;
    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    let phases = [
        ("touchstart", TouchPhase::Start),
        ("touchmove", TouchPhase::Move),
        ("touchend", TouchPhase::End),
        ("touchcancel", TouchPhase::Cancel),
    ];
    for (name, phase) in phases {
        let s = shell.clone();
        listen_with_options(&canvas, name, &options, move |e: TouchEvent| {
            // Keep the page from scrolling or zooming under the pen.
            if matches!(phase, TouchPhase::Start | TouchPhase::Move) {
                e.prevent_default();
            }
            let mut shell = s.borrow_mut();
            let origin = shell.surface_origin();
            if let Some(event) = pointer_from_touches(phase, &touch_points(&e), origin) {
                shell.pointer(event);
            }
        })?;
    }
    Ok(())
}

fn wire_upload(document: &Document, shell: &SharedShell) -> Result<(), JsValue> {
    let upload: HtmlInputElement = element_by_id(document, ids::UPLOAD)?;
    let s = shell.clone();
    let input = upload.clone();
    listen(&upload, "change", move |_: Event| {
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Err(e) = check_mime(&file.type_()) {
            log::debug!("Ignoring {}: {}", file.name(), e);
            return;
        }

        let shell = s.clone();
        let input = input.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match decode_image(&file).await {
                Ok((bitmap, element)) => {
                    log::info!("Placing {} ({}x{})", file.name(), bitmap.width, bitmap.height);
                    shell.borrow_mut().insert_bitmap(bitmap, element);
                }
                Err(e) => log::warn!("Failed to decode {}: {:?}", file.name(), e),
            }
            // Allow choosing the same file again.
            input.set_value("");
        });
    })?;
    Ok(())
}

/// Decode `file` through an `<img>` element and report its natural size.
async fn decode_image(file: &File) -> Result<(DecodedBitmap, HtmlImageElement), JsValue> {
    let url = Url::create_object_url_with_blob(file)?;
    let element = HtmlImageElement::new()?;
    element.set_src(&url);
    let decoded = JsFuture::from(element.decode()).await;
    Url::revoke_object_url(&url)?;
    decoded?;
    let bitmap = DecodedBitmap::new(element.natural_width(), element.natural_height());
    Ok((bitmap, element))
}
