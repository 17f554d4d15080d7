use std::cell::RefCell;
use std::rc::Rc;

use app_core::PointerState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the full viewport in normalized device
/// coordinates. Events while the canvas rect is degenerate are dropped so
/// the stored state never leaves [-1, 1].
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let canvas = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = canvas.get_bounding_client_rect();
        let width = rect.width() as f32;
        let height = rect.height() as f32;
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let px = ev.client_x() as f32 - rect.left() as f32;
        let py = ev.client_y() as f32 - rect.top() as f32;
        pointer.borrow_mut().set_from_pixels(px, py, width, height);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
