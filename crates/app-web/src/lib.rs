#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{Camera, CameraDrift, PointerState, CAMERA_BASE, CAMERA_FOV_DEG, DRIFT_LOOK_AT};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    // Pointer state, shared between the event listener and the frame loop
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_pointermove(&canvas, pointer.clone());

    // Kick off the character fetch; frames run while it loads
    let model: assets::ModelSlot = Rc::new(RefCell::new(None));
    spawn_local(assets::load_character(model.clone()));

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let camera = Camera::new(
        CAMERA_BASE,
        DRIFT_LOOK_AT,
        aspect,
        CAMERA_FOV_DEG.to_radians(),
    );

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        pointer,
        model,
        camera,
        drift: CameraDrift::new(CAMERA_BASE),
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
