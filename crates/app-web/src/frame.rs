//! Per-frame callback and the requestAnimationFrame loop.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{gaze_target, look_at_quat, Camera, CameraDrift, PointerState, GAZE_DEPTH};
use glam::Vec3;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::assets::ModelSlot;
use crate::render;

pub struct FrameContext<'a> {
    pub pointer: Rc<RefCell<PointerState>>,
    pub model: ModelSlot,

    pub camera: Camera,
    pub drift: CameraDrift,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) {
        let ndc = self.pointer.borrow().ndc();
        let width = self.canvas.width();
        let height = self.canvas.height();
        self.camera.aspect = width.max(1) as f32 / height.max(1) as f32;

        // Camera sway runs whether or not the model has arrived.
        self.drift.step(&mut self.camera, ndc);

        // Head tracking, once the model and its head node are bound. The
        // target solve can decline (degenerate ray/plane); the head then
        // keeps last frame's orientation.
        {
            let mut model = self.model.borrow_mut();
            if let Some(scene) = model.as_mut() {
                if let Some(head) = scene.head {
                    if let Some(target) =
                        gaze_target(&self.camera, ndc, scene.root_position(), GAZE_DEPTH)
                    {
                        let eye = scene.world_position(head);
                        scene.set_world_rotation(head, look_at_quat(eye, target, Vec3::Y));
                    }
                }
            }
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
            g.set_camera(&self.camera);
            if let Some(scene) = self.model.borrow().as_ref() {
                if !g.has_model() {
                    g.install_model(scene);
                }
                g.update_node_transforms(scene);
            }
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
