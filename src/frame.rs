use crate::dom;
use crate::input::DragState;
use crate::loader;
use crate::render::{self, FrameParams, SceneMesh};
use ascii_scene_core::{MeshCache, OrbitCamera, RenderSource, SceneController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<SceneController>>,
    pub cache: Rc<RefCell<MeshCache>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub drag_state: Rc<RefCell<DragState>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub start_instant: Instant,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = (now - self.start_instant).as_secs_f32();

        // auto-rotation pauses while the user is dragging
        if !self.drag_state.borrow().active {
            self.orbit.borrow_mut().update(dt_sec);
        }

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());

        let controller = self.controller.borrow();
        let instruction = controller.render_instruction(elapsed);
        let loaded = match instruction.source {
            RenderSource::Text => None,
            RenderSource::Mesh { asset } => {
                loader::ensure_requested(&self.cache, asset);
                self.cache.borrow().loaded(asset).map(|(generation, mesh)| (asset, generation, mesh))
            }
        };
        let mesh = match (&instruction.source, &loaded) {
            (RenderSource::Text, _) => SceneMesh::Text,
            (_, Some((asset, generation, data))) => SceneMesh::Asset {
                asset,
                generation: *generation,
                data,
            },
            (_, None) => SceneMesh::None,
        };

        let ascii = controller.ascii_key();
        let params = FrameParams {
            camera: self.orbit.borrow().camera(g.aspect()),
            model_matrix: instruction.model_matrix,
            mesh,
            ascii: &ascii,
            css_size: dom::canvas_css_size(&self.canvas),
        };
        if let Err(e) = g.render(&params) {
            log::error!("render error: {:?}", e);
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
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
