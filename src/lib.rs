#![cfg(target_arch = "wasm32")]
use ascii_scene_core::{MeshCache, OrbitCamera, SceneController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dialog;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod panel;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ascii-scene starting");

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

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let controller = Rc::new(RefCell::new(SceneController::new()));
    let cache = Rc::new(RefCell::new(MeshCache::new()));
    let orbit = Rc::new(RefCell::new(OrbitCamera::default()));
    let drag_state = Rc::new(RefCell::new(input::DragState::default()));
    {
        let c = controller.borrow();
        log::info!(
            "[scene] model={} scale={:.2} ascii res={:.3} ramp={:?}",
            c.selected_id(),
            c.derive_final_scale(),
            c.ascii().resolution,
            c.ascii().characters
        );
    }

    panel::wire(panel::PanelWiring {
        document: document.clone(),
        controller: controller.clone(),
        cache: cache.clone(),
    })?;
    dialog::wire(&document, controller.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        orbit: orbit.clone(),
        drag_state: drag_state.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        cache,
        orbit,
        drag_state,
        canvas,
        gpu,
        start_instant: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
