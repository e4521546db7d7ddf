#![cfg(target_arch = "wasm32")]
use roomviz_core::{InputRouter, PlacementEngine};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod render;
mod scene;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("roomviz-web starting");

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
    wire_canvas_resize(&canvas);

    let engine = Rc::new(RefCell::new(PlacementEngine::default()));
    let aspect = input::aspect_ratio(canvas.width(), canvas.height());
    let router = Rc::new(RefCell::new(InputRouter::new(engine.clone(), aspect)));
    let export_requested = Rc::new(Cell::new(false));
    let axis_visible = Rc::new(Cell::new(true));

    ui::wire_controls(
        &document,
        ui::Controls {
            router: router.clone(),
            export_requested: export_requested.clone(),
            axis_visible: axis_visible.clone(),
        },
    );
    events::wire_global_keydown(engine.clone(), axis_visible.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        router: router.clone(),
    });

    let labels = match document
        .get_element_by_id(constants::AXIS_LABELS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    {
        Some(c) => labels::LabelLayer::new(c)
            .map_err(|e| log::warn!("[axis] labels disabled: {:?}", e))
            .ok(),
        None => {
            log::warn!("[axis] no #{} canvas, axes drawn without labels", constants::AXIS_LABELS_ID);
            None
        }
    };

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        router,
        canvas,
        gpu,
        labels,
        export_requested,
        axis_visible,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
