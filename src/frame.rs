use crate::constants::MAX_INSTANCES;
use crate::dom;
use crate::input;
use crate::labels::LabelLayer;
use crate::render;
use crate::scene;
use roomviz_core::{AxisOverlay, InputRouter};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub router: Rc<RefCell<InputRouter>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub labels: Option<LabelLayer>,
    pub export_requested: Rc<Cell<bool>>,
    pub axis_visible: Rc<Cell<bool>>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let w = self.canvas.width();
        let h = self.canvas.height();

        let (camera, instances, axis, file_name) = {
            let mut router = self.router.borrow_mut();
            router.rig_mut().set_aspect(input::aspect_ratio(w, h));
            let engine = router.engine().borrow();
            let axis = self
                .axis_visible
                .get()
                .then(|| AxisOverlay::new(&engine.room(), engine.unit()));
            (
                router.rig().camera().clone(),
                scene::build_instances(&engine, axis.as_ref(), MAX_INSTANCES),
                axis,
                engine.room().export_file_name(),
            )
        };

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(w, h);
        if let Err(e) = g.render(&camera, &instances) {
            log::error!("render error: {:?}", e);
            return;
        }

        if let Some(layer) = &self.labels {
            layer.draw(&camera, axis.as_ref().map(|a| a.labels.as_slice()), w, h);
        }

        // read back in the same task as the draw, before the canvas is cleared
        if self.export_requested.replace(false) {
            match self.export(&file_name) {
                Ok(()) => log::info!("[export] saved {}", file_name),
                Err(e) => log::error!("[export] {:?}", e),
            }
        }
    }

    fn export(&self, file_name: &str) -> anyhow::Result<()> {
        match &self.labels {
            Some(layer) => dom::download_canvas_png(&layer.composite(&self.canvas)?, file_name),
            None => dom::download_canvas_png(&self.canvas, file_name),
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
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
