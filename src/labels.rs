// Axis tick labels, drawn on a 2d canvas stacked over the WebGPU canvas.

use crate::constants::AXIS_LABEL_FONT_PX;
use crate::dom;
use crate::input::ndc_to_pixel;
use glam::Vec2;
use roomviz_core::{Axis, AxisLabel, Camera};
use wasm_bindgen::JsCast;
use web_sys as web;

/// A label that landed on screen, in backing-store pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenLabel<'a> {
    pub text: &'a str,
    pub pos: Vec2,
    pub fill: &'static str,
}

/// Axis names take the axis color; measurements are white.
pub fn label_fill(label: &AxisLabel) -> &'static str {
    if label.text != label.axis.name() {
        return "#ffffff";
    }
    match label.axis {
        Axis::X => "#ff3333",
        Axis::Y => "#33ff33",
        Axis::Z => "#3333ff",
    }
}

/// Project labels through `camera`, dropping those behind the eye or well
/// outside the viewport.
pub fn project_labels<'a>(
    camera: &Camera,
    labels: &'a [AxisLabel],
    width: f32,
    height: f32,
) -> Vec<ScreenLabel<'a>> {
    labels
        .iter()
        .filter_map(|l| {
            let ndc = camera.project_to_ndc(l.anchor)?;
            if ndc.x.abs() > 1.1 || ndc.y.abs() > 1.1 {
                return None;
            }
            Some(ScreenLabel {
                text: &l.text,
                pos: ndc_to_pixel(ndc, width, height),
                fill: label_fill(l),
            })
        })
        .collect()
}

pub struct LabelLayer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl LabelLayer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    /// Redraw every label; `labels` is `None` while the axes are hidden.
    pub fn draw(&self, camera: &Camera, labels: Option<&[AxisLabel]>, width: u32, height: u32) {
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        self.ctx
            .clear_rect(0.0, 0.0, width as f64, height as f64);
        let Some(labels) = labels else {
            return;
        };

        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        self.ctx
            .set_font(&format!("bold {}px sans-serif", (AXIS_LABEL_FONT_PX * dpr).round()));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_line_width(3.0 * dpr);
        self.ctx.set_stroke_style_str("#000000");
        for l in project_labels(camera, labels, width as f32, height as f32) {
            let (x, y) = (l.pos.x as f64, l.pos.y as f64);
            self.ctx.set_fill_style_str(l.fill);
            _ = self.ctx.stroke_text(l.text, x, y);
            _ = self.ctx.fill_text(l.text, x, y);
        }
    }

    /// Flatten the scene canvas and the labels into one canvas for export.
    pub fn composite(&self, scene: &web::HtmlCanvasElement) -> anyhow::Result<web::HtmlCanvasElement> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let out: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        out.set_width(scene.width());
        out.set_height(scene.height());
        let ctx = context_2d(&out)?;
        ctx.draw_image_with_html_canvas_element(scene, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("drawImage failed: {:?}", e))?;
        ctx.draw_image_with_html_canvas_element(&self.canvas, 0.0, 0.0)
            .map_err(|e| anyhow::anyhow!("drawImage failed: {:?}", e))?;
        Ok(out)
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
