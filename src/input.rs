use glam::Vec2;
use roomviz_core::{PointerButton, PointerInput};
use web_sys as web;

// ---------------- Pointer helpers ----------------

/// Pointer position in the canvas' backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    css_to_backing_px(
        Vec2::new(x_css, y_css),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Scale a CSS-pixel offset inside an element to backing-store pixels.
#[inline]
pub fn css_to_backing_px(css: Vec2, css_size: Vec2, backing_size: Vec2) -> Vec2 {
    if css_size.x <= 0.0 || css_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    css / css_size * backing_size
}

/// Backing-store pixels to normalized device coordinates (y up).
#[inline]
pub fn pixel_to_ndc(px: Vec2, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new((2.0 * px.x / w) - 1.0, 1.0 - (2.0 * px.y / h))
}

/// Inverse of [`pixel_to_ndc`].
#[inline]
pub fn ndc_to_pixel(ndc: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new((ndc.x + 1.0) * 0.5 * width, (1.0 - ndc.y) * 0.5 * height)
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Build the engine-side pointer description for a DOM mouse/pointer event.
pub fn pointer_input(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> PointerInput {
    let px = pointer_canvas_px(ev, canvas);
    PointerInput {
        ndc: pixel_to_ndc(px, canvas.width() as f32, canvas.height() as f32),
        pixel: px,
        button: PointerButton::from_dom(ev.button()),
    }
}

// ---------------- Keyboard helpers ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    RemoveSelected,
    ToggleSnap,
    ToggleAxis,
    ClearSelection,
}

#[inline]
pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        "Delete" | "Backspace" => Some(KeyCommand::RemoveSelected),
        "g" | "G" => Some(KeyCommand::ToggleSnap),
        "a" | "A" => Some(KeyCommand::ToggleAxis),
        "Escape" => Some(KeyCommand::ClearSelection),
        _ => None,
    }
}
