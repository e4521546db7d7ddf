//! Control panel wiring: room generation, furniture buttons, unit selection,
//! the snap and axis toggles, and export.

use crate::constants::*;
use crate::dom;
use instant::Instant;
use roomviz_core::{
    Dimensions, FurnitureKind, InputRouter, PlacementEngine, PlacementError, Room, Unit,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Controls {
    pub router: Rc<RefCell<InputRouter>>,
    pub export_requested: Rc<Cell<bool>>,
    pub axis_visible: Rc<Cell<bool>>,
}

pub fn wire_controls(document: &web::Document, c: Controls) {
    let engine = c.router.borrow().engine().clone();

    let router = c.router.clone();
    dom::add_click_listener(document, GENERATE_ROOM_ID, move || generate_room(&router));

    let e = engine.clone();
    dom::add_click_listener(document, ADD_FURNITURE_ID, move || add_furniture(&e));

    let e = engine.clone();
    dom::add_click_listener(document, CLEAR_FURNITURE_ID, move || {
        e.borrow_mut().remove_all_objects();
        show_status("All furniture cleared");
    });

    let e = engine.clone();
    dom::add_click_listener(document, REMOVE_SELECTED_ID, move || {
        remove_selected(&e);
    });

    let e = engine.clone();
    dom::add_click_listener(document, SNAP_TOGGLE_ID, move || {
        let on = e.borrow_mut().toggle_snap();
        refresh_snap_button(on);
    });

    let axis = c.axis_visible.clone();
    dom::add_click_listener(document, AXIS_TOGGLE_ID, move || toggle_axis(&axis));

    let flag = c.export_requested.clone();
    dom::add_click_listener(document, EXPORT_IMAGE_ID, move || flag.set(true));

    let e = engine.clone();
    dom::add_change_listener(document, UNIT_SELECT_ID, move || change_unit(&e));

    let e = engine.clone();
    dom::add_change_listener(document, FURNITURE_TYPE_ID, move || {
        fill_default_dimensions(e.borrow().unit());
    });

    let eng = engine.borrow();
    fill_room_fields(&eng.room(), eng.unit());
    fill_default_dimensions(eng.unit());
    refresh_readout(&eng);
    refresh_snap_button(eng.snap_config().enabled);
    refresh_axis_button(c.axis_visible.get());
}

fn generate_room(router: &Rc<RefCell<InputRouter>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let unit = router.borrow().engine().borrow().unit();
    let read = |id: &str| {
        dom::field_value(&document, id)
            .ok_or_else(|| PlacementError::InvalidLength(format!("#{id} missing")))
            .and_then(|v| unit.parse_length(&v))
    };
    let room = read(ROOM_WIDTH_ID).and_then(|w| {
        let l = read(ROOM_LENGTH_ID)?;
        let h = read(ROOM_HEIGHT_ID)?;
        Room::new(w, l, h)
    });
    match room {
        Ok(room) => {
            let removed = router.borrow_mut().set_room(room);
            if !removed.is_empty() {
                show_status(&format!(
                    "Removed {} object(s) outside the new room",
                    removed.len()
                ));
            }
            let r = router.borrow();
            refresh_readout(&r.engine().borrow());
        }
        Err(e) => {
            log::warn!("[room] {}", e);
            show_status("Room dimensions must be positive numbers");
        }
    }
}

/// Kind selected in the furniture dropdown; falls back to a plain box.
fn selected_kind(document: &web::Document) -> FurnitureKind {
    dom::field_value(document, FURNITURE_TYPE_ID)
        .and_then(|v| v.parse().ok())
        .unwrap_or(FurnitureKind::Box)
}

fn add_furniture(engine: &Rc<RefCell<PlacementEngine>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let kind = selected_kind(&document);
    let unit = engine.borrow().unit();
    let read = |id: &str| {
        dom::field_value(&document, id).and_then(|v| unit.parse_length(&v).ok())
    };
    let dims = match (
        read(FURNITURE_WIDTH_ID),
        read(FURNITURE_HEIGHT_ID),
        read(FURNITURE_DEPTH_ID),
    ) {
        (Some(w), Some(h), Some(d)) => Some(Dimensions::new(w, h, d)),
        _ => {
            log::warn!("[place] unreadable size fields, using {} defaults", kind);
            None
        }
    };
    let result = engine
        .borrow_mut()
        .try_add_object_at(kind, dims, Instant::now());
    match result {
        Ok(_) => {}
        Err(PlacementError::CoolingDown { .. }) => {
            show_status("Please wait a moment before adding another object")
        }
        Err(e) => {
            log::warn!("[place] {}", e);
            show_status(&e.to_string());
        }
    }
}

pub fn remove_selected(engine: &Rc<RefCell<PlacementEngine>>) {
    if engine.borrow_mut().remove_selected().is_none() {
        show_status("Select an object first");
    }
}

fn change_unit(engine: &Rc<RefCell<PlacementEngine>>) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let unit = dom::field_value(&document, UNIT_SELECT_ID)
        .and_then(|v| v.parse::<Unit>().ok())
        .unwrap_or_default();
    let mut eng = engine.borrow_mut();
    eng.set_unit(unit);
    fill_room_fields(&eng.room(), unit);
    fill_default_dimensions(unit);
    refresh_readout(&eng);
}

/// Write the room size into the room fields in the display unit.
fn fill_room_fields(room: &Room, unit: Unit) {
    let Some(document) = dom::window_document() else {
        return;
    };
    for (id, meters) in [
        (ROOM_WIDTH_ID, room.width),
        (ROOM_LENGTH_ID, room.length),
        (ROOM_HEIGHT_ID, room.height),
    ] {
        dom::set_field_value(&document, id, &format_field(unit.from_meters(meters)));
    }
}

fn fill_default_dimensions(unit: Unit) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let dims = selected_kind(&document).default_dimensions();
    for (id, meters) in [
        (FURNITURE_WIDTH_ID, dims.width),
        (FURNITURE_HEIGHT_ID, dims.height),
        (FURNITURE_DEPTH_ID, dims.depth),
    ] {
        dom::set_field_value(&document, id, &format_field(unit.from_meters(meters)));
    }
}

#[inline]
fn format_field(value: f32) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn refresh_readout(engine: &PlacementEngine) {
    if let Some(document) = dom::window_document() {
        dom::set_text(
            &document,
            DIMENSIONS_DISPLAY_ID,
            &engine.room().describe(engine.unit()),
        );
    }
}

pub fn refresh_snap_button(on: bool) {
    if let Some(document) = dom::window_document() {
        dom::set_text(
            &document,
            SNAP_TOGGLE_ID,
            if on { "Snap: On" } else { "Snap: Off" },
        );
        dom::set_class(&document, SNAP_TOGGLE_ID, "active", on);
    }
}

/// Flip axis visibility; the next frame rebuilds or drops the overlay.
pub fn toggle_axis(visible: &Cell<bool>) -> bool {
    let on = !visible.get();
    visible.set(on);
    log::info!("[axis] visible={}", on);
    refresh_axis_button(on);
    on
}

pub fn refresh_axis_button(on: bool) {
    if let Some(document) = dom::window_document() {
        dom::set_text(
            &document,
            AXIS_TOGGLE_ID,
            if on { "Hide Axis" } else { "Show Axis" },
        );
    }
}

/// Show a transient message under the controls.
pub fn show_status(message: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    log::info!("[ui] {}", message);
    dom::set_text(&document, STATUS_ID, message);
    let expected = message.to_string();
    let clear = Closure::once_into_js(move || {
        if let Some(d) = dom::window_document() {
            // a newer message may have replaced this one
            let current = d
                .get_element_by_id(STATUS_ID)
                .and_then(|el| el.text_content());
            if current.as_deref() == Some(expected.as_str()) {
                dom::set_text(&d, STATUS_ID, "");
            }
        }
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        clear.unchecked_ref(),
        STATUS_CLEAR_MS,
    );
}
