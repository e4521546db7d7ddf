use crate::dom;
use crate::input::{key_command, KeyCommand};
use crate::ui;
use roomviz_core::PlacementEngine;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    engine: &Rc<RefCell<PlacementEngine>>,
    axis_visible: &Cell<bool>,
) {
    // Backspace in a size field must edit the field, not delete furniture
    if dom::is_editing_text(ev) {
        return;
    }
    let Some(cmd) = key_command(&ev.key()) else {
        return;
    };
    match cmd {
        KeyCommand::RemoveSelected => {
            ui::remove_selected(engine);
            ev.prevent_default();
        }
        KeyCommand::ToggleSnap => {
            let on = engine.borrow_mut().toggle_snap();
            ui::refresh_snap_button(on);
        }
        KeyCommand::ToggleAxis => {
            ui::toggle_axis(axis_visible);
        }
        KeyCommand::ClearSelection => {
            engine.borrow_mut().clear_selection();
            log::info!("[keys] selection cleared");
        }
    }
}

pub fn wire_global_keydown(engine: Rc<RefCell<PlacementEngine>>, axis_visible: Rc<Cell<bool>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &engine, &axis_visible);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
