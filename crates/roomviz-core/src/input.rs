//! Pointer arbitration between placement and camera control.
//!
//! Every pointer event goes through [`InputRouter`], which asks the engine
//! once whether a placement interaction is active and hands the event to
//! exactly one of the two handlers.

use crate::engine::PlacementEngine;
use crate::object::ObjectId;
use crate::rig::CameraRig;
use crate::room::Room;
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

/// Capability the camera controls consult before moving the camera.
pub trait InteractionGate {
    fn is_interaction_active(&self) -> bool;
}

impl<T: InteractionGate> InteractionGate for RefCell<T> {
    fn is_interaction_active(&self) -> bool {
        self.borrow().is_interaction_active()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value.
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            2 => PointerButton::Secondary,
            _ => PointerButton::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Normalized device coordinates, y up.
    pub ndc: Vec2,
    /// Canvas pixels, used for camera gesture deltas.
    pub pixel: Vec2,
    pub button: PointerButton,
}

/// Which handler consumed an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Placement,
    Camera,
    Ignored,
}

pub struct InputRouter {
    engine: Rc<RefCell<PlacementEngine>>,
    rig: CameraRig,
}

impl InputRouter {
    pub fn new(engine: Rc<RefCell<PlacementEngine>>, aspect: f32) -> Self {
        let gate: Rc<dyn InteractionGate> = engine.clone();
        let mut rig = CameraRig::new(aspect, gate);
        rig.frame_room(&engine.borrow().room());
        Self { engine, rig }
    }

    #[inline]
    pub fn engine(&self) -> &Rc<RefCell<PlacementEngine>> {
        &self.engine
    }

    #[inline]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    #[inline]
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// Apply new room dimensions and reframe the camera. Returns removed ids.
    pub fn set_room(&mut self, room: Room) -> Vec<ObjectId> {
        let removed = self.engine.borrow_mut().resize_room(room);
        self.rig.frame_room(&room);
        removed
    }

    pub fn pointer_down(&mut self, input: PointerInput) -> Route {
        let ray = self.rig.ray(input.ndc);
        self.engine.borrow_mut().pointer_down(&ray);
        let active = self.engine.borrow().is_interaction_active();
        if active {
            Route::Placement
        } else if self.rig.begin(input.button, input.pixel) {
            Route::Camera
        } else {
            Route::Ignored
        }
    }

    /// Returns the route plus the dragged object's new position, if it moved.
    pub fn pointer_move(&mut self, input: PointerInput) -> (Route, Option<Vec3>) {
        let active = self.engine.borrow().is_interaction_active();
        if active {
            let ray = self.rig.ray(input.ndc);
            let moved = self.engine.borrow_mut().pointer_move(&ray);
            (Route::Placement, moved)
        } else if self.rig.drag(input.pixel) {
            (Route::Camera, None)
        } else {
            (Route::Ignored, None)
        }
    }

    pub fn pointer_up(&mut self) -> Route {
        let was_dragging = self.engine.borrow_mut().pointer_up();
        let was_orbiting = self.rig.end();
        if was_dragging {
            Route::Placement
        } else if was_orbiting {
            Route::Camera
        } else {
            Route::Ignored
        }
    }

    pub fn wheel(&mut self, delta_y: f32) -> Route {
        if self.rig.zoom(delta_y) {
            Route::Camera
        } else {
            Route::Ignored
        }
    }
}
