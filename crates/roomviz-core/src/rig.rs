//! Orbit/pan/zoom camera controls.
//!
//! The rig is handed an [`InteractionGate`] when it is built and refuses
//! every user gesture while the gate reports an active placement
//! interaction.

use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, FRAME_DISTANCE_FACTOR, FRAME_HEIGHT_FACTOR,
    ORBIT_PAN_SPEED, ORBIT_POLAR_MAX, ORBIT_POLAR_MIN, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP,
};
use crate::input::{InteractionGate, PointerButton};
use crate::picking::Ray;
use crate::room::Room;
use crate::state::Camera;
use glam::{Vec2, Vec3};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitMode {
    Rotate,
    Pan,
}

#[derive(Clone, Copy, Debug)]
struct Gesture {
    mode: OrbitMode,
    last: Vec2,
}

pub struct CameraRig {
    camera: Camera,
    gate: Rc<dyn InteractionGate>,
    gesture: Option<Gesture>,
    // orbit look-at point; pans move the target away from it until the next rotate
    focus: Vec3,
}

impl CameraRig {
    pub fn new(aspect: f32, gate: Rc<dyn InteractionGate>) -> Self {
        let focus = Room::default().focus();
        Self {
            camera: Camera {
                eye: Vec3::new(8.0, 6.0, 8.0),
                target: focus,
                up: Vec3::Y,
                aspect,
                fovy_radians: CAMERA_FOVY_DEG.to_radians(),
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            },
            gate,
            gesture: None,
            focus,
        }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    #[inline]
    pub fn ray(&self, ndc: Vec2) -> Ray {
        self.camera.ray_through_ndc(ndc)
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.gate.is_interaction_active()
    }

    #[inline]
    pub fn gesture(&self) -> Option<OrbitMode> {
        self.gesture.map(|g| g.mode)
    }

    /// Place the eye on the diagonal so the whole room is in view.
    pub fn frame_room(&mut self, room: &Room) {
        let d = room.max_extent() * FRAME_DISTANCE_FACTOR;
        self.camera.eye = Vec3::new(d, d * FRAME_HEIGHT_FACTOR, d);
        self.focus = room.focus();
        self.camera.target = self.focus;
    }

    /// Start rotating (primary button) or panning (secondary button).
    pub fn begin(&mut self, button: PointerButton, at: Vec2) -> bool {
        if self.is_blocked() {
            return false;
        }
        let mode = match button {
            PointerButton::Primary => OrbitMode::Rotate,
            PointerButton::Secondary => OrbitMode::Pan,
            PointerButton::Other => return false,
        };
        self.gesture = Some(Gesture { mode, last: at });
        true
    }

    pub fn drag(&mut self, at: Vec2) -> bool {
        if self.is_blocked() {
            return false;
        }
        let Some(g) = self.gesture else {
            return false;
        };
        let delta = at - g.last;
        match g.mode {
            OrbitMode::Rotate => self.rotate(delta),
            OrbitMode::Pan => self.pan(delta),
        }
        self.gesture = Some(Gesture { last: at, ..g });
        true
    }

    /// Returns whether a gesture was in progress.
    pub fn end(&mut self) -> bool {
        self.gesture.take().is_some()
    }

    /// Wheel zoom along the eye direction; positive `delta_y` moves away.
    pub fn zoom(&mut self, delta_y: f32) -> bool {
        if self.is_blocked() || delta_y == 0.0 {
            return false;
        }
        let dir = self.camera.eye.normalize_or_zero();
        if delta_y > 0.0 {
            self.camera.eye += dir * ORBIT_ZOOM_STEP;
        } else {
            self.camera.eye -= dir * ORBIT_ZOOM_STEP;
        }
        true
    }

    fn rotate(&mut self, delta: Vec2) {
        let eye = self.camera.eye;
        let radius = eye.length();
        if radius <= f32::EPSILON {
            return;
        }
        let mut theta = eye.x.atan2(eye.z);
        let mut phi = (eye.y / radius).clamp(-1.0, 1.0).acos();
        theta -= delta.x * ORBIT_ROTATE_SPEED;
        phi = (phi + delta.y * ORBIT_ROTATE_SPEED).clamp(ORBIT_POLAR_MIN, ORBIT_POLAR_MAX);
        self.camera.eye = Vec3::new(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        );
        self.camera.target = self.focus;
    }

    fn pan(&mut self, delta: Vec2) {
        let right = self.camera.forward().cross(Vec3::Y).normalize_or_zero();
        let shift = right * (-delta.x * ORBIT_PAN_SPEED) + Vec3::Y * (delta.y * ORBIT_PAN_SPEED);
        self.camera.eye += shift;
        self.camera.target += shift;
    }
}
