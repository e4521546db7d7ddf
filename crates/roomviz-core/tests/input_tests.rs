// Host-side tests for input arbitration and the camera rig gate.

use glam::{Vec2, Vec3};
use roomviz_core::{
    CameraRig, Dimensions, FurnitureKind, InputRouter, InteractionGate, OrbitMode, PlacementEngine,
    PointerButton, PointerInput, Room, Route, ORBIT_POLAR_MIN,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Flag(Cell<bool>);

impl InteractionGate for Flag {
    fn is_interaction_active(&self) -> bool {
        self.0.get()
    }
}

fn primary(ndc: Vec2, pixel: Vec2) -> PointerInput {
    PointerInput {
        ndc,
        pixel,
        button: PointerButton::Primary,
    }
}

// Upper right of the screen looks over every object into the sky.
const SKY: Vec2 = Vec2::new(0.9, 0.9);

/// Router over a default room holding one floor-to-ceiling column at the
/// origin, so the screen center always lands on it.
fn router_with_column() -> InputRouter {
    let engine = Rc::new(RefCell::new(PlacementEngine::default()));
    engine
        .borrow_mut()
        .add_object(FurnitureKind::Box, Some(Dimensions::new(1.0, 3.0, 1.0)))
        .unwrap();
    InputRouter::new(engine, 1.0)
}

#[test]
fn dom_buttons_map_to_pointer_buttons() {
    assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
    assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
    assert_eq!(PointerButton::from_dom(1), PointerButton::Other);
}

#[test]
fn router_frames_the_room_on_creation() {
    let router = router_with_column();
    let cam = router.rig().camera();
    assert!((cam.eye - Vec3::new(9.0, 7.2, 9.0)).length() < 1e-4);
    assert_eq!(cam.target, Vec3::new(0.0, 1.5, 0.0));
}

#[test]
fn miss_goes_to_the_camera() {
    let mut router = router_with_column();
    let eye = router.rig().camera().eye;
    assert_eq!(
        router.pointer_down(primary(SKY, Vec2::new(100.0, 100.0))),
        Route::Camera
    );
    assert_eq!(router.rig().gesture(), Some(OrbitMode::Rotate));
    let (route, moved) = router.pointer_move(primary(SKY, Vec2::new(120.0, 90.0)));
    assert_eq!(route, Route::Camera);
    assert!(moved.is_none());
    assert_ne!(router.rig().camera().eye, eye);
    assert_eq!(router.pointer_up(), Route::Camera);
    assert!(router.rig().gesture().is_none());
}

#[test]
fn object_hit_goes_to_placement_and_blocks_camera() {
    let mut router = router_with_column();
    let eye = router.rig().camera().eye;

    assert_eq!(
        router.pointer_down(primary(Vec2::ZERO, Vec2::new(50.0, 50.0))),
        Route::Placement
    );
    assert!(router.engine().borrow().is_dragging());
    assert!(router.rig().gesture().is_none());
    assert!(router.rig().is_blocked());

    let (route, _) = router.pointer_move(primary(Vec2::new(0.1, -0.3), Vec2::new(80.0, 90.0)));
    assert_eq!(route, Route::Placement);
    assert_eq!(router.wheel(1.0), Route::Ignored);
    assert_eq!(router.pointer_up(), Route::Placement);

    // still selected: moves and wheel leave the camera alone
    let (route, moved) = router.pointer_move(primary(SKY, Vec2::new(200.0, 10.0)));
    assert_eq!(route, Route::Placement);
    assert!(moved.is_none());
    assert_eq!(router.wheel(-1.0), Route::Ignored);
    assert_eq!(router.rig().camera().eye, eye);
}

#[test]
fn clicking_empty_space_releases_the_camera() {
    let mut router = router_with_column();
    router.pointer_down(primary(Vec2::ZERO, Vec2::ZERO));
    router.pointer_up();
    assert!(router.engine().borrow().selected().is_some());

    let right_click = PointerInput {
        ndc: SKY,
        pixel: Vec2::new(10.0, 10.0),
        button: PointerButton::Secondary,
    };
    assert_eq!(router.pointer_down(right_click), Route::Camera);
    assert!(router.engine().borrow().selected().is_none());
    assert_eq!(router.rig().gesture(), Some(OrbitMode::Pan));

    let target = router.rig().camera().target;
    router.pointer_move(PointerInput {
        pixel: Vec2::new(30.0, 10.0),
        ..right_click
    });
    assert_ne!(router.rig().camera().target, target);
}

#[test]
fn middle_button_on_empty_space_is_ignored() {
    let mut router = router_with_column();
    let input = PointerInput {
        ndc: SKY,
        pixel: Vec2::ZERO,
        button: PointerButton::Other,
    };
    assert_eq!(router.pointer_down(input), Route::Ignored);
    assert_eq!(router.pointer_move(input).0, Route::Ignored);
    assert_eq!(router.pointer_up(), Route::Ignored);
}

#[test]
fn wheel_zooms_when_idle() {
    let mut router = router_with_column();
    let before = router.rig().camera().eye.length();
    assert_eq!(router.wheel(1.0), Route::Camera);
    assert!(router.rig().camera().eye.length() > before);
    assert_eq!(router.wheel(-1.0), Route::Camera);
    assert!((router.rig().camera().eye.length() - before).abs() < 1e-4);
    assert_eq!(router.wheel(0.0), Route::Ignored);
}

#[test]
fn set_room_removes_and_reframes() {
    let mut router = router_with_column();
    let removed = router.set_room(Room::new(0.5, 0.5, 2.0).unwrap());
    // the column is wider than the room but sits centered, so it is dropped
    assert_eq!(removed.len(), 1);
    assert!(router.engine().borrow().objects().is_empty());
    let cam = router.rig().camera();
    assert!((cam.eye - Vec3::new(3.0, 2.4, 3.0)).length() < 1e-4);
    assert_eq!(cam.target, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn rig_refuses_gestures_while_gate_is_active() {
    let flag = Rc::new(Flag(Cell::new(true)));
    let mut rig = CameraRig::new(1.0, flag.clone());
    let eye = rig.camera().eye;
    assert!(!rig.begin(PointerButton::Primary, Vec2::ZERO));
    assert!(!rig.zoom(1.0));
    assert_eq!(rig.camera().eye, eye);

    flag.0.set(false);
    assert!(rig.begin(PointerButton::Primary, Vec2::ZERO));
    // gate closes mid-gesture: the drag is refused
    flag.0.set(true);
    assert!(!rig.drag(Vec2::new(50.0, 0.0)));
    assert_eq!(rig.camera().eye, eye);
    assert!(rig.end());
}

#[test]
fn rotation_clamps_the_polar_angle() {
    let flag = Rc::new(Flag(Cell::new(false)));
    let mut rig = CameraRig::new(1.0, flag);
    rig.frame_room(&Room::default());
    let radius = rig.camera().eye.length();
    assert!(rig.begin(PointerButton::Primary, Vec2::ZERO));
    assert!(rig.drag(Vec2::new(0.0, -100_000.0)));
    let eye = rig.camera().eye;
    assert!((eye.length() - radius).abs() < 1e-3);
    assert!((eye.y / radius - ORBIT_POLAR_MIN.cos()).abs() < 1e-4);
}

#[test]
fn rotating_after_a_pan_looks_back_at_the_room() {
    let flag = Rc::new(Flag(Cell::new(false)));
    let mut rig = CameraRig::new(1.0, flag);
    let room = Room::default();
    rig.frame_room(&room);

    assert!(rig.begin(PointerButton::Secondary, Vec2::ZERO));
    assert!(rig.drag(Vec2::new(100.0, 0.0)));
    assert!(rig.end());
    assert_ne!(rig.camera().target, room.focus());

    assert!(rig.begin(PointerButton::Primary, Vec2::ZERO));
    assert!(rig.drag(Vec2::new(10.0, 0.0)));
    assert!((rig.camera().target - room.focus()).length() < 1e-6);
}

#[test]
fn aspect_rejects_degenerate_values() {
    let flag = Rc::new(Flag(Cell::new(false)));
    let mut rig = CameraRig::new(1.5, flag);
    rig.set_aspect(0.0);
    rig.set_aspect(f32::NAN);
    assert_eq!(rig.camera().aspect, 1.5);
    rig.set_aspect(2.0);
    assert_eq!(rig.camera().aspect, 2.0);
}
