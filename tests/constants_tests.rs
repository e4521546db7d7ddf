// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn shell_and_renderer_constants_are_sane() {
    assert!(WALL_THICKNESS > 0.0 && WALL_THICKNESS < 0.5);
    assert!(FLOOR_THICKNESS > 0.0);
    assert!(MAX_INSTANCES >= 5, "room shell alone needs five instances");
    assert!((0.0..=1.0).contains(&AMBIENT_LIGHT));
    assert!(STATUS_CLEAR_MS > 0);
    assert!(AXIS_MAJOR_TICK > AXIS_MINOR_TICK);
    assert!(AXIS_TICK_WIDTH < AXIS_LINE_WIDTH);
}

#[test]
fn colors_are_normalized() {
    for c in [
        FLOOR_COLOR,
        WALL_COLOR,
        AXIS_X_COLOR,
        AXIS_Y_COLOR,
        AXIS_Z_COLOR,
        AXIS_TICK_COLOR,
    ] {
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)));
    }
    assert!(CLEAR_COLOR.iter().all(|v| (0.0..=1.0).contains(v)));
    // walls must let objects show through
    assert!(WALL_COLOR[3] < 1.0);
    assert_eq!(FLOOR_COLOR[3], 1.0);
}

#[test]
fn light_direction_is_not_degenerate() {
    let l = glam::Vec3::from_array(LIGHT_DIR);
    assert!(l.length() > 0.1);
    assert!(l.y > 0.0, "light should come from above");
}

#[test]
fn element_ids_are_unique() {
    let ids = [
        CANVAS_ID,
        DIMENSIONS_DISPLAY_ID,
        STATUS_ID,
        SNAP_TOGGLE_ID,
        ROOM_WIDTH_ID,
        ROOM_LENGTH_ID,
        ROOM_HEIGHT_ID,
        FURNITURE_WIDTH_ID,
        FURNITURE_HEIGHT_ID,
        FURNITURE_DEPTH_ID,
        FURNITURE_TYPE_ID,
        UNIT_SELECT_ID,
        GENERATE_ROOM_ID,
        ADD_FURNITURE_ID,
        CLEAR_FURNITURE_ID,
        REMOVE_SELECTED_ID,
        EXPORT_IMAGE_ID,
        AXIS_LABELS_ID,
        AXIS_TOGGLE_ID,
    ];
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}
