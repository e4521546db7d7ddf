// Host-side tests for the snap resolver: grid snap, neighbor snap and the
// room boundary clamp.

use glam::Vec2;
use roomviz_core::{
    clamp_to_room, grid_snap, neighbor_snap, resolve, Neighbor, Room, SnapConfig, TieBreak, Unit,
    NEIGHBOR_SNAP_THRESHOLD,
};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn unit_block(x: f32, z: f32) -> Neighbor {
    Neighbor {
        center: Vec2::new(x, z),
        half: Vec2::splat(0.5),
    }
}

fn snapping(increment: f32) -> SnapConfig {
    let mut cfg = SnapConfig::default();
    cfg.enabled = true;
    assert!(cfg.set_grid_increment(increment));
    cfg
}

#[test]
fn grid_snap_rounds_to_nearest_multiple() {
    assert_eq!(grid_snap(1.23, 0.5), 1.0);
    assert_eq!(grid_snap(2.61, 0.5), 2.5);
    assert_eq!(grid_snap(-0.74, 0.5), -0.5);
    assert_eq!(grid_snap(0.76, 0.5), 1.0);
}

#[test]
fn grid_snap_is_idempotent() {
    let increments = [0.5, Unit::Imperial.grid_increment(), 0.25, 0.1];
    let values = [-3.7, -1.26, -0.01, 0.0, 0.3, 1.23, 2.61, 4.99, 17.3];
    for inc in increments {
        for v in values {
            let once = grid_snap(v, inc);
            assert_eq!(grid_snap(once, inc), once, "value {} increment {}", v, inc);
        }
    }
}

#[test]
fn neighbor_snap_pulls_to_right_edge_within_threshold() {
    // neighbor at (1.0, 2.5): right edge for a 1x1 object is 1.0 + 0.5 + 0.5
    let out = neighbor_snap(
        Vec2::new(2.05, 0.0),
        Vec2::splat(0.5),
        [unit_block(1.0, 2.5)],
        NEIGHBOR_SNAP_THRESHOLD,
        TieBreak::LastMatch,
    );
    assert_eq!(out.x, 2.0);
    assert_eq!(out.y, 0.0);
}

#[test]
fn neighbor_snap_ignores_candidates_just_outside_threshold() {
    let out = neighbor_snap(
        Vec2::new(2.11, 0.0),
        Vec2::splat(0.5),
        [unit_block(1.0, 2.5)],
        NEIGHBOR_SNAP_THRESHOLD,
        TieBreak::LastMatch,
    );
    assert_eq!(out, Vec2::new(2.11, 0.0));

    // left edge at -1.0
    let out = neighbor_snap(
        Vec2::new(-1.11, 5.0),
        Vec2::splat(0.5),
        [unit_block(0.0, 0.0)],
        NEIGHBOR_SNAP_THRESHOLD,
        TieBreak::LastMatch,
    );
    assert_eq!(out, Vec2::new(-1.11, 5.0));
}

#[test]
fn neighbor_snap_front_and_back_edges_on_z() {
    let n = unit_block(0.0, 0.0);
    let front = neighbor_snap(
        Vec2::new(3.0, -1.04),
        Vec2::splat(0.5),
        [n],
        NEIGHBOR_SNAP_THRESHOLD,
        TieBreak::LastMatch,
    );
    assert_eq!(front.y, -1.0);
    let back = neighbor_snap(
        Vec2::new(3.0, 0.93),
        Vec2::splat(0.5),
        [n],
        NEIGHBOR_SNAP_THRESHOLD,
        TieBreak::LastMatch,
    );
    assert_eq!(back.y, 1.0);
    // x far from every candidate stays put
    assert_eq!(back.x, 3.0);
}

#[test]
fn neighbor_snap_uses_both_half_footprints() {
    // 2.0 x 0.6 neighbor, 0.5 x 0.4 dragged object
    let n = Neighbor {
        center: Vec2::new(0.0, 0.0),
        half: Vec2::new(1.0, 0.3),
    };
    let out = neighbor_snap(
        Vec2::new(1.3, 0.52),
        Vec2::new(0.25, 0.2),
        [n],
        NEIGHBOR_SNAP_THRESHOLD,
        TieBreak::LastMatch,
    );
    assert!(approx(out.x, 1.25), "x = {}", out.x);
    assert!(approx(out.y, 0.5), "z = {}", out.y);
}

#[test]
fn center_alignment_overrides_an_edge_match() {
    // tiny neighbor: edges at +-0.07, center at 0
    let n = Neighbor {
        center: Vec2::ZERO,
        half: Vec2::splat(0.05),
    };
    let out = neighbor_snap(
        Vec2::new(0.06, 4.0),
        Vec2::splat(0.02),
        [n],
        NEIGHBOR_SNAP_THRESHOLD,
        TieBreak::LastMatch,
    );
    assert_eq!(out.x, 0.0);
}

#[test]
fn later_neighbor_wins_with_last_match() {
    // first neighbor's right edge at 1.0, second neighbor's left edge at ~1.05
    let first = unit_block(0.0, -2.0);
    let second = unit_block(2.05, -2.0);
    let out = neighbor_snap(
        Vec2::new(1.02, 0.0),
        Vec2::splat(0.5),
        [first, second],
        NEIGHBOR_SNAP_THRESHOLD,
        TieBreak::LastMatch,
    );
    assert!(approx(out.x, 1.05), "x = {}", out.x);
}

#[test]
fn nearest_policy_keeps_closest_candidate() {
    let first = unit_block(0.0, -2.0);
    let second = unit_block(2.05, -2.0);
    let out = neighbor_snap(
        Vec2::new(1.02, 0.0),
        Vec2::splat(0.5),
        [first, second],
        NEIGHBOR_SNAP_THRESHOLD,
        TieBreak::Nearest,
    );
    assert_eq!(out.x, 1.0);
    assert_eq!(out.y, 0.0);
}

#[test]
fn clamp_keeps_footprint_inside_walls() {
    let room = Room::new(5.0, 6.0, 3.0).unwrap();
    let half = Vec2::splat(0.5);
    assert_eq!(
        clamp_to_room(Vec2::new(9.0, -9.0), half, &room),
        Vec2::new(2.0, -2.5)
    );
    assert_eq!(
        clamp_to_room(Vec2::new(1.0, 2.5), half, &room),
        Vec2::new(1.0, 2.5)
    );
}

#[test]
fn clamp_pins_oversized_footprint_to_center() {
    let room = Room::new(2.0, 6.0, 3.0).unwrap();
    let out = clamp_to_room(Vec2::new(0.7, 1.0), Vec2::new(1.5, 0.5), &room);
    assert_eq!(out, Vec2::new(0.0, 1.0));
}

#[test]
fn resolve_matches_reference_scenario() {
    // room 5x6x3, grid 0.5, 1x1 footprint, no neighbors
    let room = Room::new(5.0, 6.0, 3.0).unwrap();
    let cfg = snapping(0.5);
    let out = resolve(
        Vec2::new(1.23, 2.61),
        Vec2::splat(0.5),
        std::iter::empty(),
        &cfg,
        &room,
    );
    assert_eq!(out, Vec2::new(1.0, 2.5));
}

#[test]
fn resolve_clamps_after_a_snap_pushes_outside() {
    let room = Room::new(5.0, 6.0, 3.0).unwrap();
    let cfg = snapping(0.05);
    // right edge of the neighbor is 2.5, past the 2.0 limit
    let out = resolve(
        Vec2::new(2.46, 0.0),
        Vec2::splat(0.5),
        [unit_block(1.5, 0.0)],
        &cfg,
        &room,
    );
    assert_eq!(out.x, 2.0);
}

#[test]
fn resolve_without_snap_only_clamps() {
    let room = Room::new(5.0, 6.0, 3.0).unwrap();
    let cfg = SnapConfig::default();
    assert!(!cfg.enabled);
    let out = resolve(
        Vec2::new(1.23, 2.61),
        Vec2::splat(0.5),
        [unit_block(0.2, 2.6)],
        &cfg,
        &room,
    );
    assert_eq!(out, Vec2::new(1.23, 2.5));
}

#[test]
fn grid_increment_rejects_zero_and_nan() {
    let mut cfg = SnapConfig::default();
    let before = cfg.grid_increment();
    assert!(!cfg.set_grid_increment(0.0));
    assert!(!cfg.set_grid_increment(-0.5));
    assert!(!cfg.set_grid_increment(f32::NAN));
    assert_eq!(cfg.grid_increment(), before);
}

#[test]
fn grid_increment_follows_unit() {
    let mut cfg = SnapConfig::default();
    assert_eq!(cfg.grid_increment(), 0.5);
    cfg.set_unit(Unit::Imperial);
    assert!(approx(cfg.grid_increment(), 0.3048));
    cfg.set_unit(Unit::Metric);
    assert_eq!(cfg.grid_increment(), 0.5);
}
