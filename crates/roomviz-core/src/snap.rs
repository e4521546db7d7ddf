//! Snap resolver: grid quantization, neighbor edge/center alignment and the
//! room boundary clamp.
//!
//! All functions work on floor-plane coordinates where `Vec2::x` is world x
//! and `Vec2::y` is world z.

use crate::constants::NEIGHBOR_SNAP_THRESHOLD;
use crate::room::Room;
use crate::units::Unit;
use glam::Vec2;

/// How competing neighbor candidates on one axis are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Neighbors are visited in placement order and every candidate within
    /// the threshold overwrites the previous decision.
    #[default]
    LastMatch,
    /// The candidate closest to the grid-snapped coordinate wins.
    Nearest,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapConfig {
    pub enabled: bool,
    grid_increment: f32,
    pub neighbor_threshold: f32,
    pub tie_break: TieBreak,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            grid_increment: Unit::Metric.grid_increment(),
            neighbor_threshold: NEIGHBOR_SNAP_THRESHOLD,
            tie_break: TieBreak::LastMatch,
        }
    }
}

impl SnapConfig {
    #[inline]
    pub fn grid_increment(&self) -> f32 {
        self.grid_increment
    }

    /// Returns false and keeps the current step when `increment` is not a
    /// finite positive number.
    pub fn set_grid_increment(&mut self, increment: f32) -> bool {
        if increment.is_finite() && increment > 0.0 {
            self.grid_increment = increment;
            true
        } else {
            false
        }
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.grid_increment = unit.grid_increment();
    }
}

/// Footprint of another placed object as seen by the dragged one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    pub center: Vec2,
    pub half: Vec2,
}

#[inline]
pub fn grid_snap(value: f32, increment: f32) -> f32 {
    (value / increment).round() * increment
}

#[inline]
pub fn grid_snap_xz(p: Vec2, increment: f32) -> Vec2 {
    Vec2::new(grid_snap(p.x, increment), grid_snap(p.y, increment))
}

/// Edge candidates on one axis followed by the center candidate.
#[inline]
fn axis_candidates(center: f32, neighbor_half: f32, dragged_half: f32) -> [f32; 3] {
    let reach = neighbor_half + dragged_half;
    [center - reach, center + reach, center]
}

fn snap_axis_last_match(mut v: f32, candidates: [f32; 3], threshold: f32) -> f32 {
    let [low, high, center] = candidates;
    if (v - low).abs() < threshold {
        v = low;
    } else if (v - high).abs() < threshold {
        v = high;
    }
    if (v - center).abs() < threshold {
        v = center;
    }
    v
}

/// Align `p` to the edges or centers of `neighbors`.
pub fn neighbor_snap<I>(
    p: Vec2,
    dragged_half: Vec2,
    neighbors: I,
    threshold: f32,
    tie_break: TieBreak,
) -> Vec2
where
    I: IntoIterator<Item = Neighbor>,
{
    match tie_break {
        TieBreak::LastMatch => {
            let mut out = p;
            for n in neighbors {
                out.x = snap_axis_last_match(
                    out.x,
                    axis_candidates(n.center.x, n.half.x, dragged_half.x),
                    threshold,
                );
                out.y = snap_axis_last_match(
                    out.y,
                    axis_candidates(n.center.y, n.half.y, dragged_half.y),
                    threshold,
                );
            }
            out
        }
        TieBreak::Nearest => {
            let mut best_x: Option<(f32, f32)> = None;
            let mut best_z: Option<(f32, f32)> = None;
            let consider = |best: &mut Option<(f32, f32)>, v: f32, c: f32| {
                let dist = (v - c).abs();
                if dist < threshold && best.map_or(true, |(d, _)| dist < d) {
                    *best = Some((dist, c));
                }
            };
            for n in neighbors {
                for c in axis_candidates(n.center.x, n.half.x, dragged_half.x) {
                    consider(&mut best_x, p.x, c);
                }
                for c in axis_candidates(n.center.y, n.half.y, dragged_half.y) {
                    consider(&mut best_z, p.y, c);
                }
            }
            Vec2::new(
                best_x.map_or(p.x, |(_, c)| c),
                best_z.map_or(p.y, |(_, c)| c),
            )
        }
    }
}

/// Keep a footprint inside the walls. An axis where the object is wider
/// than the room pins it to the room center.
pub fn clamp_to_room(p: Vec2, half: Vec2, room: &Room) -> Vec2 {
    let limit = room.half_floor() - half;
    let clamp_axis = |v: f32, lim: f32| if lim < 0.0 { 0.0 } else { v.clamp(-lim, lim) };
    Vec2::new(clamp_axis(p.x, limit.x), clamp_axis(p.y, limit.y))
}

/// Full pipeline for one drag update: grid snap, neighbor snap (both only
/// when enabled), then the boundary clamp.
pub fn resolve<I>(
    provisional: Vec2,
    dragged_half: Vec2,
    neighbors: I,
    config: &SnapConfig,
    room: &Room,
) -> Vec2
where
    I: IntoIterator<Item = Neighbor>,
{
    let mut p = provisional;
    if config.enabled {
        p = grid_snap_xz(p, config.grid_increment);
        p = neighbor_snap(
            p,
            dragged_half,
            neighbors,
            config.neighbor_threshold,
            config.tie_break,
        );
    }
    clamp_to_room(p, dragged_half, room)
}
