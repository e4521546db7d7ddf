// Flattens the engine state into per-instance cuboid data for the renderer.

use crate::constants::{
    AXIS_ARROW_LENGTH, AXIS_LINE_WIDTH, AXIS_MAJOR_TICK, AXIS_MINOR_TICK, AXIS_TICK_COLOR,
    AXIS_TICK_WIDTH, AXIS_X_COLOR, AXIS_Y_COLOR, AXIS_Z_COLOR, FLOOR_COLOR, FLOOR_THICKNESS,
    WALL_COLOR, WALL_THICKNESS,
};
use glam::Vec3;
use roomviz_core::{Axis, AxisOverlay, PlacementEngine, Room, ALL_AXES};

/// One drawn cuboid: the unit cube scaled by `size` and moved to `center`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub center: [f32; 3],
    pub _pad0: f32,
    pub size: [f32; 3],
    pub _pad1: f32,
    pub color: [f32; 4],
}

impl InstanceData {
    #[inline]
    pub fn new(center: Vec3, size: Vec3, color: [f32; 4]) -> Self {
        Self {
            center: center.to_array(),
            _pad0: 0.0,
            size: size.to_array(),
            _pad1: 0.0,
            color,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

/// Unit cube centered on the origin as 12 counter-clockwise triangles.
pub fn unit_cube() -> [CubeVertex; 36] {
    // (normal, u, v) with u x v == normal so each face winds outward
    const FACES: [[Vec3; 3]; 6] = [
        [Vec3::X, Vec3::Y, Vec3::Z],
        [Vec3::NEG_X, Vec3::Z, Vec3::Y],
        [Vec3::Y, Vec3::Z, Vec3::X],
        [Vec3::NEG_Y, Vec3::X, Vec3::Z],
        [Vec3::Z, Vec3::X, Vec3::Y],
        [Vec3::NEG_Z, Vec3::Y, Vec3::X],
    ];
    let mut out = [CubeVertex {
        pos: [0.0; 3],
        normal: [0.0; 3],
    }; 36];
    for (f, [n, u, v]) in FACES.iter().enumerate() {
        let c = *n * 0.5;
        let (u, v) = (*u * 0.5, *v * 0.5);
        let corners = [c - u - v, c + u - v, c + u + v, c - u - v, c + u + v, c - u + v];
        for (i, p) in corners.iter().enumerate() {
            out[f * 6 + i] = CubeVertex {
                pos: p.to_array(),
                normal: n.to_array(),
            };
        }
    }
    out
}

/// Floor slab plus four walls. The floor's top face sits at y = 0.
pub fn room_shell(room: &Room) -> [InstanceData; 5] {
    let (w, l, h) = (room.width, room.length, room.height);
    let t = WALL_THICKNESS;
    let floor = InstanceData::new(
        Vec3::new(0.0, -FLOOR_THICKNESS * 0.5, 0.0),
        Vec3::new(w, FLOOR_THICKNESS, l),
        FLOOR_COLOR,
    );
    let wall = |center: Vec3, size: Vec3| InstanceData::new(center, size, WALL_COLOR);
    [
        floor,
        wall(Vec3::new(0.0, h * 0.5, -(l + t) * 0.5), Vec3::new(w, h, t)),
        wall(Vec3::new(0.0, h * 0.5, (l + t) * 0.5), Vec3::new(w, h, t)),
        wall(Vec3::new(-(w + t) * 0.5, h * 0.5, 0.0), Vec3::new(t, h, l)),
        wall(Vec3::new((w + t) * 0.5, h * 0.5, 0.0), Vec3::new(t, h, l)),
    ]
}

#[inline]
pub fn axis_color(axis: Axis) -> [f32; 4] {
    match axis {
        Axis::X => AXIS_X_COLOR,
        Axis::Y => AXIS_Y_COLOR,
        Axis::Z => AXIS_Z_COLOR,
    }
}

/// Axis lines with an arrow block at the far end, then one thin box per tick.
pub fn axis_instances(overlay: &AxisOverlay) -> Vec<InstanceData> {
    let mut out = Vec::with_capacity(ALL_AXES.len() * 2 + overlay.ticks.len());
    for axis in ALL_AXES {
        let dir = axis.dir();
        let across = Vec3::ONE - dir;
        let len = overlay.length(axis);
        let color = axis_color(axis);
        out.push(InstanceData::new(
            overlay.origin + dir * (len * 0.5),
            dir * len + across * AXIS_LINE_WIDTH,
            color,
        ));
        out.push(InstanceData::new(
            overlay.origin + dir * (len + AXIS_ARROW_LENGTH * 0.5),
            dir * AXIS_ARROW_LENGTH + across * (AXIS_LINE_WIDTH * 2.0),
            color,
        ));
    }
    for tick in &overlay.ticks {
        let reach = if tick.major {
            AXIS_MAJOR_TICK
        } else {
            AXIS_MINOR_TICK
        };
        // ticks stand perpendicular to their axis
        let up = match tick.axis {
            Axis::Y => Vec3::X,
            Axis::X | Axis::Z => Vec3::Y,
        };
        out.push(InstanceData::new(
            overlay.tick_position(tick) + up * (reach * 0.5),
            up * reach + (Vec3::ONE - up) * AXIS_TICK_WIDTH,
            AXIS_TICK_COLOR,
        ));
    }
    out
}

/// Every instance for one frame, in draw order: the floor, the axes, the
/// objects, then the translucent walls. Axis ticks are dropped first when
/// the total would exceed `capacity`.
pub fn build_instances(
    engine: &PlacementEngine,
    axis: Option<&AxisOverlay>,
    capacity: usize,
) -> Vec<InstanceData> {
    let [floor, walls @ ..] = room_shell(&engine.room());
    let mut objects = Vec::new();
    for obj in engine.objects() {
        let color = obj.display_color().to_array();
        for part in obj.world_parts() {
            objects.push(InstanceData::new(part.center, part.size, color));
        }
    }
    let mut axes = axis.map(axis_instances).unwrap_or_default();
    let budget = capacity.saturating_sub(1 + objects.len() + walls.len());
    if axes.len() > budget {
        log::warn!(
            "[render] dropping {} of {} axis instances",
            axes.len() - budget,
            axes.len()
        );
        axes.truncate(budget);
    }

    let mut out = Vec::with_capacity(1 + axes.len() + objects.len() + walls.len());
    out.push(floor);
    out.extend(axes);
    out.extend(objects);
    out.extend_from_slice(&walls);
    if out.len() > capacity {
        log::warn!(
            "[render] {} instances exceed capacity {}, truncating",
            out.len(),
            capacity
        );
        out.truncate(capacity);
    }
    out
}
