//! Measuring axes drawn along the room's back-left floor corner.
//!
//! X runs along the width, Y up the height and Z along the length. Tick
//! spacing and labels follow the display unit: every 10 cm with a label each
//! meter, or every inch with a label each foot.

use crate::constants::{AXIS_LABEL_OFFSET, AXIS_MINOR_TICKS_PER_METER};
use crate::room::Room;
use crate::units::{Unit, INCHES_PER_METER};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

pub const ALL_AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

impl Axis {
    #[inline]
    pub fn dir(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Direction labels are pushed away from the axis line.
    #[inline]
    fn label_side(self) -> Vec3 {
        match self {
            Axis::Y => Vec3::NEG_X,
            Axis::X | Axis::Z => Vec3::NEG_Y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTick {
    pub axis: Axis,
    /// Distance from the axis origin in meters.
    pub offset: f32,
    pub major: bool,
}

/// A text label anchored at a world-space point.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub anchor: Vec3,
    pub axis: Axis,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisOverlay {
    /// Shared origin of the three axes: the (-W/2, 0, -L/2) floor corner.
    pub origin: Vec3,
    /// Axis lengths in meters, indexed like [`ALL_AXES`].
    pub lengths: [f32; 3],
    pub ticks: Vec<AxisTick>,
    pub labels: Vec<AxisLabel>,
}

impl AxisOverlay {
    pub fn new(room: &Room, unit: Unit) -> Self {
        let origin = Vec3::new(-room.width * 0.5, 0.0, -room.length * 0.5);
        let lengths = [room.width, room.height, room.length];
        let mut ticks = Vec::new();
        let mut labels = Vec::new();

        for (axis, &length) in ALL_AXES.iter().copied().zip(lengths.iter()) {
            let side = axis.label_side() * AXIS_LABEL_OFFSET;
            for (step, offset) in tick_offsets(length, unit) {
                let major = step % major_every(unit) == 0;
                ticks.push(AxisTick {
                    axis,
                    offset,
                    major,
                });
                if major && step > 0 {
                    labels.push(AxisLabel {
                        text: major_label(step / major_every(unit), unit),
                        anchor: origin + axis.dir() * offset + side,
                        axis,
                    });
                }
            }
            labels.push(AxisLabel {
                text: axis.name().to_string(),
                anchor: origin + axis.dir() * (length + AXIS_LABEL_OFFSET * 1.5),
                axis,
            });
        }

        Self {
            origin,
            lengths,
            ticks,
            labels,
        }
    }

    #[inline]
    pub fn length(&self, axis: Axis) -> f32 {
        self.lengths[axis as usize]
    }

    /// World position of a tick on its axis.
    #[inline]
    pub fn tick_position(&self, tick: &AxisTick) -> Vec3 {
        self.origin + tick.axis.dir() * tick.offset
    }
}

#[inline]
fn major_every(unit: Unit) -> u32 {
    match unit {
        Unit::Metric => AXIS_MINOR_TICKS_PER_METER,
        Unit::Imperial => 12,
    }
}

#[inline]
fn major_label(count: u32, unit: Unit) -> String {
    match unit {
        Unit::Metric => format!("{count}m"),
        Unit::Imperial => format!("{count}'"),
    }
}

/// (step index, meters) for every tick from 0 up to `length`. Steps are
/// counted in integers so long axes do not accumulate rounding drift.
fn tick_offsets(length: f32, unit: Unit) -> impl Iterator<Item = (u32, f32)> {
    let per_meter = match unit {
        Unit::Metric => AXIS_MINOR_TICKS_PER_METER as f32,
        Unit::Imperial => INCHES_PER_METER,
    };
    // tolerate 3.0 m coming out as 2.9999998 after a unit round trip
    let count = (length * per_meter + 1e-3).floor().max(0.0) as u32;
    (0..=count).map(move |i| (i, i as f32 / per_meter))
}
