use crate::constants::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_LENGTH, DEFAULT_ROOM_WIDTH};
use crate::error::{PlacementError, Result};
use crate::units::Unit;
use glam::{Vec2, Vec3};

/// The bounding volume objects are placed in, centered on the origin with
/// the floor at y = 0. `width` runs along x, `length` along z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM_WIDTH,
            length: DEFAULT_ROOM_LENGTH,
            height: DEFAULT_ROOM_HEIGHT,
        }
    }
}

impl Room {
    pub fn new(width: f32, length: f32, height: f32) -> Result<Self> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !(ok(width) && ok(length) && ok(height)) {
            return Err(PlacementError::InvalidDimensions {
                width,
                height,
                depth: length,
            });
        }
        Ok(Self {
            width,
            length,
            height,
        })
    }

    /// Half extents on the floor plane (x, z).
    pub fn half_floor(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.length * 0.5)
    }

    /// Point the camera orbits around and looks at.
    pub fn focus(&self) -> Vec3 {
        Vec3::new(0.0, self.height * 0.5, 0.0)
    }

    pub fn max_extent(&self) -> f32 {
        self.width.max(self.length).max(self.height)
    }

    /// True when a footprint with the given half extents centered at `xz`
    /// lies inside the walls.
    pub fn contains_footprint(&self, xz: Vec2, half: Vec2) -> bool {
        let limit = self.half_floor() - half;
        xz.x.abs() <= limit.x && xz.y.abs() <= limit.y
    }

    /// Dimension readout shown under the canvas.
    pub fn describe(&self, unit: Unit) -> String {
        format!(
            "Room: {} × {} × {}",
            unit.format_length(self.width),
            unit.format_length(self.length),
            unit.format_length(self.height)
        )
    }

    /// File name used for image export.
    pub fn export_file_name(&self) -> String {
        format!("room_{}x{}x{}.png", self.width, self.length, self.height)
    }
}
