//! Furniture templates.
//!
//! A template knows its default bounding dimensions and how to break an
//! instance into component cuboids for drawing. Picking, snapping and
//! clamping only ever look at the bounding box.

use crate::error::{PlacementError, Result};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FurnitureKind {
    Box,
    Chair,
    Table,
    Sofa,
    Desk,
    Bookshelf,
}

pub const ALL_KINDS: [FurnitureKind; 6] = [
    FurnitureKind::Box,
    FurnitureKind::Chair,
    FurnitureKind::Table,
    FurnitureKind::Sofa,
    FurnitureKind::Desk,
    FurnitureKind::Bookshelf,
];

/// Bounding size of an object in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn validate(self) -> Result<Self> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) && ok(self.depth) {
            Ok(self)
        } else {
            Err(PlacementError::InvalidDimensions {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }

    /// Half extents on the floor plane (x, z).
    #[inline]
    pub fn half_footprint(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.depth * 0.5)
    }

    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

/// One drawable box of a furniture piece. `center` is relative to the point
/// on the floor directly under the object's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub center: Vec3,
    pub size: Vec3,
}

impl Cuboid {
    #[inline]
    fn new(center: [f32; 3], size: [f32; 3]) -> Self {
        Self {
            center: Vec3::from_array(center),
            size: Vec3::from_array(size),
        }
    }
}

pub type Parts = SmallVec<[Cuboid; 8]>;

const LEG: f32 = 0.05;
const SLAB: f32 = 0.05;
const SHELF_COUNT: usize = 5;

impl FurnitureKind {
    pub fn name(self) -> &'static str {
        match self {
            FurnitureKind::Box => "Box",
            FurnitureKind::Chair => "Chair",
            FurnitureKind::Table => "Table",
            FurnitureKind::Sofa => "Sofa",
            FurnitureKind::Desk => "Desk",
            FurnitureKind::Bookshelf => "Bookshelf",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            FurnitureKind::Box => "box",
            FurnitureKind::Chair => "chair",
            FurnitureKind::Table => "table",
            FurnitureKind::Sofa => "sofa",
            FurnitureKind::Desk => "desk",
            FurnitureKind::Bookshelf => "bookshelf",
        }
    }

    pub fn default_dimensions(self) -> Dimensions {
        match self {
            FurnitureKind::Box => Dimensions::new(1.0, 1.0, 1.0),
            FurnitureKind::Chair => Dimensions::new(0.5, 0.9, 0.5),
            FurnitureKind::Table => Dimensions::new(1.2, 0.75, 0.8),
            FurnitureKind::Sofa => Dimensions::new(2.0, 0.8, 0.9),
            FurnitureKind::Desk => Dimensions::new(1.4, 0.75, 0.7),
            FurnitureKind::Bookshelf => Dimensions::new(0.8, 1.8, 0.3),
        }
    }

    /// Component cuboids for an instance of this kind with the given size.
    pub fn parts(self, dims: Dimensions) -> Parts {
        let Dimensions {
            width: w,
            height: h,
            depth: d,
        } = dims;
        let mut parts = Parts::new();
        match self {
            FurnitureKind::Box => {
                parts.push(Cuboid::new([0.0, h * 0.5, 0.0], [w, h, d]));
            }
            FurnitureKind::Chair => {
                parts.push(Cuboid::new([0.0, h * 0.5, 0.0], [w, SLAB, d]));
                parts.push(Cuboid::new([0.0, h * 0.7, -d * 0.4], [w, h * 0.4, SLAB]));
                for (sx, sz) in corners() {
                    parts.push(Cuboid::new(
                        [sx * w * 0.4, h * 0.25, sz * d * 0.4],
                        [LEG, h * 0.5, LEG],
                    ));
                }
            }
            FurnitureKind::Table => {
                parts.push(Cuboid::new([0.0, h - SLAB * 0.5, 0.0], [w, SLAB, d]));
                let leg_h = h - SLAB;
                for (sx, sz) in corners() {
                    parts.push(Cuboid::new(
                        [sx * w * 0.45, leg_h * 0.5, sz * d * 0.45],
                        [LEG, leg_h, LEG],
                    ));
                }
            }
            FurnitureKind::Sofa => {
                parts.push(Cuboid::new([0.0, h * 0.4, 0.0], [w, 0.1, d * 0.6]));
                parts.push(Cuboid::new([0.0, h * 0.65, -d * 0.25], [w, h * 0.5, 0.1]));
                for sx in [-1.0, 1.0] {
                    parts.push(Cuboid::new(
                        [sx * w * 0.45, h * 0.55, 0.0],
                        [0.1, h * 0.3, d * 0.6],
                    ));
                }
                parts.push(Cuboid::new([0.0, 0.05, 0.0], [w * 0.9, 0.1, d * 0.5]));
            }
            FurnitureKind::Desk => {
                parts.push(Cuboid::new([0.0, h - SLAB * 0.5, 0.0], [w, SLAB, d]));
                parts.push(Cuboid::new(
                    [-w * 0.3, h * 0.4, 0.0],
                    [w * 0.3, h * 0.8, d * 0.8],
                ));
                let leg_h = h - SLAB;
                for sz in [-1.0, 1.0] {
                    parts.push(Cuboid::new(
                        [w * 0.45, leg_h * 0.5, sz * d * 0.45],
                        [LEG, leg_h, LEG],
                    ));
                }
            }
            FurnitureKind::Bookshelf => {
                let side = 0.03;
                parts.push(Cuboid::new([0.0, h * 0.5, -d * 0.4], [w, h, 0.02]));
                for sx in [-1.0, 1.0] {
                    parts.push(Cuboid::new(
                        [sx * (w - side) * 0.5, h * 0.5, 0.0],
                        [side, h, d],
                    ));
                }
                let shelf = 0.03;
                for i in 0..SHELF_COUNT {
                    let y = (i as f32 / (SHELF_COUNT - 1) as f32) * h;
                    // keep top and bottom boards inside the bounding box
                    let y = y.clamp(shelf * 0.5, h - shelf * 0.5);
                    parts.push(Cuboid::new([0.0, y, 0.0], [w * 0.94, shelf, d * 0.9]));
                }
            }
        }
        parts
    }
}

#[inline]
fn corners() -> [(f32, f32); 4] {
    [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FurnitureKind {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        ALL_KINDS
            .iter()
            .copied()
            .find(|k| k.key() == wanted)
            .ok_or_else(|| PlacementError::UnknownKind(s.to_string()))
    }
}
