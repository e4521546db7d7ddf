use crate::constants::{OBJECT_OPACITY, SELECTED_DARKEN, SELECTED_OPACITY};
use crate::furniture::{Dimensions, FurnitureKind, Parts};
use glam::{Vec2, Vec3, Vec4};
use std::fmt;

/// Identity of a placed object. Ids are never reused within one engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A draggable item resting on the floor.
///
/// The position setters keep `y == height / 2`; horizontal bounds are the
/// engine's job since they depend on the current room.
#[derive(Clone, Debug)]
pub struct PlaceableObject {
    id: ObjectId,
    kind: FurnitureKind,
    dims: Dimensions,
    position: Vec3,
    selected: bool,
    base_color: [f32; 3],
}

impl PlaceableObject {
    pub fn new(id: ObjectId, kind: FurnitureKind, dims: Dimensions, base_color: [f32; 3]) -> Self {
        Self {
            id,
            kind,
            dims,
            position: Vec3::new(0.0, dims.height * 0.5, 0.0),
            selected: false,
            base_color,
        }
    }

    #[inline]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> FurnitureKind {
        self.kind
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position projected on the floor plane as (x, z).
    #[inline]
    pub fn floor_position(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }

    #[inline]
    pub fn half_footprint(&self) -> Vec2 {
        self.dims.half_footprint()
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Move on the floor plane; y is pinned to half the height.
    pub(crate) fn set_floor_position(&mut self, xz: Vec2) {
        self.position = Vec3::new(xz.x, self.dims.height * 0.5, xz.y);
    }

    /// World-space bounding box as (min, max).
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let half = self.dims.as_vec3() * 0.5;
        (self.position - half, self.position + half)
    }

    /// RGBA used for drawing: darker and more opaque while selected.
    pub fn display_color(&self) -> Vec4 {
        let [r, g, b] = self.base_color;
        if self.selected {
            Vec4::new(
                r * SELECTED_DARKEN,
                g * SELECTED_DARKEN,
                b * SELECTED_DARKEN,
                SELECTED_OPACITY,
            )
        } else {
            Vec4::new(r, g, b, OBJECT_OPACITY)
        }
    }

    /// Component cuboids in world space (centers offset by the floor point).
    pub fn world_parts(&self) -> Parts {
        let base = Vec3::new(self.position.x, 0.0, self.position.z);
        let mut parts = self.kind.parts(self.dims);
        for p in parts.iter_mut() {
            p.center += base;
        }
        parts
    }
}
