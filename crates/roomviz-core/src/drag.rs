use crate::object::ObjectId;
use glam::{Vec2, Vec3};

/// One grab of one object. The offset is fixed at grab time so the object
/// keeps its position relative to the pointer instead of jumping under it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub object: ObjectId,
    pub offset: Vec3,
}

impl DragSession {
    /// Session grabbing `object` at `position` through the surface point `hit`.
    pub fn grab(object: ObjectId, position: Vec3, hit: Vec3) -> Self {
        Self {
            object,
            offset: position - hit,
        }
    }

    /// Unsnapped, unclamped floor target for the current pointer floor hit.
    #[inline]
    pub fn provisional(&self, floor_hit: Vec3) -> Vec2 {
        let p = floor_hit + self.offset;
        Vec2::new(p.x, p.z)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    #[inline]
    pub fn session(&self) -> Option<DragSession> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(s) => Some(*s),
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    /// True when the active session holds `id`.
    #[inline]
    pub fn holds(&self, id: ObjectId) -> bool {
        matches!(self, DragState::Dragging(s) if s.object == id)
    }
}
