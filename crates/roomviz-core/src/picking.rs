//! Ray picking against placed objects and the floor plane.

use crate::constants::RAY_PARALLEL_EPSILON;
use crate::object::{ObjectId, PlaceableObject};
use glam::Vec3;

/// World-space ray with a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Nearest object under a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub id: ObjectId,
    pub point: Vec3,
    pub distance: f32,
}

/// Slab test. Returns the distance to the first surface in front of the
/// origin, or the exit distance when the origin is inside the box.
pub fn ray_aabb(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];
        if d.abs() < RAY_PARALLEL_EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }
    if t_far < 0.0 {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Nearest object whose bounding box the ray enters. Ties keep the earlier
/// object in iteration order.
pub fn pick_object<'a, I>(ray: &Ray, objects: I) -> Option<Hit>
where
    I: IntoIterator<Item = &'a PlaceableObject>,
{
    let mut best: Option<Hit> = None;
    for obj in objects {
        let (min, max) = obj.bounds();
        if let Some(t) = ray_aabb(ray, min, max) {
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(Hit {
                        id: obj.id(),
                        point: ray.at(t),
                        distance: t,
                    })
                }
            }
        }
    }
    best
}

/// Intersection with the floor plane y = 0. `None` when the ray runs
/// parallel to the floor or points away from it.
pub fn pick_floor(ray: &Ray) -> Option<Vec3> {
    if ray.dir.y.abs() < RAY_PARALLEL_EPSILON {
        return None;
    }
    let t = -ray.origin.y / ray.dir.y;
    if t < 0.0 {
        return None;
    }
    let mut p = ray.at(t);
    p.y = 0.0;
    Some(p)
}
