//! Closed set of scene primitives.

use sable_math::{Aabb, Interval, Ray};

use crate::error::SceneError;
use crate::hittable::{HitRecord, Hittable};
use crate::material::Material;
use crate::sphere::{MovingSphere, Sphere};

/// Every shape a scene can hold.
///
/// Stored by value in a flat list and dispatched with `match`, which keeps
/// the nearest-hit scan a tight loop without boxing each primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    MovingSphere(MovingSphere),
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(s) => &s.material,
            Primitive::MovingSphere(s) => &s.material,
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        match self {
            Primitive::Sphere(s) => s.validate(),
            Primitive::MovingSphere(s) => s.validate(),
        }
    }
}

impl Hittable for Primitive {
    #[inline]
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Primitive::Sphere(s) => s.hit(ray, ray_t),
            Primitive::MovingSphere(s) => s.hit(ray, ray_t),
        }
    }

    fn bounding_box(&self) -> Aabb {
        match self {
            Primitive::Sphere(s) => s.bounding_box(),
            Primitive::MovingSphere(s) => s.bounding_box(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<MovingSphere> for Primitive {
    fn from(sphere: MovingSphere) -> Self {
        Primitive::MovingSphere(sphere)
    }
}
