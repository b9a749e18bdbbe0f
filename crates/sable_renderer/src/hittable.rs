//! Hittable trait and HitRecord for ray-object intersection.

use sable_math::{Aabb, Interval, Ray, Vec3, WorldPoint};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: WorldPoint,
    /// Unit surface normal, always facing against the incoming ray
    pub normal: Vec3,
    /// Ray parameter of the intersection
    pub t: f32,
    /// Whether the ray hit the outside of the surface
    pub front_face: bool,
    /// Index of the hit primitive in its scene, used to look up the material
    pub material_id: usize,
}

impl HitRecord {
    /// Build a record for a hit at `t` with the geometric (outward) normal.
    pub fn new(ray: &Ray, t: f32, outward_normal: Vec3) -> Self {
        let mut rec = Self {
            point: ray.at(t),
            normal: outward_normal,
            t,
            front_face: true,
            material_id: 0,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        self.front_face = ray.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with parameter inside `ray_t` (inclusive), if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;

    /// World-space box enclosing the object over the whole shutter interval.
    fn bounding_box(&self) -> Aabb;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_face_keeps_outward_normal() {
        let ray = Ray::new_static(WorldPoint::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&ray, 0.5, Vec3::Z);

        assert!(rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert_eq!(rec.point, WorldPoint::new(0.0, 0.0, -0.5));
    }

    #[test]
    fn test_back_face_flips_normal() {
        // Leaving a surface from the inside
        let ray = Ray::new_static(WorldPoint::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&ray, 0.5, -Vec3::Z);

        assert!(!rec.front_face);
        assert_eq!(rec.normal, Vec3::Z);
        assert!(rec.normal.dot(ray.direction) < 0.0);
    }
}
