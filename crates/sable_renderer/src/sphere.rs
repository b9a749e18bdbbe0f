//! Sphere primitives for ray tracing.

use sable_math::{Aabb, Interval, Ray, Vec3, WorldPoint};

use crate::error::SceneError;
use crate::hittable::{HitRecord, Hittable};
use crate::material::Material;

/// A static sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: WorldPoint,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: WorldPoint, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        validate_radius(self.radius)?;
        self.material.validate()
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        hit_sphere(self.center, self.radius, ray, ray_t)
    }

    fn bounding_box(&self) -> Aabb {
        sphere_box(self.center, self.radius)
    }
}

/// A sphere whose center moves linearly from `center0` at `time0` to
/// `center1` at `time1`. Rays sample the position at their own time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingSphere {
    pub center0: WorldPoint,
    pub center1: WorldPoint,
    pub time0: f32,
    pub time1: f32,
    pub radius: f32,
    pub material: Material,
}

impl MovingSphere {
    pub fn new(
        center0: WorldPoint,
        center1: WorldPoint,
        time0: f32,
        time1: f32,
        radius: f32,
        material: Material,
    ) -> Self {
        Self {
            center0,
            center1,
            time0,
            time1,
            radius,
            material,
        }
    }

    /// Center at `time`. Times outside `[time0, time1]` extrapolate.
    #[inline]
    pub fn center(&self, time: f32) -> WorldPoint {
        let s = (time - self.time0) / (self.time1 - self.time0);
        self.center0.lerp(self.center1, s)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        validate_radius(self.radius)?;
        if !(self.time0 < self.time1) {
            return Err(SceneError::InvalidTimeRange(self.time0, self.time1));
        }
        self.material.validate()
    }
}

impl Hittable for MovingSphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        hit_sphere(self.center(ray.time), self.radius, ray, ray_t)
    }

    fn bounding_box(&self) -> Aabb {
        let box0 = sphere_box(self.center(self.time0), self.radius);
        let box1 = sphere_box(self.center(self.time1), self.radius);
        Aabb::surrounding(&box0, &box1)
    }
}

/// Solve `|O + tD - C|^2 = r^2` and keep the nearest root inside `ray_t`.
fn hit_sphere(center: WorldPoint, radius: f32, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
    let oc = ray.origin - center;
    let a = ray.direction.length_squared();
    let half_b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;

    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrtd = discriminant.sqrt();

    // Find the nearest root in the acceptable range
    let mut root = (-half_b - sqrtd) / a;
    if !ray_t.contains(root) {
        root = (-half_b + sqrtd) / a;
        if !ray_t.contains(root) {
            return None;
        }
    }

    let outward_normal = (ray.at(root) - center) / radius;
    Some(HitRecord::new(ray, root, outward_normal))
}

fn sphere_box(center: WorldPoint, radius: f32) -> Aabb {
    let rvec = Vec3::splat(radius);
    Aabb::from_points(center - rvec, center + rvec)
}

fn validate_radius(radius: f32) -> Result<(), SceneError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(SceneError::InvalidRadius(radius))
    }
}
