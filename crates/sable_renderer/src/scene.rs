//! Scene: an ordered list of primitives with nearest-hit queries.

use rand::RngCore;
use sable_math::{Aabb, Interval, Ray};

use crate::error::SceneError;
use crate::hittable::{HitRecord, Hittable};
use crate::material::Scatter;
use crate::primitive::Primitive;

/// Owns its primitives in insertion order.
///
/// A primitive's index is its `material_id`: the hit record carries the index
/// and [`Scene::scatter`] uses it to find the material afterwards.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    bbox: Aabb,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            bbox: Aabb::EMPTY,
        }
    }

    /// Validate and append a primitive, returning its index.
    pub fn add(&mut self, primitive: impl Into<Primitive>) -> Result<usize, SceneError> {
        let primitive = primitive.into();
        primitive.validate()?;

        self.bbox = Aabb::surrounding(&self.bbox, &primitive.bounding_box());
        self.primitives.push(primitive);
        Ok(self.primitives.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn get(&self, id: usize) -> Option<&Primitive> {
        self.primitives.get(id)
    }

    /// Scatter `ray_in` off the material of the primitive recorded in `rec`.
    pub fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
        self.primitives[rec.material_id]
            .material()
            .scatter(ray_in, rec, rng)
    }
}

impl Hittable for Scene {
    /// Nearest hit over all primitives.
    ///
    /// A later primitive only wins with a strictly smaller `t`, so on ties the
    /// first inserted primitive is reported.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest: Option<HitRecord> = None;
        let mut closest_so_far = ray_t.max;

        for (id, primitive) in self.primitives.iter().enumerate() {
            let Some(mut rec) = primitive.hit(ray, Interval::new(ray_t.min, closest_so_far)) else {
                continue;
            };
            if closest.is_some() && rec.t >= closest_so_far {
                continue;
            }
            rec.material_id = id;
            closest_so_far = rec.t;
            closest = Some(rec);
        }

        closest
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
