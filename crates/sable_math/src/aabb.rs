use crate::{Interval, Ray, WorldPoint};

/// Thickness that flat boxes are padded to.
const MIN_EXTENT: f32 = 0.0001;

/// World-space axis-aligned bounding box.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
/// It is the cheap reject test a bounding volume hierarchy would be built on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    pub const UNIVERSE: Aabb = Aabb {
        x: Interval::UNIVERSE,
        y: Interval::UNIVERSE,
        z: Interval::UNIVERSE,
    };

    /// Create an AABB from two opposite corners, in any order.
    pub fn from_points(a: WorldPoint, b: WorldPoint) -> Self {
        let lo = a.min(b);
        let hi = a.max(b);

        let mut aabb = Self {
            x: Interval::new(lo.x(), hi.x()),
            y: Interval::new(lo.y(), hi.y()),
            z: Interval::new(lo.z(), hi.z()),
        };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    pub fn min(&self) -> WorldPoint {
        WorldPoint::new(self.x.min, self.y.min, self.z.min)
    }

    pub fn max(&self) -> WorldPoint {
        WorldPoint::new(self.x.max, self.y.max, self.z.max)
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Slab test that returns the parameter range spent inside the box.
    ///
    /// `ray_t` is narrowed axis by axis and the test stops at the first axis
    /// that empties it. A zero direction component divides to `±inf`, which
    /// the comparisons below still order correctly.
    pub fn hit_interval(&self, r: &Ray, mut ray_t: Interval) -> Option<Interval> {
        let origin = r.origin.coords();

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let inv_d = 1.0 / r.direction[axis];

            let mut t0 = (slab.min - origin[axis]) * inv_d;
            let mut t1 = (slab.max - origin[axis]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            // f32::max/min drop a NaN operand, so an origin sitting exactly on a
            // slab plane of a parallel ray leaves the range unchanged.
            ray_t.min = t0.max(ray_t.min);
            ray_t.max = t1.min(ray_t.max);
            if ray_t.is_empty() {
                return None;
            }
        }

        Some(ray_t)
    }

    /// Test if a ray intersects this AABB within the given interval.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> bool {
        self.hit_interval(r, ray_t).is_some()
    }

    /// Returns the index (0=X, 1=Y, 2=Z) of the axis with the longest extent.
    pub fn longest_axis(&self) -> usize {
        let x_size = self.x.size();
        let y_size = self.y.size();
        let z_size = self.z.size();

        if x_size > y_size && x_size > z_size {
            0
        } else if y_size > z_size {
            1
        } else {
            2
        }
    }

    pub fn centroid(&self) -> WorldPoint {
        WorldPoint::new(
            (self.x.min + self.x.max) * 0.5,
            (self.y.min + self.y.max) * 0.5,
            (self.z.min + self.z.max) * 0.5,
        )
    }

    fn pad_to_minimums(&mut self) {
        if self.x.size() < MIN_EXTENT {
            self.x = self.x.expand(MIN_EXTENT);
        }
        if self.y.size() < MIN_EXTENT {
            self.y = self.y.expand(MIN_EXTENT);
        }
        if self.z.size() < MIN_EXTENT {
            self.z = self.z.expand(MIN_EXTENT);
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec3;

    fn unit_box() -> Aabb {
        Aabb::from_points(WorldPoint::new(-1.0, -1.0, -1.0), WorldPoint::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_from_points_orders_corners() {
        let aabb = Aabb::from_points(
            WorldPoint::new(3.0, -1.0, 2.0),
            WorldPoint::new(0.0, 1.0, -2.0),
        );

        assert_eq!(aabb.min(), WorldPoint::new(0.0, -1.0, -2.0));
        assert_eq!(aabb.max(), WorldPoint::new(3.0, 1.0, 2.0));
    }

    #[test]
    fn test_ray_through_interior() {
        let ray = Ray::new_static(WorldPoint::new(0.0, 0.0, -5.0), Vec3::Z);
        let inside = unit_box()
            .hit_interval(&ray, Interval::new(0.0, 100.0))
            .expect("ray along +z must enter the box");

        assert!((inside.min - 4.0).abs() < 1e-5);
        assert!((inside.max - 6.0).abs() < 1e-5);
        assert!(inside.min < 5.0 && 5.0 < inside.max);
    }

    #[test]
    fn test_parallel_ray_outside_misses() {
        // Zero x and y direction: slab bounds become infinite, not NaN
        let ray = Ray::new_static(WorldPoint::new(5.0, 0.0, -5.0), Vec3::Z);
        assert!(!unit_box().hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let ray = Ray::new_static(WorldPoint::new(0.0, 0.0, -5.0), -Vec3::Z);
        assert!(!unit_box().hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_range_limit_rejects() {
        let ray = Ray::new_static(WorldPoint::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(!unit_box().hit(&ray, Interval::new(0.0, 3.5)));
    }

    #[test]
    fn test_origin_on_slab_plane() {
        let ray = Ray::new_static(WorldPoint::new(1.0, 0.0, -5.0), Vec3::Z);
        assert!(unit_box().hit(&ray, Interval::new(0.0, 100.0)));
    }

    #[test]
    fn test_flat_box_is_padded() {
        let flat = Aabb::from_points(
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(1.0, 0.0, 1.0),
        );
        assert!(flat.y.size() > 0.0);

        let ray = Ray::new_static(WorldPoint::new(0.5, 1.0, 0.5), -Vec3::Y);
        assert!(flat.hit(&ray, Interval::new(0.0, 10.0)));
    }

    #[test]
    fn test_surrounding_and_centroid() {
        let a = Aabb::from_points(WorldPoint::ORIGIN, WorldPoint::new(1.0, 1.0, 1.0));
        let b = Aabb::from_points(WorldPoint::new(2.0, 2.0, 2.0), WorldPoint::new(4.0, 3.0, 3.0));
        let both = Aabb::surrounding(&a, &b);

        assert_eq!(both.min(), WorldPoint::ORIGIN);
        assert_eq!(both.max(), WorldPoint::new(4.0, 3.0, 3.0));
        assert_eq!(both.centroid(), WorldPoint::new(2.0, 1.5, 1.5));
        assert_eq!(both.longest_axis(), 0);
        assert_eq!(Aabb::surrounding(&Aabb::EMPTY, &a), a);
    }
}
