use crate::{Vec3, WorldPoint};

/// A world-space ray with origin, direction, and time.
///
/// `direction` is not required to be unit length. `time` is the shutter
/// instant the ray samples, used by moving primitives for motion blur.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: WorldPoint,
    pub direction: Vec3,
    pub time: f32,
}

impl Ray {
    #[inline]
    pub fn new(origin: WorldPoint, direction: Vec3, time: f32) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    /// Ray sampled at time 0 (no motion blur).
    #[inline]
    pub fn new_static(origin: WorldPoint, direction: Vec3) -> Self {
        Self::new(origin, direction, 0.0)
    }

    /// Point along the ray at parameter t: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f32) -> WorldPoint {
        self.origin + t * self.direction
    }
}
