use crate::{CameraPoint, Vec3, WorldPoint};

/// Orthonormal camera basis placed in world space.
///
/// `w` points away from the view direction, `u` to the right and `v` up,
/// so camera space is right-handed with the eye looking down `-z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub origin: WorldPoint,
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
}

impl CameraFrame {
    /// Build the basis for an eye at `look_from` looking at `look_at`.
    ///
    /// `vup` only needs to be non-parallel to the view direction.
    pub fn look_at(look_from: WorldPoint, look_at: WorldPoint, vup: Vec3) -> Self {
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            origin: look_from,
            u,
            v,
            w,
        }
    }

    /// Map a camera-space point into world space.
    #[inline]
    pub fn to_world(&self, p: CameraPoint) -> WorldPoint {
        self.origin + self.vector_to_world(p.coords())
    }

    /// Map a world-space point into camera space.
    #[inline]
    pub fn to_camera(&self, p: WorldPoint) -> CameraPoint {
        let d = p - self.origin;
        CameraPoint::new(d.dot(self.u), d.dot(self.v), d.dot(self.w))
    }

    /// Rotate a camera-space direction into world space.
    #[inline]
    pub fn vector_to_world(&self, d: Vec3) -> Vec3 {
        d.x * self.u + d.y * self.v + d.z * self.w
    }
}
