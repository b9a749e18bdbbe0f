//! Sable math kernel.
//!
//! Vectors are `glam::Vec3`. Positions are frame-tagged [`Point3`] values so
//! world-space and camera-space coordinates cannot be mixed by accident.

// Re-export glam for convenience
pub use glam::*;

mod aabb;
mod frame;
mod interval;
mod point;
pub mod random;
mod ray;
mod vector;

pub use aabb::Aabb;
pub use frame::CameraFrame;
pub use interval::Interval;
pub use point::{CameraPoint, CameraSpace, Frame, Point3, WorldPoint, WorldSpace};
pub use ray::Ray;
pub use vector::{Vec3Ext, NEAR_ZERO};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length_squared(), 25.0);
    }

    #[test]
    fn test_normalize_gives_unit_length() {
        let v = Vec3::new(1.0, -2.0, 0.5).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }
}
