// Vector utilities for Vec3
//
// Extends glam::Vec3 with the optics helpers the path tracer needs.
// Note: glam::Vec3 already provides dot(), cross(), length() and normalize().
// Its inherent reflect()/refract() would shadow trait methods of the same
// name, so the optics helpers here are named differently.

use crate::Vec3;

/// Components below this magnitude count as zero.
pub const NEAR_ZERO: f32 = 1e-8;

/// Extension trait for Vec3 to provide reflection and refraction
pub trait Vec3Ext {
    /// True if every component is within `NEAR_ZERO` of zero.
    fn near_zero(&self) -> bool;

    /// Mirror this vector about the normal `n`: `v - 2 (v . n) n`.
    fn reflect_about(&self, n: Vec3) -> Vec3;

    /// Refract this unit vector through a surface with unit normal `n`.
    ///
    /// `eta_ratio` is the ratio of the incident to the transmitted index of
    /// refraction. The caller is responsible for checking total internal
    /// reflection first; this never returns zero for a unit input.
    fn refract_through(&self, n: Vec3, eta_ratio: f32) -> Vec3;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn near_zero(&self) -> bool {
        self.x.abs() < NEAR_ZERO && self.y.abs() < NEAR_ZERO && self.z.abs() < NEAR_ZERO
    }

    #[inline]
    fn reflect_about(&self, n: Vec3) -> Vec3 {
        *self - 2.0 * self.dot(n) * n
    }

    #[inline]
    fn refract_through(&self, n: Vec3, eta_ratio: f32) -> Vec3 {
        let cos_theta = (-*self).dot(n).min(1.0);
        let r_out_perp = eta_ratio * (*self + cos_theta * n);
        let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
        r_out_perp + r_out_parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_unit(rng: &mut StdRng) -> Vec3 {
        loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let len_sq = v.length_squared();
            if len_sq > 1e-4 && len_sq <= 1.0 {
                return v / len_sq.sqrt();
            }
        }
    }

    #[test]
    fn test_near_zero() {
        assert!(Vec3::ZERO.near_zero());
        assert!(Vec3::splat(1e-9).near_zero());
        assert!(!Vec3::new(0.0, 0.0, 1e-3).near_zero());
        // Each axis is checked on its own
        assert!(!Vec3::new(0.0, 1.0, 0.0).near_zero());
    }

    #[test]
    fn test_reflect_off_floor() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(v.reflect_about(Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_preserves_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let v = random_unit(&mut rng);
            let n = random_unit(&mut rng);
            let r = v.reflect_about(n);
            assert!((r.length() - v.length()).abs() < 1e-5);
        }
    }

    #[test]
    fn test_refract_with_unit_ratio_does_not_bend() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..256 {
            let n = random_unit(&mut rng);
            let mut uv = random_unit(&mut rng);
            // Incoming rays travel against the normal
            if uv.dot(n) > 0.0 {
                uv = -uv;
            }
            let out = uv.refract_through(n, 1.0);
            assert!((out - uv).length() < 1e-3, "{:?} bent to {:?}", uv, out);
        }
    }

    #[test]
    fn test_refract_head_on_passes_straight_through() {
        let out = Vec3::new(0.0, 0.0, -1.0).refract_through(Vec3::Z, 1.0 / 1.5);
        assert!((out - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_refract_matches_perpendicular_parallel_split() {
        let mut rng = StdRng::seed_from_u64(13);
        let eta = 1.0 / 1.5;
        for _ in 0..256 {
            let n = random_unit(&mut rng);
            let mut uv = random_unit(&mut rng);
            if uv.dot(n) > 0.0 {
                uv = -uv;
            }

            let cos_theta = (-uv).dot(n).min(1.0);
            let perp = eta * (uv + cos_theta * n);
            let parallel = -(1.0 - perp.length_squared()).abs().sqrt() * n;

            let out = uv.refract_through(n, eta);
            assert_eq!(out, perp + parallel);
            assert!((out.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_refract_near_critical_angle_is_not_zero() {
        // Just inside the critical angle for glass to air, where rounding can
        // push the discriminant slightly negative
        let eta = 1.5;
        let sin_theta = 1.0 / eta - 1e-7;
        let uv = Vec3::new(sin_theta, -(1.0 - sin_theta * sin_theta).sqrt(), 0.0);

        let out = uv.refract_through(Vec3::Y, eta);
        assert!(!out.near_zero());
        assert!(out.y <= 0.0);
    }
}
