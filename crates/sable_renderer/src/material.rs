//! Surface scattering models.
//!
//! Materials are a closed set matched on directly, so a scatter call is a
//! branch rather than a virtual dispatch.

use rand::RngCore;
use sable_math::random::{gen_f32, random_in_unit_sphere, random_unit_vector};
use sable_math::{Ray, Vec3, Vec3Ext};

use crate::error::SceneError;
use crate::hittable::HitRecord;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Outcome of a scattering event that did not absorb the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Per-channel fraction of the incoming light carried by `scattered`
    pub attenuation: Color,
    /// Outgoing ray, starting at the hit point
    pub scattered: Ray,
}

/// Surface material. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Ideal diffuse surface
    Lambertian { albedo: Color },
    /// Mirror with roughness `fuzz` in `[0, 1]`
    Metal { albedo: Color, fuzz: f32 },
    /// Clear refractive surface (glass, water)
    Dielectric { index_of_refraction: f32 },
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    /// - `albedo`: The color of the metal
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        Material::Metal { albedo, fuzz }
    }

    /// `ior`: index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn dielectric(ior: f32) -> Self {
        Material::Dielectric {
            index_of_refraction: ior,
        }
    }

    /// Check the parameters are inside their physical domain.
    pub fn validate(&self) -> Result<(), SceneError> {
        match *self {
            Material::Lambertian { albedo } => validate_albedo(albedo),
            Material::Metal { albedo, fuzz } => {
                validate_albedo(albedo)?;
                if !(0.0..=1.0).contains(&fuzz) {
                    return Err(SceneError::InvalidFuzz(fuzz));
                }
                Ok(())
            }
            Material::Dielectric {
                index_of_refraction,
            } => {
                if !(index_of_refraction > 0.0 && index_of_refraction.is_finite()) {
                    return Err(SceneError::InvalidIor(index_of_refraction));
                }
                Ok(())
            }
        }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` when the surface absorbs the ray.
    pub fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<Scatter> {
        match *self {
            Material::Lambertian { albedo } => {
                let mut direction = rec.normal + random_unit_vector(rng);

                // Catch degenerate scatter direction
                if direction.near_zero() {
                    direction = rec.normal;
                }

                Some(Scatter {
                    attenuation: albedo,
                    scattered: Ray::new(rec.point, direction, ray_in.time),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = ray_in.direction.normalize().reflect_about(rec.normal);
                let direction = reflected + fuzz * random_in_unit_sphere(rng);

                // Fuzz pushed the ray below the surface
                if direction.dot(rec.normal) <= 0.0 {
                    return None;
                }

                Some(Scatter {
                    attenuation: albedo,
                    scattered: Ray::new(rec.point, direction, ray_in.time),
                })
            }
            Material::Dielectric {
                index_of_refraction,
            } => {
                let refraction_ratio = if rec.front_face {
                    1.0 / index_of_refraction
                } else {
                    index_of_refraction
                };

                let unit_direction = ray_in.direction.normalize();
                let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                let cannot_refract = refraction_ratio * sin_theta > 1.0;
                let direction = if cannot_refract
                    || reflectance(cos_theta, refraction_ratio) > gen_f32(rng)
                {
                    unit_direction.reflect_about(rec.normal)
                } else {
                    unit_direction.refract_through(rec.normal, refraction_ratio)
                };

                Some(Scatter {
                    attenuation: Color::ONE,
                    scattered: Ray::new(rec.point, direction, ray_in.time),
                })
            }
        }
    }
}

fn validate_albedo(albedo: Color) -> Result<(), SceneError> {
    if albedo.to_array().iter().all(|c| (0.0..=1.0).contains(c)) {
        Ok(())
    } else {
        Err(SceneError::InvalidAlbedo(albedo.x, albedo.y, albedo.z))
    }
}

/// Schlick's approximation for reflectance
fn reflectance(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
