//! Built-in scenes and their camera presets.

use rand::RngCore;
use sable_math::random::{gen_f32, gen_range_f32, random_vec3};
use sable_math::{Vec3, WorldPoint};

use crate::error::SceneError;
use crate::{CameraSettings, Color, Material, MovingSphere, Scene, Sphere};

/// Which built-in scene to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SceneKind {
    /// Two diffuse spheres, one resting on a large ground sphere
    #[default]
    Demo,
    /// Three feature spheres surrounded by a random grid of small ones
    Showcase,
}

impl SceneKind {
    /// Build the scene.
    ///
    /// `rng` only feeds the procedural part of the showcase; the demo draws
    /// nothing from it.
    pub fn build(self, rng: &mut dyn RngCore, motion_blur: bool) -> Result<Scene, SceneError> {
        match self {
            SceneKind::Demo => demo_scene(),
            SceneKind::Showcase => showcase_scene(rng, motion_blur),
        }
    }

    /// Camera framing this scene at the given aspect ratio.
    pub fn camera_settings(self, aspect_ratio: f32, motion_blur: bool) -> CameraSettings {
        let settings = match self {
            SceneKind::Demo => CameraSettings::new(),
            SceneKind::Showcase => CameraSettings::new()
                .with_position(WorldPoint::new(13.0, 2.0, 3.0), WorldPoint::ORIGIN, Vec3::Y)
                .with_lens(20.0, 0.1, 10.0),
        };
        let settings = settings.with_aspect_ratio(aspect_ratio);

        if motion_blur {
            settings.with_shutter(0.0, 1.0)
        } else {
            settings
        }
    }
}

pub fn demo_scene() -> Result<Scene, SceneError> {
    let mut scene = Scene::new();
    scene.add(Sphere::new(
        WorldPoint::new(0.0, 0.0, -1.0),
        0.5,
        Material::lambertian(Color::new(0.7, 0.3, 0.3)),
    ))?;
    scene.add(Sphere::new(
        WorldPoint::new(0.0, -100.5, -1.0),
        100.0,
        Material::lambertian(Color::new(0.8, 0.8, 0.0)),
    ))?;
    Ok(scene)
}

const SMALL_RADIUS: f32 = 0.2;
const FEATURE_RADIUS: f32 = 1.0;

/// Ground, three feature spheres, and a grid of small random spheres.
///
/// With `motion_blur`, diffuse grid spheres drift upward over the shutter
/// interval `[0, 1]`.
pub fn showcase_scene(rng: &mut dyn RngCore, motion_blur: bool) -> Result<Scene, SceneError> {
    let mut scene = Scene::new();

    scene.add(Sphere::new(
        WorldPoint::new(0.0, -1000.0, 0.0),
        1000.0,
        Material::lambertian(Color::splat(0.5)),
    ))?;

    let features = [
        (WorldPoint::new(0.0, 1.0, 0.0), Material::dielectric(1.5)),
        (
            WorldPoint::new(-4.0, 1.0, 0.0),
            Material::lambertian(Color::new(0.4, 0.2, 0.1)),
        ),
        (
            WorldPoint::new(4.0, 1.0, 0.0),
            Material::metal(Color::new(0.7, 0.6, 0.5), 0.0),
        ),
    ];
    for (center, material) in features {
        scene.add(Sphere::new(center, FEATURE_RADIUS, material))?;
    }

    let mut spawned = 0usize;
    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = WorldPoint::new(
                a as f32 + 0.9 * gen_f32(rng),
                SMALL_RADIUS,
                b as f32 + 0.9 * gen_f32(rng),
            );

            let overlaps = features
                .iter()
                .any(|(c, _)| center.distance(*c) <= FEATURE_RADIUS + SMALL_RADIUS);
            if overlaps {
                continue;
            }

            if choose_mat < 0.8 {
                let albedo = random_vec3(rng, 0.0, 1.0) * random_vec3(rng, 0.0, 1.0);
                let material = Material::lambertian(albedo);
                if motion_blur {
                    let rise = gen_range_f32(rng, 0.0, 0.5);
                    scene.add(MovingSphere::new(
                        center,
                        center + Vec3::new(0.0, rise, 0.0),
                        0.0,
                        1.0,
                        SMALL_RADIUS,
                        material,
                    ))?;
                } else {
                    scene.add(Sphere::new(center, SMALL_RADIUS, material))?;
                }
            } else if choose_mat < 0.95 {
                let albedo = random_vec3(rng, 0.5, 1.0);
                let fuzz = gen_range_f32(rng, 0.0, 0.5);
                scene.add(Sphere::new(center, SMALL_RADIUS, Material::metal(albedo, fuzz)))?;
            } else {
                scene.add(Sphere::new(center, SMALL_RADIUS, Material::dielectric(1.5)))?;
            }
            spawned += 1;
        }
    }

    log::debug!("Showcase scene: {} grid spheres", spawned);
    Ok(scene)
}
