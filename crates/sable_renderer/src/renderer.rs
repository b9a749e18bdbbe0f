//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Iterative bounce loop bounded by a configurable depth
//! - Gamma correction
//! - Anti-aliasing via jittered multi-sampling

use std::time::Instant;

use rand::RngCore;
use rayon::prelude::*;
use sable_math::random::gen_f32;
use sable_math::{Interval, Ray};
use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::error::ConfigError;
use crate::hittable::Hittable;
use crate::output::{ImageBuffer, Rgb8};
use crate::{Camera, Color, Scene};

/// Closest hit distance accepted after a bounce; avoids shadow acne from the
/// previous surface re-hitting itself.
pub const T_MIN: f32 = 0.001;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub image_width: u32,
    /// Width over height; determines the image height
    pub aspect_ratio: f32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum number of bounces per path
    pub max_depth: u32,
    /// Base seed for reproducible renders; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Display gamma; 2.0 is a square root, 1.0 leaves values linear
    pub gamma: f32,
    /// Edge length of the square tiles handed to worker threads
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: None,
            gamma: 2.0,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Height derived from width and aspect ratio, at least one row.
    pub fn image_height(&self) -> u32 {
        ((self.image_width as f32 / self.aspect_ratio) as u32).max(1)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if !(self.aspect_ratio > 0.0 && self.aspect_ratio.is_finite()) {
            return Err(ConfigError::InvalidAspectRatio(self.aspect_ratio));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if !(self.gamma > 0.0 && self.gamma.is_finite()) {
            return Err(ConfigError::InvalidGamma(self.gamma));
        }
        if self.bucket_size == 0 {
            return Err(ConfigError::ZeroBucketSize);
        }
        let height = self.image_height();
        if ImageBuffer::byte_len(self.image_width, height).is_none() {
            return Err(ConfigError::ImageTooLarge(self.image_width, height));
        }
        Ok(())
    }
}

/// Compute the color seen by a ray.
///
/// Follows the scattering chain for at most `max_depth` bounces, multiplying
/// each bounce's attenuation into a running throughput. A path that runs out
/// of bounces or is absorbed contributes black; one that escapes picks up the
/// sky.
pub fn ray_color(ray: &Ray, scene: &Scene, max_depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut throughput = Color::ONE;

    for _ in 0..max_depth {
        let Some(rec) = scene.hit(&ray, Interval::forward(T_MIN)) else {
            return throughput * sky_gradient(&ray);
        };

        match scene.scatter(&ray, &rec, rng) {
            Some(scatter) => {
                throughput *= scatter.attenuation;
                ray = scatter.scattered;
            }
            None => return Color::ZERO,
        }
    }

    Color::ZERO
}

/// Vertical white-to-blue background gradient.
pub fn sky_gradient(ray: &Ray) -> Color {
    // A degenerate direction falls back to the horizon colour instead of NaN
    let unit_direction = ray.direction.normalize_or_zero();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Jittered viewport coordinates for pixel `(x, y)`.
///
/// Row 0 is the top of the image, so `v` counts up from the last row.
pub fn sample_uv(x: u32, y: u32, width: u32, height: u32, rng: &mut dyn RngCore) -> (f32, f32) {
    let u_span = (width.max(2) - 1) as f32;
    let v_span = (height.max(2) - 1) as f32;

    let u = (x as f32 + gen_f32(rng)) / u_span;
    let v = ((height - 1 - y) as f32 + gen_f32(rng)) / v_span;
    (u, v)
}

/// Average linear color of a pixel over `samples_per_pixel` paths.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let width = config.image_width;
    let height = config.image_height();
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let (u, v) = sample_uv(x, y, width, height, rng);
        let ray = camera.get_ray(u, v, rng);
        pixel_color += ray_color(&ray, scene, config.max_depth, rng);
    }

    pixel_color / config.samples_per_pixel as f32
}

/// Apply the display gamma to one linear channel.
#[inline]
pub fn linear_to_gamma(linear: f32, gamma: f32) -> f32 {
    if linear <= 0.0 {
        0.0
    } else if gamma == 2.0 {
        linear.sqrt()
    } else if gamma == 1.0 {
        linear
    } else {
        linear.powf(1.0 / gamma)
    }
}

/// Quantize a linear color to display bytes.
pub fn color_to_rgb8(color: Color, gamma: f32) -> Rgb8 {
    let display = Interval::new(0.0, 0.999);
    let byte = |c: f32| (256.0 * display.clamp(linear_to_gamma(c, gamma))) as u8;
    Rgb8::new(byte(color.x), byte(color.y), byte(color.z))
}

/// Render the entire scene to an image buffer.
///
/// Buckets are traced in parallel on the rayon pool. Each bucket owns its
/// pixel vector and generators; the finished pixels are copied into the
/// image here, on a single thread.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> Result<ImageBuffer, ConfigError> {
    config.validate()?;

    let width = config.image_width;
    let height = config.image_height();
    let buckets = generate_buckets(width, height, config.bucket_size);

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {} primitives, {} buckets",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth,
        scene.len(),
        buckets.len()
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, camera, scene, config))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        image.write_bucket(result);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
