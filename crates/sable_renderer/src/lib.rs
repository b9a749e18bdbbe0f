//! Sable renderer - CPU path tracing
//!
//! A Monte Carlo path tracer over a flat list of analytic primitives.
//! Buckets of pixels are traced in parallel, each pixel with its own random
//! stream, and the result is quantized to an 8-bit RGB image.

mod bucket;
mod camera;
mod error;
mod hittable;
mod material;
mod output;
mod primitive;
mod renderer;
mod sampling;
mod scene;
mod scenes;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, CameraSettings};
pub use error::{ConfigError, OutputError, SceneError};
pub use hittable::{HitRecord, Hittable};
pub use material::{Color, Material, Scatter};
pub use output::{ImageBuffer, Rgb8};
pub use primitive::Primitive;
pub use renderer::{
    color_to_rgb8, linear_to_gamma, ray_color, render, render_pixel, sample_uv, sky_gradient,
    RenderConfig, T_MIN,
};
pub use sampling::{pixel_seed, PixelRngSource};
pub use scene::Scene;
pub use scenes::{demo_scene, showcase_scene, SceneKind};
pub use sphere::{MovingSphere, Sphere};

/// Re-export common math types from sable_math
pub use sable_math::{Aabb, Interval, Ray, Vec3, WorldPoint};
