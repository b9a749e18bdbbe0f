//! Simple path tracer example.
//!
//! Builds a small scene by hand with one sphere of each material and saves
//! it as a PPM.

use std::error::Error;

use sable_renderer::{
    render, CameraSettings, Color, Material, RenderConfig, Scene, Sphere, Vec3, WorldPoint,
};

fn main() -> Result<(), Box<dyn Error>> {
    let mut scene = Scene::new();
    scene.add(Sphere::new(
        WorldPoint::new(0.0, -100.5, -1.0),
        100.0,
        Material::lambertian(Color::new(0.8, 0.8, 0.0)),
    ))?;
    scene.add(Sphere::new(
        WorldPoint::new(0.0, 0.0, -1.0),
        0.5,
        Material::lambertian(Color::new(0.1, 0.2, 0.5)),
    ))?;
    scene.add(Sphere::new(WorldPoint::new(-1.0, 0.0, -1.0), 0.5, Material::dielectric(1.5)))?;
    scene.add(Sphere::new(
        WorldPoint::new(1.0, 0.0, -1.0),
        0.5,
        Material::metal(Color::new(0.8, 0.6, 0.2), 0.1),
    ))?;

    let config = RenderConfig {
        image_width: 400,
        samples_per_pixel: 50,
        max_depth: 10,
        seed: Some(1),
        ..RenderConfig::default()
    };

    let look_from = WorldPoint::new(-2.0, 2.0, 1.0);
    let look_at = WorldPoint::new(0.0, 0.0, -1.0);
    let camera = CameraSettings::new()
        .with_position(look_from, look_at, Vec3::Y)
        .with_lens(30.0, 0.1, look_from.distance(look_at))
        .with_aspect_ratio(config.aspect_ratio)
        .build()?;

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config)?;
    println!("Rendered {}x{} in {:?}", image.width, image.height, start.elapsed());

    image.save("output.ppm")?;
    println!("Saved to output.ppm");
    Ok(())
}
