use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sable_renderer::{render, RenderConfig, SceneKind};

/// Render one of the built-in scenes with a CPU path tracer.
#[derive(Debug, Parser)]
#[command(name = "sable", version, about)]
struct Args {
    /// Output image; `.ppm` is written as text PPM, other extensions by format
    output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Width over height
    #[arg(long)]
    aspect_ratio: Option<f32>,

    /// Samples per pixel
    #[arg(long)]
    spp: Option<u32>,

    /// Maximum bounces per path
    #[arg(long)]
    max_depth: Option<u32>,

    #[arg(long, value_enum, default_value_t = SceneArg::Demo)]
    scene: SceneArg,

    /// Fixed seed for a reproducible image
    #[arg(long)]
    seed: Option<u64>,

    /// Let diffuse spheres move while the shutter is open
    #[arg(long)]
    motion_blur: bool,

    /// Display gamma (2.0 = square root, 1.0 = linear)
    #[arg(long)]
    gamma: Option<f32>,

    /// JSON render config; flags override its fields
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SceneArg {
    Demo,
    Showcase,
}

impl From<SceneArg> for SceneKind {
    fn from(arg: SceneArg) -> Self {
        match arg {
            SceneArg::Demo => SceneKind::Demo,
            SceneArg::Showcase => SceneKind::Showcase,
        }
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// Config file (or defaults) with command-line flags applied on top.
fn render_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RenderConfig::default(),
    };

    if let Some(width) = args.width {
        config.image_width = width;
    }
    if let Some(aspect_ratio) = args.aspect_ratio {
        config.aspect_ratio = aspect_ratio;
    }
    if let Some(spp) = args.spp {
        config.samples_per_pixel = spp;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(gamma) = args.gamma {
        config.gamma = gamma;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate().context("invalid render settings")?;
    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = render_config(args)?;
    let kind = SceneKind::from(args.scene);

    let start = Instant::now();
    let mut scene_rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = kind
        .build(&mut scene_rng, args.motion_blur)
        .context("failed to build scene")?;
    let camera = kind
        .camera_settings(config.aspect_ratio, args.motion_blur)
        .build()
        .context("invalid camera settings")?;
    log::info!("Built {:?} scene with {} primitives in {:?}", kind, scene.len(), start.elapsed());

    let image = render(&camera, &scene, &config)?;
    image
        .save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    log::info!("Total time {:?}", start.elapsed());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sable").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["out.png"]);
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.scene, SceneArg::Demo);
        assert!(!args.motion_blur);
        assert_eq!(args.verbose, 0);

        let config = render_config(&args).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = parse(&[
            "out.ppm",
            "--width",
            "320",
            "--aspect-ratio",
            "1.5",
            "--spp",
            "8",
            "--max-depth",
            "4",
            "--scene",
            "showcase",
            "--seed",
            "42",
            "--motion-blur",
            "--gamma",
            "1.0",
            "-vv",
        ]);

        assert_eq!(args.scene, SceneArg::Showcase);
        assert!(args.motion_blur);
        assert_eq!(log_level(args.verbose), LevelFilter::Debug);

        let config = render_config(&args).unwrap();
        assert_eq!(config.image_width, 320);
        assert_eq!(config.aspect_ratio, 1.5);
        assert_eq!(config.samples_per_pixel, 8);
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.gamma, 1.0);
    }

    #[test]
    fn test_output_is_required() {
        assert!(Args::try_parse_from(["sable"]).is_err());
        assert!(Args::try_parse_from(["sable", "out.png", "--scene", "cornell"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(3), LevelFilter::Trace);
        assert_eq!(log_level(9), LevelFilter::Trace);
    }

    #[test]
    fn test_invalid_flags_are_rejected() {
        let args = parse(&["out.png", "--spp", "0"]);
        let err = render_config(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("samples per pixel"));
    }

    #[test]
    fn test_config_file_with_overrides() {
        let path =
            std::env::temp_dir().join(format!("sable_cli_config_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "image_width": 64, "samples_per_pixel": 3, "seed": 5 }"#,
        )
        .unwrap();

        let config_arg = path.to_str().unwrap();
        let args = parse(&["out.png", "--config", config_arg, "--spp", "7"]);
        let config = render_config(&args).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.image_width, 64);
        assert_eq!(config.samples_per_pixel, 7);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.max_depth, 50);
    }

    #[test]
    fn test_missing_config_file() {
        let args = parse(&["out.png", "--config", "/nonexistent/sable.json"]);
        let err = render_config(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_scene_arg_maps_to_kind() {
        assert_eq!(SceneKind::from(SceneArg::Demo), SceneKind::Demo);
        assert_eq!(SceneKind::from(SceneArg::Showcase), SceneKind::Showcase);
    }

    #[test]
    fn test_run_writes_small_image() {
        let path = std::env::temp_dir().join(format!("sable_cli_run_{}.ppm", std::process::id()));
        let out = path.to_str().unwrap();
        let args = parse(&[out, "--width", "8", "--spp", "2", "--max-depth", "3", "--seed", "1"]);

        run(&args).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(text.starts_with("P3\n8 4\n255\n"));
        assert_eq!(text.lines().count(), 3 + 8 * 4);
    }
}
