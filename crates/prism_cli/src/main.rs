use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use prism_core::{demo::demo_scene, Scene, SceneDescription, Skybox};
use prism_renderer::{render, save_ppm, Color, RenderConfig};

/// Panorama used by the built-in demo scene when nothing else is given.
const DEFAULT_SKYBOX: &str = "envmap.jpg";

/// Render a scene of spheres and planes with recursive ray tracing.
#[derive(Parser, Debug)]
#[command(name = "prism", version)]
struct Args {
    /// JSON scene file; the built-in demo scene is used when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Equirectangular background image (overrides the scene's skybox)
    #[arg(long)]
    skybox: Option<PathBuf>,

    /// Uniform background color as "r,g,b" in 0-1, used instead of an image
    #[arg(long, value_parser = parse_color, conflicts_with = "skybox")]
    background: Option<Color>,

    /// Output PPM file
    #[arg(short, long, default_value = "out.ppm")]
    output: PathBuf,

    #[arg(long, default_value_t = 1024)]
    width: u32,

    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Sub-samples per pixel along each axis
    #[arg(long, default_value_t = 1)]
    subdivision: u32,

    #[arg(long, default_value_t = 4)]
    max_bounces: u32,

    /// Vertical field of view in radians
    #[arg(long, default_value_t = 1.0)]
    fov: f32,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_resolution(self.width, self.height)
            .with_subdivision(self.subdivision)
            .with_max_bounces(self.max_bounces)
            .with_fov(self.fov)
            .with_threads(self.threads)
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<f32>().map_err(|e| format!("invalid channel '{}': {}", c, e)))
        .collect::<Result<Vec<_>, _>>()?;

    match channels.as_slice() {
        [r, g, b] => Ok(Color::new(*r, *g, *b)),
        _ => Err(format!("expected 3 comma-separated channels, got {}", channels.len())),
    }
}

fn load_skybox(path: &Path) -> Result<Skybox> {
    Skybox::load(path).with_context(|| {
        format!(
            "Cannot render without a background image ({})",
            path.display()
        )
    })
}

/// Pick the environment: explicit flags first, then the scene's own skybox,
/// then the demo default.
fn resolve_skybox(args: &Args, scene_skybox: Option<&Path>) -> Result<Skybox> {
    if let Some(path) = &args.skybox {
        return load_skybox(path);
    }
    if let Some(color) = args.background {
        return Ok(Skybox::uniform(color));
    }
    if let Some(path) = scene_skybox {
        return load_skybox(path);
    }
    if args.scene.is_some() {
        bail!("Scene names no skybox; pass --skybox or --background");
    }
    load_skybox(Path::new(DEFAULT_SKYBOX))
}

fn build_scene(args: &Args) -> Result<Scene> {
    match &args.scene {
        Some(path) => {
            let desc = SceneDescription::from_file(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?;
            let skybox = resolve_skybox(args, desc.skybox.as_deref())?;
            Ok(desc.build(skybox)?)
        }
        None => Ok(demo_scene(resolve_skybox(args, None)?)),
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.render_config();
    config.validate()?;

    let scene = build_scene(args)?;
    log::info!(
        "Scene ready: {} primitives, {} lights",
        scene.primitive_count(),
        scene.light_count()
    );

    let framebuffer = render(&scene, &config)?;
    save_ppm(&args.output, &framebuffer)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    if let Err(err) = run(&args) {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("0.2, 0.4,1").unwrap(), Color::new(0.2, 0.4, 1.0));
        assert!(parse_color("0.2,0.4").is_err());
        assert!(parse_color("a,b,c").is_err());
    }

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from([
            "prism",
            "--width",
            "320",
            "--height",
            "240",
            "--subdivision",
            "2",
            "--max-bounces",
            "6",
            "--threads",
            "3",
        ]);
        let config = args.render_config();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 240);
        assert_eq!(config.samples_per_pixel(), 4);
        assert_eq!(config.max_bounces, 6);
        assert_eq!(config.threads, Some(3));
        assert_eq!(args.output, PathBuf::from("out.ppm"));
    }

    #[test]
    fn test_background_flag_builds_demo_scene() {
        let args = Args::parse_from(["prism", "--background", "0.1,0.2,0.3"]);
        let scene = build_scene(&args).unwrap();

        assert_eq!(scene.primitive_count(), 6);
        let sky = scene.skybox.sample(prism_renderer::Vec3::Y);
        assert!((sky - Color::new(0.1, 0.2, 0.3)).length() < 1e-2);
    }

    #[test]
    fn test_missing_skybox_is_fatal() {
        let args = Args::parse_from(["prism", "--skybox", "no/such/panorama.jpg"]);
        assert!(build_scene(&args).is_err());
    }

    #[test]
    fn test_background_conflicts_with_skybox() {
        let result = Args::try_parse_from(["prism", "--skybox", "a.jpg", "--background", "0,0,0"]);
        assert!(result.is_err());
    }
}
