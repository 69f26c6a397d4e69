//! Frame assembly.
//!
//! Generates a primary ray for every sub-sample of every pixel, shades it,
//! and accumulates the weighted result into the framebuffer. Rows are
//! independent and rendered in parallel with rayon.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use prism_core::Scene;
use prism_math::{Color, Ray, Vec3};
use rayon::prelude::*;
use thiserror::Error;

use crate::{shade, Framebuffer, RenderConfig};

/// Errors that can occur while setting up or finishing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Primary ray through image-plane position (`x`, `y`), in pixels.
///
/// The camera sits at `camera` and looks down -Z with +Y up; `x` grows to
/// the right and `y` grows downward.
pub fn primary_ray(config: &RenderConfig, camera: Vec3, x: f32, y: f32) -> Ray {
    let width = config.width as f32;
    let height = config.height as f32;
    let half_fov = (config.fov / 2.0).tan();

    let dir_x = (2.0 * (x + 0.5) / width - 1.0) * half_fov * config.aspect_ratio();
    let dir_y = -(2.0 * (y + 0.5) / height - 1.0) * half_fov;

    Ray::new(camera, Vec3::new(dir_x, dir_y, -1.0).normalize())
}

/// Render a single pixel, averaging its S x S sub-samples.
pub fn render_pixel(scene: &Scene, config: &RenderConfig, px: u32, py: u32) -> Color {
    let subdivision = config.subdivision;
    let weight = config.sample_weight();
    let mut pixel_color = Color::ZERO;

    for sy in 0..subdivision {
        for sx in 0..subdivision {
            let x = px as f32 + sx as f32 / subdivision as f32;
            let y = py as f32 + sy as f32 / subdivision as f32;

            let ray = primary_ray(config, scene.camera, x, y);
            pixel_color += shade(&ray, scene, config, 0) * weight;
        }
    }

    pixel_color
}

/// Render the entire scene to a framebuffer.
///
/// Uses a dedicated thread pool when `config.threads` is set, otherwise the
/// global rayon pool.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<Framebuffer> {
    config.validate()?;

    log::info!(
        "Rendering {}x{} @ {} spp, {} bounces ({} primitives, {} lights)",
        config.width,
        config.height,
        config.samples_per_pixel(),
        config.max_bounces,
        scene.primitive_count(),
        scene.light_count()
    );
    log::debug!("{:?}", config);

    let start = Instant::now();
    let framebuffer = match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            log::debug!("Using dedicated pool with {} threads", pool.current_num_threads());
            pool.install(|| render_rows(scene, config))
        }
        None => render_rows(scene, config),
    };
    log::info!("Rendered in {:?}", start.elapsed());

    Ok(framebuffer)
}

fn render_rows(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let mut framebuffer = Framebuffer::new(config.width, config.height);
    let height = config.height as usize;
    let report_every = (height / 10).max(1);
    let rows_done = AtomicUsize::new(0);

    framebuffer
        .pixels
        .par_chunks_mut(config.width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(scene, config, x as u32, y as u32);
            }

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            if done % report_every == 0 && done != height {
                log::info!("{}%", done * 100 / height);
            }
        });

    framebuffer
}
