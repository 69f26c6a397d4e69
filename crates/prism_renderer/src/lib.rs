//! Prism Renderer - CPU Whitted-style ray tracing
//!
//! Traces one or more primary rays per pixel through a [`prism_core::Scene`]
//! with shadows, Phong highlights, mirror reflection and refraction, then
//! tone maps the result to 8-bit RGB.

mod config;
mod framebuffer;
pub mod ppm;
pub mod query;
mod renderer;
mod shading;

pub use config::RenderConfig;
pub use framebuffer::{color_to_rgb, tone_map, Framebuffer};
pub use ppm::{save_ppm, write_ppm};
pub use query::{closest_intersection, in_shadow};
pub use renderer::{primary_ray, render, render_pixel, RenderError, RenderResult};
pub use shading::shade;

/// Re-export Vec3 and common math types from prism_math
pub use prism_math::{Color, Ray, Vec3};
