//! Prism Core - Scene data model for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere` and finite axis-aligned `Plane`, dispatched
//!   through the closed `Primitive` enum
//! - **Shading inputs**: `Material`, point `Light`, panoramic `Skybox`
//! - **Scenes**: the owning `Scene`, JSON `SceneDescription`s and the
//!   built-in demo scene
//!
//! # Example
//!
//! ```ignore
//! use prism_core::{load_scene, Skybox, demo::demo_scene};
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitive_count(),
//!     scene.light_count());
//!
//! let demo = demo_scene(Skybox::load("envmap.jpg")?);
//! ```

mod log_once;

pub mod demo;
pub mod description;
mod light;
mod material;
mod plane;
mod primitive;
pub mod scene;
mod skybox;
mod sphere;

// Re-export commonly used types
pub use description::{load_scene, SceneDescription, SceneError, SceneResult};
pub use light::Light;
pub use material::Material;
pub use plane::{Axis, Plane};
pub use primitive::{Primitive, RayHit, EPSILON};
pub use scene::Scene;
pub use skybox::{Skybox, SkyboxError, SkyboxResult};
pub use sphere::Sphere;
