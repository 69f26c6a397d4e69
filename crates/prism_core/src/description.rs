//! JSON scene descriptions.
//!
//! A description names materials once and references them from objects:
//!
//! ```json
//! {
//!   "camera": [0, 0, 0],
//!   "skybox": "envmap.jpg",
//!   "materials": {
//!     "ivory": { "diffuse_color": [0.4, 0.4, 0.3], "diffuse": 0.6, "specular": 0.3,
//!                "shininess": 50, "reflectivity": 0.1 }
//!   },
//!   "objects": [
//!     { "type": "sphere", "center": [-5, -1.5, -20], "radius": 2, "material": "ivory" },
//!     { "type": "plane", "position": [0, -3.5, -20], "axis": 1, "size": [20, 1, 20] }
//!   ],
//!   "lights": [ { "position": [-20, 20, 20], "intensity": 1.5 } ]
//! }
//! ```
//!
//! Omitted material fields fall back to [`Material::default`]; objects
//! without a material use the default material.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use prism_math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::{Axis, Light, Material, Plane, Primitive, Scene, Skybox, SkyboxError, Sphere};

/// Errors that can occur while reading or validating a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Scene parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Invalid plane axis {0} (expected 0, 1 or 2)")]
    InvalidAxis(usize),

    #[error("Sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("Light intensity must be non-negative, got {0}")]
    InvalidIntensity(f32),

    #[error("Scene does not name a skybox")]
    MissingSkybox,

    #[error(transparent)]
    Skybox(#[from] SkyboxError),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Material parameters as written in a scene file.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialDescription {
    pub diffuse_color: [f32; 3],
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
    pub reflectivity: f32,
    pub refractivity: f32,
    pub refractive_index: f32,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        let m = Material::default();
        Self {
            diffuse_color: m.diffuse_color.to_array(),
            diffuse: m.diffuse,
            specular: m.specular,
            shininess: m.shininess,
            reflectivity: m.reflectivity,
            refractivity: m.refractivity,
            refractive_index: m.refractive_index,
        }
    }
}

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        Material {
            diffuse_color: Vec3::from_array(desc.diffuse_color),
            diffuse: desc.diffuse,
            specular: desc.specular,
            shininess: desc.shininess,
            reflectivity: desc.reflectivity,
            refractivity: desc.refractivity,
            refractive_index: desc.refractive_index,
        }
    }
}

/// A shape entry, tagged by `"type"`.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum ObjectDescription {
    Sphere {
        center: [f32; 3],
        radius: f32,
        #[serde(default)]
        material: Option<String>,
    },
    Plane {
        position: [f32; 3],
        axis: usize,
        size: [f32; 3],
        #[serde(default)]
        material: Option<String>,
    },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: [f32; 3],
    #[serde(default = "white")]
    pub color: [f32; 3],
    pub intensity: f32,
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// A whole scene file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneDescription {
    pub camera: [f32; 3],
    pub skybox: Option<PathBuf>,
    pub materials: HashMap<String, MaterialDescription>,
    pub objects: Vec<ObjectDescription>,
    pub lights: Vec<LightDescription>,
}

impl SceneDescription {
    /// Parse a description from JSON text.
    pub fn from_json(text: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a description file.
    ///
    /// A relative `skybox` path is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut desc = Self::from_json(&text)?;
        desc.skybox = desc.skybox.take().map(|skybox| match path.parent() {
            Some(dir) if skybox.is_relative() => dir.join(skybox),
            _ => skybox,
        });

        log::debug!(
            "Parsed scene {}: {} objects, {} lights, {} materials",
            path.display(),
            desc.objects.len(),
            desc.lights.len(),
            desc.materials.len()
        );

        Ok(desc)
    }

    /// Validate the description and assemble a scene around `skybox`.
    pub fn build(&self, skybox: Skybox) -> SceneResult<Scene> {
        let mut scene = Scene::new(skybox).with_camera(Vec3::from_array(self.camera));

        for object in &self.objects {
            let primitive: Primitive = match object {
                ObjectDescription::Sphere {
                    center,
                    radius,
                    material,
                } => {
                    if !(*radius > 0.0) {
                        return Err(SceneError::InvalidRadius(*radius));
                    }
                    let material = self.material(material.as_deref())?;
                    Sphere::new(Vec3::from_array(*center), *radius, material).into()
                }
                ObjectDescription::Plane {
                    position,
                    axis,
                    size,
                    material,
                } => {
                    let axis = Axis::from_index(*axis).ok_or(SceneError::InvalidAxis(*axis))?;
                    let material = self.material(material.as_deref())?;
                    Plane::new(
                        Vec3::from_array(*position),
                        axis,
                        Vec3::from_array(*size),
                        material,
                    )
                    .into()
                }
            };
            scene.add_primitive(primitive);
        }

        for light in &self.lights {
            if !(light.intensity >= 0.0) {
                return Err(SceneError::InvalidIntensity(light.intensity));
            }
            scene.add_light(Light::new(
                Vec3::from_array(light.position),
                Vec3::from_array(light.color),
                light.intensity,
            ));
        }

        Ok(scene)
    }

    fn material(&self, name: Option<&str>) -> SceneResult<Material> {
        match name {
            None => Ok(Material::default()),
            Some(name) => self
                .materials
                .get(name)
                .map(Material::from)
                .ok_or_else(|| SceneError::UnknownMaterial(name.to_string())),
        }
    }
}

/// Load a scene file together with the skybox it names.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<Scene> {
    let desc = SceneDescription::from_file(path)?;
    let skybox_path = desc.skybox.as_ref().ok_or(SceneError::MissingSkybox)?;
    let skybox = Skybox::load(skybox_path)?;
    desc.build(skybox)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_math::Color;

    const SCENE: &str = r#"{
        "camera": [0, 1, 0],
        "skybox": "sky.png",
        "materials": {
            "glass": { "diffuse": 0.0, "refractivity": 0.8, "refractive_index": 1.5 }
        },
        "objects": [
            { "type": "sphere", "center": [0, 0, -5], "radius": 1, "material": "glass" },
            { "type": "plane", "position": [0, -1, -5], "axis": 1, "size": [10, 1, 10] }
        ],
        "lights": [ { "position": [0, 10, 0], "color": [1, 0.5, 0.5], "intensity": 2 } ]
    }"#;

    fn sky() -> Skybox {
        Skybox::uniform(Color::ZERO)
    }

    fn build_err(json: &str) -> SceneError {
        SceneDescription::from_json(json)
            .unwrap()
            .build(sky())
            .unwrap_err()
    }

    #[test]
    fn test_parse_and_build() {
        let desc = SceneDescription::from_json(SCENE).unwrap();
        assert_eq!(desc.skybox.as_deref(), Some(Path::new("sky.png")));

        let scene = desc.build(sky()).unwrap();
        assert_eq!(scene.camera, Vec3::Y);
        assert_eq!(scene.primitive_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.lights[0].color, Vec3::new(1.0, 0.5, 0.5));

        let glass = scene.primitives[0].material();
        assert_eq!(glass.refractive_index, 1.5);
        assert_eq!(glass.diffuse, 0.0);
        // Unspecified fields come from the default material
        assert_eq!(glass.shininess, Material::default().shininess);

        assert_eq!(scene.primitives[1].material(), &Material::default());
    }

    #[test]
    fn test_unknown_material() {
        let json = r#"{ "objects": [
            { "type": "sphere", "center": [0,0,0], "radius": 1, "material": "nope" }
        ] }"#;
        let err = build_err(json);
        assert!(matches!(err, SceneError::UnknownMaterial(name) if name == "nope"));
    }

    #[test]
    fn test_invalid_values() {
        let json = r#"{ "objects": [
            { "type": "plane", "position": [0,0,0], "axis": 3, "size": [1,1,1] }
        ] }"#;
        assert!(matches!(build_err(json), SceneError::InvalidAxis(3)));

        let json = r#"{ "objects": [ { "type": "sphere", "center": [0,0,0], "radius": -1 } ] }"#;
        assert!(matches!(build_err(json), SceneError::InvalidRadius(_)));

        let json = r#"{ "lights": [ { "position": [0,0,0], "intensity": -0.5 } ] }"#;
        assert!(matches!(build_err(json), SceneError::InvalidIntensity(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SceneDescription::from_json("{ \"objects\": [ { \"type\": \"cube\" } ] }"),
            Err(SceneError::Parse(_))
        ));
    }

    #[test]
    fn test_misspelled_keys_are_rejected() {
        let typos = [
            r#"{ "skybx": "sky.png" }"#,
            r#"{"objects": [{"type": "sphere", "center": [0,0,0], "radius": 1, "radus": 2}]}"#,
            r#"{ "lights": [ { "position": [0,0,0], "intensity": 1, "colour": [1,1,1] } ] }"#,
            r#"{ "materials": { "m": { "shinyness": 10 } } }"#,
        ];
        for json in typos {
            assert!(
                matches!(SceneDescription::from_json(json), Err(SceneError::Parse(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_bundled_demo_matches_builtin() {
        let desc = SceneDescription::from_json(include_str!("../../../scenes/demo.json")).unwrap();
        let from_file = desc.build(sky()).unwrap();
        let builtin = crate::demo::demo_scene(sky());

        assert_eq!(from_file.primitives, builtin.primitives);
        assert_eq!(from_file.lights, builtin.lights);
        assert_eq!(from_file.camera, builtin.camera);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_scene("does/not/exist.json"),
            Err(SceneError::Io { .. })
        ));
    }
}
