//! The renderable scene.
//!
//! A `Scene` owns every primitive, light and the environment for the
//! lifetime of a render. Renderers only ever borrow it.

use prism_math::Vec3;

use crate::{Light, Primitive, Skybox};

/// A complete scene: geometry, lights, camera position and environment.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Shapes in input order (ties in hit distance go to the earlier one)
    pub primitives: Vec<Primitive>,

    /// Point lights
    pub lights: Vec<Light>,

    /// Camera position; the camera looks down -Z
    pub camera: Vec3,

    /// Environment seen by rays that escape the scene
    pub skybox: Skybox,
}

impl Scene {
    /// Create an empty scene with the camera at the origin.
    pub fn new(skybox: Skybox) -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            camera: Vec3::ZERO,
            skybox,
        }
    }

    /// Set the camera position.
    pub fn with_camera(mut self, camera: Vec3) -> Self {
        self.camera = camera;
        self
    }

    /// Add a primitive and return its index.
    pub fn add_primitive(&mut self, primitive: impl Into<Primitive>) -> usize {
        let id = self.primitives.len();
        self.primitives.push(primitive.into());
        id
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        let id = self.lights.len();
        self.lights.push(light);
        id
    }

    /// Get primitive count.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, Material, Plane, Sphere};
    use prism_math::Color;

    #[test]
    fn test_scene_creation() {
        let mut scene =
            Scene::new(Skybox::uniform(Color::ZERO)).with_camera(Vec3::new(0.0, 1.0, 0.0));

        let sphere_id = scene.add_primitive(Sphere::new(Vec3::ZERO, 1.0, Material::default()));
        let plane_id = scene.add_primitive(Plane::new(
            Vec3::ZERO,
            Axis::Y,
            Vec3::ONE,
            Material::default(),
        ));
        scene.add_light(Light::white(Vec3::Y * 10.0, 1.0));

        assert_eq!(sphere_id, 0);
        assert_eq!(plane_id, 1);
        assert_eq!(scene.primitive_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.camera, Vec3::Y);
        assert!(matches!(scene.primitives[1], Primitive::Plane(_)));
    }
}
