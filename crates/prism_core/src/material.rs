//! Surface material for the Whitted shading model.

use prism_math::Color;

/// Describes how a surface responds to direct light, reflection and
/// refraction.
///
/// The terms are additive and nothing forces the weights to sum to one;
/// over-bright results are resolved by tone mapping at output time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Base color modulating the diffuse term (RGB, 0-1)
    pub diffuse_color: Color,

    /// Weight of the diffuse (Lambert) term
    pub diffuse: f32,

    /// Weight of the specular highlight term
    pub specular: f32,

    /// Phong exponent; larger values give tighter highlights
    pub shininess: f32,

    /// Weight of the mirror-reflection term (0-1)
    pub reflectivity: f32,

    /// Weight of the transmitted term (0-1)
    pub refractivity: f32,

    /// Index of refraction relative to the surrounding medium (1 = air, 1.5 = glass)
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse_color: Color::ONE,
            diffuse: 1.0,
            specular: 0.5,
            shininess: 32.0,
            reflectivity: 0.0,
            refractivity: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create an opaque material with the given diffuse color and weights.
    pub fn new(diffuse_color: Color, diffuse: f32, specular: f32, shininess: f32) -> Self {
        Self {
            diffuse_color,
            diffuse,
            specular,
            shininess,
            ..Default::default()
        }
    }

    /// A purely diffuse material: no highlight, no reflection, no refraction.
    pub fn matte(diffuse_color: Color) -> Self {
        Self {
            diffuse_color,
            specular: 0.0,
            ..Default::default()
        }
    }

    /// Set the mirror-reflection weight.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the transmission weight and index of refraction.
    pub fn with_refraction(mut self, refractivity: f32, refractive_index: f32) -> Self {
        self.refractivity = refractivity;
        self.refractive_index = refractive_index;
        self
    }

    /// Check if this material spawns reflection rays.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }

    /// Check if this material spawns refraction rays.
    pub fn is_refractive(&self) -> bool {
        self.refractivity > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let mat = Material::default();
        assert_eq!(mat.diffuse_color, Color::ONE);
        assert_eq!(mat.shininess, 32.0);
        assert!(!mat.is_reflective());
        assert!(!mat.is_refractive());
    }

    #[test]
    fn test_builder() {
        let glass = Material::new(Color::ONE, 0.0, 1.0, 1425.0)
            .with_reflectivity(0.1)
            .with_refraction(0.8, 1.5);

        assert!(glass.is_reflective());
        assert!(glass.is_refractive());
        assert_eq!(glass.refractive_index, 1.5);
        assert_eq!(glass.diffuse, 0.0);
    }

    #[test]
    fn test_matte() {
        let mat = Material::matte(Color::new(0.2, 0.3, 0.4));
        assert_eq!(mat.specular, 0.0);
        assert_eq!(mat.diffuse, 1.0);
    }
}
