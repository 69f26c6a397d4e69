use prism_math::{Color, Vec3};

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
    /// Scalar multiplier on `color` (non-negative)
    pub intensity: f32,
}

impl Light {
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// White light at the given position.
    pub fn white(position: Vec3, intensity: f32) -> Self {
        Self::new(position, Color::ONE, intensity)
    }

    /// Light color scaled by intensity.
    #[inline]
    pub fn radiance(&self) -> Color {
        self.color * self.intensity
    }
}
