use crate::Vec3;

/// Tolerance shared by the unit-direction check and the intersection tests.
pub const EPSILON: f32 = 1e-6;

/// A ray in 3D space with an origin and a direction.
///
/// Intersection routines expect `direction` to be unit length; use
/// [`Ray::is_normalized`] to check before tracing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Returns true if the direction is unit length within [`EPSILON`].
    #[inline]
    pub fn is_normalized(&self) -> bool {
        (self.direction.length() - 1.0).abs() <= EPSILON
    }
}
