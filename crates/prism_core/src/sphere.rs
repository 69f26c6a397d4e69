//! Sphere primitive.

use prism_math::{Ray, Vec3};

use crate::Material;

/// A sphere primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect a ray with a unit direction.
    ///
    /// Returns the hit distance and outward unit normal. Spheres whose
    /// center projects behind the origin are never hit.
    pub(crate) fn intersect(&self, ray: &Ray) -> Option<(f32, Vec3)> {
        let to_center = self.center - ray.origin;
        let projection = to_center.dot(ray.direction);
        if projection <= 0.0 {
            return None;
        }

        let squared_distance_to_ray = to_center.length_squared() - projection * projection;
        let squared_radius = self.radius * self.radius;
        if squared_distance_to_ray > squared_radius {
            return None;
        }

        let offset = (squared_radius - squared_distance_to_ray).sqrt();
        let t0 = projection - offset;
        let t1 = projection + offset;

        let t = if t0 >= 0.0 { t0 } else { t1 };
        if t < 0.0 {
            return None;
        }

        let normal = (ray.at(t) - self.center).normalize();
        Some((t, normal))
    }
}
