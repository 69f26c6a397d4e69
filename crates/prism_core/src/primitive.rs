//! Closed set of renderable shapes and their intersection result.

use prism_math::{Ray, Vec3};

pub use prism_math::EPSILON;

use crate::{Material, Plane, Sphere};

/// Record of a ray-primitive intersection.
#[derive(Clone, Copy, Debug)]
pub struct RayHit<'a> {
    /// The primitive that was hit
    pub primitive: &'a Primitive,
    /// Distance along the ray (non-negative)
    pub distance: f32,
    /// World-space point of intersection
    pub position: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
}

impl<'a> RayHit<'a> {
    /// Material of the primitive that was hit.
    pub fn material(&self) -> &'a Material {
        self.primitive.material()
    }
}

/// A renderable shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => sphere.material(),
            Primitive::Plane(plane) => plane.material(),
        }
    }

    /// Intersect a ray with this primitive.
    ///
    /// The ray direction must be unit length. A non-unit direction is
    /// reported once and treated as a miss, so a single malformed ray never
    /// aborts a render.
    pub fn intersect(&self, ray: &Ray) -> Option<RayHit<'_>> {
        if !ray.is_normalized() {
            crate::warn_once!(
                "ray direction {:?} is not normalized (length {}); treating as a miss",
                ray.direction,
                ray.direction.length()
            );
            return None;
        }

        let (distance, normal) = match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray)?,
            Primitive::Plane(plane) => plane.intersect(ray)?,
        };

        Some(RayHit {
            primitive: self,
            distance,
            position: ray.at(distance),
            normal,
        })
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Axis;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_primitive_hit_record() {
        let primitive: Primitive =
            Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default()).into();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);

        let hit = primitive.intersect(&ray).unwrap();
        assert!(std::ptr::eq(hit.primitive, &primitive));
        assert!((hit.position - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-5);
        assert_eq!(hit.material(), &Material::default());
    }

    #[test]
    fn test_non_unit_direction_is_a_miss_for_every_shape() {
        init_logger();

        let sphere: Primitive =
            Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::default()).into();
        let plane: Primitive = Plane::new(
            Vec3::new(0.0, 0.0, -5.0),
            Axis::Z,
            Vec3::splat(10.0),
            Material::default(),
        )
        .into();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        assert!(sphere.intersect(&ray).is_none());
        assert!(plane.intersect(&ray).is_none());

        // Same rays normalized do hit
        let ray = Ray::new(Vec3::ZERO, -Vec3::Z);
        assert!(sphere.intersect(&ray).is_some());
        assert!(plane.intersect(&ray).is_some());
    }
}
