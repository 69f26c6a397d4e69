//! Closest-hit and shadow queries over the scene's primitives.

use prism_core::{Primitive, RayHit};
use prism_math::Ray;

/// Find the nearest primitive hit by `ray`.
///
/// Primitives are tested in order; a later hit replaces the current one
/// only when it is strictly closer, so exact ties go to the earlier
/// primitive.
pub fn closest_intersection<'a>(ray: &Ray, primitives: &'a [Primitive]) -> Option<RayHit<'a>> {
    let mut closest: Option<RayHit<'a>> = None;

    for primitive in primitives {
        if let Some(hit) = primitive.intersect(ray) {
            if closest.map_or(true, |best| hit.distance < best.distance) {
                closest = Some(hit);
            }
        }
    }

    closest
}

/// Returns true if something blocks `shadow_ray` before `light_distance`.
///
/// The ray origin should already be offset off the surface.
pub fn in_shadow(shadow_ray: &Ray, primitives: &[Primitive], light_distance: f32) -> bool {
    closest_intersection(shadow_ray, primitives).is_some_and(|hit| hit.distance < light_distance)
}
