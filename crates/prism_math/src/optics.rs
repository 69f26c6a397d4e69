//! Reflection, refraction and surface-offset helpers used by the shading code.

use crate::Vec3;

/// Distance secondary ray origins are pushed off a surface.
pub const SURFACE_BIAS: f32 = 1e-3;

/// Mirror `direction` about `normal`.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - normal * 2.0 * direction.dot(normal)
}

/// Bend `direction` through a surface with the given refractive index.
///
/// The outside medium is assumed to have index 1. When the ray leaves the
/// surface (it travels along `normal`) the indices are swapped and the normal
/// is flipped. Returns `Vec3::ZERO` on total internal reflection.
pub fn refract(direction: Vec3, normal: Vec3, refractive_index: f32) -> Vec3 {
    let mut cosi = -direction.dot(normal).clamp(-1.0, 1.0);
    let (mut etai, mut etat) = (1.0, refractive_index);
    let mut n = normal;

    if cosi < 0.0 {
        cosi = -cosi;
        std::mem::swap(&mut etai, &mut etat);
        n = -normal;
    }

    let eta = etai / etat;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        return Vec3::ZERO;
    }

    direction * eta + n * (eta * cosi - k.sqrt())
}

/// Nudge `position` off the surface toward the side `direction` points to.
#[inline]
pub fn offset_point(position: Vec3, normal: Vec3, direction: Vec3) -> Vec3 {
    let side = if direction.dot(normal) < 0.0 { -1.0 } else { 1.0 };
    position + normal * SURFACE_BIAS * side
}
