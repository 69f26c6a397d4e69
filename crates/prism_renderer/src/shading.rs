//! Recursive Whitted shading.
//!
//! Each hit combines Lambert diffuse and Phong specular from every
//! unshadowed light with recursive mirror reflection and refraction:
//!
//! ```text
//! color = diffuse * diffuse_color * mat.diffuse
//!       + specular * mat.specular
//!       + reflected * mat.reflectivity
//!       + refracted * mat.refractivity
//! ```
//!
//! Rays that escape the scene, or reach the bounce cap, take the skybox
//! color for their direction.

use prism_core::Scene;
use prism_math::{offset_point, reflect, refract, Color, Ray, Vec3};

use crate::query::{closest_intersection, in_shadow};
use crate::RenderConfig;

/// Compute the radiance arriving along `ray`.
///
/// `depth` counts the reflection/refraction bounces taken so far; primary
/// rays start at 0.
pub fn shade(ray: &Ray, scene: &Scene, config: &RenderConfig, depth: u32) -> Color {
    if depth >= config.max_bounces {
        return scene.skybox.sample(ray.direction);
    }

    let Some(hit) = closest_intersection(ray, &scene.primitives) else {
        return scene.skybox.sample(ray.direction);
    };

    let material = hit.material();
    let position = hit.position;
    let normal = hit.normal;

    let mut reflect_color = Color::ZERO;
    if material.is_reflective() {
        let direction = reflect(ray.direction, normal).normalize();
        let origin = offset_point(position, normal, direction);
        reflect_color = shade(&Ray::new(origin, direction), scene, config, depth + 1);
    }

    let mut refract_color = Color::ZERO;
    if material.is_refractive() {
        let direction = refract(ray.direction, normal, material.refractive_index);
        // Zero means total internal reflection: no transmitted ray
        if direction != Vec3::ZERO {
            let direction = direction.normalize();
            let origin = offset_point(position, normal, direction);
            refract_color = shade(&Ray::new(origin, direction), scene, config, depth + 1);
        }
    }

    let mut diffuse_light = Color::ZERO;
    let mut specular_light = Color::ZERO;

    for light in &scene.lights {
        let to_light = light.position - position;
        let light_distance = to_light.length();
        let light_dir = to_light / light_distance;

        let shadow_ray = Ray::new(offset_point(position, normal, light_dir), light_dir);
        if in_shadow(&shadow_ray, &scene.primitives, light_distance) {
            continue;
        }

        let radiance = light.radiance();
        diffuse_light += radiance * normal.dot(light_dir).max(0.0);

        let highlight = (-reflect(-light_dir, normal)).dot(ray.direction).max(0.0);
        specular_light += radiance * highlight.powf(material.shininess);
    }

    diffuse_light * material.diffuse_color * material.diffuse
        + specular_light * material.specular
        + reflect_color * material.reflectivity
        + refract_color * material.refractivity
}
