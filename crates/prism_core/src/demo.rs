//! Built-in demo scene: four spheres (ivory, glass, rubber, mirror) over a
//! ground plane, a green side wall and three white lights.

use prism_math::{Color, Vec3};

use crate::{Axis, Light, Material, Plane, Scene, Skybox, Sphere};

pub fn demo_scene(skybox: Skybox) -> Scene {
    let ivory = Material::new(Color::new(0.4, 0.4, 0.3), 0.6, 0.3, 50.0).with_reflectivity(0.1);
    let red_rubber =
        Material::new(Color::new(0.9, 0.1, 0.0), 0.3, 0.1, 10.0).with_reflectivity(0.1);
    let green_wall =
        Material::new(Color::new(0.25, 0.45, 0.2), 0.6, 0.2, 32.0).with_reflectivity(0.2);
    let ground = Material::new(Color::new(0.6, 0.4, 0.7), 0.5, 0.1, 10.0);
    let mirror = Material::new(Color::ONE, 0.0, 10.0, 1425.0).with_reflectivity(0.8);
    let glass = Material::new(Color::ONE, 0.0, 1.0, 1425.0)
        .with_reflectivity(0.1)
        .with_refraction(0.8, 1.5);

    let mut scene = Scene::new(skybox).with_camera(Vec3::ZERO);

    scene.add_primitive(Sphere::new(Vec3::new(-5.0, -1.5, -20.0), 2.0, ivory));
    scene.add_primitive(Sphere::new(Vec3::new(-1.0, -1.5, -12.0), 2.0, glass));
    scene.add_primitive(Sphere::new(Vec3::new(2.5, -0.5, -22.0), 3.0, red_rubber));
    scene.add_primitive(Sphere::new(Vec3::new(7.0, 8.0, -28.0), 4.0, mirror));

    scene.add_primitive(Plane::new(
        Vec3::new(0.0, -3.5, -20.0),
        Axis::Y,
        Vec3::new(20.0, 1.0, 20.0),
        ground,
    ));
    scene.add_primitive(Plane::new(
        Vec3::new(-10.0, 3.5, -20.0),
        Axis::X,
        Vec3::new(1.0, 20.0, 20.0),
        green_wall,
    ));

    scene.add_light(Light::white(Vec3::new(-20.0, 20.0, 20.0), 1.5));
    scene.add_light(Light::white(Vec3::new(30.0, 50.0, -25.0), 1.8));
    scene.add_light(Light::white(Vec3::new(30.0, 20.0, 30.0), 1.7));

    scene
}
