//! Ready-made scenes for the demo binary and tests.

use crate::prelude::*;
use rand::Rng;

/// Three spheres resting above a huge yellow ground sphere, lit by an
/// ambient, a point and a directional light.
pub fn demo_scene() -> Scene {
    Scene::new()
        .with_sphere(Sphere::new(Point3::new(0.0, -1.0, 3.0), 1.0, Color::RED, 500.0))
        .with_sphere(Sphere::new(Point3::new(2.0, 0.0, 4.0), 1.0, Color::BLUE, 500.0))
        .with_sphere(Sphere::new(Point3::new(-2.0, 0.0, 4.0), 1.0, Color::GREEN, 10.0))
        .with_sphere(Sphere::new(
            Point3::new(0.0, -5001.0, 0.0),
            5000.0,
            Color::YELLOW,
            1000.0,
        ))
        .with_light(Light::ambient(0.2))
        .with_light(Light::point(0.6, Point3::new(2.0, 1.0, 0.0)))
        .with_light(Light::directional(0.2, Vec3::new(1.0, 4.0, 4.0)))
}

/// `count` randomly placed and colored spheres in front of the origin, with
/// the same lights as [`demo_scene`].
pub fn random_scene<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Scene {
    let mut scene = Scene::new()
        .with_light(Light::ambient(0.2))
        .with_light(Light::point(0.6, Point3::new(2.0, 1.0, 0.0)))
        .with_light(Light::directional(0.2, Vec3::new(1.0, 4.0, 4.0)));

    for _ in 0..count {
        let center = Point3::new(
            rng.random_range(-4.0..4.0),
            rng.random_range(-2.0..2.0),
            rng.random_range(3.0..12.0),
        );
        let radius = rng.random_range(0.2..1.0);
        // a quarter of the spheres stay matte
        let specular = if rng.random_bool(0.25) {
            Sphere::MATTE
        } else {
            rng.random_range(5.0..1000.0)
        };
        scene.add_sphere(Sphere::new(center, radius, Color::random_with(rng), specular));
    }

    log::trace!("generated random scene with {count} spheres");
    scene
}
