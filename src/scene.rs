use crate::prelude::*;

/// Spheres and lights read by the tracer. Immutable for the duration of a frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

/// Nearest accepted intersection along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into [`Scene::spheres`].
    pub sphere: usize,
    pub t: f64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add_sphere(sphere);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn sphere(&self, hit: &Hit) -> &Sphere {
        &self.spheres[hit.sphere]
    }

    /// Brute-force nearest-hit search over every sphere.
    ///
    /// A root is accepted when `ray_t.contains(t)` and it is strictly smaller
    /// than the best so far, so on equal `t` the sphere that comes first in
    /// `spheres` wins.
    pub fn closest_intersection(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let mut closest: Option<Hit> = None;

        for (index, sphere) in self.spheres.iter().enumerate() {
            let Some((t1, t2)) = sphere.intersect(ray) else {
                continue;
            };

            for t in [t1, t2] {
                let nearer = closest.is_none_or(|hit| t < hit.t);
                if ray_t.contains(t) && nearer {
                    closest = Some(Hit { sphere: index, t });
                }
            }
        }

        closest
    }

    /// True if anything lies on the ray within `ray_t`.
    pub fn occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.closest_intersection(ray, ray_t).is_some()
    }
}
