use crate::prelude::*;

/// Offset applied to shadow rays so a surface does not shadow itself.
pub const SHADOW_EPSILON: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Lights every point equally, never shadowed.
    Ambient { intensity: f64 },
    /// Light arriving from `direction` (pointing towards the light, any length).
    Directional { intensity: f64, direction: Vec3 },
    Point { intensity: f64, position: Point3 },
}

impl Light {
    pub fn ambient(intensity: f64) -> Self {
        Self::Ambient { intensity }
    }

    pub fn directional(intensity: f64, direction: Vec3) -> Self {
        Self::Directional {
            intensity,
            direction,
        }
    }

    pub fn point(intensity: f64, position: Point3) -> Self {
        Self::Point {
            intensity,
            position,
        }
    }
}

/// Scalar illumination at `p` with surface normal `n`, seen along `v`.
///
/// `n` and `v` are normalised here. Each directional or point light first
/// casts a shadow ray; if anything is in the way it contributes nothing.
/// `specular` is the surface exponent, [`Sphere::MATTE`] disables highlights.
/// The result is not clamped.
pub fn compute_lighting(p: Point3, n: Vec3, v: Vec3, specular: f64, scene: &Scene) -> f64 {
    let n = n.normalized();
    let v = v.normalized();
    let mut i = 0.0;

    for light in &scene.lights {
        let (intensity, l, shadow, shadow_t) = match *light {
            Light::Ambient { intensity } => {
                i += intensity;
                continue;
            }
            Light::Directional {
                intensity,
                direction,
            } => {
                let l = direction.normalized();
                let shadow_t = Interval::new(SHADOW_EPSILON, INFINITY);
                (intensity, l, Ray::new(p, l), shadow_t)
            }
            Light::Point {
                intensity,
                position,
            } => {
                // t = 1 on the unnormalised ray lands on the light itself
                let to_light = position - p;
                let shadow_t = Interval::new(SHADOW_EPSILON, 1.0);
                (intensity, to_light.normalized(), Ray::new(p, to_light), shadow_t)
            }
        };

        if scene.occluded(&shadow, shadow_t) {
            continue;
        }

        // Diffuse
        let n_dot_l = n.dot(l);
        if n_dot_l > 0.0 {
            i += intensity * n_dot_l;
        }

        // Specular, R = 2 * N * dot(N, L) - L
        if specular != Sphere::MATTE && n_dot_l > 0.0 {
            let r = (2.0 * n_dot_l * n - l).normalized();
            let r_dot_v = r.dot(v);
            if r_dot_v > 0.0 {
                i += intensity * r_dot_v.powf(specular);
            }
        }
    }

    i
}
