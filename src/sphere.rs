use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
    pub color: Color,
    /// Specular exponent, or [`Sphere::MATTE`] for no highlight.
    pub specular: f64,
}

impl Sphere {
    /// Specular sentinel: the sphere gets no specular highlight at all.
    pub const MATTE: f64 = -1.0;

    pub fn new(center: Point3, radius: f64, color: Color, specular: f64) -> Self {
        Self {
            center,
            radius,
            color,
            specular,
        }
    }

    pub fn matte(center: Point3, radius: f64, color: Color) -> Self {
        Self::new(center, radius, color, Self::MATTE)
    }

    /// Solve `|orig + t*dir - center|^2 = radius^2` for `t`.
    ///
    /// Returns `(t1, t2)` with `t1 = (-b + sqrt(d)) / 2a` and
    /// `t2 = (-b - sqrt(d)) / 2a`, or `None` when the discriminant is negative.
    /// Roots behind the origin are returned as-is; range filtering is up to the
    /// caller. `ray.dir` must be non-zero.
    pub fn intersect(&self, ray: &Ray) -> Option<(f64, f64)> {
        let co = ray.orig - self.center;

        let a = ray.dir.dot(ray.dir);
        let b = 2.0 * co.dot(ray.dir);
        let c = co.dot(co) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);
        Some((t1, t2))
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, p: Point3) -> Vec3 {
        (p - self.center).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_intersect_hit() {
        let sphere = Sphere::matte(Point3::new(0.0, 0.0, 5.0), 1.0, Color::RED);
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, 1.0));

        let (t1, t2) = sphere.intersect(&ray).expect("ray should hit");
        assert!((t1 - 6.0).abs() < EPS);
        assert!((t2 - 4.0).abs() < EPS);
    }

    #[test]
    fn test_intersect_unnormalised_direction() {
        let sphere = Sphere::matte(Point3::new(0.0, 0.0, 5.0), 1.0, Color::RED);
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, 2.0));

        let (t1, t2) = sphere.intersect(&ray).expect("ray should hit");
        assert!((t1 - 3.0).abs() < EPS);
        assert!((t2 - 2.0).abs() < EPS);
    }

    #[test]
    fn test_intersect_miss() {
        let sphere = Sphere::matte(Point3::new(0.0, 0.0, 5.0), 1.0, Color::RED);
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_intersect_behind_origin() {
        let sphere = Sphere::matte(Point3::new(0.0, 0.0, -5.0), 1.0, Color::RED);
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, 1.0));

        let (t1, t2) = sphere.intersect(&ray).expect("line still crosses the sphere");
        assert!(t1 < 0.0 && t2 < 0.0);
    }

    #[test]
    fn test_tangent_ray_has_double_root() {
        let sphere = Sphere::matte(Point3::new(1.0, 0.0, 5.0), 1.0, Color::RED);
        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, 1.0));

        let (t1, t2) = sphere.intersect(&ray).expect("tangent ray touches");
        assert!((t1 - 5.0).abs() < EPS);
        assert!((t2 - 5.0).abs() < EPS);
    }

    #[test]
    fn test_matte_sentinel() {
        let matte = Sphere::matte(Point3::zero(), 1.0, Color::GREEN);
        assert_eq!(matte.specular, -1.0);
    }

    #[test]
    fn test_normal_at() {
        let sphere = Sphere::matte(Point3::new(0.0, 0.0, 5.0), 2.0, Color::RED);
        let n = sphere.normal_at(Point3::new(0.0, 0.0, 3.0));
        assert!((n - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }
}
