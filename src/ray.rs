use crate::prelude::*;

/// Parametric line `orig + t * dir`. The direction is not normalised.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Ray {
    pub orig: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            orig: origin,
            dir: direction,
        }
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.orig + t * self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let r = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(r.at(0.0), r.orig);
        assert_eq!(r.at(1.5), Point3::new(1.0, 3.0, 0.0));
        assert_eq!(r.at(-1.0), Point3::new(1.0, -2.0, 0.0));
    }
}
