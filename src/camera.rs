use crate::prelude::*;

/// Pitch stays just short of straight up/down so the view never flips.
pub const PITCH_LIMIT: f64 = PI / 2.0 - 0.01;

/// Pinhole camera. `rotation` holds Euler angles in radians:
/// `x` = pitch, `y` = yaw, `z` = roll.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Camera {
    pub position: Point3,
    pub rotation: Vec3,
}

/// Image plane in camera space: `width` x `height` units, `distance` along +z.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub distance: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            distance: 1,
        }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32, distance: u32) -> Self {
        Self {
            width,
            height,
            distance,
        }
    }

    /// Map a centered canvas coordinate (origin in the middle, +y up) onto
    /// the image plane.
    pub fn canvas_to_viewport(
        &self,
        cx: i64,
        cy: i64,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Vec3 {
        Vec3::new(
            cx as f64 * self.width as f64 / canvas_width as f64,
            cy as f64 * self.height as f64 / canvas_height as f64,
            self.distance as f64,
        )
    }
}

/// Rotate `v` by Euler angles, applied as pitch (X), then yaw (Y), then roll (Z).
///
/// The order is fixed; swapping the steps changes where the camera looks.
pub fn rotate_vector(v: Vec3, rotation: Vec3) -> Vec3 {
    // X: pitch
    let (sin_x, cos_x) = rotation.x.sin_cos();
    let y1 = v.y * cos_x - v.z * sin_x;
    let z1 = v.y * sin_x + v.z * cos_x;

    // Y: yaw
    let (sin_y, cos_y) = rotation.y.sin_cos();
    let x2 = v.x * cos_y + z1 * sin_y;
    let z2 = -v.x * sin_y + z1 * cos_y;

    // Z: roll
    let (sin_z, cos_z) = rotation.z.sin_cos();
    let x3 = x2 * cos_z - y1 * sin_z;
    let y3 = x2 * sin_z + y1 * cos_z;

    Vec3::new(x3, y3, z2)
}

impl Camera {
    pub fn new(position: Point3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// World-space ray direction for a centered canvas coordinate.
    pub fn ray_direction(
        &self,
        viewport: &Viewport,
        cx: i64,
        cy: i64,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Vec3 {
        let d = viewport.canvas_to_viewport(cx, cy, canvas_width, canvas_height);
        rotate_vector(d, self.rotation)
    }

    /// Unit view direction from pitch and yaw, ignoring roll.
    pub fn forward(&self) -> Vec3 {
        let pitch_yaw = Vec3::new(self.rotation.x, self.rotation.y, 0.0);
        rotate_vector(Vec3::new(0.0, 0.0, 1.0), pitch_yaw).normalized()
    }

    /// Unit strafe direction in the horizontal plane.
    pub fn right(&self) -> Vec3 {
        let yaw = Vec3::new(0.0, self.rotation.y, 0.0);
        rotate_vector(Vec3::new(1.0, 0.0, 0.0), yaw).normalized()
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Turn the camera by the given pitch and yaw deltas. Pitch is clamped to
    /// [`PITCH_LIMIT`].
    pub fn look(&mut self, d_pitch: f64, d_yaw: f64) {
        self.rotation.x = (self.rotation.x + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.rotation.y += d_yaw;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPS, "{a} != {b}");
    }

    #[test]
    fn test_canvas_to_viewport() {
        let vp = Viewport::default();
        assert_eq!(vp.canvas_to_viewport(0, 0, 320, 240), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(vp.canvas_to_viewport(160, -120, 320, 240), Vec3::new(0.5, -0.5, 1.0));

        let wide = Viewport::new(2, 1, 3);
        assert_eq!(wide.canvas_to_viewport(-100, 50, 200, 100), Vec3::new(-1.0, 0.5, 3.0));
    }

    #[test]
    fn test_rotate_identity() {
        let v = Vec3::new(0.3, -0.7, 1.0);
        assert_eq!(rotate_vector(v, Vec3::zero()), v);
    }

    #[test]
    fn test_rotate_pitch() {
        let v = rotate_vector(Vec3::new(0.0, 0.0, 1.0), Vec3::new(PI / 2.0, 0.0, 0.0));
        assert_close(v, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_rotate_yaw_and_roll() {
        let v = rotate_vector(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, PI / 2.0, 0.0));
        assert_close(v, Vec3::new(1.0, 0.0, 0.0));

        let v = rotate_vector(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, PI / 2.0));
        assert_close(v, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_rotation_order_pitch_then_yaw() {
        // pitch sends +z to -y, yaw leaves -y alone
        let v = rotate_vector(Vec3::new(0.0, 0.0, 1.0), Vec3::new(PI / 2.0, PI / 2.0, 0.0));
        assert_close(v, Vec3::new(0.0, -1.0, 0.0));

        // yaw first would have given +x, which pitch then leaves alone
        let yawed = rotate_vector(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, PI / 2.0, 0.0));
        let yaw_then_pitch = rotate_vector(yawed, Vec3::new(PI / 2.0, 0.0, 0.0));
        assert_close(yaw_then_pitch, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rotate_preserves_length() {
        let v = Vec3::new(0.4, -1.2, 2.5);
        let r = rotate_vector(v, Vec3::new(0.3, -1.1, 2.0));
        assert!((r.length() - v.length()).abs() < 1e-9);
    }

    #[test]
    fn test_forward_and_right() {
        let mut cam = Camera::default();
        assert_close(cam.forward(), Vec3::new(0.0, 0.0, 1.0));
        assert_close(cam.right(), Vec3::new(1.0, 0.0, 0.0));

        cam.look(0.0, PI / 2.0);
        assert_close(cam.forward(), Vec3::new(1.0, 0.0, 0.0));
        assert_close(cam.right(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_look_clamps_pitch() {
        let mut cam = Camera::default();
        cam.look(10.0, 0.0);
        assert_eq!(cam.rotation.x, PITCH_LIMIT);
        cam.look(-20.0, 0.0);
        assert_eq!(cam.rotation.x, -PITCH_LIMIT);
    }

    #[test]
    fn test_translate() {
        let mut cam = Camera::new(Point3::new(1.0, 2.0, 3.0), Vec3::zero());
        cam.translate(Vec3::new(0.0, -2.0, 1.0));
        assert_eq!(cam.position, Point3::new(1.0, 0.0, 4.0));
    }

    #[test]
    fn test_ray_direction_uses_rotation() {
        let cam = Camera::new(Point3::zero(), Vec3::new(0.0, PI, 0.0));
        let d = cam.ray_direction(&Viewport::default(), 0, 0, 100, 100);
        assert_close(d, Vec3::new(0.0, 0.0, -1.0));
    }
}
