pub use crate::camera::{Camera, PITCH_LIMIT, Viewport, rotate_vector};
pub use crate::color::Color;
pub use crate::framebuffer::{BYTES_PER_PIXEL, FrameBuffer};
pub use crate::interval::Interval;
pub use crate::light::{Light, SHADOW_EPSILON, compute_lighting};
pub use crate::ray::Ray;
pub use crate::renderer::{RenderConfig, render, render_into, render_with, trace_ray};
pub use crate::scene::{Hit, Scene};
pub use crate::sphere::Sphere;
pub use crate::vec3::{Point3, Vec3};

pub const INFINITY: f64 = f64::INFINITY;
pub const PI: f64 = std::f64::consts::PI;
