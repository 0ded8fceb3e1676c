//! CPU ray tracer for scenes made of spheres.
//!
//! Shading is Phong-style: ambient, directional and point lights with diffuse
//! and specular terms and hard shadows. [`render`] turns a [`Scene`], a
//! [`Camera`] and a [`Viewport`] into an RGBA [`FrameBuffer`] and has no
//! windowing or input dependencies.

pub mod camera;
pub mod color;
pub mod framebuffer;
pub mod interval;
pub mod light;
pub mod prelude;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod sphere;
pub mod vec3;

pub use prelude::*;
