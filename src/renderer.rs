//! Per-pixel tracing and the frame loop.
//!
//! Every pixel is a pure function of the scene, camera and viewport, so rows
//! can be handed to rayon without changing a single byte of output.

use crate::prelude::*;
use rayon::prelude::*;
use std::time::Instant;

/// Render settings that are not part of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Nearest accepted hit along a primary ray
    pub t_min: f64,
    /// Farthest accepted hit along a primary ray
    pub t_max: f64,
    /// Render rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            t_min: 1.0,
            t_max: 10000.0,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    fn ray_t(&self) -> Interval {
        Interval::new(self.t_min, self.t_max)
    }
}

/// Color seen along `ray`.
///
/// Misses return [`Color::BACKGROUND`]. A hit shades the sphere color by the
/// light arriving at the hit point, clamped to `[0, 1]`.
pub fn trace_ray(ray: &Ray, ray_t: Interval, scene: &Scene) -> Color {
    let Some(hit) = scene.closest_intersection(ray, ray_t) else {
        return Color::BACKGROUND;
    };

    let sphere = scene.sphere(&hit);
    let p = ray.at(hit.t);
    let n = sphere.normal_at(p);

    let illum = compute_lighting(p, n, -ray.dir, sphere.specular, scene);
    sphere.color.shaded(Interval::UNIT.clamp(illum))
}

/// Render a `width` x `height` frame with the default settings.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    viewport: &Viewport,
    width: u32,
    height: u32,
) -> FrameBuffer {
    render_with(&RenderConfig::default(), scene, camera, viewport, width, height)
}

pub fn render_with(
    config: &RenderConfig,
    scene: &Scene,
    camera: &Camera,
    viewport: &Viewport,
    width: u32,
    height: u32,
) -> FrameBuffer {
    let mut frame = FrameBuffer::new(width, height);
    render_into(config, scene, camera, viewport, &mut frame);
    frame
}

/// Render into an existing buffer, overwriting every pixel. The frame size is
/// taken from `frame`.
pub fn render_into(
    config: &RenderConfig,
    scene: &Scene,
    camera: &Camera,
    viewport: &Viewport,
    frame: &mut FrameBuffer,
) {
    let (width, height) = (frame.width(), frame.height());
    if frame.is_empty() {
        log::debug!("skipping render of empty {width}x{height} frame");
        return;
    }

    log::trace!(
        "scene: {} spheres, {} lights",
        scene.spheres.len(),
        scene.lights.len()
    );
    let start = Instant::now();

    let stride = frame.stride();
    let rows = frame.as_bytes_mut();
    if config.parallel {
        rows.par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y, row)| {
                render_row(config, scene, camera, viewport, width, height, y as u32, row)
            });
    } else {
        for (y, row) in rows.chunks_exact_mut(stride).enumerate() {
            render_row(config, scene, camera, viewport, width, height, y as u32, row);
        }
    }

    log::debug!(
        "rendered {width}x{height} frame in {:.2?} (parallel: {})",
        start.elapsed(),
        config.parallel
    );
}

#[allow(clippy::too_many_arguments)]
fn render_row(
    config: &RenderConfig,
    scene: &Scene,
    camera: &Camera,
    viewport: &Viewport,
    width: u32,
    height: u32,
    y: u32,
    row: &mut [u8],
) {
    let half_w = (width / 2) as i64;
    let half_h = (height / 2) as i64;
    // image row 0 is the top of the view
    let cy = half_h - y as i64;

    for (x, px) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let cx = x as i64 - half_w;
        let dir = camera.ray_direction(viewport, cx, cy, width, height);
        let color = trace_ray(&Ray::new(camera.position, dir), config.ray_t(), scene);
        px.copy_from_slice(&color.to_array());
    }
}
