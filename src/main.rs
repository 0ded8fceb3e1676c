use sphere_tracer::prelude::*;
use sphere_tracer::scenes::demo_scene;
use std::io::{self, Write};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

fn main() -> io::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let scene = demo_scene();
    let camera = Camera::new(Point3::zero(), Vec3::zero());
    let viewport = Viewport::default();

    log::info!(
        "Rendering {}x{}: {} spheres, {} lights",
        WIDTH,
        HEIGHT,
        scene.spheres.len(),
        scene.lights.len()
    );
    let frame = render(&scene, &camera, &viewport, WIDTH, HEIGHT);

    let mut stdout_buffer = io::BufWriter::new(io::stdout().lock());
    frame.write_ppm(&mut stdout_buffer)?;
    stdout_buffer.flush()?;

    log::info!("Render finished!");
    Ok(())
}
