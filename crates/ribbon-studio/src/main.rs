//! Renders a demo set of ribbons off-screen and writes the result as a PNG.

mod args;
mod scene;

use anyhow::{Context, Result};
use glam::Vec3;

use ribbon_engine::coords::Viewport;
use ribbon_engine::device::{Gpu, GpuInit};
use ribbon_engine::logging::{init_logging, LoggingConfig};
use ribbon_engine::paint::{Rgb, RibbonMaterial, VertexColors};
use ribbon_engine::render::{Camera, RenderCtx, RenderTarget, RibbonRenderer};
use ribbon_engine::ribbon::RibbonMesh;

use args::StudioArgs;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = StudioArgs::from_env()?;

    let (primary, collection) = scene::demo();
    let material = RibbonMaterial::new()
        .with_width(0.25)
        .with_line_color(Rgb::from_srgb_u8(230, 60, 60))
        .with_vertex_colors(VertexColors::PerVertex);
    let mesh = RibbonMesh::from_sequences(primary, collection, material);

    let buffer = mesh.buffer();
    log::info!(
        "expanded {} lines into {} vertices across {} groups",
        buffer.sequences().count(),
        buffer.len(),
        buffer.groups().len()
    );
    for (i, g) in buffer.groups().iter().enumerate() {
        log::debug!("group {i}: [{}, {})", g.start, g.end());
    }

    let gpu = pollster::block_on(Gpu::new(GpuInit::default()))?;
    let target = gpu.create_target(args.width, args.height)?;
    let viewport = Viewport::new(args.width as f32, args.height as f32);
    let camera = Camera::perspective(
        Vec3::new(0.0, 9.0, 14.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::Y,
        45f32.to_radians(),
        viewport.aspect(),
    );

    let mut renderer = RibbonRenderer::new();
    let mut encoder = gpu.create_encoder();
    {
        let ctx = RenderCtx::new(gpu.device(), gpu.queue(), target.format, camera);
        let mut rt = RenderTarget::new(&mut encoder, &target.view);
        rt.clear(Rgb::from_srgb_u8(18, 18, 24));
        renderer.render(&ctx, &mut rt, &mesh);
    }
    gpu.submit(encoder);

    let pixels = gpu.read_rgba8(&target)?;
    image::save_buffer(
        &args.output,
        &pixels,
        args.width,
        args.height,
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("failed to write {}", args.output.display()))?;

    log::info!("wrote {}", args.output.display());
    Ok(())
}
