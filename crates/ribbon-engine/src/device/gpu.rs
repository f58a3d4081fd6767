use anyhow::{Context, Result};

use super::target::{padded_bytes_per_row, unpad_rows, RenderTexture};

/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Adapter preference. Ribbons are cheap; low power is a fine default.
    pub power_preference: wgpu::PowerPreference,

    /// Accept a software adapter (e.g. when running without a GPU).
    pub force_fallback_adapter: bool,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability unless a feature is strictly necessary.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::LowPower,
            force_fallback_adapter: false,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
        }
    }
}

/// Owns wgpu core objects for off-screen rendering.
///
/// - creates and stores Instance/Adapter/Device/Queue
/// - creates render targets and command encoders
/// - submits work and reads targets back
pub struct Gpu {
    // Kept alive for the lifetime of the device.
    _instance: wgpu::Instance,
    _adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl Gpu {
    /// Creates a GPU context with no surface.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(init: GpuInit) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: None,
                force_fallback_adapter: init.force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("ribbon-engine device"),
                required_features: init.required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        Ok(Gpu {
            _instance: instance,
            _adapter: adapter,
            device,
            queue,
        })
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Creates an off-screen RGBA8 sRGB target of `width` x `height` pixels.
    pub fn create_target(&self, width: u32, height: u32) -> Result<RenderTexture> {
        anyhow::ensure!(width > 0 && height > 0, "render target has zero size");
        let max = self.device.limits().max_texture_dimension_2d;
        anyhow::ensure!(
            width <= max && height <= max,
            "render target {width}x{height} exceeds device limit {max}"
        );
        Ok(RenderTexture::new(&self.device, width, height))
    }

    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("ribbon frame encoder"),
            })
    }

    /// Submits the recorded commands.
    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        self.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Copies `target` back to the CPU as tightly packed RGBA8 rows.
    ///
    /// Blocks until the GPU has finished all submitted work.
    pub fn read_rgba8(&self, target: &RenderTexture) -> Result<Vec<u8>> {
        let padded_row = padded_bytes_per_row(target.width);

        let readback = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ribbon readback buffer"),
            size: padded_row as u64 * target.height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self.create_encoder();
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &target.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &readback,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(target.height),
                },
            },
            target.extent(),
        );
        self.submit(encoder);

        let slice = readback.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |res| {
            // Receiver outlives the poll below; a send failure means it was dropped early.
            let _ = tx.send(res);
        });

        self.device
            .poll(wgpu::PollType::wait_indefinitely())
            .context("device poll failed during readback")?;
        rx.recv()
            .context("readback map callback was never called")?
            .context("failed to map readback buffer")?;

        let pixels = {
            let data = slice.get_mapped_range();
            unpad_rows(&data, target.width, target.height, padded_row)
        };
        readback.unmap();

        Ok(pixels)
    }
}
