use crate::ribbon::{DrawMode, RibbonBuffer, RibbonMesh};
use crate::render::{RenderCtx, RenderTarget};

use super::common::{
    uniform_min_binding_size, vertex_capacity_for, vertex_layouts, RibbonUniform, SCALAR_STRIDE,
    VEC3_STRIDE,
};

/// Ribbon renderer.
///
/// Uploads the four attribute arrays of a `RibbonMesh` into separate vertex
/// buffers and issues one triangle-strip draw per group. Uploads are skipped
/// while the same buffer is drawn again unchanged; switching meshes or
/// rebuilding re-uploads.
#[derive(Default)]
pub struct RibbonRenderer {
    pipeline_key: Option<(wgpu::TextureFormat, DrawMode)>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_ubo: Option<wgpu::Buffer>,

    vertex_buffers: Option<VertexBuffers>,
    vertex_capacity: usize,
    /// `RibbonBuffer::upload_key` of the data currently in the vertex buffers.
    uploaded_key: Option<(u64, u64)>,

    warned_dirty: bool,
    warned_oversized: bool,
}

struct VertexBuffers {
    positions: wgpu::Buffer,
    neighbors: wgpu::Buffer,
    miters: wgpu::Buffer,
    colors: wgpu::Buffer,
}

impl RibbonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `mesh` into `target`.
    ///
    /// Does nothing when the mesh's buffer is not visible. The buffer is drawn
    /// as it was last rebuilt; pending input changes are not picked up here.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, mesh: &RibbonMesh) {
        let buffer = mesh.buffer();
        if !buffer.is_visible() {
            return;
        }
        self.note_dirty(buffer.is_dirty());

        self.ensure_pipeline(ctx, mesh.draw_mode());
        self.ensure_bindings(ctx);

        // Mutating methods must happen before borrowing pipeline/buffers immutably.
        self.write_uniform(ctx, mesh);
        self.upload_vertices(ctx, buffer);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbs) = self.vertex_buffers.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ribbon pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbs.positions.slice(..));
        rpass.set_vertex_buffer(1, vbs.neighbors.slice(..));
        rpass.set_vertex_buffer(2, vbs.miters.slice(..));
        rpass.set_vertex_buffer(3, vbs.colors.slice(..));

        // Separate draws so each line starts a fresh strip.
        let mut skipped = 0usize;
        for group in buffer.groups() {
            match group.vertices() {
                Some(range) => rpass.draw(range, 0..1),
                None => skipped += 1,
            }
        }
        drop(rpass);

        if skipped > 0 && !self.warned_oversized {
            log::warn!("RibbonRenderer: skipped {skipped} groups beyond the u32 vertex range");
            self.warned_oversized = true;
        }
    }

    /// Reports (once) that a buffer with pending input changes is being drawn.
    fn note_dirty(&mut self, dirty: bool) {
        if dirty && !self.warned_dirty {
            log::warn!("RibbonRenderer: drawing a dirty buffer; call rebuild() first");
            self.warned_dirty = true;
        }
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, draw_mode: DrawMode) {
        let key = (ctx.target_format, draw_mode);
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return;
        }
        log::debug!("RibbonRenderer: building pipeline for {:?}", ctx.target_format);

        let shader_src = include_str!("shaders/ribbon.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ribbon shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("ribbon bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(uniform_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("ribbon pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ribbon pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &vertex_layouts(),
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.target_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: draw_mode.topology(),
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Strip winding alternates with the miter sides.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.uniform_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ribbon uniform ubo"),
            size: std::mem::size_of::<RibbonUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ribbon bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_ubo.as_entire_binding(),
            }],
        });

        self.uniform_ubo = Some(uniform_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_uniform(&mut self, ctx: &RenderCtx<'_>, mesh: &RibbonMesh) {
        let Some(ubo) = self.uniform_ubo.as_ref() else { return };
        let u = RibbonUniform::new(&ctx.camera, mesh.material(), mesh.uses_vertex_colors());
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn upload_vertices(&mut self, ctx: &RenderCtx<'_>, buffer: &RibbonBuffer) {
        if !needs_upload(self.uploaded_key, buffer.upload_key(), self.vertex_buffers.is_some()) {
            return;
        }

        self.ensure_vertex_capacity(ctx, buffer.len());
        let Some(vbs) = self.vertex_buffers.as_ref() else { return };

        ctx.queue.write_buffer(&vbs.positions, 0, bytemuck::cast_slice(buffer.positions()));
        ctx.queue.write_buffer(&vbs.neighbors, 0, bytemuck::cast_slice(buffer.neighbors()));
        ctx.queue.write_buffer(&vbs.miters, 0, bytemuck::cast_slice(buffer.miters()));
        ctx.queue.write_buffer(&vbs.colors, 0, bytemuck::cast_slice(buffer.colors()));

        self.uploaded_key = Some(buffer.upload_key());
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required_vertices: usize) {
        if required_vertices <= self.vertex_capacity && self.vertex_buffers.is_some() {
            return;
        }

        let new_cap = vertex_capacity_for(required_vertices);
        log::debug!("RibbonRenderer: growing vertex buffers to {new_cap} vertices");

        let create = |label: &str, stride: u64| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: new_cap as u64 * stride,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };

        self.vertex_buffers = Some(VertexBuffers {
            positions: create("ribbon position vbo", VEC3_STRIDE),
            neighbors: create("ribbon neighbor vbo", VEC3_STRIDE),
            miters: create("ribbon miter vbo", SCALAR_STRIDE),
            colors: create("ribbon color vbo", VEC3_STRIDE),
        });
        self.vertex_capacity = new_cap;
    }
}

/// True unless `current` is already resident in existing vertex buffers.
fn needs_upload(uploaded: Option<(u64, u64)>, current: (u64, u64), have_buffers: bool) -> bool {
    !have_buffers || uploaded != Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ribbon::PointSequence;

    fn line(n: usize) -> PointSequence {
        PointSequence::from_points((0..n).map(|i| [i as f32, 0.0, 0.0]))
    }

    #[test]
    fn second_mesh_with_same_generation_is_uploaded() {
        let a = RibbonBuffer::from_sequences(Some(line(3)), Vec::new());
        let b = RibbonBuffer::from_sequences(Some(line(101)), Vec::new());
        assert_eq!(a.generation(), b.generation());
        assert!(needs_upload(Some(a.upload_key()), b.upload_key(), true));
    }

    #[test]
    fn unchanged_buffer_is_not_reuploaded() {
        let a = RibbonBuffer::from_sequences(Some(line(3)), Vec::new());
        assert!(!needs_upload(Some(a.upload_key()), a.upload_key(), true));
    }

    #[test]
    fn rebuilt_buffer_is_reuploaded() {
        let mut a = RibbonBuffer::from_sequences(Some(line(3)), Vec::new());
        let before = a.upload_key();
        a.rebuild();
        assert!(needs_upload(Some(before), a.upload_key(), true));
    }

    #[test]
    fn missing_buffers_force_upload() {
        let a = RibbonBuffer::from_sequences(Some(line(3)), Vec::new());
        assert!(needs_upload(None, a.upload_key(), false));
        assert!(needs_upload(Some(a.upload_key()), a.upload_key(), false));
    }

    #[test]
    fn dirty_draw_is_reported_once() {
        let mut renderer = RibbonRenderer::new();
        renderer.note_dirty(false);
        assert!(!renderer.warned_dirty);
        renderer.note_dirty(true);
        assert!(renderer.warned_dirty);
        renderer.note_dirty(true);
        assert!(renderer.warned_dirty);
    }
}
