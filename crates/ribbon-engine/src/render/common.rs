//! GPU-side types shared by the ribbon renderer.

use bytemuck::{Pod, Zeroable};

use crate::paint::RibbonMaterial;

use super::Camera;

// ── uniform ───────────────────────────────────────────────────────────────

/// Mirrors `struct Ribbon` in `shaders/ribbon.wgsl` (160 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct RibbonUniform {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub line_color: [f32; 3],
    pub width: f32,
    pub use_vertex_color: u32,
    pub _pad: [u32; 3], // 16-byte struct alignment
}

impl RibbonUniform {
    pub(super) fn new(camera: &Camera, material: &RibbonMaterial, use_vertex_color: bool) -> Self {
        Self {
            view: camera.view.to_cols_array_2d(),
            proj: camera.projection.to_cols_array_2d(),
            line_color: material.line_color.to_array(),
            width: material.width,
            use_vertex_color: u32::from(use_vertex_color),
            _pad: [0; 3],
        }
    }
}

/// Minimum binding size for the ribbon uniform buffer.
pub(super) fn uniform_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<RibbonUniform>() as u64)
        .expect("RibbonUniform has non-zero size by construction")
}

// ── vertex attributes ─────────────────────────────────────────────────────

/// One vertex buffer per attribute, matching the `RibbonBuffer` arrays.
pub(super) const POSITION_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![0 => Float32x3];
pub(super) const NEIGHBOR_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![1 => Float32x3];
pub(super) const MITER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32];
pub(super) const COLOR_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![3 => Float32x3];

pub(super) const VEC3_STRIDE: u64 = std::mem::size_of::<[f32; 3]>() as u64;
pub(super) const SCALAR_STRIDE: u64 = std::mem::size_of::<f32>() as u64;

fn layout(
    array_stride: u64,
    attributes: &'static [wgpu::VertexAttribute],
) -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

pub(super) fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 4] {
    [
        layout(VEC3_STRIDE, &POSITION_ATTRS),
        layout(VEC3_STRIDE, &NEIGHBOR_ATTRS),
        layout(SCALAR_STRIDE, &MITER_ATTRS),
        layout(VEC3_STRIDE, &COLOR_ATTRS),
    ]
}

// ── capacity ──────────────────────────────────────────────────────────────

/// Vertex capacity to allocate for `required` vertices.
pub(super) fn vertex_capacity_for(required: usize) -> usize {
    required.next_power_of_two().max(256)
}
