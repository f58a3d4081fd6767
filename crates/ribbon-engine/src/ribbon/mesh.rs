use crate::paint::RibbonMaterial;

use super::{PointSequence, RibbonBuffer};

/// Primitive topology used to draw each group.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DrawMode {
    #[default]
    TriangleStrip,
}

impl DrawMode {
    #[inline]
    pub fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            DrawMode::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
        }
    }
}

/// Drawable ribbon: geometry, material and draw mode.
///
/// This is what `render::RibbonRenderer` consumes. Geometry changes go through
/// `set_sequences` / `buffer_mut`; call `rebuild_if_dirty` before rendering.
#[derive(Debug, Default)]
pub struct RibbonMesh {
    buffer: RibbonBuffer,
    material: RibbonMaterial,
    draw_mode: DrawMode,
}

impl RibbonMesh {
    pub fn new(buffer: RibbonBuffer, material: RibbonMaterial) -> Self {
        Self {
            buffer,
            material,
            draw_mode: DrawMode::TriangleStrip,
        }
    }

    /// Builds a mesh for `primary` / `collection`, expanded immediately.
    pub fn from_sequences(
        primary: Option<PointSequence>,
        collection: Vec<PointSequence>,
        material: RibbonMaterial,
    ) -> Self {
        Self::new(RibbonBuffer::from_sequences(primary, collection), material)
    }

    #[inline]
    pub fn buffer(&self) -> &RibbonBuffer {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut RibbonBuffer {
        &mut self.buffer
    }

    #[inline]
    pub fn material(&self) -> &RibbonMaterial {
        &self.material
    }

    #[inline]
    pub fn material_mut(&mut self) -> &mut RibbonMaterial {
        &mut self.material
    }

    #[inline]
    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    /// Replaces the geometry input; see `RibbonBuffer::set_sequences`.
    #[inline]
    pub fn set_sequences(&mut self, primary: Option<PointSequence>, collection: Vec<PointSequence>) {
        self.buffer.set_sequences(primary, collection);
    }

    /// Rebuilds the buffer if its input changed. Returns true if it did.
    pub fn rebuild_if_dirty(&mut self) -> bool {
        if !self.buffer.is_dirty() {
            return false;
        }
        self.buffer.rebuild();
        true
    }

    /// True when fragments should take the per-vertex color attribute.
    #[inline]
    pub fn uses_vertex_colors(&self) -> bool {
        self.material.uses_vertex_colors(self.buffer.has_vertex_colors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Rgb, VertexColors};

    fn segment() -> PointSequence {
        PointSequence::from_points([[0.0; 3], [1.0, 0.0, 0.0]])
    }

    #[test]
    fn rebuild_if_dirty_runs_once() {
        let mut mesh = RibbonMesh::default();
        assert!(!mesh.rebuild_if_dirty());

        mesh.set_sequences(Some(segment()), Vec::new());
        assert!(mesh.rebuild_if_dirty());
        assert!(!mesh.rebuild_if_dirty());
        assert_eq!(mesh.buffer().len(), 4);
    }

    #[test]
    fn draws_triangle_strips() {
        let mesh = RibbonMesh::default();
        assert_eq!(mesh.draw_mode().topology(), wgpu::PrimitiveTopology::TriangleStrip);
    }

    #[test]
    fn vertex_colors_need_colored_geometry() {
        let material = RibbonMaterial::new().with_vertex_colors(VertexColors::PerVertex);
        let plain = RibbonMesh::from_sequences(Some(segment()), Vec::new(), material);
        assert!(!plain.uses_vertex_colors());

        let colored = RibbonMesh::from_sequences(
            Some(segment().with_color(Rgb::white())),
            Vec::new(),
            material,
        );
        assert!(colored.uses_vertex_colors());
    }
}
