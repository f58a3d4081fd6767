use super::Rgb;

/// Where the fragment color of a ribbon comes from.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum VertexColors {
    /// Every fragment uses `RibbonMaterial::line_color`.
    #[default]
    None,
    /// Fragments use the per-vertex color attribute written by the expander.
    PerVertex,
}

/// Shading parameters for a ribbon.
///
/// Consumed verbatim by the vertex/fragment stages:
/// - `width` is the full ribbon width in view-space units
/// - `line_color` is the fallback color when per-vertex colors are not in use
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RibbonMaterial {
    pub width: f32,
    pub line_color: Rgb,
    pub vertex_colors: VertexColors,
}

impl Default for RibbonMaterial {
    fn default() -> Self {
        Self {
            width: 0.2,
            line_color: Rgb::red(),
            vertex_colors: VertexColors::None,
        }
    }
}

impl RibbonMaterial {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn with_line_color(mut self, color: Rgb) -> Self {
        self.line_color = color;
        self
    }

    #[inline]
    pub fn with_vertex_colors(mut self, mode: VertexColors) -> Self {
        self.vertex_colors = mode;
        self
    }

    #[inline]
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    #[inline]
    pub fn set_line_color(&mut self, color: Rgb) {
        self.line_color = color;
    }

    /// Returns true when fragments should read the per-vertex color attribute.
    ///
    /// Requires both the material to ask for it and the geometry to carry at
    /// least one resolved color; otherwise `line_color` is used so that
    /// uncolored geometry never renders as black.
    #[inline]
    pub fn uses_vertex_colors(&self, geometry_has_colors: bool) -> bool {
        self.vertex_colors == VertexColors::PerVertex && geometry_has_colors
    }
}
