use glam::{Mat4, Vec3};

/// View and projection transforms used by the vertex shader.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::identity()
    }
}

impl Camera {
    #[inline]
    pub const fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    /// Geometry is already in clip space.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }

    /// Right-handed perspective camera looking from `eye` at `target`.
    ///
    /// `fov_y` is in radians. Depth maps to `[0, 1]` as wgpu expects.
    pub fn perspective(eye: Vec3, target: Vec3, up: Vec3, fov_y: f32, aspect: f32) -> Self {
        Self::new(
            Mat4::look_at_rh(eye, target, up),
            Mat4::perspective_rh(fov_y, aspect, 0.1, 1000.0),
        )
    }
}
