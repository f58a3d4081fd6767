//! GPU shading stage for ribbons.
//!
//! `RibbonRenderer` uploads a `RibbonMesh`'s flat arrays as vertex buffers and
//! draws one triangle strip per group. The perpendicular offset is computed in
//! the vertex shader; `offset` holds the same math on the CPU.
//!
//! Convention:
//! - CPU geometry is in world units
//! - the offset is applied in view space, before projection, so the ribbon
//!   width is measured in view-space units

mod camera;
mod common;
mod ctx;
mod ribbon;

pub mod offset;

pub use camera::Camera;
pub use ctx::{RenderCtx, RenderTarget};
pub use ribbon::RibbonRenderer;
