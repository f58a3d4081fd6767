//! Coordinate types shared by the expander, the buffer and the renderer.
//!
//! Canonical CPU space:
//! - World units, right-handed
//! - Points are submitted in world space; the view transform happens in the
//!   vertex shader
//!
//! `Viewport` carries the target size in physical pixels and its aspect ratio.

mod vec3;
mod viewport;

pub use vec3::Vec3;
pub use viewport::Viewport;
