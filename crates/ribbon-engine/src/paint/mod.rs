//! Paint model shared between geometry and renderers.
//!
//! Scope:
//! - color representation (linear RGB)
//! - ribbon material (width, fallback color, color source)

pub mod color;
pub mod material;

pub use color::Rgb;
pub use material::{RibbonMaterial, VertexColors};
