//! Headless GPU device management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue without a window
//! - creating off-screen color targets
//! - reading rendered targets back to the CPU

mod gpu;
mod target;

pub use gpu::{Gpu, GpuInit};
pub use target::RenderTexture;
