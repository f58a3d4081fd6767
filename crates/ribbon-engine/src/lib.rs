//! Ribbon engine crate.
//!
//! Turns polylines into constant-width ribbons: each point is expanded into
//! vertices that carry their neighbor and a miter side, and the vertex shader
//! pushes them apart by the ribbon width.
//!
//! - `ribbon`: input lines, expansion, flat buffers, draw groups
//! - `paint`: colors and the ribbon material
//! - `render`: wgpu shading stage
//! - `device`: headless GPU setup and readback

pub mod device;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod ribbon;
