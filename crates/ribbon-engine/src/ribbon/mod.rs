//! Polyline to ribbon geometry.
//!
//! Responsibilities:
//! - describe input polylines (`PointSequence`, `LineColor`)
//! - expand each polyline into per-vertex attributes (`expand`)
//! - aggregate all polylines into flat arrays with one draw range per line
//!   (`RibbonBuffer`, `Group`)
//! - pair geometry with a material for the renderer (`RibbonMesh`)
//!
//! Nothing here fails: degenerate or malformed input produces less output,
//! never an error.

mod buffer;
mod group;
mod line;
mod mesh;

pub mod expand;

pub use buffer::RibbonBuffer;
pub use expand::{expand, vertex_count, ExpandedLine};
pub use group::Group;
pub use line::{LineColor, PointSequence};
pub use mesh::{DrawMode, RibbonMesh};
