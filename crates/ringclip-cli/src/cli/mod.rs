//! CLI command implementations.
//!
//! - `clip` - Clip subject polygons against a boundary
//! - `hull` - Outer hull (union) of all polygons in a file
//! - `overlap` - Overlap test between two polygons
//! - `import` - SVG paths to polygon JSON

pub mod clip;
pub mod common;
pub mod hull;
pub mod import;
pub mod overlap;

pub use clip::cmd_clip;
pub use hull::cmd_hull;
pub use import::cmd_import;
pub use overlap::cmd_overlap;
