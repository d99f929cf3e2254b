//! # Primitives
//!
//! Flat quads and axis-aligned boxes, the only shapes a skyline is built
//! from.
//!
//! Coordinate convention: X runs along the weeks, Y runs away from the viewer
//! (days, then stacked years), Z points up.

pub mod cuboid;
pub mod quad;

pub use cuboid::{make_base, make_box, make_column, BOX_TRIANGLES};
pub use quad::make_quad;
