//! # Config Crate
//!
//! Centralized configuration constants for the skyline model generator.
//! Every model dimension, placement factor and tolerance used by the
//! geometry crates is defined here exactly once.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CELL_SIZE, GRID_WEEKS, MAX_HEIGHT, MIN_HEIGHT};
//!
//! // Width of the column lattice for a full year, without padding
//! let lattice_width = GRID_WEEKS as f64 * CELL_SIZE;
//! assert!(lattice_width > 0.0);
//!
//! // Columns never exceed the tallest configured height
//! assert!(MIN_HEIGHT < MAX_HEIGHT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetres**: All lengths are in model units (mm for slicers)
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
