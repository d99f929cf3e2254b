//! # Skyline Model
//!
//! Turns per-day activity counts into a printable skyline: a base slab,
//! one column per active day, embossed captions and an emblem.
//!
//! ## Architecture
//!
//! ```text
//! YearGrid(s) → validate → assembler ─┬─ base      ─┐
//!                                     ├─ columns   ─┤
//!                                     ├─ caption   ─┼─> Mesh ─> binary STL
//!                                     └─ emblem    ─┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use skyline_model::{
//!     build_skyline, AssetChain, Diagnostics, SkylineOptions, SkylineRequest, YearGrid,
//! };
//!
//! let first_day = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
//! let grid = YearGrid::from_daily_counts(first_day, &[0, 3, 0, 8, 1, 0, 0]);
//! let request = SkylineRequest::single_year("octocat", 2024, &grid);
//!
//! let mut diagnostics = Diagnostics::new();
//! let mesh = build_skyline(
//!     &request,
//!     &SkylineOptions::default(),
//!     &AssetChain::bundled(),
//!     &mut diagnostics,
//! )
//! .unwrap();
//! assert!(mesh.triangle_count() > 4 * 12);
//! ```

pub mod activity;
pub mod assembler;
pub mod assets;
pub mod caption;
pub mod columns;
pub mod diagnostics;
pub mod dimensions;
pub mod emblem;
pub mod error;
pub mod generator;
pub mod options;
pub mod output;

pub use activity::{ActivityDay, ActivityWeek, SkylineRequest, YearGrid};
pub use assembler::{assemble, Producer, ProducerContext, ProducerOutcome};
pub use assets::{AssetChain, AssetSource, BundledAssets, DirectoryAssets, InMemoryAssets};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use dimensions::ModelDimensions;
pub use error::{ModelError, ModelResult};
pub use generator::{build_skyline, write_skyline, GenerationReport};
pub use options::{HeightScaling, SkylineOptions};
