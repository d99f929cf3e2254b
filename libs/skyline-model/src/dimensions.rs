//! Overall model footprint, derived once per run from the year count.

use config::constants::{
    CELL_SIZE, DAYS_PER_WEEK, GRID_WEEKS, LATTICE_PADDING, YEAR_OFFSET, YEAR_SPACING,
};
use skyline_mesh::MeshError;

use crate::error::ModelResult;

/// Footprint of the base slab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelDimensions {
    /// Extent along X (the week axis).
    pub width: f64,
    /// Extent along Y (days, then stacked years).
    pub depth: f64,
    /// Number of stacked years.
    pub years: usize,
}

impl ModelDimensions {
    /// Computes the footprint for `years` stacked years.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidDimensions`] (wrapped in
    /// [`crate::ModelError::Geometry`]) when `years` is 0.
    ///
    /// # Examples
    /// ```
    /// use skyline_model::ModelDimensions;
    /// let dims = ModelDimensions::for_years(1).unwrap();
    /// assert_eq!(dims.width, 53.0 * 2.5 + 5.0);
    /// assert_eq!(dims.depth, 7.0 * 2.5 + 5.0);
    /// ```
    pub fn for_years(years: usize) -> ModelResult<Self> {
        if years == 0 {
            return Err(MeshError::invalid_dimensions("year count must be positive").into());
        }
        Ok(Self {
            width: GRID_WEEKS as f64 * CELL_SIZE + 2.0 * LATTICE_PADDING,
            depth: (DAYS_PER_WEEK * years) as f64 * CELL_SIZE + 2.0 * LATTICE_PADDING,
            years,
        })
    }

    /// Y shift of the lattice for `year_index` (0 is the front-most year).
    pub fn year_offset(year_index: usize) -> f64 {
        year_index as f64 * (YEAR_OFFSET + YEAR_SPACING)
    }
}
