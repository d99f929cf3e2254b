//! # Contribution Columns
//!
//! One square column per active day. Heights use square-root scaling so a
//! single outlier does not flatten every other day:
//!
//! ```text
//! height = MIN_HEIGHT + sqrt(count) / sqrt(max) * (MAX_HEIGHT - MIN_HEIGHT)
//! ```
//!
//! Day `d` of week `w` in year index `i` stands at
//! `x = PAD + w * CELL`, `y = PAD + i * (YEAR_OFFSET + YEAR_SPACING) + d * CELL`.
//! Year index 0 is the most recent year and sits at the front.

use config::constants::{CELL_SIZE, LATTICE_PADDING, MAX_HEIGHT, MIN_HEIGHT};
use skyline_mesh::primitives::{make_column, BOX_TRIANGLES};
use skyline_mesh::Mesh;

use crate::activity::YearGrid;
use crate::diagnostics::Diagnostics;
use crate::dimensions::ModelDimensions;
use crate::error::{ModelError, ModelResult};
use crate::options::HeightScaling;

const SOURCE: &str = "columns";

/// Maps a count to a column height.
///
/// # Examples
/// ```
/// use skyline_model::columns::normalize_height;
/// assert_eq!(normalize_height(0, 10), 0.0);
/// assert_eq!(normalize_height(10, 10), 25.0);
/// assert_eq!(normalize_height(3, 0), 2.5);
/// ```
pub fn normalize_height(count: u32, max_count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    if max_count == 0 {
        return MIN_HEIGHT;
    }
    let ratio = f64::from(count).sqrt() / f64::from(max_count).sqrt();
    MIN_HEIGHT + ratio * (MAX_HEIGHT - MIN_HEIGHT)
}

/// Footprint origin (minimum X, minimum Y) of a lattice cell.
pub fn cell_origin(year_index: usize, week: usize, day: usize) -> (f64, f64) {
    let x = LATTICE_PADDING + week as f64 * CELL_SIZE;
    let y = LATTICE_PADDING + ModelDimensions::year_offset(year_index) + day as f64 * CELL_SIZE;
    (x, y)
}

/// Builds the columns of one year.
///
/// A cell whose column cannot be built is skipped with a warning; the rest of
/// the year is still emitted.
pub fn year_columns(
    grid: &YearGrid,
    year_index: usize,
    max_count: u32,
    diagnostics: &mut Diagnostics,
) -> Mesh {
    let mut mesh = Mesh::with_capacity(grid.active_days() * BOX_TRIANGLES);

    for (week_index, week) in grid.weeks.iter().enumerate() {
        for (day_index, day) in week.days.iter().enumerate() {
            let height = normalize_height(day.count, max_count);
            if height <= 0.0 {
                continue;
            }
            let (x, y) = cell_origin(year_index, week_index, day_index);
            match make_column(x, y, height, CELL_SIZE) {
                Ok(column) => mesh.append(column),
                Err(err) => diagnostics.warn(
                    SOURCE,
                    format!("skipping column for {} (count {}): {err}", day.date, day.count),
                ),
            }
        }
    }

    mesh
}

/// Builds the columns of every year, oldest first in `years`.
///
/// The last grid (the most recent year) gets year index 0 and stands at the
/// front of the model.
///
/// # Errors
///
/// [`ModelError::InvalidInput`] when `years` is empty.
pub fn range_columns(
    years: &[YearGrid],
    scaling: HeightScaling,
    diagnostics: &mut Diagnostics,
) -> ModelResult<Mesh> {
    if years.is_empty() {
        return Err(ModelError::invalid_input("activity data cannot be empty"));
    }

    let global_max = years.iter().map(YearGrid::max_count).max().unwrap_or(0);
    let mut mesh = Mesh::new();

    for (year_index, grid) in years.iter().rev().enumerate() {
        let max_count = match scaling {
            HeightScaling::PerYear => grid.max_count(),
            HeightScaling::Global => global_max,
        };
        let columns = year_columns(grid, year_index, max_count, diagnostics);
        tracing::debug!(
            year_index,
            max_count,
            columns = columns.triangle_count() / BOX_TRIANGLES,
            "built year columns"
        );
        mesh.append(columns);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn grid(counts: &[u32]) -> YearGrid {
        YearGrid::from_daily_counts(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(), counts)
    }

    #[test]
    fn test_normalize_height_endpoints() {
        assert_eq!(normalize_height(0, 0), 0.0);
        assert_eq!(normalize_height(0, 50), 0.0);
        assert_abs_diff_eq!(normalize_height(50, 50), MAX_HEIGHT);
        assert_eq!(normalize_height(7, 0), MIN_HEIGHT);
    }

    #[test]
    fn test_normalize_height_square_root() {
        let expected = MIN_HEIGHT + (0.5f64).sqrt() * (MAX_HEIGHT - MIN_HEIGHT);
        assert_abs_diff_eq!(normalize_height(5, 10), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_height_monotonic() {
        let max = 97;
        let heights: Vec<f64> = (0..=max).map(|c| normalize_height(c, max)).collect();
        assert!(heights.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_idle_days_emit_nothing() {
        let mut diagnostics = Diagnostics::new();
        let mesh = year_columns(&grid(&[0; 14]), 0, 0, &mut diagnostics);
        assert!(mesh.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_column_position_and_height() {
        let mut counts = [0; 14];
        counts[9] = 4; // week 1, day 2
        let mut diagnostics = Diagnostics::new();
        let mesh = year_columns(&grid(&counts), 0, 4, &mut diagnostics);

        assert_eq!(mesh.triangle_count(), BOX_TRIANGLES);
        let (min, max) = mesh.bounding_box().unwrap();
        assert_abs_diff_eq!(min.x, LATTICE_PADDING + CELL_SIZE);
        assert_abs_diff_eq!(min.y, LATTICE_PADDING + 2.0 * CELL_SIZE);
        assert_abs_diff_eq!(min.z, 0.0);
        assert_abs_diff_eq!(max.z, MAX_HEIGHT);
    }

    #[test]
    fn test_most_recent_year_in_front() {
        let older = grid(&[1]);
        let newer = grid(&[0, 1]);
        let mut diagnostics = Diagnostics::new();
        let mesh =
            range_columns(&[older, newer], HeightScaling::PerYear, &mut diagnostics).unwrap();

        assert_eq!(mesh.triangle_count(), 2 * BOX_TRIANGLES);
        let newer_min_y = mesh.triangles()[..BOX_TRIANGLES]
            .iter()
            .flat_map(|t| t.vertices())
            .map(|v| v.y)
            .fold(f64::INFINITY, f64::min);
        let older_min_y = mesh.triangles()[BOX_TRIANGLES..]
            .iter()
            .flat_map(|t| t.vertices())
            .map(|v| v.y)
            .fold(f64::INFINITY, f64::min);

        assert_abs_diff_eq!(newer_min_y, LATTICE_PADDING + CELL_SIZE);
        assert_abs_diff_eq!(older_min_y, LATTICE_PADDING + ModelDimensions::year_offset(1));
        assert!(older_min_y > newer_min_y + CELL_SIZE);
    }

    #[test]
    fn test_global_scaling_uses_range_maximum() {
        let quiet = grid(&[2]);
        let busy = grid(&[8]);
        let mut diagnostics = Diagnostics::new();

        let per_year =
            range_columns(&[quiet.clone(), busy.clone()], HeightScaling::PerYear, &mut diagnostics)
                .unwrap();
        let global =
            range_columns(&[quiet, busy], HeightScaling::Global, &mut diagnostics).unwrap();

        let top = |mesh: &Mesh| {
            mesh.triangles()[BOX_TRIANGLES..]
                .iter()
                .flat_map(|t| t.vertices())
                .map(|v| v.z)
                .fold(0.0, f64::max)
        };
        assert_abs_diff_eq!(top(&per_year), MAX_HEIGHT);
        assert_abs_diff_eq!(top(&global), normalize_height(2, 8));
    }

    #[test]
    fn test_empty_range_rejected() {
        let mut diagnostics = Diagnostics::new();
        let err = range_columns(&[], HeightScaling::PerYear, &mut diagnostics).unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput { .. }));
    }
}
