//! # Voxel Extrusion
//!
//! Turns a rasterized bitmap (rendered caption text or the emblem) into one
//! small box per active pixel.
//!
//! Pixel `(col, row)` lands at
//! `origin + (col * pitch, 0, -row * pitch)`: columns advance along +X and
//! rows advance down -Z, so the bitmap reads upright on the model's front
//! face. `origin` is therefore the minimum corner of the top-left pixel.

use config::constants::ACTIVE_PIXEL_THRESHOLD;
use image::GrayImage;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::primitives::{make_box, BOX_TRIANGLES};
use crate::vector::Point3;

/// Placement of a voxelized bitmap in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelGrid {
    /// Minimum corner of the voxel for pixel (0, 0).
    pub origin: Point3,
    /// Distance between neighbouring pixel positions.
    pub pitch: f64,
    /// Edge length of each voxel along X and Z.
    pub voxel_size: f64,
    /// Extrusion thickness along Y.
    pub depth: f64,
}

impl VoxelGrid {
    /// A grid whose voxels exactly tile the pixel lattice.
    ///
    /// # Examples
    /// ```
    /// use skyline_mesh::voxel::VoxelGrid;
    /// use skyline_mesh::Point3;
    /// let grid = VoxelGrid::uniform(Point3::ZERO, 0.5, 1.5);
    /// assert_eq!(grid.pitch, grid.voxel_size);
    /// ```
    pub fn uniform(origin: Point3, voxel_size: f64, depth: f64) -> Self {
        Self {
            origin,
            pitch: voxel_size,
            voxel_size,
            depth,
        }
    }

    /// Minimum corner of the voxel for a pixel.
    pub fn voxel_origin(&self, col: u32, row: u32) -> Point3 {
        self.origin + Point3::new(f64::from(col) * self.pitch, 0.0, -f64::from(row) * self.pitch)
    }
}

/// Returns true when a rendered channel value exceeds half intensity.
///
/// # Examples
/// ```
/// use skyline_mesh::voxel::is_active;
/// assert!(is_active(255));
/// assert!(is_active(128));
/// assert!(!is_active(127));
/// ```
#[inline]
pub fn is_active(value: u8) -> bool {
    value > ACTIVE_PIXEL_THRESHOLD
}

/// Counts the active pixels of a bitmap.
pub fn active_pixel_count(bitmap: &GrayImage) -> usize {
    bitmap.pixels().filter(|p| is_active(p.0[0])).count()
}

/// Extrudes every active pixel of `bitmap` into a box.
///
/// Pixels are visited row by row, left to right, so the triangle order is
/// deterministic for a given bitmap.
///
/// # Errors
///
/// [`MeshError::InvalidDimensions`] when the grid pitch, voxel size or depth
/// is not positive. A failure on any voxel aborts the whole bitmap.
///
/// # Example
///
/// ```rust
/// use image::{GrayImage, Luma};
/// use skyline_mesh::voxel::{voxelize, VoxelGrid};
/// use skyline_mesh::Point3;
///
/// let mut bitmap = GrayImage::new(4, 2);
/// bitmap.put_pixel(1, 0, Luma([255]));
/// bitmap.put_pixel(3, 1, Luma([200]));
///
/// let mesh = voxelize(&bitmap, &VoxelGrid::uniform(Point3::ZERO, 1.0, 1.0)).unwrap();
/// assert_eq!(mesh.triangle_count(), 2 * 12);
/// ```
pub fn voxelize(bitmap: &GrayImage, grid: &VoxelGrid) -> MeshResult<Mesh> {
    if !(grid.pitch > 0.0 && grid.pitch.is_finite()) {
        return Err(MeshError::invalid_dimensions(format!(
            "voxel pitch must be positive, got {}",
            grid.pitch
        )));
    }

    let voxel_extent = Point3::new(grid.voxel_size, grid.depth, grid.voxel_size);
    let mut mesh = Mesh::with_capacity(active_pixel_count(bitmap) * BOX_TRIANGLES);

    for (col, row, pixel) in bitmap.enumerate_pixels() {
        if is_active(pixel.0[0]) {
            mesh.append(make_box(grid.voxel_origin(col, row), voxel_extent)?);
        }
    }

    tracing::trace!(
        width = bitmap.width(),
        height = bitmap.height(),
        triangles = mesh.triangle_count(),
        "voxelized bitmap"
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests;
