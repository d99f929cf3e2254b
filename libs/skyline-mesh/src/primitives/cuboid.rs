//! # Cuboid Primitive
//!
//! Generates closed, axis-aligned boxes: the base slab, the contribution
//! columns and every voxel.

use config::constants::BASE_HEIGHT;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::primitives::quad::make_quad;
use crate::vector::{is_valid, Point3};

/// Number of triangles emitted for one box (6 faces x 2).
pub const BOX_TRIANGLES: usize = 12;

/// Face table over the 8 corners, each quad wound counter-clockwise when
/// seen from outside.
///
/// Corner ordering:
/// 0: (0, 0, 0) - bottom-front-left
/// 1: (x, 0, 0) - bottom-front-right
/// 2: (x, y, 0) - bottom-back-right
/// 3: (0, y, 0) - bottom-back-left
/// 4: (0, 0, z) - top-front-left
/// 5: (x, 0, z) - top-front-right
/// 6: (x, y, z) - top-back-right
/// 7: (0, y, z) - top-back-left
const FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1], // bottom (z = min)
    [4, 5, 6, 7], // top (z = max)
    [0, 1, 5, 4], // front (y = min)
    [2, 3, 7, 6], // back (y = max)
    [3, 0, 4, 7], // left (x = min)
    [1, 2, 6, 5], // right (x = max)
];

/// Creates a box with its minimum corner at `origin`.
///
/// # Arguments
///
/// * `origin` - Minimum corner (front-bottom-left)
/// * `size` - Extent along X (width), Y (depth) and Z (height)
///
/// # Returns
///
/// A mesh of exactly 12 triangles with outward unit normals.
///
/// # Errors
///
/// [`MeshError::InvalidDimensions`] when any extent is zero, negative or not
/// finite, or when the origin is not finite. Nothing is emitted in that case.
///
/// # Example
///
/// ```rust
/// use skyline_mesh::primitives::make_box;
/// use skyline_mesh::Point3;
///
/// let mesh = make_box(Point3::ZERO, Point3::new(2.0, 3.0, 4.0)).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn make_box(origin: Point3, size: Point3) -> MeshResult<Mesh> {
    if !(size.x > 0.0 && size.y > 0.0 && size.z > 0.0) || !size.is_finite() {
        return Err(MeshError::invalid_dimensions(format!(
            "box size must be positive and finite in all dimensions, got {size:?}"
        )));
    }
    if !is_valid(origin) {
        return Err(MeshError::invalid_dimensions(format!(
            "box origin {origin:?} has non-finite components"
        )));
    }

    let min = origin;
    let max = origin + size;
    let corners = [
        Point3::new(min.x, min.y, min.z),
        Point3::new(max.x, min.y, min.z),
        Point3::new(max.x, max.y, min.z),
        Point3::new(min.x, max.y, min.z),
        Point3::new(min.x, min.y, max.z),
        Point3::new(max.x, min.y, max.z),
        Point3::new(max.x, max.y, max.z),
        Point3::new(min.x, max.y, max.z),
    ];

    let mut mesh = Mesh::with_capacity(BOX_TRIANGLES);
    for [a, b, c, d] in FACES {
        mesh.extend(make_quad(corners[a], corners[b], corners[c], corners[d])?);
    }

    Ok(mesh)
}

/// Creates a square column standing on the top of the base (`z = 0`).
///
/// # Errors
///
/// [`MeshError::InvalidDimensions`] when `height` or `size` is not positive.
pub fn make_column(x: f64, y: f64, height: f64, size: f64) -> MeshResult<Mesh> {
    make_box(Point3::new(x, y, 0.0), Point3::new(size, size, height))
}

/// Creates the base slab spanning `z = -BASE_HEIGHT ..= 0`.
///
/// # Errors
///
/// [`MeshError::InvalidDimensions`] when `width` or `depth` is not positive.
pub fn make_base(width: f64, depth: f64) -> MeshResult<Mesh> {
    make_box(
        Point3::new(0.0, 0.0, -BASE_HEIGHT),
        Point3::new(width, depth, BASE_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn distinct_vertices(mesh: &Mesh) -> Vec<Point3> {
        let mut unique: Vec<Point3> = Vec::new();
        for v in mesh.iter().flat_map(|t| t.vertices()) {
            if !unique.iter().any(|u| u.abs_diff_eq(v, 1e-12)) {
                unique.push(v);
            }
        }
        unique
    }

    #[test]
    fn test_box_triangle_count() {
        let mesh = make_box(Point3::ZERO, Point3::splat(10.0)).unwrap();
        assert_eq!(mesh.triangle_count(), BOX_TRIANGLES);
    }

    #[test]
    fn test_box_has_8_distinct_vertices() {
        for size in [
            Point3::splat(1.0),
            Point3::new(0.1, 20.0, 3.5),
            Point3::new(137.5, 20.0, 10.0),
        ] {
            let mesh = make_box(Point3::new(-3.0, 1.0, 7.0), size).unwrap();
            assert_eq!(distinct_vertices(&mesh).len(), 8);
        }
    }

    #[test]
    fn test_box_normals_are_unit() {
        let mesh = make_box(Point3::new(1.0, 2.0, 3.0), Point3::new(0.125, 1.5, 0.125)).unwrap();
        for t in &mesh {
            assert_abs_diff_eq!(t.normal().length(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_box_normals_point_outward() {
        let origin = Point3::new(2.0, -1.0, 0.5);
        let size = Point3::new(3.0, 4.0, 5.0);
        let center = origin + size / 2.0;
        let mesh = make_box(origin, size).unwrap();
        for t in &mesh {
            let [a, b, c] = t.vertices();
            let centroid = (a + b + c) / 3.0;
            assert!(t.normal().dot(centroid - center) > 0.0, "inward face: {t:?}");
        }
    }

    #[test]
    fn test_box_bounding_box() {
        let mesh = make_box(Point3::ZERO, Point3::new(10.0, 20.0, 30.0)).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::ZERO);
        assert_eq!(max, Point3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_box_rejects_zero_and_negative_sizes() {
        for size in [
            Point3::new(0.0, 1.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-5.0, 10.0, 10.0),
            Point3::new(1.0, 1.0, f64::NAN),
        ] {
            let err = make_box(Point3::ZERO, size).unwrap_err();
            assert!(matches!(err, MeshError::InvalidDimensions { .. }), "{size:?}");
        }
    }

    #[test]
    fn test_box_rejects_non_finite_origin() {
        let err = make_box(Point3::new(f64::INFINITY, 0.0, 0.0), Point3::ONE).unwrap_err();
        assert!(matches!(err, MeshError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_column_stands_on_base_top() {
        let mesh = make_column(2.5, 5.0, 12.0, 2.5).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::new(2.5, 5.0, 0.0));
        assert_eq!(max, Point3::new(5.0, 7.5, 12.0));
    }

    #[test]
    fn test_column_rejects_non_positive_height() {
        assert!(matches!(
            make_column(0.0, 0.0, 0.0, 2.5),
            Err(MeshError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            make_column(0.0, 0.0, -1.0, 2.5),
            Err(MeshError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_base_sits_below_zero() {
        let mesh = make_base(137.5, 22.5).unwrap();
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, Point3::new(0.0, 0.0, -BASE_HEIGHT));
        assert_eq!(max, Point3::new(137.5, 22.5, 0.0));
    }
}
