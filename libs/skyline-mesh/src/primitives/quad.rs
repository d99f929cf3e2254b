//! # Quad Primitive
//!
//! Splits a planar quadrilateral into two triangles.

use crate::error::MeshResult;
use crate::triangle::Triangle;
use crate::vector::{compute_normal, Point3};

/// Creates the two triangles of a planar quad.
///
/// The normal is computed once from `v1, v2, v3` and shared by both
/// triangles. The split is a fan from `v1`: `(v1, v2, v3)` and
/// `(v1, v3, v4)`.
///
/// # Errors
///
/// [`crate::MeshError::DegenerateGeometry`] if either triangle has zero area
/// or a vertex is not finite.
///
/// # Example
///
/// ```rust
/// use skyline_mesh::primitives::make_quad;
/// use skyline_mesh::Point3;
///
/// let [a, b] = make_quad(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// )
/// .unwrap();
/// assert_eq!(a.normal(), b.normal());
/// ```
pub fn make_quad(v1: Point3, v2: Point3, v3: Point3, v4: Point3) -> MeshResult<[Triangle; 2]> {
    let normal = compute_normal(v1, v2, v3)?;
    Ok([
        Triangle::new(normal, v1, v2, v3)?,
        Triangle::new(normal, v1, v3, v4)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    #[test]
    fn test_quad_fan_split() {
        let v = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 3.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ];
        let [first, second] = make_quad(v[0], v[1], v[2], v[3]).unwrap();
        assert_eq!(first.vertices(), [v[0], v[1], v[2]]);
        assert_eq!(second.vertices(), [v[0], v[2], v[3]]);
        assert_eq!(first.normal(), Point3::Z);
        assert_eq!(second.normal(), Point3::Z);
    }

    #[test]
    fn test_quad_collapsed_edge_is_degenerate() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let err = make_quad(p, p, Point3::new(2.0, 1.0, 1.0), Point3::new(1.0, 2.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_quad_degenerate_second_half() {
        // v4 coincides with v1, so the second fan triangle has no area
        let err = make_quad(
            Point3::ZERO,
            Point3::X,
            Point3::new(1.0, 1.0, 0.0),
            Point3::ZERO,
        )
        .unwrap_err();
        assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
    }
}
