//! Thin layer over `glam::DVec3` for points, vectors and face normals.
//!
//! Subtraction and the cross product come straight from `glam`; the helpers
//! here add the validation rules every producer relies on: points must be
//! finite, and a normal only exists for a non-degenerate triple.

use config::constants::EPSILON;

use crate::error::{MeshError, MeshResult};

pub use glam::DVec3 as Point3;

/// Returns true when no component is NaN or infinite.
///
/// # Examples
/// ```
/// use skyline_mesh::vector::{is_valid, Point3};
/// assert!(is_valid(Point3::new(1.0, -2.0, 3.0)));
/// assert!(!is_valid(Point3::new(f64::NAN, 0.0, 0.0)));
/// ```
#[inline]
pub fn is_valid(point: Point3) -> bool {
    point.is_finite()
}

/// Scales a vector to unit length.
///
/// Returns `None` for vectors shorter than `EPSILON`.
///
/// # Examples
/// ```
/// use skyline_mesh::vector::{normalize, Point3};
/// let n = normalize(Point3::new(0.0, 3.0, 4.0)).unwrap();
/// assert!((n.length() - 1.0).abs() < 1e-12);
/// assert!(normalize(Point3::ZERO).is_none());
/// ```
pub fn normalize(vector: Point3) -> Option<Point3> {
    let length = vector.length();
    if length < EPSILON || !length.is_finite() {
        return None;
    }
    Some(vector / length)
}

/// Computes the unit normal of the plane through three points.
///
/// The normal follows the right-hand rule over `p1 -> p2 -> p3`, so
/// counter-clockwise points (seen from outside) yield an outward normal.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateGeometry`] when any point is not finite or
/// when the cross product magnitude is below `EPSILON`.
///
/// # Examples
/// ```
/// use skyline_mesh::vector::{compute_normal, Point3};
/// let n = compute_normal(Point3::ZERO, Point3::X, Point3::Y).unwrap();
/// assert_eq!(n, Point3::Z);
/// ```
pub fn compute_normal(p1: Point3, p2: Point3, p3: Point3) -> MeshResult<Point3> {
    for point in [p1, p2, p3] {
        if !is_valid(point) {
            return Err(MeshError::degenerate(format!(
                "point {point:?} has non-finite components"
            )));
        }
    }

    let cross = (p2 - p1).cross(p3 - p1);
    normalize(cross).ok_or_else(|| {
        MeshError::degenerate(format!(
            "points {p1:?}, {p2:?}, {p3:?} do not span a plane"
        ))
    })
}
