//! # Triangle
//!
//! A validated triangle: a unit normal plus three finite, non-collinear
//! vertices. Construction is the only place the invariants are checked, so a
//! `Triangle` in a mesh is always safe to serialize.

use config::constants::NORMAL_TOLERANCE;

use crate::error::{MeshError, MeshResult};
use crate::vector::{compute_normal, is_valid, Point3};

/// A single facet of a triangle soup.
///
/// Vertices are wound counter-clockwise when seen from the side the normal
/// points to, which is always away from solid material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    normal: Point3,
    vertices: [Point3; 3],
}

impl Triangle {
    /// Creates a triangle with an explicit normal.
    ///
    /// Used by primitives that share one normal across several triangles of
    /// a planar face.
    ///
    /// # Errors
    ///
    /// [`MeshError::DegenerateGeometry`] when a vertex or the normal is not
    /// finite, the normal is not unit length, or the vertices are collinear.
    pub fn new(normal: Point3, a: Point3, b: Point3, c: Point3) -> MeshResult<Self> {
        if !is_valid(normal) {
            return Err(MeshError::degenerate(format!(
                "normal {normal:?} has non-finite components"
            )));
        }
        if (normal.length() - 1.0).abs() > NORMAL_TOLERANCE {
            return Err(MeshError::degenerate(format!(
                "normal {normal:?} is not unit length"
            )));
        }
        // Rejects invalid vertices and zero-area triangles.
        compute_normal(a, b, c)?;

        Ok(Self {
            normal,
            vertices: [a, b, c],
        })
    }

    /// Creates a triangle whose normal is derived from its winding.
    ///
    /// # Examples
    /// ```
    /// use skyline_mesh::{Point3, Triangle};
    /// let t = Triangle::from_points(Point3::ZERO, Point3::X, Point3::Y).unwrap();
    /// assert_eq!(t.normal(), Point3::Z);
    /// ```
    pub fn from_points(a: Point3, b: Point3, c: Point3) -> MeshResult<Self> {
        let normal = compute_normal(a, b, c)?;
        Ok(Self {
            normal,
            vertices: [a, b, c],
        })
    }

    /// Unit normal pointing out of the solid.
    #[inline]
    pub fn normal(&self) -> Point3 {
        self.normal
    }

    /// The three vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> [Point3; 3] {
        self.vertices
    }

    /// Surface area of the facet.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        (b - a).cross(c - a).length() / 2.0
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: Point3) -> Self {
        let [a, b, c] = self.vertices;
        Self {
            normal: self.normal,
            vertices: [a + offset, b + offset, c + offset],
        }
    }
}
