//! # Mesh Data Structure
//!
//! Triangle soup produced by every geometry producer.

use crate::triangle::Triangle;
use crate::vector::Point3;

/// An ordered, append-only list of independent triangles.
///
/// No shared vertices or adjacency are tracked. Each box primitive emits all
/// six of its faces, which is what keeps the assembled model closed.
///
/// All geometry is stored in f64. Conversion to f32 only happens in the STL
/// writer.
///
/// # Example
///
/// ```rust
/// use skyline_mesh::{Mesh, Point3, Triangle};
///
/// let mut mesh = Mesh::new();
/// mesh.push(Triangle::from_points(Point3::ZERO, Point3::X, Point3::Y).unwrap());
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Appends one triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Appends every triangle of `other`, consuming it.
    pub fn append(&mut self, mut other: Mesh) {
        self.triangles.append(&mut other.triangles);
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterates over the triangles in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Point3, Point3)> {
        let mut corners = self.triangles.iter().flat_map(|t| t.vertices());
        let first = corners.next()?;
        Some(corners.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }

    /// Sum of all facet areas.
    pub fn surface_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}

impl Extend<Triangle> for Mesh {
    fn extend<I: IntoIterator<Item = Triangle>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
