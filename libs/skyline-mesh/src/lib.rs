//! # Skyline Mesh
//!
//! Triangle-soup geometry for skyline models: validated triangles, box
//! primitives, bitmap voxel extrusion and binary STL serialization.
//!
//! ## Architecture
//!
//! ```text
//! vector → triangle → primitives (quad, box) → voxel → Mesh → export (STL)
//! ```
//!
//! Every solid is built from closed axis-aligned boxes, so concatenating
//! meshes never opens a hole. No vertex welding or boolean union happens;
//! touching boxes stay separate closed shells.
//!
//! ## Usage
//!
//! ```rust
//! use skyline_mesh::export::{write_stl, StlHeader};
//! use skyline_mesh::primitives::{make_base, make_column};
//! use skyline_mesh::Mesh;
//!
//! let mut mesh = Mesh::new();
//! mesh.append(make_base(137.5, 22.5).unwrap());
//! mesh.append(make_column(2.5, 2.5, 10.0, 2.5).unwrap());
//!
//! let mut bytes = Vec::new();
//! write_stl(&mesh, &StlHeader::blank(), &mut bytes).unwrap();
//! assert_eq!(bytes.len(), 84 + 24 * 50);
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod primitives;
pub mod triangle;
pub mod vector;
pub mod voxel;

pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
pub use triangle::Triangle;
pub use vector::Point3;
