//! Procedural tessellation of primitive solids.
//!
//! This crate turns a cube, cylinder, cone or sphere description into a
//! stream of triangles. Every shape is unit-scale and centered at the
//! origin; cylinders and cones run along Z. Output is unindexed triangle
//! soup handed to a [`TriangleSink`] one triangle at a time, wound so the
//! right-hand normal points away from the solid.
//!
//! ```rust
//! use primitive_mesh::{make_cone, TriangleSoup};
//!
//! let mut soup = TriangleSoup::new();
//! make_cone(1.0, 4, 1, &mut soup);
//! assert_eq!(soup.triangle_count(), 12);
//! ```

pub mod core;
pub mod error;
pub mod export;
pub mod primitives;
pub mod shape;
pub mod sink;
pub mod soup;
pub mod tessellate;

pub use crate::core::vec3::Vec3;
pub use error::{MeshError, MeshResult};
pub use export::MeshBuffers;
pub use primitives::{make_cone, make_cube, make_cylinder, make_sphere};
pub use shape::{tessellate_batch, Shape};
pub use sink::TriangleSink;
pub use soup::TriangleSoup;
pub use tessellate::{tessellate_column, tessellate_quad};
