//! # Tessellators
//!
//! Low-level patch tessellation shared by every assembler.
//!
//! - **Column**: one quad strip split into `n` stacked rows
//! - **Quad**: a planar quad split into an `s × s` grid of columns
//!
//! Both write straight into a [`TriangleSink`](crate::TriangleSink); neither
//! clamps its count, callers clamp first.

pub mod column;
pub mod quad;

pub use column::tessellate_column;
pub use quad::tessellate_quad;
