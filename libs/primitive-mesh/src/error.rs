//! # Mesh Errors
//!
//! Error types for operations on collected triangle soup.
//!
//! The assemblers themselves never fail: out-of-range parameters clamp to
//! the nearest valid value. Only validation and export can report errors.

use thiserror::Error;

/// Errors that can occur when validating or exporting a triangle soup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Some directed edges have no opposite partner, so the surface has gaps.
    #[error("Mesh is not closed: {count} open edges")]
    OpenEdges {
        /// Number of directed edges without a reversed partner
        count: usize,
    },

    /// Some directed edges are used by more than one triangle.
    #[error("Mesh is not manifold: {count} edges are shared in the same direction")]
    NonManifoldEdge {
        /// Number of directed edges used more than once
        count: usize,
    },

    /// Too many vertices to address with `u32` indices.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertex count of the soup
        count: usize,
        /// Configured limit
        max: usize,
    },
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
