//! # Triangle Soup
//!
//! An in-memory sink that keeps every emitted triangle in order.
//!
//! Triangles are stored independently; nothing is indexed or shared. The
//! soup is what tests, the batch API and the buffer export work on.

use std::collections::HashMap;

use config::constants::GlobalConfig;
use tracing::warn;

use crate::core::vec3::Vec3;
use crate::error::{MeshError, MeshResult};
use crate::sink::TriangleSink;

/// Vertex position snapped to the weld grid.
type WeldKey = [i64; 3];

/// An ordered list of independent triangles.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{make_cylinder, TriangleSoup};
///
/// let mut soup = TriangleSoup::new();
/// make_cylinder(1.0, 8, 2, &mut soup);
/// assert_eq!(soup.triangle_count(), 8 * (2 + 2 * 2));
/// assert!(soup.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    triangles: Vec<[Vec3; 3]>,
}

impl TriangleSoup {
    /// Creates an empty soup.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Creates a soup with room for `triangle_count` triangles.
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

    /// Returns the number of emitted vertices (three per triangle).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if no triangle has been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the triangles in emission order.
    #[inline]
    pub fn triangles(&self) -> &[[Vec3; 3]] {
        &self.triangles
    }

    /// Iterates over every emitted vertex in emission order.
    pub fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.triangles.iter().flat_map(|tri| tri.iter().copied())
    }

    /// Removes all triangles, keeping the allocation.
    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    /// Consumes the soup and returns its triangles.
    pub fn into_triangles(self) -> Vec<[Vec3; 3]> {
        self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box, or two zero vectors
    /// for an empty soup.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut vertices = self.vertices();
        let Some(first) = vertices.next() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }

    /// Checks that the soup forms a closed, consistently wound surface.
    ///
    /// Uses the default weld tolerance. See [`TriangleSoup::validate_with`].
    pub fn validate(&self) -> MeshResult<()> {
        self.validate_with(&GlobalConfig::default())
    }

    /// Checks that the soup forms a closed, consistently wound surface.
    ///
    /// Vertices are welded onto a grid of `config.weld_tolerance`. Every
    /// directed edge must then occur exactly once and its reverse exactly
    /// once: a repeated directed edge means two neighbours disagree on
    /// winding, a missing reverse means a crack.
    ///
    /// # Errors
    ///
    /// * [`MeshError::NonManifoldEdge`] when a directed edge is repeated
    /// * [`MeshError::OpenEdges`] when a directed edge has no partner
    pub fn validate_with(&self, config: &GlobalConfig) -> MeshResult<()> {
        let weld = |v: Vec3| -> WeldKey {
            let snapped = (v / config.weld_tolerance).round();
            [snapped.x as i64, snapped.y as i64, snapped.z as i64]
        };

        let mut edges: HashMap<(WeldKey, WeldKey), usize> =
            HashMap::with_capacity(self.vertex_count());

        for tri in &self.triangles {
            let keys = tri.map(weld);
            for i in 0..3 {
                *edges.entry((keys[i], keys[(i + 1) % 3])).or_insert(0) += 1;
            }
        }

        let repeated = edges.values().filter(|&&uses| uses > 1).count();
        if repeated > 0 {
            warn!(repeated, "soup has edges shared in the same direction");
            return Err(MeshError::NonManifoldEdge { count: repeated });
        }

        let open = edges
            .keys()
            .filter(|(start, end)| !edges.contains_key(&(*end, *start)))
            .count();
        if open > 0 {
            warn!(open, "soup has open edges");
            return Err(MeshError::OpenEdges { count: open });
        }

        Ok(())
    }
}

impl TriangleSink for TriangleSoup {
    #[inline]
    fn emit_triangle(&mut self, v1: Vec3, v2: Vec3, v3: Vec3) {
        self.triangles.push([v1, v2, v3]);
    }
}

impl Extend<[Vec3; 3]> for TriangleSoup {
    fn extend<I: IntoIterator<Item = [Vec3; 3]>>(&mut self, iter: I) {
        self.triangles.extend(iter);
    }
}
