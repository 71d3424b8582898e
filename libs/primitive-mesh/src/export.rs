//! Mesh buffer export for GPU rendering.
//!
//! Flattens a triangle soup into `f32` positions and sequential `u32`
//! indices. Vertices are not deduplicated: index `k` always refers to the
//! `k`-th emitted vertex.

use config::constants::GlobalConfig;
use tracing::debug;

use crate::error::{MeshError, MeshResult};
use crate::soup::TriangleSoup;

/// Mesh buffers suitable for GPU rendering.
///
/// # Examples
/// ```
/// use primitive_mesh::{make_cube, TriangleSoup};
///
/// let mut soup = TriangleSoup::new();
/// make_cube(1, &mut soup);
/// let buffers = soup.to_buffers().unwrap();
///
/// assert_eq!(buffers.vertices.len(), 36 * 3); // 12 triangles * 3 vertices * 3 components
/// assert_eq!(buffers.indices.len(), 36);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    /// Uses `f32` for GPU compatibility.
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl TriangleSoup {
    /// Exports the soup using the default vertex limit.
    pub fn to_buffers(&self) -> MeshResult<MeshBuffers> {
        self.to_buffers_with(&GlobalConfig::default())
    }

    /// Exports the soup, refusing more vertices than
    /// `config.max_export_vertices`.
    ///
    /// # Errors
    ///
    /// [`MeshError::TooManyVertices`] when the soup is over the limit.
    pub fn to_buffers_with(&self, config: &GlobalConfig) -> MeshResult<MeshBuffers> {
        let count = self.vertex_count();
        if count > config.max_export_vertices {
            return Err(MeshError::TooManyVertices {
                count,
                max: config.max_export_vertices,
            });
        }

        let mut vertices = Vec::with_capacity(count * 3);
        for v in self.vertices() {
            vertices.extend_from_slice(&v.as_vec3().to_array());
        }
        let indices = (0..count as u32).collect();

        debug!(vertices = count, "exported mesh buffers");
        Ok(MeshBuffers { vertices, indices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec3::Vec3;
    use crate::sink::TriangleSink;

    #[test]
    fn test_empty_export() {
        let buffers = TriangleSoup::new().to_buffers().unwrap();
        assert_eq!(buffers, MeshBuffers::default());
        assert_eq!(buffers.triangle_count(), 0);
    }

    #[test]
    fn test_export_flattens_in_order() {
        let mut soup = TriangleSoup::new();
        soup.emit_triangle(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(7.0, 8.0, 9.0),
        );

        let buffers = soup.to_buffers().unwrap();
        assert_eq!(
            buffers.vertices,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(buffers.indices, vec![0, 1, 2]);
        assert_eq!(buffers.vertex_count(), 3);
    }

    #[test]
    fn test_export_respects_vertex_limit() {
        let mut soup = TriangleSoup::new();
        soup.emit_triangle(Vec3::ZERO, Vec3::X, Vec3::Y);
        soup.emit_triangle(Vec3::ZERO, Vec3::Y, Vec3::Z);

        let config = GlobalConfig::new(1e-9, 5).unwrap();
        assert_eq!(
            soup.to_buffers_with(&config),
            Err(MeshError::TooManyVertices { count: 6, max: 5 })
        );
    }
}
