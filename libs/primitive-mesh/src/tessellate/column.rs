//! # Column Tessellator
//!
//! Splits a single quad strip into stacked rows, two triangles per row.

use crate::core::vec3::{fraction, lerp, Vec3};
use crate::sink::TriangleSink;

/// Tessellates a quad strip into `rows` stacked quads.
///
/// # Arguments
///
/// * `q` - Top-left corner
/// * `r` - Bottom-left corner
/// * `qp` - Top-right corner
/// * `rp` - Bottom-right corner
/// * `rows` - Number of rows, at least 1
///
/// Row `i` spans the fractions `i/rows` to `(i+1)/rows` along both side
/// edges (`q → r` and `qp → rp`). With near corners `p1, p2` and far corners
/// `p3, p4` it emits `(p3, p4, p2)` then `(p3, p2, p1)`. The diagonal always
/// runs `p3 → p2`; adjacent strips rely on that to line up.
///
/// If `q == qp` or `r == rp` one side of every row collapses to a point and
/// the strip fans into it. The zero-area triangles this produces are kept.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::tessellate::tessellate_column;
/// use primitive_mesh::{TriangleSoup, Vec3};
///
/// let mut soup = TriangleSoup::new();
/// tessellate_column(
///     Vec3::new(0.0, 1.0, 0.0),
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 1.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     3,
///     &mut soup,
/// );
/// assert_eq!(soup.triangle_count(), 6);
/// ```
pub fn tessellate_column<S>(q: Vec3, r: Vec3, qp: Vec3, rp: Vec3, rows: u32, sink: &mut S)
where
    S: TriangleSink + ?Sized,
{
    debug_assert!(rows >= 1, "column needs at least one row");

    for row in 0..rows {
        let near = fraction(row, rows);
        let far = fraction(row + 1, rows);

        let p1 = lerp(q, r, near);
        let p2 = lerp(qp, rp, near);
        let p3 = lerp(q, r, far);
        let p4 = lerp(qp, rp, far);

        sink.emit_triangle(p3, p4, p2);
        sink.emit_triangle(p3, p2, p1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soup::TriangleSoup;

    fn unit_strip(rows: u32) -> TriangleSoup {
        let mut soup = TriangleSoup::new();
        tessellate_column(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            rows,
            &mut soup,
        );
        soup
    }

    #[test]
    fn test_column_emits_two_triangles_per_row() {
        assert_eq!(unit_strip(1).triangle_count(), 2);
        assert_eq!(unit_strip(5).triangle_count(), 10);
    }

    #[test]
    fn test_column_single_row_order() {
        let soup = unit_strip(1);
        let q = Vec3::new(0.0, 1.0, 0.0);
        let r = Vec3::ZERO;
        let qp = Vec3::new(1.0, 1.0, 0.0);
        let rp = Vec3::new(1.0, 0.0, 0.0);

        // p1 = q, p2 = qp, p3 = r, p4 = rp
        assert_eq!(soup.triangles()[0], [r, rp, qp]);
        assert_eq!(soup.triangles()[1], [r, qp, q]);
    }

    #[test]
    fn test_column_rows_share_boundaries() {
        let soup = unit_strip(4);
        for row in 0..3 {
            let far_edge = soup.triangles()[row * 2][0];
            let next_near = soup.triangles()[(row + 1) * 2 + 1][2];
            assert_eq!(far_edge, next_near);
        }
    }

    #[test]
    fn test_column_collapsed_side_fans_to_point() {
        let apex = Vec3::new(0.0, 0.0, 1.0);
        let mut soup = TriangleSoup::new();
        tessellate_column(
            Vec3::new(1.0, 0.0, 0.0),
            apex,
            Vec3::new(0.0, 1.0, 0.0),
            apex,
            2,
            &mut soup,
        );

        assert_eq!(soup.triangle_count(), 4);
        // Last row's far corners are both the apex
        let last = soup.triangles()[2];
        assert_eq!(last[0], apex);
        assert_eq!(last[1], apex);
    }
}
