//! # Quad Tessellator
//!
//! Splits a planar quad into a uniform grid by slicing it into columns and
//! handing each column to the column tessellator.

use crate::core::vec3::{fraction, lerp, Vec3};
use crate::sink::TriangleSink;
use crate::tessellate::column::tessellate_column;

/// Tessellates a planar quad into a `subs × subs` grid.
///
/// # Arguments
///
/// * `ll`, `lr`, `ur`, `ul` - Corners in lower-left, lower-right,
///   upper-right, upper-left order
/// * `subs` - Cells per axis, at least 1
///
/// Column `i` is bounded by the fractions `i/subs` and `(i+1)/subs` along
/// the top edge (`ul → ur`) and bottom edge (`ll → lr`). Each column is
/// split into `subs` rows, so one parameter controls both axes.
///
/// # Returns
///
/// Emits `2 * subs²` triangles wound like `ll → lr → ur`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::tessellate::tessellate_quad;
/// use primitive_mesh::{TriangleSoup, Vec3};
///
/// let mut soup = TriangleSoup::new();
/// tessellate_quad(
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(1.0, 1.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
///     4,
///     &mut soup,
/// );
/// assert_eq!(soup.triangle_count(), 32);
/// ```
pub fn tessellate_quad<S>(ll: Vec3, lr: Vec3, ur: Vec3, ul: Vec3, subs: u32, sink: &mut S)
where
    S: TriangleSink + ?Sized,
{
    debug_assert!(subs >= 1, "quad needs at least one subdivision");

    for column in 0..subs {
        let left = fraction(column, subs);
        let right = fraction(column + 1, subs);

        let q = lerp(ul, ur, left);
        let r = lerp(ll, lr, left);
        let qp = lerp(ul, ur, right);
        let rp = lerp(ll, lr, right);

        tessellate_column(q, r, qp, rp, subs, sink);
    }
}
