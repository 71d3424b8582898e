//! Cone primitive: bottom cap plus a lateral surface narrowing to one apex.

use config::constants::{
    clamp_at_least, HALF_HEIGHT, MIN_HEIGHT_DIVISIONS, MIN_RADIAL_DIVISIONS,
};
use tracing::debug;

use crate::core::vec3::Vec3;
use crate::primitives::cylinder::{bottom_rim, wedges};
use crate::sink::TriangleSink;
use crate::tessellate::tessellate_column;

/// Tessellates a cone of unit height centered at the origin.
///
/// # Arguments
///
/// * `radius` - Radius of the base at `z = -0.5`
/// * `radial_divisions` - Wedges around the axis; values below 3 clamp to 3
/// * `height_divisions` - Rows along the height; values below 1 clamp to 1
/// * `sink` - Receives `radial * (1 + 2 * height)` triangles
///
/// The rim and bottom cap match [`make_cylinder`](crate::make_cylinder).
/// The lateral strip of every wedge has both far corners collapsed onto the
/// apex `(0, 0, 0.5)`, so its last row contains a zero-area triangle.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{make_cone, TriangleSoup};
///
/// let mut soup = TriangleSoup::new();
/// make_cone(1.0, 4, 1, &mut soup);
/// assert_eq!(soup.triangle_count(), 12);
/// ```
#[tracing::instrument(level = "debug", skip(sink))]
pub fn make_cone<S>(radius: f64, radial_divisions: i32, height_divisions: i32, sink: &mut S)
where
    S: TriangleSink + ?Sized,
{
    let radial = clamp_at_least(radial_divisions, MIN_RADIAL_DIVISIONS);
    let rows = clamp_at_least(height_divisions, MIN_HEIGHT_DIVISIONS);
    debug!(
        radial,
        rows,
        triangles = cone_triangle_count(radial_divisions, height_divisions),
        "tessellating cone"
    );

    let origin_bottom = Vec3::new(0.0, 0.0, -HALF_HEIGHT);
    let apex = Vec3::new(0.0, 0.0, HALF_HEIGHT);
    let rim = bottom_rim(radius, radial);

    for (p1f, p2f) in wedges(&rim) {
        sink.emit_triangle(origin_bottom, p1f, p2f);
        tessellate_column(p1f, apex, p2f, apex, rows, sink);
    }
}

/// Number of triangles [`make_cone`] emits, after clamping.
pub fn cone_triangle_count(radial_divisions: i32, height_divisions: i32) -> u64 {
    let radial = u64::from(clamp_at_least(radial_divisions, MIN_RADIAL_DIVISIONS));
    let rows = u64::from(clamp_at_least(height_divisions, MIN_HEIGHT_DIVISIONS));
    radial * (1 + 2 * rows)
}
