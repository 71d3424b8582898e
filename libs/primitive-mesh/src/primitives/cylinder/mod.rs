//! Cylinder primitive: capped, unit height, caller-supplied radius.

use std::f64::consts::TAU;

use config::constants::{
    clamp_at_least, HALF_HEIGHT, MIN_HEIGHT_DIVISIONS, MIN_RADIAL_DIVISIONS,
};
use tracing::debug;

use crate::core::vec3::Vec3;
use crate::sink::TriangleSink;
use crate::tessellate::tessellate_column;

/// Rim points of the bottom circle (`z = -HALF_HEIGHT`).
///
/// Point `k` sits at angle `k * 2π / radial`. Shared with the cone.
pub(crate) fn bottom_rim(radius: f64, radial: u32) -> Vec<Vec3> {
    let step = TAU / f64::from(radial);
    (0..radial)
        .map(|k| {
            let theta = f64::from(k) * step;
            let (sin, cos) = theta.sin_cos();
            Vec3::new(radius * cos, radius * sin, -HALF_HEIGHT)
        })
        .collect()
}

/// Iterates wedges as `(p1f, p2f)`: `p2f` at angle `θ_i` and `p1f` at
/// `θ_{i+1}`, wrapping so the last wedge closes on the first rim point.
pub(crate) fn wedges(rim: &[Vec3]) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
    (0..rim.len()).map(move |i| (rim[(i + 1) % rim.len()], rim[i]))
}

/// Tessellates a cylinder of unit height centered at the origin.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `radial_divisions` - Wedges around the axis; values below 3 clamp to 3
/// * `height_divisions` - Rows along the height; values below 1 clamp to 1
/// * `sink` - Receives `radial * (2 + 2 * height)` triangles
///
/// Each wedge emits its bottom-cap triangle, its top-cap triangle (in
/// reversed order so both caps face outward) and then its lateral strip.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{make_cylinder, TriangleSoup};
///
/// let mut soup = TriangleSoup::new();
/// make_cylinder(0.5, 1, 0, &mut soup); // clamps to (3, 1)
/// assert_eq!(soup.triangle_count(), 12);
/// ```
#[tracing::instrument(level = "debug", skip(sink))]
pub fn make_cylinder<S>(radius: f64, radial_divisions: i32, height_divisions: i32, sink: &mut S)
where
    S: TriangleSink + ?Sized,
{
    let radial = clamp_at_least(radial_divisions, MIN_RADIAL_DIVISIONS);
    let rows = clamp_at_least(height_divisions, MIN_HEIGHT_DIVISIONS);
    debug!(
        radial,
        rows,
        triangles = cylinder_triangle_count(radial_divisions, height_divisions),
        "tessellating cylinder"
    );

    let origin_bottom = Vec3::new(0.0, 0.0, -HALF_HEIGHT);
    let origin_top = Vec3::new(0.0, 0.0, HALF_HEIGHT);
    let rim = bottom_rim(radius, radial);

    for (p1f, p2f) in wedges(&rim) {
        let p1b = Vec3::new(p1f.x, p1f.y, HALF_HEIGHT);
        let p2b = Vec3::new(p2f.x, p2f.y, HALF_HEIGHT);

        sink.emit_triangle(origin_bottom, p1f, p2f);
        sink.emit_triangle(origin_top, p2b, p1b);
        tessellate_column(p1f, p1b, p2f, p2b, rows, sink);
    }
}

/// Number of triangles [`make_cylinder`] emits, after clamping.
pub fn cylinder_triangle_count(radial_divisions: i32, height_divisions: i32) -> u64 {
    let radial = u64::from(clamp_at_least(radial_divisions, MIN_RADIAL_DIVISIONS));
    let rows = u64::from(clamp_at_least(height_divisions, MIN_HEIGHT_DIVISIONS));
    radial * (2 + 2 * rows)
}
