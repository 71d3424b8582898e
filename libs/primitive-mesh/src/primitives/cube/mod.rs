//! Cube primitive built from six subdivided faces.

use config::constants::{clamp_at_least, CUBE_HALF_EXTENT, MIN_CUBE_SUBDIVISIONS};
use tracing::{debug, trace};

use crate::core::vec3::Vec3;
use crate::sink::TriangleSink;
use crate::tessellate::tessellate_quad;

// Corner ordering:
// 0: (-x, -y, -z) - front-lower-left
// 1: (+x, -y, -z) - front-lower-right
// 2: (+x, +y, -z) - front-upper-right
// 3: (-x, +y, -z) - front-upper-left
// 4: (-x, -y, +z) - back-lower-left
// 5: (+x, -y, +z) - back-lower-right
// 6: (+x, +y, +z) - back-upper-right
// 7: (-x, +y, +z) - back-upper-left
const CORNER_SIGNS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Faces as (ll, lr, ur, ul) corner indices seen from outside the cube, so
/// every face winds counter-clockwise around its outward normal.
const FACES: [(&str, [usize; 4]); 6] = [
    ("front", [1, 0, 3, 2]),  // z = -0.5
    ("back", [4, 5, 6, 7]),   // z = +0.5
    ("top", [7, 6, 2, 3]),    // y = +0.5
    ("bottom", [4, 0, 1, 5]), // y = -0.5
    ("left", [0, 4, 7, 3]),   // x = -0.5
    ("right", [5, 1, 2, 6]),  // x = +0.5
];

/// Tessellates a unit cube centered at the origin.
///
/// # Arguments
///
/// * `subdivisions` - Cells per axis on every face; values below 1 clamp to 1
/// * `sink` - Receives `12 * subdivisions²` triangles
///
/// Faces are emitted front, back, top, bottom, left, right. Every triangle
/// normal points away from the origin.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{make_cube, TriangleSoup};
///
/// let mut soup = TriangleSoup::new();
/// make_cube(2, &mut soup);
/// assert_eq!(soup.triangle_count(), 48);
/// ```
#[tracing::instrument(level = "debug", skip(sink))]
pub fn make_cube<S>(subdivisions: i32, sink: &mut S)
where
    S: TriangleSink + ?Sized,
{
    let subs = clamp_at_least(subdivisions, MIN_CUBE_SUBDIVISIONS);
    debug!(
        subs,
        triangles = cube_triangle_count(subdivisions),
        "tessellating cube"
    );

    let corners = CORNER_SIGNS.map(|signs| Vec3::from_array(signs) * CUBE_HALF_EXTENT);

    for (name, [ll, lr, ur, ul]) in FACES {
        trace!(face = name, "tessellating cube face");
        tessellate_quad(corners[ll], corners[lr], corners[ur], corners[ul], subs, sink);
    }
}

/// Number of triangles [`make_cube`] emits for `subdivisions`, after
/// clamping. Saturates at `u64::MAX` near the top of the `i32` range.
pub fn cube_triangle_count(subdivisions: i32) -> u64 {
    let subs = u64::from(clamp_at_least(subdivisions, MIN_CUBE_SUBDIVISIONS));
    (subs * subs).saturating_mul(12)
}

#[cfg(test)]
mod tests;
