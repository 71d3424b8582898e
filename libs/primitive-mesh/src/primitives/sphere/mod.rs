//! Sphere primitive: geodesic subdivision of a regular icosahedron.

use config::constants::{
    clamp_at_least, clamp_within, MAX_SPHERE_SLICES, MIN_SPHERE_SLICES, MIN_SPHERE_STACKS,
};
use tracing::debug;

use crate::core::vec3::{midpoint, project_to_radius, Vec3};
use crate::sink::TriangleSink;

/// The 20 icosahedron faces as vertex index triples, wound outward.
const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 1, 2],
    [3, 2, 1],
    [3, 4, 5],
    [3, 5, 6],
    [0, 7, 8],
    [0, 8, 9],
    [5, 10, 11],
    [8, 11, 10],
    [1, 9, 4],
    [10, 4, 9],
    [2, 6, 7],
    [11, 7, 6],
    [3, 1, 4],
    [3, 6, 2],
    [0, 9, 1],
    [0, 2, 7],
    [8, 10, 9],
    [8, 7, 11],
    [5, 4, 10],
    [5, 11, 6],
];

/// The 12 icosahedron vertices at unit scale, built from `a = 2 / (1 + √5)`.
fn icosahedron_vertices() -> [Vec3; 12] {
    let a = 2.0 / (1.0 + 5.0_f64.sqrt());
    [
        Vec3::new(0.0, a, -1.0),
        Vec3::new(-a, 1.0, 0.0),
        Vec3::new(a, 1.0, 0.0),
        Vec3::new(0.0, a, 1.0),
        Vec3::new(-1.0, 0.0, a),
        Vec3::new(0.0, -a, 1.0),
        Vec3::new(1.0, 0.0, a),
        Vec3::new(1.0, 0.0, -a),
        Vec3::new(0.0, -a, -1.0),
        Vec3::new(-1.0, 0.0, -a),
        Vec3::new(-a, -1.0, 0.0),
        Vec3::new(a, -1.0, 0.0),
    ]
}

/// Tessellates a sphere centered at the origin.
///
/// # Arguments
///
/// * `radius` - Distance of every emitted vertex from the origin
/// * `slices` - Subdivision depth, clamped into `[3, 5]`
/// * `stacks` - Clamped to at least 3 and otherwise unused; depth alone
///   controls fidelity
/// * `sink` - Receives `20 * 4^(slices - 1)` triangles
///
/// Every icosahedron face is split 1-to-4 at its edge midpoints until the
/// depth runs out, then each vertex is pushed out to `radius`. Vertex
/// density is higher near the original icosahedron corners.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{make_sphere, TriangleSoup};
///
/// let mut soup = TriangleSoup::new();
/// make_sphere(2.0, 3, 3, &mut soup);
/// assert_eq!(soup.triangle_count(), 320);
/// ```
#[tracing::instrument(level = "debug", skip(sink))]
pub fn make_sphere<S>(radius: f64, slices: i32, stacks: i32, sink: &mut S)
where
    S: TriangleSink + ?Sized,
{
    let depth = clamp_within(slices, MIN_SPHERE_SLICES, MAX_SPHERE_SLICES);
    let stacks = clamp_at_least(stacks, MIN_SPHERE_STACKS);
    debug!(
        depth,
        stacks,
        triangles = sphere_triangle_count(slices),
        "tessellating sphere"
    );

    let vertices = icosahedron_vertices();
    let mut pending: Vec<([Vec3; 3], u32)> = Vec::with_capacity(3 * depth as usize + 1);

    for face in ICOSAHEDRON_FACES {
        pending.push((face.map(|i| vertices[i]), depth));

        // Children are pushed in reverse so they pop in split order,
        // matching a depth-first recursion.
        while let Some(([p0, p1, p2], level)) = pending.pop() {
            if level == 1 {
                sink.emit_triangle(
                    project_to_radius(p0, radius),
                    project_to_radius(p1, radius),
                    project_to_radius(p2, radius),
                );
                continue;
            }

            let m01 = midpoint(p0, p1);
            let m02 = midpoint(p0, p2);
            let m12 = midpoint(p1, p2);

            pending.push(([m01, m12, m02], level - 1));
            pending.push(([m02, m12, p2], level - 1));
            pending.push(([m01, p1, m12], level - 1));
            pending.push(([p0, m01, m02], level - 1));
        }
    }
}

/// Number of triangles [`make_sphere`] emits, `20 * 4^(depth - 1)`.
pub fn sphere_triangle_count(slices: i32) -> u64 {
    let depth = clamp_within(slices, MIN_SPHERE_SLICES, MAX_SPHERE_SLICES);
    20 * 4u64.pow(depth - 1)
}
