//! Tests for the cube primitive.
//!
//! These tests verify that the cube primitive:
//! - Emits the expected number of triangles
//! - Winds every face outward
//! - Produces a closed surface
//! - Clamps invalid subdivision counts

use super::*;
use crate::soup::TriangleSoup;

fn cube(subdivisions: i32) -> TriangleSoup {
    let mut soup = TriangleSoup::new();
    make_cube(subdivisions, &mut soup);
    soup
}

/// A single-cell cube has 2 triangles on each of 6 faces.
#[test]
fn test_cube_has_12_triangles() {
    assert_eq!(cube(1).triangle_count(), 12);
}

/// Every coordinate of the coarsest cube is a corner coordinate.
#[test]
fn test_cube_coordinates_are_corners() {
    for v in cube(1).vertices() {
        for c in v.to_array() {
            assert!(c == -0.5 || c == 0.5, "unexpected coordinate {c}");
        }
    }
}

#[test]
fn test_cube_triangle_count_grows_quadratically() {
    for s in 1..=5 {
        assert_eq!(cube(s).triangle_count(), (12 * s * s) as usize);
    }
}

/// Normals computed from emission order must point away from the origin.
#[test]
fn test_cube_faces_point_outward() {
    for tri in cube(3).triangles() {
        let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
        let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
        assert!(normal.dot(centroid) > 0.0, "inward triangle {:?}", tri);
    }
}

#[test]
fn test_cube_is_watertight() {
    for s in 1..=4 {
        assert!(cube(s).validate().is_ok(), "cube({s}) has cracks");
    }
}

#[test]
fn test_cube_bounding_box_is_unit() {
    let (min, max) = cube(2).bounding_box();
    assert_eq!(min, Vec3::splat(-0.5));
    assert_eq!(max, Vec3::splat(0.5));
}

/// Face order is front, back, top, bottom, left, right.
#[test]
fn test_cube_face_order() {
    let soup = cube(1);
    let faces: Vec<Vec3> = soup
        .triangles()
        .chunks(2)
        .map(|pair| {
            let t = pair[0];
            (t[1] - t[0]).cross(t[2] - t[0]).normalize()
        })
        .collect();

    assert_eq!(
        faces,
        vec![
            Vec3::NEG_Z,
            Vec3::Z,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::NEG_X,
            Vec3::X
        ]
    );
}

/// Sub-minimum requests behave exactly like the minimum.
#[test]
fn test_cube_clamps_subdivisions() {
    assert_eq!(cube(0), cube(1));
    assert_eq!(cube(-7), cube(1));
}

#[test]
fn test_cube_triangle_count_matches_emission() {
    for s in [-3, 0, 1, 4] {
        assert_eq!(cube_triangle_count(s), cube(s).triangle_count() as u64);
    }
}

/// Counts past the `u32` range are exact, the top of the `i32` range saturates.
#[test]
fn test_cube_triangle_count_is_wide() {
    assert_eq!(cube_triangle_count(19_000), 4_332_000_000);
    assert_eq!(cube_triangle_count(i32::MAX), u64::MAX);
}
