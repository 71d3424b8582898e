//! # Triangle Sink
//!
//! The single boundary between the engine and whatever consumes its
//! output. Assemblers never store triangles; they hand each one to a sink
//! as soon as it is produced.

use crate::core::vec3::Vec3;

/// Receives triangles one at a time, vertices in emission (winding) order.
///
/// Under the right-handed convention the outward side of a triangle is the
/// direction of `(v2 - v1) × (v3 - v1)`.
///
/// Any `FnMut(Vec3, Vec3, Vec3)` closure is a sink:
///
/// ```rust
/// use primitive_mesh::{make_cube, Vec3};
///
/// let mut count = 0;
/// make_cube(1, &mut |_: Vec3, _: Vec3, _: Vec3| count += 1);
/// assert_eq!(count, 12);
/// ```
pub trait TriangleSink {
    /// Accepts one triangle. Called exactly once per generated triangle.
    fn emit_triangle(&mut self, v1: Vec3, v2: Vec3, v3: Vec3);
}

impl<F> TriangleSink for F
where
    F: FnMut(Vec3, Vec3, Vec3),
{
    #[inline]
    fn emit_triangle(&mut self, v1: Vec3, v2: Vec3, v3: Vec3) {
        self(v1, v2, v3)
    }
}
