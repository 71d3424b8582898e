//! Thin wrapper around `glam::DVec3` shared across tessellation modules.
//!
//! Vectors are plain `Copy` values: every helper returns a new vector and
//! never touches its operands. Points and displacements share the type.

use config::constants::approx_zero;

pub use glam::DVec3 as Vec3;

/// Returns the point halfway between `a` and `b`.
///
/// The result does not depend on argument order, so two patches splitting
/// the same edge from opposite ends produce the same bits.
///
/// # Examples
/// ```
/// use primitive_mesh::core::vec3::{midpoint, Vec3};
/// let m = midpoint(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, -2.0));
/// assert_eq!(m, Vec3::new(1.0, 2.0, -1.0));
/// ```
#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// Linear interpolation `a * (1 - t) + b * t`.
///
/// Unlike `DVec3::lerp`, the endpoints are reproduced exactly at `t = 0`
/// and `t = 1`.
///
/// # Examples
/// ```
/// use primitive_mesh::core::vec3::{lerp, Vec3};
/// let a = Vec3::new(0.1, 0.2, 0.3);
/// let b = Vec3::new(-0.7, 0.9, 1.3);
/// assert_eq!(lerp(a, b, 0.0), a);
/// assert_eq!(lerp(a, b, 1.0), b);
/// ```
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Fraction `k / n` of an integer subdivision.
///
/// Boundaries are always derived from the integer index so that the far
/// edge of one cell and the near edge of the next are identical.
#[inline]
pub fn fraction(k: u32, n: u32) -> f64 {
    f64::from(k) / f64::from(n)
}

/// Scales `v` along its own direction so its magnitude becomes `radius`.
///
/// `v` must not be the zero vector.
///
/// # Examples
/// ```
/// use primitive_mesh::core::vec3::{project_to_radius, Vec3};
/// let p = project_to_radius(Vec3::new(3.0, 0.0, 4.0), 10.0);
/// assert_eq!(p, Vec3::new(6.0, 0.0, 8.0));
/// ```
#[inline]
pub fn project_to_radius(v: Vec3, radius: f64) -> Vec3 {
    let magnitude = v.length();
    debug_assert!(!approx_zero(magnitude), "cannot project the zero vector");
    v * (radius / magnitude)
}
