//! # Primitives
//!
//! Triangle-soup assemblers for the basic solids (cube, cylinder, cone,
//! sphere). Each one clamps its parameters, then streams triangles into the
//! caller's sink.

pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod sphere;

pub use cone::{cone_triangle_count, make_cone};
pub use cube::{cube_triangle_count, make_cube};
pub use cylinder::{cylinder_triangle_count, make_cylinder};
pub use sphere::{make_sphere, sphere_triangle_count};
