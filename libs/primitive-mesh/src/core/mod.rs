//! Core value types shared by the tessellators and assemblers.
//!
//! Includes the vector alias (`Vec3`) and the interpolation helpers every
//! patch is built from.

pub mod vec3;
