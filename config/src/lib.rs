//! # Config Crate
//!
//! Centralized configuration constants for primitive tessellation.
//! Every clamp bound, canonical extent and tolerance used by the mesh
//! crates is defined here so the assemblers never carry bare literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_at_least, MIN_RADIAL_DIVISIONS};
//!
//! // Sub-minimum requests saturate instead of failing
//! let radial = clamp_at_least(1, MIN_RADIAL_DIVISIONS);
//! assert_eq!(radial, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Permissive Input**: Counts clamp to the nearest valid value
//! - **Canonical Size**: Shapes are unit-sized and centered at the origin

pub mod constants;
