//! # Configuration Constants
//!
//! Centralized constants for the tessellation engine.
//!
//! ## Categories
//!
//! - **Precision**: Tolerances for welding and radial checks
//! - **Subdivision**: Clamp bounds for every public subdivision parameter
//! - **Geometry**: Canonical extents of the unit shapes
//! - **Limits**: Safety bounds for buffer export

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Grid size used to weld vertices when checking watertightness.
///
/// Seams between patches are interpolated from the same corners but not
/// always in the same direction, so shared vertices can differ in the last
/// few bits. Positions are snapped to this grid before edges are compared.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, VERTEX_WELD_EPSILON};
///
/// assert!(VERTEX_WELD_EPSILON >= EPSILON);
/// let snapped = (0.1f64 / VERTEX_WELD_EPSILON).round() as i64;
/// assert_eq!(snapped, 100_000_000);
/// ```
pub const VERTEX_WELD_EPSILON: f64 = 1e-9;

/// Maximum deviation of a sphere vertex from the requested radius.
///
/// # Example
///
/// ```rust
/// use config::constants::RADIAL_TOLERANCE;
///
/// let magnitude = 2.0 + 1e-7;
/// assert!((magnitude - 2.0f64).abs() < RADIAL_TOLERANCE);
/// ```
pub const RADIAL_TOLERANCE: f64 = 1e-5;

// =============================================================================
// SUBDIVISION CONSTANTS
// =============================================================================

/// Minimum subdivisions per cube face axis.
pub const MIN_CUBE_SUBDIVISIONS: i32 = 1;

/// Minimum number of radial wedges for cylinders and cones.
///
/// Three wedges is the smallest closed polygon.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RADIAL_DIVISIONS;
///
/// let requested = 2;
/// assert_eq!(requested.max(MIN_RADIAL_DIVISIONS), 3);
/// ```
pub const MIN_RADIAL_DIVISIONS: i32 = 3;

/// Minimum number of rows along the height of a cylinder or cone.
pub const MIN_HEIGHT_DIVISIONS: i32 = 1;

/// Minimum icosphere recursion depth.
pub const MIN_SPHERE_SLICES: i32 = 3;

/// Maximum icosphere recursion depth.
///
/// Triangle count grows as `20 * 4^(slices - 1)`, so depth is capped.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_SPHERE_SLICES;
///
/// let triangles = 20 * 4u32.pow(MAX_SPHERE_SLICES as u32 - 1);
/// assert_eq!(triangles, 5120);
/// ```
pub const MAX_SPHERE_SLICES: i32 = 5;

/// Minimum accepted sphere stack count.
///
/// Stacks are clamped and logged, but the icosphere never reads them.
pub const MIN_SPHERE_STACKS: i32 = 3;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Half-extent of the unit cube on each axis.
pub const CUBE_HALF_EXTENT: f64 = 0.5;

/// Half of the unit height of cylinders and cones along z.
///
/// # Example
///
/// ```rust
/// use config::constants::HALF_HEIGHT;
///
/// assert_eq!(HALF_HEIGHT * 2.0, 1.0);
/// ```
pub const HALF_HEIGHT: f64 = 0.5;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices an exported buffer can address.
///
/// Indices are `u32`, one per emitted vertex.
pub const MAX_EXPORT_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a requested count to at least `min`.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_at_least;
///
/// assert_eq!(clamp_at_least(-4, 1), 1);
/// assert_eq!(clamp_at_least(7, 1), 7);
/// ```
#[inline]
pub fn clamp_at_least(value: i32, min: i32) -> u32 {
    value.max(min).max(0) as u32
}

/// Clamps a requested count into `[min, max]`.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_within, MAX_SPHERE_SLICES, MIN_SPHERE_SLICES};
///
/// assert_eq!(clamp_within(9, MIN_SPHERE_SLICES, MAX_SPHERE_SLICES), 5);
/// assert_eq!(clamp_within(0, MIN_SPHERE_SLICES, MAX_SPHERE_SLICES), 3);
/// ```
#[inline]
pub fn clamp_within(value: i32, min: i32, max: i32) -> u32 {
    value.clamp(min, max).max(0) as u32
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tunable settings used by validation and export.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.weld_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Grid size used to weld coincident vertices.
    pub weld_tolerance: f64,
    /// Largest vertex count an exported buffer may hold.
    pub max_export_vertices: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and vertex limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 1024).expect("valid config");
    /// assert_eq!(cfg.max_export_vertices, 1024);
    /// ```
    pub fn new(weld_tolerance: f64, max_export_vertices: usize) -> Result<Self, ConfigError> {
        if weld_tolerance <= 0.0 || !weld_tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(weld_tolerance));
        }
        if max_export_vertices == 0 || max_export_vertices > MAX_EXPORT_VERTICES {
            return Err(ConfigError::InvalidVertexLimit(max_export_vertices));
        }
        Ok(Self {
            weld_tolerance,
            max_export_vertices,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            weld_tolerance: VERTEX_WELD_EPSILON,
            max_export_vertices: MAX_EXPORT_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the weld tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the export vertex limit is zero or exceeds the index range.
    InvalidVertexLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "weld_tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidVertexLimit(value) => {
                write!(
                    f,
                    "max_export_vertices must be in 1..={MAX_EXPORT_VERTICES}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
