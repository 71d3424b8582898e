//! # Shape Descriptions
//!
//! A serializable description of one primitive solid, so shapes can be
//! read from configuration and tessellated later, alone or in parallel.

use config::constants::{
    clamp_at_least, clamp_within, MAX_SPHERE_SLICES, MIN_CUBE_SUBDIVISIONS, MIN_HEIGHT_DIVISIONS,
    MIN_RADIAL_DIVISIONS, MIN_SPHERE_SLICES, MIN_SPHERE_STACKS,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::primitives::{
    cone_triangle_count, cube_triangle_count, cylinder_triangle_count, make_cone, make_cube,
    make_cylinder, make_sphere, sphere_triangle_count,
};
use crate::sink::TriangleSink;
use crate::soup::TriangleSoup;

/// One of the four primitive solids with its tessellation parameters.
///
/// Parameters are stored as given; they are clamped when tessellated.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::Shape;
///
/// let cone = Shape::Cone { radius: 1.0, radial_divisions: 4, height_divisions: 1 };
/// assert_eq!(cone.triangle_count(), 12);
/// assert_eq!(cone.to_soup().triangle_count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned unit cube centered at the origin.
    Cube {
        /// Grid cells per face edge.
        subdivisions: i32,
    },
    /// Unit-height cylinder along Z.
    Cylinder {
        /// Cap radius.
        radius: f64,
        /// Wedges around the axis.
        radial_divisions: i32,
        /// Rows along the side.
        height_divisions: i32,
    },
    /// Unit-height cone along Z with its apex at +Z.
    Cone {
        /// Base radius.
        radius: f64,
        /// Wedges around the axis.
        radial_divisions: i32,
        /// Rows along the slant.
        height_divisions: i32,
    },
    /// Geodesic sphere centered at the origin.
    Sphere {
        /// Sphere radius.
        radius: f64,
        /// Subdivision depth.
        slices: i32,
        /// Accepted for compatibility; does not affect the output.
        stacks: i32,
    },
}

impl Shape {
    /// Streams the shape's triangles into `sink`.
    pub fn tessellate<S: TriangleSink + ?Sized>(&self, sink: &mut S) {
        match *self {
            Shape::Cube { subdivisions } => make_cube(subdivisions, sink),
            Shape::Cylinder {
                radius,
                radial_divisions,
                height_divisions,
            } => make_cylinder(radius, radial_divisions, height_divisions, sink),
            Shape::Cone {
                radius,
                radial_divisions,
                height_divisions,
            } => make_cone(radius, radial_divisions, height_divisions, sink),
            Shape::Sphere {
                radius,
                slices,
                stacks,
            } => make_sphere(radius, slices, stacks, sink),
        }
    }

    /// Returns the exact number of triangles [`Shape::tessellate`] emits,
    /// saturating at `usize::MAX`.
    pub fn triangle_count(&self) -> usize {
        let count = match *self {
            Shape::Cube { subdivisions } => cube_triangle_count(subdivisions),
            Shape::Cylinder {
                radial_divisions,
                height_divisions,
                ..
            } => cylinder_triangle_count(radial_divisions, height_divisions),
            Shape::Cone {
                radial_divisions,
                height_divisions,
                ..
            } => cone_triangle_count(radial_divisions, height_divisions),
            Shape::Sphere { slices, .. } => sphere_triangle_count(slices),
        };
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Returns the shape with every parameter replaced by its clamped value.
    ///
    /// The result tessellates identically to `self`.
    pub fn clamped(&self) -> Shape {
        // Clamped counts never exceed their i32 input, so the casts are lossless.
        match *self {
            Shape::Cube { subdivisions } => Shape::Cube {
                subdivisions: clamp_at_least(subdivisions, MIN_CUBE_SUBDIVISIONS) as i32,
            },
            Shape::Cylinder {
                radius,
                radial_divisions,
                height_divisions,
            } => Shape::Cylinder {
                radius,
                radial_divisions: clamp_at_least(radial_divisions, MIN_RADIAL_DIVISIONS) as i32,
                height_divisions: clamp_at_least(height_divisions, MIN_HEIGHT_DIVISIONS) as i32,
            },
            Shape::Cone {
                radius,
                radial_divisions,
                height_divisions,
            } => Shape::Cone {
                radius,
                radial_divisions: clamp_at_least(radial_divisions, MIN_RADIAL_DIVISIONS) as i32,
                height_divisions: clamp_at_least(height_divisions, MIN_HEIGHT_DIVISIONS) as i32,
            },
            Shape::Sphere {
                radius,
                slices,
                stacks,
            } => Shape::Sphere {
                radius,
                slices: clamp_within(slices, MIN_SPHERE_SLICES, MAX_SPHERE_SLICES) as i32,
                stacks: clamp_at_least(stacks, MIN_SPHERE_STACKS) as i32,
            },
        }
    }

    /// Tessellates into a new soup sized for [`Shape::triangle_count`].
    pub fn to_soup(&self) -> TriangleSoup {
        let mut soup = TriangleSoup::with_capacity(self.triangle_count());
        self.tessellate(&mut soup);
        soup
    }
}

/// Tessellates every shape in parallel, returning one soup per shape in
/// input order.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::{tessellate_batch, Shape};
///
/// let shapes = [Shape::Cube { subdivisions: 2 }, Shape::Cube { subdivisions: 1 }];
/// let soups = tessellate_batch(&shapes);
/// assert_eq!(soups[0].triangle_count(), 48);
/// assert_eq!(soups[1].triangle_count(), 12);
/// ```
pub fn tessellate_batch(shapes: &[Shape]) -> Vec<TriangleSoup> {
    info!(shapes = shapes.len(), "tessellating batch");
    shapes.par_iter().map(Shape::to_soup).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec3::Vec3;

    fn sample_shapes() -> Vec<Shape> {
        vec![
            Shape::Cube { subdivisions: 3 },
            Shape::Cylinder {
                radius: 1.0,
                radial_divisions: 7,
                height_divisions: 2,
            },
            Shape::Cone {
                radius: 0.5,
                radial_divisions: 5,
                height_divisions: 3,
            },
            Shape::Sphere {
                radius: 2.0,
                slices: 3,
                stacks: 3,
            },
        ]
    }

    #[test]
    fn test_triangle_count_matches_emission() {
        for shape in sample_shapes() {
            assert_eq!(shape.to_soup().triangle_count(), shape.triangle_count());
        }
    }

    #[test]
    fn test_triangle_count_after_clamping() {
        assert_eq!(Shape::Cube { subdivisions: -4 }.triangle_count(), 12);
        let cylinder = Shape::Cylinder {
            radius: 1.0,
            radial_divisions: 0,
            height_divisions: 0,
        };
        assert_eq!(cylinder.triangle_count(), 12);
        let sphere = Shape::Sphere {
            radius: 1.0,
            slices: 100,
            stacks: 0,
        };
        assert_eq!(sphere.triangle_count(), 5120);
    }

    #[test]
    fn test_triangle_count_saturates() {
        let cube = Shape::Cube {
            subdivisions: i32::MAX,
        };
        assert_eq!(cube.triangle_count(), usize::MAX);
    }

    #[test]
    fn test_clamped_is_idempotent_and_equivalent() {
        let shapes = [
            Shape::Cube { subdivisions: 0 },
            Shape::Cone {
                radius: 1.0,
                radial_divisions: 2,
                height_divisions: -1,
            },
            Shape::Sphere {
                radius: 1.0,
                slices: 1,
                stacks: 1,
            },
        ];
        for shape in shapes {
            let clamped = shape.clamped();
            assert_eq!(clamped.clamped(), clamped);
            assert_eq!(clamped.to_soup(), shape.to_soup());
        }
    }

    #[test]
    fn test_clamped_values() {
        assert_eq!(
            Shape::Sphere {
                radius: 1.0,
                slices: 9,
                stacks: 0
            }
            .clamped(),
            Shape::Sphere {
                radius: 1.0,
                slices: 5,
                stacks: 3
            }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let json = r#"{"type":"cylinder","radius":1.5,"radial_divisions":12,"height_divisions":2}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(
            shape,
            Shape::Cylinder {
                radius: 1.5,
                radial_divisions: 12,
                height_divisions: 2
            }
        );

        let text = serde_json::to_string(&shape).unwrap();
        let back: Shape = serde_json::from_str(&text).unwrap();
        assert_eq!(back, shape);
    }

    #[test]
    fn test_json_rejects_unknown_type() {
        let json = r#"{"type":"torus","radius":1.0}"#;
        assert!(serde_json::from_str::<Shape>(json).is_err());
    }

    #[test]
    fn test_batch_matches_sequential() {
        let shapes = sample_shapes();
        let sequential: Vec<TriangleSoup> = shapes.iter().map(Shape::to_soup).collect();
        assert_eq!(tessellate_batch(&shapes), sequential);
    }

    #[test]
    fn test_batch_empty() {
        assert!(tessellate_batch(&[]).is_empty());
    }

    #[test]
    fn test_tessellate_into_closure() {
        let mut count = 0usize;
        let mut counter = |_: Vec3, _: Vec3, _: Vec3| count += 1;
        Shape::Cube { subdivisions: 2 }.tessellate(&mut counter);
        assert_eq!(count, 48);
    }
}
