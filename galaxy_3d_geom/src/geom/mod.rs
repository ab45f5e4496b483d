//! Geometry module: primitives, distance queries, intersection tests and
//! the view frustum.
//!
//! All types are plain `Copy` values with public fields. Nothing here
//! allocates, logs or returns errors: degenerate inputs resolve to a
//! best-effort value using [`EPSILON`], and programming errors (non-unit
//! directions passed to `Line::new` / `Ray::new`) panic.

mod aligned_box;
mod capsule;
mod frustum;
mod intersect;
mod line;
mod nearest;
mod plane;
mod sphere;

pub use aligned_box::AlignedBox;
pub use capsule::{Capsule, Cylinder};
pub use frustum::{
    Cullable, Frustum, FrustumTest,
    PLANE_NEAR, PLANE_FAR, PLANE_TOP, PLANE_RIGHT, PLANE_BOTTOM, PLANE_LEFT, PLANE_COUNT,
    VERTEX_NEAR_TOP_LEFT, VERTEX_NEAR_TOP_RIGHT, VERTEX_NEAR_BOTTOM_RIGHT, VERTEX_NEAR_BOTTOM_LEFT,
    VERTEX_FAR_TOP_LEFT, VERTEX_FAR_TOP_RIGHT, VERTEX_FAR_BOTTOM_RIGHT, VERTEX_FAR_BOTTOM_LEFT,
    VERTEX_COUNT,
};
pub use intersect::{Hit, Intersect, Intersects};
pub use line::{Line, LineSegment, Ray};
pub use nearest::{Distance, Nearest};
pub use plane::Plane;
pub use sphere::Sphere;

/// Threshold below which a denominator is treated as zero.
///
/// Applies to the closest-approach denominator of two lines
/// (`1 - dot(d0, d1)^2` for unit directions), squared segment lengths,
/// `dot(normal, direction)` for line/plane and line/slab tests, and the
/// squared cross product of a 3-point plane.
pub const EPSILON: f32 = 1e-6;

/// Largest axis scale of the upper 3x3 of `mat`.
///
/// Radii of spheres, cylinders and capsules are multiplied by this.
/// Exact for uniform scale, conservative otherwise.
pub(crate) fn max_scale(mat: &glam::Mat4) -> f32 {
    let x = mat.x_axis.truncate().length_squared();
    let y = mat.y_axis.truncate().length_squared();
    let z = mat.z_axis.truncate().length_squared();
    x.max(y).max(z).sqrt()
}
