/// Plane: `dot(normal, p) + offset = 0`.
///
/// The signed distance of a point is `dot(normal, p) + offset`, positive
/// on the side the normal points to. The normal is unit length for every
/// constructor except `Plane::new`, which stores its inputs verbatim;
/// call `normalize()` before using such a plane for distance queries.

use glam::{Mat3, Mat4, Vec3};
use super::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub normal: Vec3,
    pub offset: f32,
}

impl Plane {
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self { normal, offset }
    }

    /// Plane through `origin` with unit `normal`.
    pub fn from_point_normal(origin: Vec3, normal: Vec3) -> Self {
        Self { normal, offset: -normal.dot(origin) }
    }

    /// Generalized plane equation `a*x + b*y + c*z + d = 0`, normalized.
    pub fn from_equation(a: f32, b: f32, c: f32, d: f32) -> Self {
        let mut ret = Self { normal: Vec3::new(a, b, c), offset: d };
        ret.normalize();
        ret
    }

    /// Plane through 3 points.
    ///
    /// The normal points toward a viewer who sees `p0, p1, p2` in clockwise
    /// order:
    ///
    /// ```text
    ///      1
    ///     / \
    ///    /   \      N points out of the page
    ///   /     \
    ///  0-------2
    /// ```
    ///
    /// Collinear or coincident points fall back to a `+Z` normal through `p0`.
    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Self {
        let n = (p2 - p0).cross(p1 - p0);
        let len2 = n.length_squared();
        let normal = if len2 < EPSILON * EPSILON {
            Vec3::Z
        } else {
            n / len2.sqrt()
        };
        Self::from_point_normal(p0, normal)
    }

    /// Point on the plane closest to the world origin.
    pub fn origin(&self) -> Vec3 {
        self.normal * -self.offset
    }

    /// Scale normal and offset so the normal is unit length.
    pub fn normalize(&mut self) {
        let len = self.normal.length();
        if len > 0.0 {
            self.normal /= len;
            self.offset /= len;
        }
    }

    /// `dot(normal, point) + offset`
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.offset
    }

    /// Transform a point on the plane by `mat` and the normal by the
    /// inverse-transpose of its upper 3x3, then recompute the offset.
    pub fn transform(&mut self, mat: &Mat4) {
        let origin = mat.transform_point3(self.origin());
        let normal_mat = Mat3::from_mat4(*mat).inverse().transpose();
        self.normal = (normal_mat * self.normal).normalize();
        self.offset = -self.normal.dot(origin);
    }

    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut ret = *self;
        ret.transform(mat);
        ret
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
