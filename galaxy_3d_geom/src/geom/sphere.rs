use glam::{Mat4, Vec3};
use super::aligned_box::AlignedBox;
use super::max_scale;

/// Sphere with center `origin` and `radius >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(origin: Vec3, radius: f32) -> Self {
        assert!(radius >= 0.0, "Sphere radius must be >= 0, got {}", radius);
        Self { origin, radius }
    }

    /// Bounding sphere of a box: box center, half-diagonal radius.
    pub fn from_box(aabb: &AlignedBox) -> Self {
        Self {
            origin: aabb.origin(),
            radius: (aabb.max - aabb.min).length() * 0.5,
        }
    }

    /// Move the center as a point and scale the radius by the largest axis
    /// scale of `mat` (exact only for uniform scale).
    pub fn transform(&mut self, mat: &Mat4) {
        self.origin = mat.transform_point3(self.origin);
        self.radius *= max_scale(mat);
    }

    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut ret = *self;
        ret.transform(mat);
        ret
    }
}

#[cfg(test)]
#[path = "sphere_tests.rs"]
mod tests;
