/// Cylinder and Capsule primitives.
///
/// Both are defined by an axis segment `start..end` and a radius. The
/// cylinder is closed by flat caps perpendicular to the axis, the capsule
/// by hemispheres centered on the end points.

use glam::{Mat4, Vec3};
use super::max_scale;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cylinder {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

impl Cylinder {
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        assert!(radius >= 0.0, "Cylinder radius must be >= 0, got {}", radius);
        Self { start, end, radius }
    }

    /// Axis midpoint.
    pub fn origin(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    pub fn transform(&mut self, mat: &Mat4) {
        self.start = mat.transform_point3(self.start);
        self.end = mat.transform_point3(self.end);
        self.radius *= max_scale(mat);
    }

    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut ret = *self;
        ret.transform(mat);
        ret
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capsule {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

impl Capsule {
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        assert!(radius >= 0.0, "Capsule radius must be >= 0, got {}", radius);
        Self { start, end, radius }
    }

    /// Axis midpoint.
    pub fn origin(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    pub fn transform(&mut self, mat: &Mat4) {
        self.start = mat.transform_point3(self.start);
        self.end = mat.transform_point3(self.end);
        self.radius *= max_scale(mat);
    }

    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut ret = *self;
        ret.transform(mat);
        ret
    }
}

#[cfg(test)]
#[path = "capsule_tests.rs"]
mod tests;
