/// Line, Ray and LineSegment primitives.
///
/// `Line` extends to infinity in both directions from its origin, `Ray`
/// only along `+direction`. Both carry a unit direction; `LineSegment` is
/// bounded by its two end points.

use glam::{Mat4, Vec3};

/// Infinite line through `origin` along `±direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

impl Line {
    /// # Panics
    ///
    /// If `direction` is not unit length.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        assert!(direction.is_normalized(), "Line direction must be unit length, got {}", direction);
        Self { origin, direction }
    }

    /// Point at parameter `t` along the line.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn transform(&mut self, mat: &Mat4) {
        self.origin = mat.transform_point3(self.origin);
        self.direction = mat.transform_vector3(self.direction).normalize();
    }

    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut ret = *self;
        ret.transform(mat);
        ret
    }
}

/// Half-line starting at `origin`, extending along `+direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub direction: Vec3,
}

impl Ray {
    /// # Panics
    ///
    /// If `direction` is not unit length.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        assert!(direction.is_normalized(), "Ray direction must be unit length, got {}", direction);
        Self { origin, direction }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    pub fn transform(&mut self, mat: &Mat4) {
        self.origin = mat.transform_point3(self.origin);
        self.direction = mat.transform_vector3(self.direction).normalize();
    }

    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut ret = *self;
        ret.transform(mat);
        ret
    }
}

impl From<Ray> for Line {
    fn from(ray: Ray) -> Self {
        Line { origin: ray.origin, direction: ray.direction }
    }
}

/// Segment between `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// `end - start` (not normalized).
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Point at normalized parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.start + self.direction() * t
    }

    pub fn transform(&mut self, mat: &Mat4) {
        self.start = mat.transform_point3(self.start);
        self.end = mat.transform_point3(self.end);
    }

    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut ret = *self;
        ret.transform(mat);
        ret
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
