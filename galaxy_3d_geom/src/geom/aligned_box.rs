use glam::{Mat4, Vec3};
use super::frustum::Frustum;
use super::sphere::Sphere;

/// Axis-aligned box, `min <= max` component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignedBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl AlignedBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        assert!(min.cmple(max).all(), "AlignedBox min {} exceeds max {}", min, max);
        Self { min, max }
    }

    pub fn from_sphere(sphere: &Sphere) -> Self {
        let r = Vec3::splat(sphere.radius);
        Self { min: sphere.origin - r, max: sphere.origin + r }
    }

    /// Box bounding all 8 frustum vertices.
    pub fn from_frustum(frustum: &Frustum) -> Self {
        Self::from_points(&frustum.vertices)
    }

    /// Smallest box containing `points`.
    ///
    /// # Panics
    ///
    /// If `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Self {
        assert!(!points.is_empty(), "Tried to create AlignedBox for empty point slice");
        let (min, max) = points[1..]
            .iter()
            .fold((points[0], points[0]), |(min, max), p| (min.min(*p), max.max(*p)));
        Self { min, max }
    }

    /// Box center.
    pub fn origin(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half size along each axis.
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// The 8 corners; bit 0/1/2 of the index selects max.x/max.y/max.z.
    pub fn vertices(&self) -> [Vec3; 8] {
        std::array::from_fn(|i| {
            Vec3::new(
                if i & 1 != 0 { self.max.x } else { self.min.x },
                if i & 2 != 0 { self.max.y } else { self.min.y },
                if i & 4 != 0 { self.max.z } else { self.min.z },
            )
        })
    }

    /// Transform the 8 corners and take their bounds.
    ///
    /// Correct for any affine `mat`, but grows under rotation.
    pub fn transform(&mut self, mat: &Mat4) {
        let corners = self.vertices().map(|v| mat.transform_point3(v));
        *self = Self::from_points(&corners);
    }

    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut ret = *self;
        ret.transform(mat);
        ret
    }
}

#[cfg(test)]
#[path = "aligned_box_tests.rs"]
mod tests;
