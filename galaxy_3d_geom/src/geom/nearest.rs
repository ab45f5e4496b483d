/// Nearest-point and distance queries.
///
/// `Distance::distance` is always `distance2().sqrt()`; implementations
/// only provide the squared form so the two can never drift apart.

use glam::Vec3;
use super::aligned_box::AlignedBox;
use super::line::{Line, LineSegment, Ray};
use super::plane::Plane;
use super::sphere::Sphere;
use super::EPSILON;

/// Closest point (or line parameters) on `self` relative to `T`.
pub trait Nearest<T> {
    type Output;

    fn nearest(&self, other: &T) -> Self::Output;
}

/// Squared and true distance between `self` and `T`.
pub trait Distance<T> {
    fn distance2(&self, other: &T) -> f32;

    /// Never override: must equal `distance2().sqrt()` exactly.
    #[inline]
    fn distance(&self, other: &T) -> f32 {
        self.distance2(other).sqrt()
    }
}

// ===== PRIMITIVE / POINT =====

impl Nearest<Vec3> for Line {
    type Output = Vec3;

    fn nearest(&self, point: &Vec3) -> Vec3 {
        self.at((*point - self.origin).dot(self.direction))
    }
}

impl Nearest<Vec3> for Ray {
    type Output = Vec3;

    fn nearest(&self, point: &Vec3) -> Vec3 {
        self.at((*point - self.origin).dot(self.direction).max(0.0))
    }
}

impl Nearest<Vec3> for LineSegment {
    type Output = Vec3;

    fn nearest(&self, point: &Vec3) -> Vec3 {
        let ab = self.direction();
        let len2 = ab.length_squared();
        if len2 < EPSILON {
            return self.start;
        }
        let t = ((*point - self.start).dot(ab) / len2).clamp(0.0, 1.0);
        self.at(t)
    }
}

impl Nearest<Vec3> for Sphere {
    type Output = Vec3;

    /// Closest point on the surface. A point at the exact center projects
    /// along `+Y`.
    fn nearest(&self, point: &Vec3) -> Vec3 {
        let dir = (*point - self.origin).try_normalize().unwrap_or(Vec3::Y);
        self.origin + dir * self.radius
    }
}

impl Nearest<Vec3> for Plane {
    type Output = Vec3;

    fn nearest(&self, point: &Vec3) -> Vec3 {
        *point - self.normal * self.signed_distance(*point)
    }
}

impl Nearest<Vec3> for AlignedBox {
    type Output = Vec3;

    /// Points inside the box are their own nearest point.
    fn nearest(&self, point: &Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

macro_rules! impl_point_distance {
    ($($ty:ty),*) => {$(
        impl Distance<Vec3> for $ty {
            #[inline]
            fn distance2(&self, point: &Vec3) -> f32 {
                (self.nearest(point) - *point).length_squared()
            }
        }
    )*};
}

impl_point_distance!(Line, Ray, LineSegment, Sphere, Plane, AlignedBox);

// ===== PRIMITIVE / PRIMITIVE =====

impl Nearest<Line> for Line {
    /// `(t0, t1)`: parameter along `self` nearest to `other`, and along
    /// `other` nearest to `self`.
    ///
    /// Parallel lines (denominator below `EPSILON`) return `t0 = 0` and the
    /// point on `other` nearest to `self.origin`.
    type Output = (f32, f32);

    fn nearest(&self, other: &Line) -> (f32, f32) {
        let w = self.origin - other.origin;
        let b = self.direction.dot(other.direction);
        let d = self.direction.dot(w);
        let e = other.direction.dot(w);
        let denom = 1.0 - b * b;
        if denom < EPSILON {
            return (0.0, e);
        }
        ((b * e - d) / denom, (e - b * d) / denom)
    }
}

impl Nearest<Line> for Ray {
    /// `(tr, tl)`: distance along the ray nearest to the line, and
    /// parameter along the line nearest to the ray.
    type Output = (f32, f32);

    fn nearest(&self, line: &Line) -> (f32, f32) {
        let (tr, tl) = Line::from(*self).nearest(line);
        if tr >= 0.0 {
            return (tr, tl);
        }
        // Closest approach is behind the ray: clamp to the origin.
        (0.0, (self.origin - line.origin).dot(line.direction))
    }
}

impl Nearest<LineSegment> for Ray {
    /// `(tr, point)`: distance along the ray nearest to the segment, and
    /// the point on the segment nearest to the ray.
    type Output = (f32, Vec3);

    fn nearest(&self, segment: &LineSegment) -> (f32, Vec3) {
        let (s, t) = closest_params(
            self.origin,
            self.direction,
            segment.start,
            segment.direction(),
            None,
        );
        (s, segment.at(t))
    }
}

impl Distance<Line> for Line {
    fn distance2(&self, other: &Line) -> f32 {
        let (t0, t1) = self.nearest(other);
        (self.at(t0) - other.at(t1)).length_squared()
    }
}

impl Distance<LineSegment> for LineSegment {
    fn distance2(&self, other: &LineSegment) -> f32 {
        let (s, t) = closest_params(
            self.start,
            self.direction(),
            other.start,
            other.direction(),
            Some(1.0),
        );
        (self.at(s) - other.at(t)).length_squared()
    }
}

impl Distance<LineSegment> for Ray {
    fn distance2(&self, segment: &LineSegment) -> f32 {
        let (tr, point) = self.nearest(segment);
        (self.at(tr) - point).length_squared()
    }
}

/// Closest points between `p1 + s*d1` with `s in [0, s_max]` (unbounded
/// above if `s_max` is `None`) and the segment `p2 + t*d2`, `t in [0, 1]`.
///
/// Clamp-and-recompute scheme from Ericson, Real-Time Collision Detection
/// 5.1.9, with the first parameter's upper bound made optional so rays
/// share the code with segments.
fn closest_params(p1: Vec3, d1: Vec3, p2: Vec3, d2: Vec3, s_max: Option<f32>) -> (f32, f32) {
    let clamp_s = |s: f32| match s_max {
        Some(max) => s.clamp(0.0, max),
        None => s.max(0.0),
    };

    let r = p1 - p2;
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = d2.dot(r);

    if a < EPSILON && e < EPSILON {
        return (0.0, 0.0);
    }
    if a < EPSILON {
        return (0.0, (f / e).clamp(0.0, 1.0));
    }

    let c = d1.dot(r);
    if e < EPSILON {
        return (clamp_s(-c / a), 0.0);
    }

    let b = d1.dot(d2);
    let denom = a * e - b * b;
    let mut s = if denom > EPSILON { clamp_s((b * f - c * e) / denom) } else { 0.0 };
    let mut t = (b * s + f) / e;

    if t < 0.0 {
        t = 0.0;
        s = clamp_s(-c / a);
    } else if t > 1.0 {
        t = 1.0;
        s = clamp_s((b - c) / a);
    }
    (s, t)
}

#[cfg(test)]
#[path = "nearest_tests.rs"]
mod tests;
