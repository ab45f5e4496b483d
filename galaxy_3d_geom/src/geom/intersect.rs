/// Intersection tests.
///
/// Line and ray queries are computed as a parametric interval
/// `lo <= hi` along the line, then shaped per query kind:
/// - `Line`: both hits, ordered so `|t0| <= |t1|`
/// - `Ray`: `t0 <= t1`; if the origin is inside the volume, `t0 == t1`
///   (the exit point); volumes entirely behind the origin are a miss
///
/// `Intersects` for lines and rays runs the same interval code as
/// `Intersect` and only discards the parameters, so the boolean and
/// parametric forms agree for every input.
///
/// Volume/volume tests are boolean only.

use glam::Vec3;
use super::aligned_box::AlignedBox;
use super::capsule::{Capsule, Cylinder};
use super::line::{Line, Ray};
use super::nearest::Distance;
use super::plane::Plane;
use super::sphere::Sphere;
use super::EPSILON;

/// Parametric hit distances along a line or ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub t0: f32,
    pub t1: f32,
}

/// Boolean intersection test.
pub trait Intersects<T> {
    fn intersects(&self, other: &T) -> bool;
}

/// Parametric intersection test for lines and rays.
pub trait Intersect<T>: Intersects<T> {
    /// `None` on a miss. For planes `t0 == t1`.
    fn intersect(&self, other: &T) -> Option<Hit>;
}

// ===== INTERVAL SHAPING =====

fn line_hit((lo, hi): (f32, f32)) -> Hit {
    if lo.abs() <= hi.abs() {
        Hit { t0: lo, t1: hi }
    } else {
        Hit { t0: hi, t1: lo }
    }
}

fn ray_hit((lo, hi): (f32, f32)) -> Option<Hit> {
    if hi < 0.0 {
        None
    } else if lo < 0.0 {
        Some(Hit { t0: hi, t1: hi })
    } else {
        Some(Hit { t0: lo, t1: hi })
    }
}

// ===== LINE INTERVALS =====

fn sphere_interval(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<(f32, f32)> {
    let m = origin - center;
    let b = m.dot(dir);
    let c = m.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    Some((-b - sq, -b + sq))
}

fn plane_interval(origin: Vec3, dir: Vec3, plane: &Plane) -> Option<(f32, f32)> {
    let denom = plane.normal.dot(dir);
    if denom.abs() < EPSILON {
        return None;
    }
    let t = -plane.signed_distance(origin) / denom;
    Some((t, t))
}

/// Slab test; an axis the direction is parallel to must contain the origin.
fn box_interval(origin: Vec3, dir: Vec3, aabb: &AlignedBox) -> Option<(f32, f32)> {
    let mut lo = f32::NEG_INFINITY;
    let mut hi = f32::INFINITY;
    for i in 0..3 {
        if dir[i].abs() < EPSILON {
            if origin[i] < aabb.min[i] || origin[i] > aabb.max[i] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / dir[i];
        let ta = (aabb.min[i] - origin[i]) * inv;
        let tb = (aabb.max[i] - origin[i]) * inv;
        lo = lo.max(ta.min(tb));
        hi = hi.min(ta.max(tb));
        if lo > hi {
            return None;
        }
    }
    Some((lo, hi))
}

/// Infinite cylinder around the unit `axis` through the point `m` is
/// relative to.
fn side_interval(m: Vec3, dir: Vec3, axis: Vec3, radius: f32) -> Option<(f32, f32)> {
    let d_perp = dir - axis * dir.dot(axis);
    let m_perp = m - axis * m.dot(axis);
    let a = d_perp.length_squared();
    let c = m_perp.length_squared() - radius * radius;
    if a < EPSILON {
        // Parallel to the axis: inside the tube everywhere or nowhere.
        return if c > 0.0 { None } else { Some((f32::NEG_INFINITY, f32::INFINITY)) };
    }
    let b = m_perp.dot(d_perp);
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    Some(((-b - sq) / a, (-b + sq) / a))
}

/// Region between the cap planes at axis positions 0 and `len`.
fn cap_interval(m: Vec3, dir: Vec3, axis: Vec3, len: f32) -> Option<(f32, f32)> {
    let s0 = m.dot(axis);
    let rate = dir.dot(axis);
    if rate.abs() < EPSILON {
        return if s0 < 0.0 || s0 > len { None } else { Some((f32::NEG_INFINITY, f32::INFINITY)) };
    }
    let ta = -s0 / rate;
    let tb = (len - s0) / rate;
    Some((ta.min(tb), ta.max(tb)))
}

fn cylinder_interval(origin: Vec3, dir: Vec3, start: Vec3, end: Vec3, radius: f32) -> Option<(f32, f32)> {
    let axis = end - start;
    let len = axis.length();
    if len < EPSILON {
        return None;
    }
    let axis = axis / len;
    let m = origin - start;
    let side = side_interval(m, dir, axis, radius)?;
    let caps = cap_interval(m, dir, axis, len)?;
    let lo = side.0.max(caps.0);
    let hi = side.1.min(caps.1);
    if lo > hi { None } else { Some((lo, hi)) }
}

/// Union of the flat-capped cylinder and the two end spheres. The capsule
/// is convex, so the union of the three pieces' intervals is one interval.
fn capsule_interval(origin: Vec3, dir: Vec3, capsule: &Capsule) -> Option<(f32, f32)> {
    [
        sphere_interval(origin, dir, capsule.start, capsule.radius),
        sphere_interval(origin, dir, capsule.end, capsule.radius),
        cylinder_interval(origin, dir, capsule.start, capsule.end, capsule.radius),
    ]
    .into_iter()
    .flatten()
    .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1)))
}

// ===== LINE / RAY IMPLEMENTATIONS =====

macro_rules! impl_line_intersect {
    ($prim:ty, |$origin:ident, $dir:ident, $other:ident| $interval:expr) => {
        impl Intersects<$prim> for Line {
            fn intersects(&self, $other: &$prim) -> bool {
                let ($origin, $dir) = (self.origin, self.direction);
                $interval.is_some()
            }
        }

        impl Intersect<$prim> for Line {
            fn intersect(&self, $other: &$prim) -> Option<Hit> {
                let ($origin, $dir) = (self.origin, self.direction);
                $interval.map(line_hit)
            }
        }

        impl Intersects<$prim> for Ray {
            fn intersects(&self, $other: &$prim) -> bool {
                let ($origin, $dir) = (self.origin, self.direction);
                $interval.and_then(ray_hit).is_some()
            }
        }

        impl Intersect<$prim> for Ray {
            fn intersect(&self, $other: &$prim) -> Option<Hit> {
                let ($origin, $dir) = (self.origin, self.direction);
                $interval.and_then(ray_hit)
            }
        }
    };
}

impl_line_intersect!(Sphere, |o, d, s| sphere_interval(o, d, s.origin, s.radius));
impl_line_intersect!(Plane, |o, d, p| plane_interval(o, d, p));
impl_line_intersect!(AlignedBox, |o, d, b| box_interval(o, d, b));
impl_line_intersect!(Capsule, |o, d, c| capsule_interval(o, d, c));
impl_line_intersect!(Cylinder, |o, d, c| cylinder_interval(o, d, c.start, c.end, c.radius));

// ===== VOLUME / VOLUME =====

impl Intersects<Sphere> for Sphere {
    fn intersects(&self, other: &Sphere) -> bool {
        let r = self.radius + other.radius;
        self.origin.distance_squared(other.origin) <= r * r
    }
}

impl Intersects<Plane> for Sphere {
    fn intersects(&self, plane: &Plane) -> bool {
        plane.signed_distance(self.origin).abs() <= self.radius
    }
}

impl Intersects<Sphere> for Plane {
    fn intersects(&self, sphere: &Sphere) -> bool {
        sphere.intersects(self)
    }
}

impl Intersects<AlignedBox> for Sphere {
    fn intersects(&self, aabb: &AlignedBox) -> bool {
        aabb.distance2(&self.origin) <= self.radius * self.radius
    }
}

impl Intersects<Sphere> for AlignedBox {
    fn intersects(&self, sphere: &Sphere) -> bool {
        sphere.intersects(self)
    }
}

impl Intersects<AlignedBox> for AlignedBox {
    fn intersects(&self, other: &AlignedBox) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

impl Intersects<Plane> for AlignedBox {
    /// Projected half-extent against the center's signed distance.
    fn intersects(&self, plane: &Plane) -> bool {
        let radius = self.extents().dot(plane.normal.abs());
        plane.signed_distance(self.origin()).abs() <= radius
    }
}

impl Intersects<AlignedBox> for Plane {
    fn intersects(&self, aabb: &AlignedBox) -> bool {
        aabb.intersects(self)
    }
}

#[cfg(test)]
#[path = "intersect_tests.rs"]
mod tests;
