/// Frustum: 6 planes / 8 vertices bounding a view volume.
///
/// Planes and vertices are always built together: every constructor and
/// `transform()` produce the vertices first, then derive the planes from
/// them, so the two never disagree. Plane normals point inward, so a point
/// is inside when its signed distance to every plane is `>= 0`.
///
/// Vertex ordering (view space, camera looking down -Z):
///
/// ```text
///  4------------5
///  |\          /|
///  7-\--------/-6
///   \ 0------1 /
///    \|      |/
///     3------2
/// ```

use glam::{Mat4, Vec3};
use super::aligned_box::AlignedBox;
use super::plane::Plane;
use super::sphere::Sphere;
use super::EPSILON;

/// Result of a 3-way frustum/box classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Box is entirely outside the frustum
    Outside,
    /// Box is entirely inside the frustum
    Inside,
    /// Box straddles at least one plane
    Partial,
}

/// Frustum plane indices
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_TOP: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_BOTTOM: usize = 4;
pub const PLANE_LEFT: usize = 5;
pub const PLANE_COUNT: usize = 6;

/// Frustum vertex indices
pub const VERTEX_NEAR_TOP_LEFT: usize = 0;
pub const VERTEX_NEAR_TOP_RIGHT: usize = 1;
pub const VERTEX_NEAR_BOTTOM_RIGHT: usize = 2;
pub const VERTEX_NEAR_BOTTOM_LEFT: usize = 3;
pub const VERTEX_FAR_TOP_LEFT: usize = 4;
pub const VERTEX_FAR_TOP_RIGHT: usize = 5;
pub const VERTEX_FAR_BOTTOM_RIGHT: usize = 6;
pub const VERTEX_FAR_BOTTOM_LEFT: usize = 7;
pub const VERTEX_COUNT: usize = 8;

/// Three vertices per plane, ordered so `Plane::from_points` yields an
/// inward normal for an unmirrored vertex set. `init_planes` reorients
/// planes left facing outward by a mirroring transform.
const PLANE_VERTICES: [[usize; 3]; PLANE_COUNT] = [
    [VERTEX_NEAR_TOP_LEFT, VERTEX_NEAR_BOTTOM_LEFT, VERTEX_NEAR_TOP_RIGHT],
    [VERTEX_FAR_TOP_LEFT, VERTEX_FAR_TOP_RIGHT, VERTEX_FAR_BOTTOM_LEFT],
    [VERTEX_NEAR_TOP_LEFT, VERTEX_NEAR_TOP_RIGHT, VERTEX_FAR_TOP_LEFT],
    [VERTEX_NEAR_TOP_RIGHT, VERTEX_NEAR_BOTTOM_RIGHT, VERTEX_FAR_TOP_RIGHT],
    [VERTEX_NEAR_BOTTOM_RIGHT, VERTEX_NEAR_BOTTOM_LEFT, VERTEX_FAR_BOTTOM_RIGHT],
    [VERTEX_NEAR_BOTTOM_LEFT, VERTEX_NEAR_TOP_LEFT, VERTEX_FAR_BOTTOM_LEFT],
];

/// A volume that can be tested against a single frustum plane.
pub trait Cullable {
    /// False if the volume lies entirely on the negative side of `plane`.
    fn inside_plane(&self, plane: &Plane) -> bool;
}

impl Cullable for Sphere {
    #[inline]
    fn inside_plane(&self, plane: &Plane) -> bool {
        plane.signed_distance(self.origin) >= -self.radius
    }
}

impl Cullable for AlignedBox {
    /// Tests the positive vertex only. A box near a frustum edge can pass
    /// every plane while lying outside the volume; such boxes are kept.
    #[inline]
    fn inside_plane(&self, plane: &Plane) -> bool {
        plane.signed_distance(positive_vertex(self, plane.normal)) >= 0.0
    }
}

/// Corner of `aabb` furthest along `normal`.
#[inline]
fn positive_vertex(aabb: &AlignedBox, normal: Vec3) -> Vec3 {
    Vec3::new(
        if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
        if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
        if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
    )
}

/// Corner of `aabb` furthest against `normal`.
#[inline]
fn negative_vertex(aabb: &AlignedBox, normal: Vec3) -> Vec3 {
    Vec3::new(
        if normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
        if normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
        if normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum {
    /// Near, far, top, right, bottom, left
    pub planes: [Plane; PLANE_COUNT],
    pub vertices: [Vec3; VERTEX_COUNT],
}

impl Frustum {
    /// Symmetric perspective frustum.
    pub fn perspective(aspect: f32, tan_half_fov: f32, near: f32, far: f32) -> Self {
        let horizontal = tan_half_fov * aspect;
        Self::new(tan_half_fov, tan_half_fov, horizontal, horizontal, near, far, false)
    }

    /// Frustum from projection extents.
    ///
    /// If `is_ortho`, `up/down/left/right` are offsets from the center of the
    /// projection plane; otherwise they are `tan(angle)` from the view axis.
    /// Positive values extend away from the axis on their own side.
    pub fn new(up: f32, down: f32, left: f32, right: f32, near: f32, far: f32, is_ortho: bool) -> Self {
        let (near_scale, far_scale) = if is_ortho { (1.0, 1.0) } else { (near, far) };

        let face = |scale: f32, z: f32| -> [Vec3; 4] {
            [
                Vec3::new(-left * scale, up * scale, z),
                Vec3::new(right * scale, up * scale, z),
                Vec3::new(right * scale, -down * scale, z),
                Vec3::new(-left * scale, -down * scale, z),
            ]
        };
        let n = face(near_scale, -near);
        let f = face(far_scale, -far);

        Self::from_vertices([n[0], n[1], n[2], n[3], f[0], f[1], f[2], f[3]])
    }

    /// Combined frustum enclosing a left and right eye frustum (VR).
    ///
    /// Left-side vertices come from the left eye, right-side vertices from
    /// the right eye. Top vertices take the higher y of the two eyes and
    /// bottom vertices the lower. Both eyes must share orientation and
    /// near/far distances.
    pub fn from_stereo(left: &Frustum, right: &Frustum) -> Self {
        const LEFT_SIDE: [bool; VERTEX_COUNT] = [true, false, false, true, true, false, false, true];
        const TOP_SIDE: [bool; VERTEX_COUNT] = [true, true, false, false, true, true, false, false];

        let vertices = std::array::from_fn(|i| {
            let mut v = if LEFT_SIDE[i] { left.vertices[i] } else { right.vertices[i] };
            v.y = if TOP_SIDE[i] {
                left.vertices[i].y.max(right.vertices[i].y)
            } else {
                left.vertices[i].y.min(right.vertices[i].y)
            };
            v
        });
        Self::from_vertices(vertices)
    }

    /// `base` with the near and far faces moved along the view axis by
    /// `near_offset` / `far_offset`. Vertices slide along the four side
    /// edges, so the side planes are unchanged.
    pub fn with_clip_offsets(base: &Frustum, near_offset: f32, far_offset: f32) -> Self {
        let axis = base.planes[PLANE_NEAR].normal;
        let mut vertices = base.vertices;
        for i in 0..4 {
            let edge = base.vertices[i + 4] - base.vertices[i];
            let rate = edge.dot(axis);
            if rate.abs() < EPSILON {
                continue;
            }
            vertices[i] = base.vertices[i] + edge * (near_offset / rate);
            vertices[i + 4] = base.vertices[i + 4] + edge * (far_offset / rate);
        }
        Self::from_vertices(vertices)
    }

    /// Unproject the corners of the OpenGL NDC cube (`z` in [-1, 1]) by an
    /// inverse projection (or inverse view-projection) matrix.
    pub fn from_inverse_projection(inverse: &Mat4) -> Self {
        const NDC: [Vec3; VERTEX_COUNT] = [
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(-1.0, -1.0, 1.0),
        ];
        Self::from_vertices(NDC.map(|p| inverse.project_point3(p)))
    }

    /// Build from 8 vertices in the documented order; planes are derived.
    pub fn from_vertices(vertices: [Vec3; VERTEX_COUNT]) -> Self {
        let mut ret = Self {
            planes: [Plane::new(Vec3::Z, 0.0); PLANE_COUNT],
            vertices,
        };
        ret.init_planes();
        ret
    }

    /// Replace the vertices and rebuild the planes.
    pub fn set_vertices(&mut self, vertices: [Vec3; VERTEX_COUNT]) {
        self.vertices = vertices;
        self.init_planes();
    }

    /// Transform the vertices by `mat`, then rebuild the planes.
    pub fn transform(&mut self, mat: &Mat4) {
        for v in &mut self.vertices {
            *v = mat.transform_point3(*v);
        }
        self.init_planes();
    }

    pub fn transformed(&self, mat: &Mat4) -> Self {
        let mut ret = *self;
        ret.transform(mat);
        ret
    }

    /// True unless `volume` lies entirely outside one of the 6 planes.
    ///
    /// Conservative for boxes: see [`Cullable`] for `AlignedBox`.
    pub fn inside<V: Cullable>(&self, volume: &V) -> bool {
        self.planes.iter().all(|plane| volume.inside_plane(plane))
    }

    /// Same as `inside()` but skips the near plane.
    pub fn inside_ignore_near<V: Cullable>(&self, volume: &V) -> bool {
        self.planes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != PLANE_NEAR)
            .all(|(_, plane)| volume.inside_plane(plane))
    }

    /// Classify a box against the frustum (3-way test).
    ///
    /// - p-vertex outside any plane → `Outside` (early out, same as `!inside()`)
    /// - n-vertex outside any plane → at least `Partial`
    /// - otherwise → `Inside`
    pub fn classify(&self, aabb: &AlignedBox) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            if plane.signed_distance(positive_vertex(aabb, plane.normal)) < 0.0 {
                return FrustumTest::Outside;
            }
            if plane.signed_distance(negative_vertex(aabb, plane.normal)) < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }

    fn init_planes(&mut self) {
        let center = self.vertices.iter().sum::<Vec3>() / VERTEX_COUNT as f32;

        for (plane, [a, b, c]) in self.planes.iter_mut().zip(PLANE_VERTICES) {
            *plane = Plane::from_points(self.vertices[a], self.vertices[b], self.vertices[c]);

            // Negative determinant reverses the winding
            if plane.signed_distance(center) < 0.0 {
                plane.normal = -plane.normal;
                plane.offset = -plane.offset;
            }
        }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
