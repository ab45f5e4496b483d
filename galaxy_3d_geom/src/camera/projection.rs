/// Projection: canonical camera projection parameters.
///
/// The four half-extents describe the sides of the view volume relative
/// to the view axis:
/// - perspective: `tan` of the angle between the axis and that side
/// - orthographic: linear offset from the axis at any depth
///
/// Every `with_*` derivation returns a new value; nothing is mutated in
/// place. `Camera` stores one `Projection` and rebuilds its matrix and
/// frustum from it lazily.

use glam::{Mat4, Vec2, Vec4};
use crate::error::Result;
use crate::geom::{
    Frustum, EPSILON,
    VERTEX_NEAR_TOP_LEFT, VERTEX_NEAR_TOP_RIGHT, VERTEX_NEAR_BOTTOM_RIGHT, VERTEX_NEAR_BOTTOM_LEFT,
    VERTEX_FAR_TOP_LEFT, VERTEX_FAR_BOTTOM_RIGHT,
};

/// Tolerance when deciding if extents read back from a matrix are equal.
const READBACK_TOLERANCE: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    pub up: f32,
    pub down: f32,
    pub left: f32,
    pub right: f32,
    pub near: f32,
    pub far: f32,
    pub is_ortho: bool,
    /// `up == down` and `left == right`
    pub is_symmetric: bool,
}

impl Projection {
    /// Symmetric perspective projection.
    pub fn perspective(vertical_fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let up = (vertical_fov * 0.5).tan();
        let side = up * aspect;
        Self {
            up,
            down: up,
            left: side,
            right: side,
            near,
            far,
            is_ortho: false,
            is_symmetric: true,
        }
    }

    /// Orthographic projection from linear half-extents.
    pub fn orthographic(up: f32, down: f32, left: f32, right: f32, near: f32, far: f32) -> Self {
        Self {
            up,
            down,
            left,
            right,
            near,
            far,
            is_ortho: true,
            is_symmetric: up == down && left == right,
        }
    }

    /// Width over height of the view volume.
    pub fn aspect(&self) -> f32 {
        (self.left + self.right) / (self.up + self.down)
    }

    /// Full vertical angle in radians. Perspective only.
    pub fn vertical_fov(&self) -> f32 {
        self.up.atan() + self.down.atan()
    }

    /// Full horizontal angle in radians. Perspective only.
    pub fn horizontal_fov(&self) -> f32 {
        self.left.atan() + self.right.atan()
    }

    /// Same aspect ratio, new vertical field of view. Result is symmetric.
    pub fn with_vertical_fov(&self, radians: f32) -> Self {
        let aspect = self.aspect();
        let up = (radians * 0.5).tan();
        let side = up * aspect;
        Self {
            up,
            down: up,
            left: side,
            right: side,
            is_symmetric: true,
            ..*self
        }
    }

    /// Same aspect ratio, new horizontal field of view. Result is symmetric.
    pub fn with_horizontal_fov(&self, radians: f32) -> Self {
        let aspect = self.aspect();
        let side = (radians * 0.5).tan();
        let up = side / aspect;
        Self {
            up,
            down: up,
            left: side,
            right: side,
            is_symmetric: true,
            ..*self
        }
    }

    /// Keeps the vertical extent (averaged), resizes the horizontal one.
    /// Result is symmetric.
    pub fn with_aspect(&self, aspect: f32) -> Self {
        let vertical = (self.up + self.down) * 0.5;
        let side = vertical * aspect;
        Self {
            up: vertical,
            down: vertical,
            left: side,
            right: side,
            is_symmetric: true,
            ..*self
        }
    }

    /// Enabling symmetry averages up/down and left/right. Disabling it only
    /// clears the flag; the previous asymmetry is not restored.
    pub fn with_symmetric(&self, symmetric: bool) -> Self {
        if !symmetric {
            return Self { is_symmetric: false, ..*self };
        }
        let vertical = (self.up + self.down) * 0.5;
        let horizontal = (self.left + self.right) * 0.5;
        Self {
            up: vertical,
            down: vertical,
            left: horizontal,
            right: horizontal,
            is_symmetric: true,
            ..*self
        }
    }

    pub fn with_clip(&self, near: f32, far: f32) -> Self {
        Self { near, far, ..*self }
    }

    /// Read the parameters back from an OpenGL-convention projection matrix.
    ///
    /// The matrix is inverted and the NDC cube unprojected; extents come
    /// from the near face, near/far from the near and far faces. The
    /// projection is orthographic when the near and far faces have the same
    /// x/y footprint.
    pub fn from_matrix(proj: &Mat4) -> Result<Self> {
        if !proj.is_finite() {
            crate::engine_bail!(InvalidProjection, "galaxy3d::Projection",
                "Projection matrix has non-finite elements");
        }
        if proj.determinant() == 0.0 {
            crate::engine_bail!(InvalidProjection, "galaxy3d::Projection",
                "Projection matrix is not invertible");
        }

        let frustum = Frustum::from_inverse_projection(&proj.inverse());
        let v = &frustum.vertices;

        let near = -v[VERTEX_NEAR_TOP_LEFT].z;
        let far = -v[VERTEX_FAR_TOP_LEFT].z;
        let is_ortho = same_footprint(v[VERTEX_NEAR_TOP_LEFT].truncate(), v[VERTEX_FAR_TOP_LEFT].truncate())
            && same_footprint(v[VERTEX_NEAR_BOTTOM_RIGHT].truncate(), v[VERTEX_FAR_BOTTOM_RIGHT].truncate());

        let mut up = v[VERTEX_NEAR_TOP_LEFT].y;
        let mut down = -v[VERTEX_NEAR_BOTTOM_LEFT].y;
        let mut left = -v[VERTEX_NEAR_BOTTOM_LEFT].x;
        let mut right = v[VERTEX_NEAR_TOP_RIGHT].x;

        if far <= near {
            crate::engine_bail!(InvalidProjection, "galaxy3d::Projection",
                "Projection far plane ({}) is not beyond near plane ({})", far, near);
        }

        if !is_ortho {
            if near < EPSILON {
                crate::engine_bail!(InvalidProjection, "galaxy3d::Projection",
                    "Perspective projection has a near plane at {}", near);
            }
            up /= near;
            down /= near;
            left /= near;
            right /= near;
        }

        let ret = Self {
            up,
            down,
            left,
            right,
            near,
            far,
            is_ortho,
            is_symmetric: (up - down).abs() < READBACK_TOLERANCE
                && (left - right).abs() < READBACK_TOLERANCE,
        };

        if ![ret.up, ret.down, ret.left, ret.right, ret.near, ret.far].iter().all(|x| x.is_finite()) {
            crate::engine_bail!(InvalidProjection, "galaxy3d::Projection",
                "Projection matrix yields non-finite extents");
        }
        Ok(ret)
    }

    /// View-space frustum bounded by these parameters.
    pub fn frustum(&self) -> Frustum {
        Frustum::new(self.up, self.down, self.left, self.right, self.near, self.far, self.is_ortho)
    }

    /// OpenGL-convention projection matrix.
    ///
    /// The perspective matrix is the off-axis form built from `frustum`'s
    /// near-face corners, so it matches that frustum exactly. `frustum` is
    /// expected to come from `self.frustum()`.
    pub fn matrix(&self, frustum: &Frustum) -> Mat4 {
        let (n, f) = (self.near, self.far);

        if self.is_ortho {
            return Mat4::orthographic_rh_gl(-self.left, self.right, -self.down, self.up, n, f);
        }

        let t = frustum.vertices[VERTEX_NEAR_TOP_LEFT].y;
        let b = frustum.vertices[VERTEX_NEAR_BOTTOM_LEFT].y;
        let l = frustum.vertices[VERTEX_NEAR_TOP_LEFT].x;
        let r = frustum.vertices[VERTEX_NEAR_TOP_RIGHT].x;

        Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new((r + l) / (r - l), (t + b) / (t - b), (n + f) / (n - f), -1.0),
            Vec4::new(0.0, 0.0, 2.0 * n * f / (n - f), 0.0),
        )
    }
}

/// Relative comparison, so large orthographic volumes survive inversion noise.
fn same_footprint(a: Vec2, b: Vec2) -> bool {
    a.abs_diff_eq(b, READBACK_TOLERANCE * a.abs().max_element().max(1.0))
}

impl Default for Projection {
    /// 45° vertical FOV, 16:9, near 0.1, far 100.
    fn default() -> Self {
        Self::perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0)
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
