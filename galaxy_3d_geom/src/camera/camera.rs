/// Camera: projection builder with a lazily rebuilt matrix and frustum.
///
/// The camera owns a `Projection` (half-extents, clip distances, ortho and
/// symmetry flags). Setters replace it with a derived value and mark the
/// projection dirty; nothing is recomputed until `build()`.
///
/// `build()` is the single synchronization point, called once per frame:
/// - if dirty: rebuild the local frustum from the projection, then the
///   projection matrix from that frustum
/// - always: refresh view, view-projection and the world-space frustum
///   from the current world matrix
///
/// The world matrix is either set directly or read from a scene node via
/// `build_from()`. The camera never owns the node.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::geom::Frustum;
use super::camera_desc::CameraDesc;
use super::frame_data::CameraFrameData;
use super::projection::Projection;

/// Source of a camera's world matrix (typically a scene node).
pub trait WorldTransform {
    fn world_matrix(&self) -> Mat4;
}

impl WorldTransform for Mat4 {
    fn world_matrix(&self) -> Mat4 {
        *self
    }
}

impl<F: Fn() -> Mat4> WorldTransform for F {
    fn world_matrix(&self) -> Mat4 {
        self()
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    projection: Projection,
    proj_dirty: bool,

    proj: Mat4,
    world: Mat4,
    view: Mat4,
    view_proj: Mat4,

    local_frustum: Frustum,
    world_frustum: Frustum,
}

impl Camera {
    /// Create a camera at the world origin and build it once.
    ///
    /// # Panics
    ///
    /// If `projection` has `far <= near`, or `near <= 0` for perspective.
    pub fn new(projection: Projection) -> Self {
        assert_clip_range(&projection);
        let local_frustum = projection.frustum();
        let mut ret = Self {
            projection,
            proj_dirty: true,
            proj: Mat4::IDENTITY,
            world: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            view_proj: Mat4::IDENTITY,
            local_frustum,
            world_frustum: local_frustum,
        };
        ret.build();
        ret
    }

    /// Validate `desc` and create a camera from it.
    pub fn from_desc(desc: &CameraDesc) -> Result<Self> {
        desc.validate()?;
        Ok(Self::new(desc.projection()))
    }

    // ===== BUILD =====

    /// Bring every derived value in line with the projection and world
    /// matrix. Rebuilds the projection only when dirty.
    pub fn build(&mut self) {
        if self.proj_dirty {
            self.local_frustum = self.projection.frustum();
            self.proj = self.projection.matrix(&self.local_frustum);
            self.proj_dirty = false;

            crate::engine_trace!("galaxy3d::Camera",
                "Rebuilt {} projection: up={} down={} left={} right={} near={} far={}",
                mode_name(self.projection.is_ortho),
                self.projection.up, self.projection.down,
                self.projection.left, self.projection.right,
                self.projection.near, self.projection.far);
        }

        self.view = self.world.inverse();
        self.view_proj = self.proj * self.view;
        self.world_frustum = self.local_frustum.transformed(&self.world);
    }

    /// Read the world matrix from `node`, then `build()`.
    pub fn build_from(&mut self, node: &impl WorldTransform) {
        self.world = node.world_matrix();
        self.build();
    }

    // ===== PROJECTION SETTERS (mark dirty, compute nothing) =====

    /// Replace the whole parameter set.
    ///
    /// # Panics
    ///
    /// Same conditions as `new()`. Every setter below goes through here.
    pub fn set_projection(&mut self, projection: Projection) {
        assert_clip_range(&projection);
        self.projection = projection;
        self.proj_dirty = true;
    }

    /// Keeps the aspect ratio. Makes the projection symmetric.
    pub fn set_vertical_fov(&mut self, radians: f32) {
        self.set_projection(self.projection.with_vertical_fov(radians));
    }

    /// Keeps the aspect ratio. Makes the projection symmetric.
    pub fn set_horizontal_fov(&mut self, radians: f32) {
        self.set_projection(self.projection.with_horizontal_fov(radians));
    }

    /// Keeps the vertical extent. Makes the projection symmetric.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.set_projection(self.projection.with_aspect(aspect));
    }

    /// See [`Projection::with_symmetric`].
    pub fn set_is_symmetric(&mut self, symmetric: bool) {
        self.set_projection(self.projection.with_symmetric(symmetric));
    }

    pub fn set_clip(&mut self, near: f32, far: f32) {
        self.set_projection(self.projection.with_clip(near, far));
    }

    /// Switching between perspective and orthographic is not supported:
    /// the extents have no defined conversion. Setting the current mode
    /// again only marks the projection dirty.
    pub fn try_set_is_ortho(&mut self, ortho: bool) -> Result<()> {
        if self.projection.is_ortho != ortho {
            crate::engine_bail!(UnsupportedOperation, "galaxy3d::Camera",
                "Cannot switch projection from {} to {}; use set_projection()",
                mode_name(self.projection.is_ortho), mode_name(ortho));
        }
        self.proj_dirty = true;
        Ok(())
    }

    /// # Panics
    ///
    /// If `ortho` differs from the current mode (see `try_set_is_ortho`).
    pub fn set_is_ortho(&mut self, ortho: bool) {
        if let Err(err) = self.try_set_is_ortho(ortho) {
            panic!("{}", err);
        }
    }

    /// Adopt an externally computed projection matrix verbatim.
    ///
    /// The parameters and local frustum are read back from the matrix'
    /// inverse, and the projection is left clean so `build()` keeps the
    /// matrix as given. View-dependent values refresh on the next `build()`.
    pub fn set_proj_matrix(&mut self, proj: Mat4) -> Result<()> {
        let projection = Projection::from_matrix(&proj)?;

        self.projection = projection;
        self.proj = proj;
        self.local_frustum = Frustum::from_inverse_projection(&proj.inverse());
        self.proj_dirty = false;

        crate::engine_debug!("galaxy3d::Camera",
            "Adopted external {} projection: near={} far={}",
            mode_name(projection.is_ortho), projection.near, projection.far);
        Ok(())
    }

    /// Takes effect on the next `build()`.
    pub fn set_world_matrix(&mut self, world: Mat4) {
        self.world = world;
    }

    // ===== GETTERS =====

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// True if the next `build()` will rebuild the projection.
    pub fn is_dirty(&self) -> bool {
        self.proj_dirty
    }

    pub fn proj_matrix(&self) -> &Mat4 {
        &self.proj
    }

    /// Inverse of the world matrix, as of the last `build()`.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    /// `proj * view`, as of the last `build()`.
    pub fn view_proj_matrix(&self) -> &Mat4 {
        &self.view_proj
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world
    }

    /// View-space frustum.
    pub fn local_frustum(&self) -> &Frustum {
        &self.local_frustum
    }

    /// World-space frustum, as of the last `build()`.
    pub fn world_frustum(&self) -> &Frustum {
        &self.world_frustum
    }

    /// World-space position (translation of the world matrix).
    pub fn position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }

    /// World-space view direction (`-Z` of the world matrix), unit length.
    pub fn view_vector(&self) -> Vec3 {
        (-self.world.z_axis.truncate()).normalize_or_zero()
    }

    pub fn frame_data(&self) -> CameraFrameData {
        CameraFrameData::from_camera(self)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Projection::default())
    }
}

fn assert_clip_range(projection: &Projection) {
    assert!(
        projection.is_ortho || projection.near > 0.0,
        "Perspective camera near must be > 0, got {}", projection.near
    );
    assert!(
        projection.far > projection.near,
        "Camera far ({}) must be greater than near ({})", projection.far, projection.near
    );
}

fn mode_name(ortho: bool) -> &'static str {
    if ortho { "orthographic" } else { "perspective" }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
