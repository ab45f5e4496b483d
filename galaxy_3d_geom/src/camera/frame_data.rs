/// Per-frame camera data laid out for direct GPU upload.
///
/// Layout (std140/std430 compatible, 304 bytes):
///   0: view (Mat4), 64: projection (Mat4), 128: viewProjection (Mat4),
///   192: world frustum planes (6 x Vec4, `xyz` = normal, `w` = offset),
///   288: world position (Vec4, `w` = 1)

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};
use crate::geom::PLANE_COUNT;
use super::camera::Camera;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraFrameData {
    pub view: Mat4,
    pub proj: Mat4,
    pub view_proj: Mat4,
    pub planes: [Vec4; PLANE_COUNT],
    pub position: Vec4,
}

impl CameraFrameData {
    /// Byte offsets of each field
    pub const OFFSET_VIEW: usize            = 0;
    pub const OFFSET_PROJECTION: usize      = 64;
    pub const OFFSET_VIEW_PROJECTION: usize = 128;
    pub const OFFSET_PLANES: usize          = 192;
    pub const OFFSET_POSITION: usize        = 288;

    /// Snapshot of `camera` as of its last `build()`.
    pub fn from_camera(camera: &Camera) -> Self {
        let frustum = camera.world_frustum();
        Self {
            view: *camera.view_matrix(),
            proj: *camera.proj_matrix(),
            view_proj: *camera.view_proj_matrix(),
            planes: frustum.planes.map(|p| p.normal.extend(p.offset)),
            position: camera.position().extend(1.0),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "frame_data_tests.rs"]
mod tests;
