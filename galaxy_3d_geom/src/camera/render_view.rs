/// RenderView: result of frustum culling.
///
/// Created by a `CameraCuller`. Contains a snapshot of the camera at
/// culling time and the indices of the visible bounds in the slice that
/// was culled.
///
/// Ephemeral: lives for one frame. The caller can pass the same RenderView
/// to multiple passes.

use super::camera::Camera;

/// Result of frustum culling. Ephemeral, lives for one frame.
#[derive(Debug, Clone)]
pub struct RenderView {
    camera: Camera,
    visible_indices: Vec<usize>,
}

impl RenderView {
    /// Create a new RenderView (crate-internal: only cullers create these).
    pub(crate) fn new(camera: Camera, visible_indices: Vec<usize>) -> Self {
        Self {
            camera,
            visible_indices,
        }
    }

    /// Camera snapshot at the time of culling.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Indices into the culled bounds slice, in ascending order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_indices.binary_search(&index).is_ok()
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
