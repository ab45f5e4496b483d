/// Camera culling strategies.
///
/// A CameraCuller determines which bounding volumes are visible from a
/// given camera. Implementations range from brute-force (return all) to
/// a per-volume frustum test.

use crate::geom::{AlignedBox, Cullable, Plane, Sphere};
use super::camera::Camera;
use super::render_view::RenderView;

/// World-space bounding volume of a renderable object.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bounds {
    Sphere(Sphere),
    Box(AlignedBox),
}

impl Cullable for Bounds {
    #[inline]
    fn inside_plane(&self, plane: &Plane) -> bool {
        match self {
            Bounds::Sphere(sphere) => sphere.inside_plane(plane),
            Bounds::Box(aabb) => aabb.inside_plane(plane),
        }
    }
}

impl From<Sphere> for Bounds {
    fn from(sphere: Sphere) -> Self {
        Bounds::Sphere(sphere)
    }
}

impl From<AlignedBox> for Bounds {
    fn from(aabb: AlignedBox) -> Self {
        Bounds::Box(aabb)
    }
}

/// Strategy for determining visible bounds from a camera.
///
/// Called once per frame, after `Camera::build()`. The returned RenderView
/// is ephemeral and indexes into `bounds`.
///
/// `&mut self` allows stateful implementations (e.g. caching)
/// to maintain state across frames.
pub trait CameraCuller: Send + Sync {
    fn cull(&mut self, camera: &Camera, bounds: &[Bounds]) -> RenderView;
}

/// Brute-force culler: returns ALL indices (no actual culling).
///
/// Suitable for small scenes or as a baseline for comparison.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl CameraCuller for BruteForceCuller {
    fn cull(&mut self, camera: &Camera, bounds: &[Bounds]) -> RenderView {
        RenderView::new(camera.clone(), (0..bounds.len()).collect())
    }
}

/// Frustum culler: tests each bound against the camera's world frustum.
///
/// Conservative: see `Frustum::inside`. With `ignore_near`, objects between
/// the camera and the near plane are kept (e.g. for shadow casters).
#[derive(Debug, Default)]
pub struct FrustumCuller {
    pub ignore_near: bool,
}

impl FrustumCuller {
    pub fn new() -> Self {
        Self { ignore_near: false }
    }

    pub fn ignoring_near() -> Self {
        Self { ignore_near: true }
    }
}

impl CameraCuller for FrustumCuller {
    fn cull(&mut self, camera: &Camera, bounds: &[Bounds]) -> RenderView {
        let frustum = camera.world_frustum();

        let visible = bounds
            .iter()
            .enumerate()
            .filter(|(_, b)| {
                if self.ignore_near {
                    frustum.inside_ignore_near(*b)
                } else {
                    frustum.inside(*b)
                }
            })
            .map(|(i, _)| i)
            .collect();

        RenderView::new(camera.clone(), visible)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
