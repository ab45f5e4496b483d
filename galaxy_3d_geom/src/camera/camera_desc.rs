/// Camera configuration, as supplied by an application or property system.

use crate::error::Result;
use super::projection::Projection;

/// Descriptor for creating a `Camera` via `Camera::from_desc()`.
///
/// Perspective cameras use `vertical_fov`; orthographic cameras use
/// `ortho_half_height`. Both derive the horizontal extent from `aspect`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraDesc {
    /// Full vertical angle in radians, in (0, π)
    pub vertical_fov: f32,
    /// Width over height
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub is_ortho: bool,
    /// Half the view volume height, orthographic only
    pub ortho_half_height: f32,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            vertical_fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
            is_ortho: false,
            ortho_half_height: 1.0,
        }
    }
}

impl CameraDesc {
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("vertical_fov", self.vertical_fov),
            ("aspect", self.aspect),
            ("near", self.near),
            ("far", self.far),
            ("ortho_half_height", self.ortho_half_height),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                crate::engine_bail!(InvalidParameter, "galaxy3d::CameraDesc",
                    "{} must be finite, got {}", name, value);
            }
        }

        if self.aspect <= 0.0 {
            crate::engine_bail!(InvalidParameter, "galaxy3d::CameraDesc",
                "aspect must be > 0, got {}", self.aspect);
        }
        if self.far <= self.near {
            crate::engine_bail!(InvalidParameter, "galaxy3d::CameraDesc",
                "far ({}) must be greater than near ({})", self.far, self.near);
        }

        if self.is_ortho {
            if self.ortho_half_height <= 0.0 {
                crate::engine_bail!(InvalidParameter, "galaxy3d::CameraDesc",
                    "ortho_half_height must be > 0, got {}", self.ortho_half_height);
            }
        } else {
            if self.near <= 0.0 {
                crate::engine_bail!(InvalidParameter, "galaxy3d::CameraDesc",
                    "near must be > 0 for a perspective camera, got {}", self.near);
            }
            if self.vertical_fov <= 0.0 || self.vertical_fov >= std::f32::consts::PI {
                crate::engine_bail!(InvalidParameter, "galaxy3d::CameraDesc",
                    "vertical_fov must be in (0, PI), got {}", self.vertical_fov);
            }
        }

        Ok(())
    }

    /// Projection parameters described by this descriptor. Does not validate.
    pub fn projection(&self) -> Projection {
        if self.is_ortho {
            let h = self.ortho_half_height;
            let w = h * self.aspect;
            Projection::orthographic(h, h, w, w, self.near, self.far)
        } else {
            Projection::perspective(self.vertical_fov, self.aspect, self.near, self.far)
        }
    }
}

#[cfg(test)]
#[path = "camera_desc_tests.rs"]
mod tests;
