/*!
# Galaxy 3D Geometry

Computational geometry and view-frustum core for the Galaxy3D engine.

This crate provides value-type primitives, distance and intersection
queries, and a camera that keeps its projection matrix, view matrices and
world-space frustum consistent with a set of editable projection
parameters. Everything here is synchronous and allocation-free on the hot
path; a renderer or scene graph drives it once per frame.

## Architecture

- **geom**: Line, Ray, LineSegment, Sphere, Plane, AlignedBox, Cylinder,
  Capsule and Frustum, with `Nearest` / `Distance` / `Intersects` /
  `Intersect` traits
- **camera**: Projection parameters, the lazily rebuilt Camera, its
  configuration descriptor, GPU frame data and frustum cullers
- **log**: Pluggable logger used by the camera and configuration layers

Conventions: right-handed view space looking down -Z, OpenGL clip space
(NDC depth in [-1, 1]), column-major `glam` matrices.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod geom;
pub mod camera;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Geometry sub-module
    pub mod geom {
        pub use crate::geom::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
