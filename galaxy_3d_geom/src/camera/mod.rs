//! Camera module: projection builder, configuration and culling helpers.
//!
//! The engine does NOT store or manage cameras. They are tools provided
//! by the engine, owned and driven by the caller: set parameters, call
//! `build()` once per frame, then read matrices and the world frustum.

mod camera;
mod camera_desc;
mod culler;
mod frame_data;
mod projection;
mod render_view;

pub use camera::{Camera, WorldTransform};
pub use camera_desc::CameraDesc;
pub use culler::{Bounds, BruteForceCuller, CameraCuller, FrustumCuller};
pub use frame_data::CameraFrameData;
pub use projection::Projection;
pub use render_view::RenderView;
