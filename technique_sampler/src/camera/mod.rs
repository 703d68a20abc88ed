//! Camera module. Passive camera data and the input-driven debug camera.
//!
//! The core only reads a view matrix and an eye position from the camera
//! each frame; how they are produced is up to the caller.

mod camera;
mod debug_camera;

pub use camera::{Camera, perspective};
pub use debug_camera::DebugCamera;
