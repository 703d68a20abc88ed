/// Camera. Low-level passive data container.
///
/// The Camera computes nothing. Its owner (the frame sequencer, driven by
/// a `DebugCamera`) sets view, projection and eye position once per frame
/// before any draw is issued.

use glam::{Mat4, Vec3};
use crate::scene::ProjectionConfig;

/// Right-handed perspective projection for a `width` x `height` target.
///
/// A zero dimension is treated as 1 so a minimized window never yields a
/// non-finite aspect ratio.
pub fn perspective(config: &ProjectionConfig, width: u32, height: u32) -> Mat4 {
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    Mat4::perspective_rh(
        config.fov_y_degrees.to_radians(),
        aspect,
        config.near,
        config.far,
    )
}

/// Low-level camera. A passive data container that computes nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    eye_position: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO)
    }
}

impl Camera {
    pub fn new(view: Mat4, projection: Mat4, eye_position: Vec3) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            eye_position,
        }
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Camera position in world space.
    pub fn eye_position(&self) -> Vec3 {
        self.eye_position
    }

    // ===== SETTERS (store only) =====

    /// Set view matrix and eye position together; they always change as a pair.
    pub fn set_view(&mut self, matrix: Mat4, eye_position: Vec3) {
        self.view_matrix = matrix;
        self.eye_position = eye_position;
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
