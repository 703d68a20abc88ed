/// DebugCamera. Orbit camera around a fixed target, driven by pointer input.
///
/// Dragging with the left button turns the camera (horizontal drag = yaw,
/// vertical drag = pitch); the wheel moves it closer or further away.

use glam::{Mat4, Vec3};
use crate::input::PointerFrame;

/// Radians of rotation per dragged pixel
const ROTATION_PER_PIXEL: f32 = 0.01;
/// Pitch limit, keeps the eye off the vertical axis
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;
/// Distance change per wheel line
const ZOOM_PER_LINE: f32 = 0.5;

const DEFAULT_DISTANCE: f32 = 5.0;
const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 50.0;

#[derive(Debug, Clone)]
pub struct DebugCamera {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl Default for DebugCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl DebugCamera {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            yaw: 0.0,
            pitch: 0.0,
            distance: DEFAULT_DISTANCE,
        }
    }

    pub fn with_angles(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
        self
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply the pointer motion of one update
    pub fn update(&mut self, pointer: PointerFrame) {
        self.yaw -= pointer.drag.x * ROTATION_PER_PIXEL;
        self.pitch = (self.pitch + pointer.drag.y * ROTATION_PER_PIXEL).clamp(-MAX_PITCH, MAX_PITCH);
        self.distance = (self.distance - pointer.wheel * ZOOM_PER_LINE).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Eye position: (0, 0, distance) pitched about X, then yawed about Y
    pub fn eye_position(&self) -> Vec3 {
        let rotation = Mat4::from_rotation_y(self.yaw) * Mat4::from_rotation_x(-self.pitch);
        self.target + rotation.transform_vector3(Vec3::new(0.0, 0.0, self.distance))
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }
}

#[cfg(test)]
#[path = "debug_camera_tests.rs"]
mod tests;
