/// OrientationGimbal. Three independent rotation accumulators and the
/// nested transforms that visualize them.
///
/// Composition (column vectors, applied right to left):
///
/// ```text
/// body   = R0 · RZ · RX · RY
/// ring Z =      RZ · RX · RY
/// ring X =           RX · RY
/// ring Y =                RY
/// ```
///
/// Each ring shows the orientation accumulated up to and including its own
/// axis. Reordering the factors changes what the rings mean, so the order
/// is fixed here and nowhere else.

use glam::{Mat4, Vec3};
use crate::math::{Orientation, rotation_y};

/// Default angular speed: 90 degrees per second
pub const DEFAULT_ROTATIONAL_SPEED: f32 = std::f32::consts::FRAC_PI_2;

/// Default calibration: 270 degrees about the vertical axis
pub const DEFAULT_CALIBRATION_YAW: f32 = 3.0 * std::f32::consts::FRAC_PI_2;

/// Input state for one axis; both directions at once cancel out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisInput {
    pub positive: bool,
    pub negative: bool,
}

impl AxisInput {
    pub fn new(positive: bool, negative: bool) -> Self {
        Self { positive, negative }
    }

    /// +1, -1 or 0
    pub fn direction(&self) -> f32 {
        (self.positive as i8 - self.negative as i8) as f32
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GimbalInput {
    pub x: AxisInput,
    pub y: AxisInput,
    pub z: AxisInput,
}

/// World matrices for the gimbal body and its rings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GimbalTransforms {
    pub body: Mat4,
    pub ring_x: Mat4,
    pub ring_y: Mat4,
    pub ring_z: Mat4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationGimbal {
    rot_x: f32,
    rot_y: f32,
    rot_z: f32,
    rotational_speed: f32,
    calibration: Mat4,
}

impl Default for OrientationGimbal {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATIONAL_SPEED, DEFAULT_CALIBRATION_YAW)
    }
}

impl OrientationGimbal {
    /// `rotational_speed` in radians per second, `calibration_yaw` in radians
    pub fn new(rotational_speed: f32, calibration_yaw: f32) -> Self {
        Self {
            rot_x: 0.0,
            rot_y: 0.0,
            rot_z: 0.0,
            rotational_speed,
            calibration: rotation_y(calibration_yaw),
        }
    }

    /// Angles (radians) as `(x, y, z)`
    pub fn angles(&self) -> (f32, f32, f32) {
        (self.rot_x, self.rot_y, self.rot_z)
    }

    #[cfg(test)]
    pub(crate) fn set_angles(&mut self, x: f32, y: f32, z: f32) {
        self.rot_x = x;
        self.rot_y = y;
        self.rot_z = z;
    }

    pub fn calibration(&self) -> Mat4 {
        self.calibration
    }

    /// Advance every axis by `speed * elapsed` in its input direction.
    ///
    /// Accumulators are never wrapped or clamped.
    pub fn update(&mut self, input: GimbalInput, elapsed_seconds: f32) {
        let step = self.rotational_speed * elapsed_seconds;
        self.rot_x += input.x.direction() * step;
        self.rot_y += input.y.direction() * step;
        self.rot_z += input.z.direction() * step;
    }

    /// Each ring is the orientation built from its own axis and every
    /// axis applied before it; the body adds the calibration on top.
    pub fn transforms(&self) -> GimbalTransforms {
        let ring_y = Orientation::Angles(Vec3::new(0.0, self.rot_y, 0.0)).matrix();
        let ring_x = Orientation::Angles(Vec3::new(self.rot_x, self.rot_y, 0.0)).matrix();
        let ring_z = Orientation::Angles(Vec3::new(self.rot_x, self.rot_y, self.rot_z)).matrix();
        GimbalTransforms {
            body: self.calibration * ring_z,
            ring_x,
            ring_y,
            ring_z,
        }
    }
}

#[cfg(test)]
#[path = "gimbal_tests.rs"]
mod tests;
