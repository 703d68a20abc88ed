//! Directional light rotating about the vertical axis.

use glam::{Quat, Vec3};

/// Yaw speed of the light, in radians per second (45°/s)
pub const DEFAULT_LIGHT_YAW_SPEED: f32 = std::f32::consts::FRAC_PI_4;

/// Constant lighting terms shared by every lit draw of a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingParams {
    /// Unit direction the light travels along
    pub direction: Vec3,
    pub diffuse: Vec3,
    pub ambient: Vec3,
    pub specular: Vec3,
}

/// A single directional light.
///
/// The direction starts at +X and turns about world Y. It is
/// re-normalized after every update so accumulated rounding never
/// changes its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    direction: Vec3,
    yaw_speed: f32,
    diffuse: Vec3,
    ambient: Vec3,
    specular: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::X, DEFAULT_LIGHT_YAW_SPEED)
    }
}

impl DirectionalLight {
    /// A zero `direction` falls back to +X.
    pub fn new(direction: Vec3, yaw_speed: f32) -> Self {
        Self {
            direction: direction.try_normalize().unwrap_or(Vec3::X),
            yaw_speed,
            diffuse: Vec3::ONE,
            ambient: Vec3::splat(0.3),
            specular: Vec3::ZERO,
        }
    }

    pub fn with_ambient(mut self, ambient: Vec3) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn yaw_speed(&self) -> f32 {
        self.yaw_speed
    }

    /// Rotate about world Y by `yaw_speed * elapsed_seconds`.
    pub fn update(&mut self, elapsed_seconds: f32) {
        let rotation = Quat::from_rotation_y(self.yaw_speed * elapsed_seconds);
        self.direction = (rotation * self.direction)
            .try_normalize()
            .unwrap_or(Vec3::X);
    }

    pub fn params(&self) -> LightingParams {
        LightingParams {
            direction: self.direction,
            diffuse: self.diffuse,
            ambient: self.ambient,
            specular: self.specular,
        }
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
