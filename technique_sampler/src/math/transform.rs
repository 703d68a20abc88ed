/// Transform. Position, scale and orientation of a drawable.
///
/// Orientation is either three signed angles around the local axes or an
/// explicit rotation matrix. Angles are never normalized: the trig
/// functions wrap them.

use glam::{Mat4, Vec3};

/// Rotation about X by `radians`
pub fn rotation_x(radians: f32) -> Mat4 {
    Mat4::from_rotation_x(radians)
}

/// Rotation about Y by `radians`
pub fn rotation_y(radians: f32) -> Mat4 {
    Mat4::from_rotation_y(radians)
}

/// Rotation about Z by `radians`
pub fn rotation_z(radians: f32) -> Mat4 {
    Mat4::from_rotation_z(radians)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Orientation {
    /// Signed angles (radians) about local X, Y and Z, applied Y first,
    /// then X, then Z
    Angles(Vec3),
    /// Explicit rotation matrix
    Matrix(Mat4),
}

impl Orientation {
    pub fn matrix(&self) -> Mat4 {
        match self {
            Orientation::Angles(a) => rotation_z(a.z) * rotation_x(a.x) * rotation_y(a.y),
            Orientation::Matrix(m) => *m,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    pub orientation: Orientation,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        scale: Vec3::ONE,
        orientation: Orientation::Angles(Vec3::ZERO),
    };

    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Uniform scale helper
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// World matrix: scale, then orient, then translate
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * self.orientation.matrix() * Mat4::from_scale(self.scale)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
