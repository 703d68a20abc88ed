/// BlobShadowProjector. A flat darkening quad pinned under a moving object.
///
/// The quad shrinks and lightens as the object rises above its resting
/// height, and saturates at half size and half intensity instead of
/// disappearing:
///
/// ```text
/// rate = clamp(1 - (height - resting_height), 0, 1) * 0.5 + 0.5
/// ```
///
/// The same rate drives both the ground-plane scale and the vertex color.

use glam::{Mat4, Vec3, Vec4};
use crate::math::Transform;

/// Resting height of the sample's ball (its radius above the ground)
pub const DEFAULT_RESTING_HEIGHT: f32 = 0.5;

/// Scale and intensity of a shadow, in `[0.5, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowParams {
    rate: f32,
}

impl ShadowParams {
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Vertex color `(rate, rate, rate, 1)`
    pub fn vertex_color(&self) -> Vec4 {
        Vec4::new(self.rate, self.rate, self.rate, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobShadowProjector {
    resting_height: f32,
}

impl Default for BlobShadowProjector {
    fn default() -> Self {
        Self::new(DEFAULT_RESTING_HEIGHT)
    }
}

impl BlobShadowProjector {
    pub fn new(resting_height: f32) -> Self {
        Self { resting_height }
    }

    pub fn resting_height(&self) -> f32 {
        self.resting_height
    }

    /// Shadow parameters for an object at `height`.
    ///
    /// Heights at or below rest give 1.0, a full unit above rest or more
    /// gives 0.5. A non-finite height is treated as resting height.
    pub fn params(&self, height: f32) -> ShadowParams {
        let height = if height.is_finite() { height } else { self.resting_height };
        let t = (1.0 - (height - self.resting_height)).clamp(0.0, 1.0);
        ShadowParams { rate: t * 0.5 + 0.5 }
    }

    /// Shorthand for `params(height).rate()`
    pub fn rate(&self, height: f32) -> f32 {
        self.params(height).rate()
    }

    /// Ground transform for an object at `position`.
    ///
    /// Scales the unit quad by `(rate, 1, rate)` about its center, then
    /// moves it to `(position.x, 0, position.z)`. Y is never scaled or
    /// translated, so the quad stays on the ground plane.
    pub fn ground_transform(&self, position: Vec3) -> Mat4 {
        let rate = self.rate(position.y);
        Transform::from_position(Vec3::new(position.x, 0.0, position.z))
            .with_scale(Vec3::new(rate, 1.0, rate))
            .matrix()
    }
}

/// Vertical oscillation of the bouncing object.
///
/// `height = resting_height + (sin(phase) + 1) / 2`; the phase advances at
/// `speed` radians per second and is never wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceAnimation {
    phase: f32,
    speed: f32,
    resting_height: f32,
}

impl Default for BounceAnimation {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_RESTING_HEIGHT)
    }
}

impl BounceAnimation {
    pub fn new(speed: f32, resting_height: f32) -> Self {
        Self { phase: 0.0, speed, resting_height }
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn update(&mut self, elapsed_seconds: f32) {
        self.phase += self.speed * elapsed_seconds;
    }

    pub fn height(&self) -> f32 {
        self.resting_height + (self.phase.sin() + 1.0) * 0.5
    }
}

#[cfg(test)]
#[path = "blob_shadow_tests.rs"]
mod tests;
