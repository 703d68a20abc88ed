/// Animated scene state.
///
/// Everything that changes with time lives here and is advanced once per
/// update. Rendering only reads it.

use crate::light::DirectionalLight;
use crate::technique::{BounceAnimation, GimbalInput, OrientationGimbal};
use super::config::SceneConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub gimbal: OrientationGimbal,
    pub bounce: BounceAnimation,
    pub light: DirectionalLight,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl AnimationState {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            gimbal: OrientationGimbal::new(config.gimbal.rotational_speed, config.gimbal.calibration_yaw),
            bounce: BounceAnimation::new(config.shadow.bounce_speed, config.shadow.resting_height),
            light: DirectionalLight::new(config.light.initial_direction, config.light.yaw_speed)
                .with_ambient(config.light.ambient),
        }
    }

    /// Advance by one update of `elapsed_seconds`
    pub fn update(&mut self, input: GimbalInput, elapsed_seconds: f32) {
        self.gimbal.update(input, elapsed_seconds);
        self.light.update(elapsed_seconds);
        self.bounce.update(elapsed_seconds);
    }
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod tests;
