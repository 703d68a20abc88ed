/// Scene configuration.
///
/// Plain structs with `Default`. One pipeline serves every sample: which
/// techniques run is a `TechniqueSet`, the rest tunes them.

use std::time::Duration;
use bitflags::bitflags;
use glam::{Vec3, Vec4};
use crate::light::DEFAULT_LIGHT_YAW_SPEED;
use crate::render::AssetManifest;
use crate::technique::blob_shadow::DEFAULT_RESTING_HEIGHT;
use crate::technique::gimbal::{DEFAULT_CALIBRATION_YAW, DEFAULT_ROTATIONAL_SPEED};

/// Cornflower blue
pub const DEFAULT_CLEAR_COLOR: Vec4 = Vec4::new(0.392, 0.584, 0.929, 1.0);

bitflags! {
    /// Techniques drawn by the scene
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TechniqueSet: u32 {
        const GIMBAL = 1 << 0;
        const BLOB_SHADOW = 1 << 1;
        const BILLBOARD = 1 << 2;
        const LIT_BOX = 1 << 3;
    }
}

// ===== SUB-CONFIGS =====

#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Technique Sampler".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Vertical field of view, in degrees
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { fov_y_degrees: 45.0, near: 0.1, far: 100.0 }
    }
}

/// Initial debug camera placement (orbiting the origin)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { yaw: 0.0, pitch: 20f32.to_radians(), distance: 5.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub half_extent: f32,
    pub divisions: u32,
    pub color: Vec4,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { half_extent: 5.0, divisions: 10, color: Vec4::new(0.8, 0.8, 0.8, 1.0) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GimbalConfig {
    /// Radians per second per held direction
    pub rotational_speed: f32,
    /// Fixed yaw applied to the body after the rings
    pub calibration_yaw: f32,
    pub position: Vec3,
}

impl Default for GimbalConfig {
    fn default() -> Self {
        Self {
            rotational_speed: DEFAULT_ROTATIONAL_SPEED,
            calibration_yaw: DEFAULT_CALIBRATION_YAW,
            position: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowConfig {
    pub resting_height: f32,
    /// Bounce phase speed, radians per second
    pub bounce_speed: f32,
    /// Ball position on the ground plane (y is ignored)
    pub ball_position: Vec3,
    pub ball_scale: f32,
    /// Optional blob texture sampled by the shadow quad
    pub texture: Option<String>,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            resting_height: DEFAULT_RESTING_HEIGHT,
            bounce_speed: 1.0,
            ball_position: Vec3::ZERO,
            ball_scale: 0.5,
            texture: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillboardConfig {
    pub base_height: f32,
    pub tier_spacing: f32,
    pub size: f32,
    /// Alpha cutout reference, out of 255
    pub alpha_reference: u8,
    pub texture: String,
}

impl Default for BillboardConfig {
    fn default() -> Self {
        Self {
            base_height: 0.5,
            tier_spacing: 1.0,
            size: 1.0,
            alpha_reference: 200,
            texture: "textures/billboard.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightConfig {
    pub initial_direction: Vec3,
    /// Radians per second about world Y
    pub yaw_speed: f32,
    pub ambient: Vec3,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            initial_direction: Vec3::X,
            yaw_speed: DEFAULT_LIGHT_YAW_SPEED,
            ambient: Vec3::splat(0.3),
        }
    }
}

/// Names of the meshes the scene loads through the asset provider
#[derive(Debug, Clone, PartialEq)]
pub struct AssetNames {
    pub gimbal_body: String,
    pub gimbal_ring_x: String,
    pub gimbal_ring_y: String,
    pub gimbal_ring_z: String,
    pub ball: String,
}

impl Default for AssetNames {
    fn default() -> Self {
        Self {
            gimbal_body: "gimbal_body".to_string(),
            gimbal_ring_x: "gimbal_ring_x".to_string(),
            gimbal_ring_y: "gimbal_ring_y".to_string(),
            gimbal_ring_z: "gimbal_ring_z".to_string(),
            ball: "ball".to_string(),
        }
    }
}

// ===== SCENE CONFIG =====

/// Complete scene configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub projection: ProjectionConfig,
    pub camera: CameraConfig,
    pub clear_color: Vec4,
    pub techniques: TechniqueSet,
    pub grid: GridConfig,
    pub gimbal: GimbalConfig,
    pub shadow: ShadowConfig,
    pub billboard: BillboardConfig,
    pub light: LightConfig,
    pub assets: AssetNames,
    /// Draw the `FPS=<n>` overlay
    pub show_fps: bool,
    /// `None` runs a variable timestep
    pub fixed_time_step: Option<Duration>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::with_techniques(TechniqueSet::all())
    }
}

impl SceneConfig {
    pub fn with_techniques(techniques: TechniqueSet) -> Self {
        Self {
            window: WindowConfig::default(),
            projection: ProjectionConfig::default(),
            camera: CameraConfig::default(),
            clear_color: DEFAULT_CLEAR_COLOR,
            techniques,
            grid: GridConfig::default(),
            gimbal: GimbalConfig::default(),
            shadow: ShadowConfig::default(),
            billboard: BillboardConfig::default(),
            light: LightConfig::default(),
            assets: AssetNames::default(),
            show_fps: true,
            fixed_time_step: None,
        }
    }

    pub fn gimbal() -> Self {
        Self::with_techniques(TechniqueSet::GIMBAL)
    }

    pub fn blob_shadow() -> Self {
        Self::with_techniques(TechniqueSet::BLOB_SHADOW)
    }

    pub fn billboard() -> Self {
        Self::with_techniques(TechniqueSet::BILLBOARD)
    }

    pub fn lit_box() -> Self {
        Self::with_techniques(TechniqueSet::LIT_BOX)
    }

    pub fn all() -> Self {
        Self::with_techniques(TechniqueSet::all())
    }

    /// Preset by name: `gimbal`, `shadow`, `billboard`, `light` or `all`
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "gimbal" => Some(Self::gimbal()),
            "shadow" => Some(Self::blob_shadow()),
            "billboard" => Some(Self::billboard()),
            "light" => Some(Self::lit_box()),
            "all" => Some(Self::all()),
            _ => None,
        }
    }

    pub fn with_fixed_time_step(mut self, step: Duration) -> Self {
        self.fixed_time_step = Some(step);
        self
    }

    /// Every asset the enabled techniques need
    pub fn manifest(&self) -> AssetManifest {
        let mut manifest = AssetManifest::new();
        if self.techniques.contains(TechniqueSet::GIMBAL) {
            manifest = manifest
                .mesh(&self.assets.gimbal_body)
                .mesh(&self.assets.gimbal_ring_x)
                .mesh(&self.assets.gimbal_ring_y)
                .mesh(&self.assets.gimbal_ring_z);
        }
        if self.techniques.contains(TechniqueSet::BLOB_SHADOW) {
            manifest = manifest.mesh(&self.assets.ball);
            if let Some(texture) = &self.shadow.texture {
                manifest = manifest.texture(texture);
            }
        }
        if self.techniques.contains(TechniqueSet::BILLBOARD) {
            manifest = manifest.texture(&self.billboard.texture);
        }
        manifest
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
