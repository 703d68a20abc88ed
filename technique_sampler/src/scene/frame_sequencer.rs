/// FrameSequencer. Owns the scene and runs one frame per tick.
///
/// Per tick: advance the timer, run every pending update (camera, gimbal,
/// light, bounce), then render unless no update has ever run. A frame is
/// `begin_frame`, grid, opaque pass, shadow pass, sorted transparent pass,
/// FPS overlay, `present`.
///
/// A failed frame is dropped and logged, never retried. A lost device is
/// rebuilt before the next frame; failing to rebuild it is fatal.

use std::time::Duration;
use glam::{Vec2, Vec4};
use crate::camera::{Camera, DebugCamera, perspective};
use crate::error::Result;
use crate::input::{InputEvent, InputState};
use crate::render::geometry::{grid, open_box};
use crate::render::{
    AssetProvider, DrawBackend, DrawGeometry, DrawRequest, MeshData, RenderPhase, RenderState,
    SceneAssets,
};
use crate::technique::{BillboardOrienter, BillboardSlot, BlobShadowProjector, pyramid_slots};
use crate::time::{Clock, StepTimer};
use crate::{sampler_debug, sampler_error, sampler_info, sampler_trace, sampler_warn};
use super::animation::AnimationState;
use super::config::SceneConfig;
use super::sorting::sort_back_to_front;
use super::technique::{FrameContext, Technique};

const PHASES: [RenderPhase; 3] = [RenderPhase::Opaque, RenderPhase::Shadow, RenderPhase::Transparent];

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No update has run yet; nothing was rendered
    Skipped,
    Presented,
    /// A backend call failed; the frame was abandoned
    Dropped,
    /// The device was lost and has been rebuilt; the frame was not presented
    DeviceRecovered,
}

pub struct FrameSequencer<B: DrawBackend + AssetProvider> {
    config: SceneConfig,
    backend: B,
    timer: StepTimer,
    input: InputState,

    debug_camera: DebugCamera,
    camera: Camera,
    viewport: (u32, u32),

    animation: AnimationState,
    techniques: Vec<Technique>,
    assets: SceneAssets,

    projector: BlobShadowProjector,
    orienter: BillboardOrienter,
    slots: Vec<BillboardSlot>,
    grid: MeshData,
    open_box: MeshData,

    frames_dropped: u64,
    device_recoveries: u64,
}

impl<B: DrawBackend + AssetProvider> FrameSequencer<B> {
    /// Load every asset the configured techniques need and set up the
    /// scene. Any failure is returned and no scene exists.
    pub fn new(config: SceneConfig, mut backend: B) -> Result<Self> {
        let assets = match SceneAssets::load(&mut backend, &config.manifest()) {
            Ok(assets) => assets,
            Err(err) => {
                sampler_error!("sampler::FrameSequencer", "Scene initialization failed: {}", err);
                return Err(err);
            }
        };

        let viewport = (config.window.width, config.window.height);
        backend.resize(viewport.0, viewport.1)?;

        let timer = match config.fixed_time_step {
            Some(step) => StepTimer::fixed(step),
            None => StepTimer::new(),
        };

        let debug_camera = DebugCamera::new(glam::Vec3::ZERO)
            .with_angles(config.camera.yaw, config.camera.pitch)
            .with_distance(config.camera.distance);
        let camera = Camera::new(
            debug_camera.view_matrix(),
            perspective(&config.projection, viewport.0, viewport.1),
            debug_camera.eye_position(),
        );

        let techniques = Technique::from_set(config.techniques);
        sampler_info!("sampler::FrameSequencer",
            "Scene ready: [{}], {} meshes, {} textures, {} step",
            techniques.iter().map(Technique::name).collect::<Vec<_>>().join(", "),
            assets.mesh_count(), assets.texture_count(),
            if timer.is_fixed_time_step() { "fixed" } else { "variable" });

        Ok(Self {
            timer,
            input: InputState::new(),
            debug_camera,
            camera,
            viewport,
            animation: AnimationState::from_config(&config),
            techniques,
            assets,
            projector: BlobShadowProjector::new(config.shadow.resting_height),
            orienter: BillboardOrienter::default(),
            slots: pyramid_slots(config.billboard.base_height, config.billboard.tier_spacing),
            grid: grid(config.grid.half_extent, config.grid.divisions, config.grid.color),
            open_box: open_box(),
            frames_dropped: 0,
            device_recoveries: 0,
            config,
            backend,
        })
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn clock(&self) -> &dyn Clock {
        &self.timer
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn techniques(&self) -> &[Technique] {
        &self.techniques
    }

    pub fn assets(&self) -> &SceneAssets {
        &self.assets
    }

    pub fn frames_dropped(&self) -> u64 {
        self.frames_dropped
    }

    pub fn device_recoveries(&self) -> u64 {
        self.device_recoveries
    }

    // ===== EVENTS =====

    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    /// The output surface changed size; rebuild the projection
    pub fn on_resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.viewport = (width, height);
        self.camera.set_projection(perspective(&self.config.projection, width, height));
        sampler_debug!("sampler::FrameSequencer", "Resized to {}x{}", width, height);
        self.backend.resize(width, height)
    }

    /// Coming back from suspension: forget the time spent away
    pub fn on_resuming(&mut self) {
        self.timer.reset_elapsed_time();
    }

    // ===== FRAME =====

    /// Run one frame using wall-clock time
    pub fn tick(&mut self) -> Result<FrameOutcome> {
        let updates = self.timer.tick();
        self.run_frame(updates)
    }

    /// Run one frame as if `delta` had passed since the previous one
    pub fn advance(&mut self, delta: Duration) -> Result<FrameOutcome> {
        let updates = self.timer.advance(delta);
        self.run_frame(updates)
    }

    fn run_frame(&mut self, updates: u32) -> Result<FrameOutcome> {
        for _ in 0..updates {
            self.update();
        }

        // Nothing to show before the first update
        if self.timer.frame_count() == 0 {
            sampler_trace!("sampler::FrameSequencer", "No update yet, skipping render");
            return Ok(FrameOutcome::Skipped);
        }

        match self.render() {
            Ok(()) => Ok(FrameOutcome::Presented),
            Err(err) if err.is_device_lost() => {
                self.recover_device()?;
                Ok(FrameOutcome::DeviceRecovered)
            }
            Err(err) => {
                self.frames_dropped += 1;
                sampler_error!("sampler::FrameSequencer", "Frame dropped: {}", err);
                Ok(FrameOutcome::Dropped)
            }
        }
    }

    fn update(&mut self) {
        let elapsed = self.timer.elapsed_seconds() as f32;
        self.debug_camera.update(self.input.take_pointer_frame());
        self.animation.update(self.input.gimbal_input(), elapsed);
    }

    fn render(&mut self) -> Result<()> {
        self.camera.set_view(self.debug_camera.view_matrix(), self.debug_camera.eye_position());
        self.backend.begin_frame(self.config.clear_color)?;

        let grid = DrawRequest::new("grid", RenderPhase::Opaque, DrawGeometry::Immediate(self.grid.clone()))
            .with_camera(*self.camera.view_matrix(), *self.camera.projection_matrix())
            .with_state(RenderState::opaque());
        self.backend.draw(&grid)?;

        let context = FrameContext {
            config: &self.config,
            animation: &self.animation,
            assets: &self.assets,
            camera: &self.camera,
            projector: &self.projector,
            orienter: &self.orienter,
            slots: &self.slots,
            open_box: &self.open_box,
        };

        let mut draws = Vec::new();
        for phase in PHASES {
            draws.clear();
            for technique in self.techniques.iter().filter(|t| t.phases().contains(&phase)) {
                technique.contribute(phase, &context, &mut draws)?;
            }
            if phase == RenderPhase::Transparent {
                sort_back_to_front(&mut draws, self.camera.eye_position());
            }
            for request in &draws {
                self.backend.draw(request)?;
            }
        }

        if self.config.show_fps {
            let text = format!("FPS={}", self.timer.frames_per_second());
            self.backend.draw_text(Vec2::ZERO, Vec4::ONE, &text)?;
        }

        self.backend.present()
    }

    /// Drop device resources, recreate the device and rebuild everything
    /// that depended on it
    fn recover_device(&mut self) -> Result<()> {
        sampler_warn!("sampler::FrameSequencer", "Device lost, rebuilding device resources");

        self.assets = SceneAssets::default();
        self.backend.release_all();

        if let Err(err) = self.backend.recreate_device() {
            sampler_error!("sampler::FrameSequencer", "Device recreation failed: {}", err);
            return Err(err);
        }
        self.assets = match SceneAssets::load(&mut self.backend, &self.config.manifest()) {
            Ok(assets) => assets,
            Err(err) => {
                sampler_error!("sampler::FrameSequencer", "Asset reload failed: {}", err);
                return Err(err);
            }
        };

        let (width, height) = self.viewport;
        self.camera.set_projection(perspective(&self.config.projection, width, height));
        self.backend.resize(width, height)?;

        self.device_recoveries += 1;
        sampler_info!("sampler::FrameSequencer", "Device restored ({} recoveries)",
            self.device_recoveries);
        Ok(())
    }
}

#[cfg(test)]
#[path = "frame_sequencer_tests.rs"]
mod tests;
