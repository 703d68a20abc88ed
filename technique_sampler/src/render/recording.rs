/// Recording backend (no GPU required)
///
/// Implements `DrawBackend` and `AssetProvider` by recording what it is
/// asked to do. Used by the test suite and by the demo binary. Load
/// failures, draw failures, device loss and failed device recreation can
/// be injected.

use std::collections::VecDeque;
use glam::{Vec2, Vec4};
use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::{sampler_bail, sampler_debug, sampler_warn};
use super::assets::{AssetProvider, MeshKey, TextureKey};
use super::backend::{DrawBackend, DrawGeometry, DrawRequest, RenderPhase};

/// Frames kept by default before the oldest are discarded
pub const DEFAULT_RETAINED_FRAMES: usize = 120;

// ============================================================================
// Recorded data
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    Draw(DrawRequest),
    Text { position: Vec2, color: Vec4, text: String },
}

/// Everything submitted between one `begin_frame` and the next
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    /// Sequence number of `begin_frame` calls, starting at 0
    pub index: u64,
    pub clear_color: Vec4,
    pub commands: Vec<RecordedCommand>,
    pub presented: bool,
}

impl RecordedFrame {
    fn new(index: u64, clear_color: Vec4) -> Self {
        Self { index, clear_color, commands: Vec::new(), presented: false }
    }

    pub fn draws(&self) -> impl Iterator<Item = &DrawRequest> {
        self.commands.iter().filter_map(|command| match command {
            RecordedCommand::Draw(request) => Some(request),
            RecordedCommand::Text { .. } => None,
        })
    }

    pub fn draws_in(&self, phase: RenderPhase) -> impl Iterator<Item = &DrawRequest> {
        self.draws().filter(move |request| request.phase == phase)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            RecordedCommand::Text { text, .. } => Some(text.as_str()),
            RecordedCommand::Draw(_) => None,
        })
    }

    /// Labels of all draws, in submission order
    pub fn draw_labels(&self) -> Vec<&'static str> {
        self.draws().map(|request| request.label).collect()
    }
}

/// Running counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordingStats {
    pub frames_begun: u64,
    pub frames_presented: u64,
    pub draws: u64,
    /// Primitives submitted through immediate geometry
    pub immediate_primitives: u64,
    /// Vertex and index bytes submitted through immediate geometry
    pub immediate_bytes: u64,
    pub text_runs: u64,
    pub meshes_loaded: u64,
    pub textures_loaded: u64,
    pub resizes: u64,
    pub device_recreations: u64,
}

// ============================================================================
// RecordingBackend
// ============================================================================

#[derive(Debug)]
pub struct RecordingBackend {
    meshes: SlotMap<MeshKey, String>,
    textures: SlotMap<TextureKey, String>,

    current: Option<RecordedFrame>,
    frames: VecDeque<RecordedFrame>,
    max_retained_frames: usize,

    /// Every call, in order ("begin_frame", "draw:grid", "present", ...)
    commands: Vec<String>,
    record_commands: bool,

    failing_assets: FxHashSet<String>,
    fail_next_draw: bool,
    device_lost: bool,
    fail_device_recreation: bool,

    size: (u32, u32),
    stats: RecordingStats,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            meshes: SlotMap::with_key(),
            textures: SlotMap::with_key(),
            current: None,
            frames: VecDeque::new(),
            max_retained_frames: DEFAULT_RETAINED_FRAMES,
            commands: Vec::new(),
            record_commands: true,
            failing_assets: FxHashSet::default(),
            fail_next_draw: false,
            device_lost: false,
            fail_device_recreation: false,
            size: (0, 0),
            stats: RecordingStats::default(),
        }
    }

    /// Keep at most `count` finished frames (at least 1)
    pub fn with_retained_frames(mut self, count: usize) -> Self {
        self.max_retained_frames = count.max(1);
        self
    }

    /// Stop growing the command log. Long-running hosts (the demo) turn
    /// it off; frames and stats are still kept.
    pub fn without_command_log(mut self) -> Self {
        self.record_commands = false;
        self
    }

    // ===== FAULT INJECTION =====

    /// Make every load of `name` fail with `ResourceLoadFailed`
    pub fn fail_loading(&mut self, name: impl Into<String>) {
        self.failing_assets.insert(name.into());
    }

    /// Make the next `draw` fail with a `BackendError`
    pub fn fail_next_draw(&mut self) {
        self.fail_next_draw = true;
    }

    /// Simulate a lost device: draws and `present` fail with `DeviceLost`
    /// until `recreate_device` succeeds
    pub fn lose_device(&mut self) {
        sampler_warn!("sampler::RecordingBackend", "Simulating device loss");
        self.device_lost = true;
    }

    /// Make `recreate_device` fail
    pub fn fail_device_recreation(&mut self) {
        self.fail_device_recreation = true;
    }

    // ===== INSPECTION =====

    pub fn stats(&self) -> RecordingStats {
        self.stats
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Finished frames, oldest first
    pub fn frames(&self) -> impl Iterator<Item = &RecordedFrame> {
        self.frames.iter()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.back()
    }

    /// Most recent frame that reached `present`
    pub fn last_presented_frame(&self) -> Option<&RecordedFrame> {
        self.frames.iter().rev().find(|frame| frame.presented)
    }

    pub fn is_device_lost(&self) -> bool {
        self.device_lost
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn mesh_name(&self, key: MeshKey) -> Option<&str> {
        self.meshes.get(key).map(String::as_str)
    }

    pub fn texture_path(&self, key: TextureKey) -> Option<&str> {
        self.textures.get(key).map(String::as_str)
    }

    pub fn live_mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn live_texture_count(&self) -> usize {
        self.textures.len()
    }

    // ===== INTERNALS =====

    fn log_command(&mut self, command: impl Into<String>) {
        if self.record_commands {
            self.commands.push(command.into());
        }
    }

    /// Move the open frame, if any, to the finished list
    fn close_frame(&mut self) {
        if let Some(frame) = self.current.take() {
            self.frames.push_back(frame);
            while self.frames.len() > self.max_retained_frames {
                self.frames.pop_front();
            }
        }
    }

    fn validate(&self, request: &DrawRequest) -> Result<()> {
        match &request.geometry {
            DrawGeometry::Mesh(key) => {
                if !self.meshes.contains_key(*key) {
                    sampler_bail!(InvalidResource, "sampler::RecordingBackend",
                        "Draw '{}' uses a stale or unknown mesh key", request.label);
                }
            }
            DrawGeometry::Immediate(mesh) => {
                let vertex_count = mesh.vertices.len();
                if mesh.indices.iter().any(|&i| i as usize >= vertex_count) {
                    sampler_bail!(InvalidResource, "sampler::RecordingBackend",
                        "Draw '{}' indexes past its {} vertices", request.label, vertex_count);
                }
            }
        }
        if let Some(key) = request.texture {
            if !self.textures.contains_key(key) {
                sampler_bail!(InvalidResource, "sampler::RecordingBackend",
                    "Draw '{}' uses a stale or unknown texture key", request.label);
            }
        }
        Ok(())
    }
}

// ============================================================================
// AssetProvider
// ============================================================================

impl AssetProvider for RecordingBackend {
    fn load_mesh(&mut self, name: &str) -> Result<MeshKey> {
        if self.failing_assets.contains(name) {
            sampler_bail!(ResourceLoadFailed, "sampler::RecordingBackend",
                "Mesh '{}' could not be loaded", name);
        }
        self.log_command(format!("load_mesh:{}", name));
        self.stats.meshes_loaded += 1;
        Ok(self.meshes.insert(name.to_string()))
    }

    fn load_texture(&mut self, path: &str) -> Result<TextureKey> {
        if self.failing_assets.contains(path) {
            sampler_bail!(ResourceLoadFailed, "sampler::RecordingBackend",
                "Texture '{}' could not be loaded", path);
        }
        self.log_command(format!("load_texture:{}", path));
        self.stats.textures_loaded += 1;
        Ok(self.textures.insert(path.to_string()))
    }

    fn release_all(&mut self) {
        self.log_command("release_all");
        self.meshes.clear();
        self.textures.clear();
    }
}

// ============================================================================
// DrawBackend
// ============================================================================

impl DrawBackend for RecordingBackend {
    fn begin_frame(&mut self, clear_color: Vec4) -> Result<()> {
        // A frame left open was dropped before present
        self.close_frame();
        self.log_command("begin_frame");
        self.current = Some(RecordedFrame::new(self.stats.frames_begun, clear_color));
        self.stats.frames_begun += 1;
        Ok(())
    }

    fn draw(&mut self, request: &DrawRequest) -> Result<()> {
        if self.device_lost {
            return Err(Error::DeviceLost);
        }
        if self.fail_next_draw {
            self.fail_next_draw = false;
            sampler_bail!(BackendError, "sampler::RecordingBackend",
                "Injected failure drawing '{}'", request.label);
        }
        self.validate(request)?;

        let frame = match self.current.as_mut() {
            Some(frame) => frame,
            None => sampler_bail!(BackendError, "sampler::RecordingBackend",
                "draw('{}') called outside begin_frame/present", request.label),
        };
        frame.commands.push(RecordedCommand::Draw(request.clone()));
        self.stats.draws += 1;
        if let DrawGeometry::Immediate(mesh) = &request.geometry {
            let index_bytes: &[u8] = bytemuck::cast_slice(&mesh.indices);
            self.stats.immediate_primitives += mesh.primitive_count() as u64;
            self.stats.immediate_bytes += (mesh.vertices.as_bytes().len() + index_bytes.len()) as u64;
        }
        self.log_command(format!("draw:{}", request.label));
        Ok(())
    }

    fn draw_text(&mut self, position: Vec2, color: Vec4, text: &str) -> Result<()> {
        if self.device_lost {
            return Err(Error::DeviceLost);
        }
        let frame = match self.current.as_mut() {
            Some(frame) => frame,
            None => sampler_bail!(BackendError, "sampler::RecordingBackend",
                "draw_text called outside begin_frame/present"),
        };
        frame.commands.push(RecordedCommand::Text { position, color, text: text.to_string() });
        self.stats.text_runs += 1;
        self.log_command(format!("text:{}", text));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if self.device_lost {
            self.close_frame();
            return Err(Error::DeviceLost);
        }
        match self.current.as_mut() {
            Some(frame) => frame.presented = true,
            None => sampler_bail!(BackendError, "sampler::RecordingBackend",
                "present called without begin_frame"),
        }
        self.close_frame();
        self.stats.frames_presented += 1;
        self.log_command("present");
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.size = (width, height);
        self.stats.resizes += 1;
        self.log_command(format!("resize:{}x{}", width, height));
        Ok(())
    }

    fn recreate_device(&mut self) -> Result<()> {
        self.close_frame();
        if self.fail_device_recreation {
            sampler_bail!(InitializationFailed, "sampler::RecordingBackend",
                "Device recreation failed");
        }
        // Keys from the old device are dead
        self.meshes.clear();
        self.textures.clear();
        self.device_lost = false;
        self.stats.device_recreations += 1;
        self.log_command("recreate_device");
        sampler_debug!("sampler::RecordingBackend", "Device recreated ({} total)",
            self.stats.device_recreations);
        Ok(())
    }
}

#[cfg(test)]
#[path = "recording_tests.rs"]
mod tests;
