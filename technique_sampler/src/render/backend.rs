/// Draw backend trait and draw requests.
///
/// The backend owns the device, the swapchain and every GPU state object.
/// The scene talks to it only through this trait: one `begin_frame`, any
/// number of draws and text runs, then `present`.

use glam::{Mat4, Vec2, Vec4};
use crate::error::Result;
use crate::light::LightingParams;
use super::assets::{MeshKey, TextureKey};
use super::geometry::MeshData;
use super::state::RenderState;

/// Scene pass a draw belongs to, in submission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderPhase {
    /// Grid floor and solid geometry
    Opaque,
    /// Ground-projected shadows, drawn over the opaque pass
    Shadow,
    /// Blended geometry, sorted back to front
    Transparent,
}

/// What a draw rasterizes
#[derive(Debug, Clone, PartialEq)]
pub enum DrawGeometry {
    /// A mesh previously loaded through an `AssetProvider`
    Mesh(MeshKey),
    /// Vertices built on the CPU for this frame only
    Immediate(MeshData),
}

/// One draw call with everything it needs.
///
/// A request carries its full fixed-function state; backends must not
/// inherit anything from the previous draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    /// Name of the drawn object ("grid", "gimbal_ring_x", ...)
    pub label: &'static str,
    pub phase: RenderPhase,
    pub geometry: DrawGeometry,
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub state: RenderState,
    pub texture: Option<TextureKey>,
    /// `None` for unlit draws
    pub lighting: Option<LightingParams>,
}

impl DrawRequest {
    pub fn new(label: &'static str, phase: RenderPhase, geometry: DrawGeometry) -> Self {
        Self {
            label,
            phase,
            geometry,
            world: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            state: RenderState::default(),
            texture: None,
            lighting: None,
        }
    }

    pub fn with_world(mut self, world: Mat4) -> Self {
        self.world = world;
        self
    }

    pub fn with_camera(mut self, view: Mat4, projection: Mat4) -> Self {
        self.view = view;
        self.projection = projection;
        self
    }

    pub fn with_state(mut self, state: RenderState) -> Self {
        self.state = state;
        self
    }

    pub fn with_texture(mut self, texture: Option<TextureKey>) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_lighting(mut self, lighting: LightingParams) -> Self {
        self.lighting = Some(lighting);
        self
    }

    /// World-space translation of the drawn object
    pub fn world_position(&self) -> glam::Vec3 {
        self.world.w_axis.truncate()
    }
}

/// Device-side rendering
pub trait DrawBackend {
    /// Start a frame and clear color and depth
    fn begin_frame(&mut self, clear_color: Vec4) -> Result<()>;

    /// Submit one draw
    fn draw(&mut self, request: &DrawRequest) -> Result<()>;

    /// Draw overlay text at a pixel position (origin top-left)
    fn draw_text(&mut self, position: Vec2, color: Vec4, text: &str) -> Result<()>;

    /// Finish and present the frame. `Err(Error::DeviceLost)` asks the
    /// caller to rebuild device state.
    fn present(&mut self) -> Result<()>;

    /// The output surface changed size
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Create a fresh device after a loss. Every previously handed out
    /// resource key is invalid afterwards.
    fn recreate_device(&mut self) -> Result<()>;
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
