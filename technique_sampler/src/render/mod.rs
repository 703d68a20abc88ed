//! Render module. Draw requests, fixed-function state and the backend
//! seam.
//!
//! The scene never touches a device. It builds `DrawRequest`s, each with
//! a complete `RenderState`, and hands them to a `DrawBackend`. Assets
//! are referenced through slotmap keys issued by an `AssetProvider`.

pub mod state;
pub mod geometry;
mod assets;
mod backend;
mod recording;

pub use state::{
    AddressMode, AlphaTestState, BlendFactor, ColorBlendState, ColorWriteMask,
    CompareOp, CullMode, DepthStencilState, Filter, FrontFace, RasterizationState,
    RenderState, SamplerState,
};
pub use geometry::{MeshData, PrimitiveTopology, Vertices};
pub use assets::{AssetManifest, AssetProvider, MeshKey, SceneAssets, TextureKey};
pub use backend::{DrawBackend, DrawGeometry, DrawRequest, RenderPhase};
pub use recording::{
    RecordedCommand, RecordedFrame, RecordingBackend, RecordingStats, DEFAULT_RETAINED_FRAMES,
};
