//! Scene module
//!
//! Configuration, animated state, technique strategies and the frame
//! sequencer that ties them to a draw backend.

mod config;
mod animation;
mod technique;
mod sorting;
mod frame_sequencer;

pub use config::{
    AssetNames, BillboardConfig, CameraConfig, GimbalConfig, GridConfig, LightConfig,
    ProjectionConfig, SceneConfig, ShadowConfig, TechniqueSet, WindowConfig,
    DEFAULT_CLEAR_COLOR,
};
pub use animation::AnimationState;
pub use technique::{FrameContext, Technique};
pub use sorting::sort_back_to_front;
pub use frame_sequencer::{FrameOutcome, FrameSequencer};
