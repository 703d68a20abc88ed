/*!
# Technique Sampler

A small real-time scene that shows classic rendering techniques side by
side: an orientation gimbal, a height-attenuated blob shadow, camera-facing
billboards and a directionally lit open box.

The crate computes the scene and its draw list; a `DrawBackend` turns draw
requests into pixels. `RecordingBackend` is a GPU-free backend that records
every call.

## Architecture

- **time**: `StepTimer`, variable or fixed timestep
- **camera**: passive `Camera` plus the orbiting `DebugCamera`
- **technique**: gimbal, blob shadow and billboard math
- **light**: rotating `DirectionalLight`
- **render**: `RenderState`, `DrawRequest`, backend and asset traits
- **scene**: `SceneConfig`, `Technique` strategies, `FrameSequencer`
- **input**: platform-independent input state and winit translation
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod time;
pub mod camera;
pub mod input;
pub mod light;
pub mod technique;
pub mod render;
pub mod scene;

// Main sampler namespace module
pub mod sampler {
    // Error types
    pub use crate::error::{Error, Result};

    // Global logger access
    pub use crate::engine::Engine;

    // Frame driver
    pub use crate::scene::{FrameOutcome, FrameSequencer, SceneConfig, TechniqueSet};

    // Logging sub-module (types only; macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod render {
        pub use crate::render::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
