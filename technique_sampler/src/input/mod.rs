//! Input module. Raw input state polled once per update.
//!
//! Platform events are translated into `InputEvent`s (see `winit`) and
//! folded into an `InputState`. The debug camera and the gimbal read the
//! state; they never see platform types.

mod state;
pub mod winit;

pub use state::{InputEvent, InputState, Key, PointerFrame};
