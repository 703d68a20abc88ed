//! Frame timing. The Clock contract and the StepTimer that implements it.

mod step_timer;

pub use step_timer::{Clock, StepTimer};
