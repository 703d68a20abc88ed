//! Technique math. The per-frame transforms behind each sample technique.
//!
//! Everything here is a pure function of its inputs (plus the gimbal's
//! own accumulators). Nothing touches the backend.

pub mod gimbal;
pub mod blob_shadow;
pub mod billboard;

pub use gimbal::{AxisInput, GimbalInput, GimbalTransforms, OrientationGimbal};
pub use blob_shadow::{BlobShadowProjector, BounceAnimation, ShadowParams};
pub use billboard::{BillboardOrienter, BillboardSlot, pyramid_slots};
