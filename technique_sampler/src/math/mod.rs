//! Math helpers shared by the techniques.

mod transform;

pub use transform::{Orientation, Transform, rotation_x, rotation_y, rotation_z};
