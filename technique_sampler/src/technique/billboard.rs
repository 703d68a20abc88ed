/// BillboardOrienter. Turns a flat quad so that it faces the camera.
///
/// The basis is rebuilt every frame from the current eye position:
///
/// ```text
/// forward = normalize(position - eye)
/// right   = normalize(up × forward)
/// up'     = forward × right
/// ```
///
/// `up'` is world up with its forward component removed, so its dot with
/// world up is never negative and the quad never flips upside down.

use glam::{Mat4, Vec3};

/// Squared lengths below this are treated as zero
const DEGENERATE_EPSILON: f32 = 1e-8;

/// Forward used when the eye sits on the billboard
const FALLBACK_FORWARD: Vec3 = Vec3::NEG_Z;

/// Up substituted when forward is (anti)parallel to the up axis
const FALLBACK_UP: Vec3 = Vec3::Z;

/// A fixed billboard position; orientation is never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillboardSlot {
    pub position: Vec3,
    /// Pyramid tier (0 = bottom)
    pub tier: u32,
}

/// Pyramid of billboard slots: 3×3 on tier 0 (offsets -1..1), 2×2 on
/// tier 1 (offsets ±0.5), one apex on tier 2.
///
/// Tier `n` sits at `base_height + n * tier_spacing`.
pub fn pyramid_slots(base_height: f32, tier_spacing: f32) -> Vec<BillboardSlot> {
    const TIERS: [(u32, f32); 3] = [(3, 1.0), (2, 0.5), (1, 0.0)];

    let mut slots = Vec::with_capacity(14);
    for (tier, &(count, extent)) in TIERS.iter().enumerate() {
        let y = base_height + tier as f32 * tier_spacing;
        let step = if count > 1 { 2.0 * extent / (count - 1) as f32 } else { 0.0 };
        for iz in 0..count {
            for ix in 0..count {
                slots.push(BillboardSlot {
                    position: Vec3::new(-extent + ix as f32 * step, y, -extent + iz as f32 * step),
                    tier: tier as u32,
                });
            }
        }
    }
    slots
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillboardOrienter {
    up: Vec3,
}

impl Default for BillboardOrienter {
    fn default() -> Self {
        Self::new(Vec3::Y)
    }
}

impl BillboardOrienter {
    /// `up` is normalized; a zero vector falls back to world Y
    pub fn new(up: Vec3) -> Self {
        Self { up: up.try_normalize().unwrap_or(Vec3::Y) }
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Orthonormal (right, up, forward) basis facing `eye` from `position`.
    ///
    /// Degenerate inputs are resolved deterministically: an eye on the
    /// billboard uses -Z as forward, and a forward parallel to the up axis
    /// swaps in world Z as the reference up.
    pub fn basis(&self, position: Vec3, eye: Vec3) -> (Vec3, Vec3, Vec3) {
        let to_object = position - eye;
        let forward = if to_object.length_squared() > DEGENERATE_EPSILON {
            to_object.normalize()
        } else {
            FALLBACK_FORWARD
        };

        let mut right = self.up.cross(forward);
        if right.length_squared() <= DEGENERATE_EPSILON {
            right = FALLBACK_UP.cross(forward);
            if right.length_squared() <= DEGENERATE_EPSILON {
                right = Vec3::X;
            }
        }
        let right = right.normalize();
        let up = forward.cross(right);

        (right, up, forward)
    }

    /// World matrix placing a quad at `position`, facing `eye`
    pub fn world_matrix(&self, position: Vec3, eye: Vec3) -> Mat4 {
        let (right, up, forward) = self.basis(position, eye);
        Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            forward.extend(0.0),
            position.extend(1.0),
        )
    }
}

#[cfg(test)]
#[path = "billboard_tests.rs"]
mod tests;
