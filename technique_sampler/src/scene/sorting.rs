/// Back-to-front ordering of blended draws.
///
/// Each draw gets a 64-bit key: the inverted bit pattern of its squared
/// eye distance in the high half, its submission index in the low half.
/// Non-negative floats order like their bit patterns, so one radix sort
/// puts the farthest draw first and keeps submission order between draws
/// at the same distance.

use glam::Vec3;
use rdst::RadixSort;
use crate::render::DrawRequest;

fn sort_key(distance_squared: f32, index: usize) -> u64 {
    let inverted = u32::MAX - distance_squared.max(0.0).to_bits();
    ((inverted as u64) << 32) | (index as u64 & 0xFFFF_FFFF)
}

/// Reorder `draws` so the farthest from `eye` comes first
pub fn sort_back_to_front(draws: &mut Vec<DrawRequest>, eye: Vec3) {
    if draws.len() < 2 {
        return;
    }

    let mut keys: Vec<u64> = draws
        .iter()
        .enumerate()
        .map(|(index, draw)| sort_key(draw.world_position().distance_squared(eye), index))
        .collect();
    keys.radix_sort_unstable();

    let mut pending: Vec<Option<DrawRequest>> = draws.drain(..).map(Some).collect();
    draws.extend(
        keys.iter()
            .filter_map(|key| pending[(key & 0xFFFF_FFFF) as usize].take()),
    );
}

#[cfg(test)]
#[path = "sorting_tests.rs"]
mod tests;
