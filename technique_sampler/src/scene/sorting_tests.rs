//! Unit tests for back-to-front sorting

use super::*;
use glam::Mat4;
use crate::render::{DrawGeometry, RenderPhase};
use crate::render::geometry::billboard_quad;

fn draw_at(label: &'static str, position: Vec3) -> DrawRequest {
    DrawRequest::new(label, RenderPhase::Transparent, DrawGeometry::Immediate(billboard_quad()))
        .with_world(Mat4::from_translation(position))
}

fn labels(draws: &[DrawRequest]) -> Vec<&'static str> {
    draws.iter().map(|d| d.label).collect()
}

#[test]
fn test_farthest_first() {
    let mut draws = vec![
        draw_at("near", Vec3::new(0.0, 0.0, 4.0)),
        draw_at("far", Vec3::new(0.0, 0.0, -10.0)),
        draw_at("middle", Vec3::ZERO),
    ];
    sort_back_to_front(&mut draws, Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(labels(&draws), vec!["far", "middle", "near"]);
}

#[test]
fn test_ties_keep_submission_order() {
    let mut draws = vec![
        draw_at("a", Vec3::new(1.0, 0.0, 0.0)),
        draw_at("b", Vec3::new(-1.0, 0.0, 0.0)),
        draw_at("c", Vec3::new(0.0, 0.0, 1.0)),
    ];
    sort_back_to_front(&mut draws, Vec3::ZERO);
    assert_eq!(labels(&draws), vec!["a", "b", "c"]);
}

#[test]
fn test_sorting_keeps_matrices() {
    let positions = [Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 2.0, -3.0), Vec3::new(2.0, 0.5, 1.0)];
    let mut draws: Vec<_> = positions.iter().map(|&p| draw_at("q", p)).collect();
    let before: Vec<Mat4> = draws.iter().map(|d| d.world).collect();
    sort_back_to_front(&mut draws, Vec3::new(0.0, 3.0, 6.0));

    assert_eq!(draws.len(), 3);
    for world in &before {
        assert!(draws.iter().any(|d| d.world == *world));
    }
}

#[test]
fn test_short_lists_untouched() {
    let mut empty: Vec<DrawRequest> = Vec::new();
    sort_back_to_front(&mut empty, Vec3::ZERO);
    assert!(empty.is_empty());

    let mut single = vec![draw_at("only", Vec3::ONE)];
    sort_back_to_front(&mut single, Vec3::ZERO);
    assert_eq!(labels(&single), vec!["only"]);
}

#[test]
fn test_sort_key_orders_by_distance() {
    assert!(sort_key(100.0, 5) < sort_key(1.0, 0));
    assert!(sort_key(1.0, 0) < sort_key(1.0, 1));
    assert!(sort_key(0.0, 0) > sort_key(f32::MIN_POSITIVE, 0));
}
