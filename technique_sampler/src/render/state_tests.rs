//! Unit tests for render state descriptors

use super::*;

// ============================================================================
// PRESETS
// ============================================================================

#[test]
fn test_opaque_preset_is_default() {
    let state = RenderState::opaque();
    assert_eq!(state, RenderState::default());
    assert!(!state.blend.blend_enable);
    assert!(state.depth_stencil.depth_test_enable);
    assert!(state.depth_stencil.depth_write_enable);
    assert_eq!(state.depth_stencil.depth_compare_op, CompareOp::Less);
    assert_eq!(state.rasterization.cull_mode, CullMode::Back);
    assert_eq!(state.rasterization.front_face, FrontFace::Clockwise);
    assert!(state.alpha_test.is_none());
}

#[test]
fn test_double_sided_only_changes_culling() {
    let state = RenderState::opaque_double_sided();
    assert_eq!(state.rasterization, RasterizationState::CULL_NONE);
    assert_eq!(state.blend, ColorBlendState::OPAQUE);
    assert_eq!(state.depth_stencil, DepthStencilState::DEPTH_DEFAULT);
    assert!(state.alpha_test.is_none());
}

#[test]
fn test_blob_shadow_preset() {
    let state = RenderState::blob_shadow();
    assert_eq!(state.depth_stencil, DepthStencilState::DEPTH_NONE);
    assert!(!state.depth_stencil.depth_test_enable);
    assert!(!state.depth_stencil.depth_write_enable);
    assert!(state.blend.blend_enable);
    assert_eq!(state.blend.src_color_factor, BlendFactor::Zero);
    assert_eq!(state.blend.dst_color_factor, BlendFactor::OneMinusSrcColor);
    assert_eq!(state.rasterization.front_face, FrontFace::CounterClockwise);
    assert_eq!(state.rasterization.cull_mode, CullMode::Back);
    assert!(state.alpha_test.is_none());
}

#[test]
fn test_blob_shadow_blend_ignores_source_alpha() {
    let blend = RenderState::blob_shadow().blend;
    // No factor reads source alpha
    for factor in [
        blend.src_color_factor,
        blend.dst_color_factor,
        blend.src_alpha_factor,
        blend.dst_alpha_factor,
    ] {
        assert_ne!(factor, BlendFactor::OneMinusSrcAlpha);
    }
}

#[test]
fn test_billboard_preset_keeps_blend_and_cutout() {
    let state = RenderState::billboard(200);
    assert_eq!(state.blend, ColorBlendState::ALPHA_BLEND);
    assert_eq!(state.blend.src_color_factor, BlendFactor::One);
    assert_eq!(state.blend.dst_color_factor, BlendFactor::OneMinusSrcAlpha);
    assert_eq!(state.depth_stencil, DepthStencilState::DEPTH_DEFAULT);
    assert_eq!(state.rasterization.cull_mode, CullMode::None);
    assert_eq!(state.sampler, SamplerState::LINEAR_CLAMP);
    let alpha_test = state.alpha_test.unwrap();
    assert_eq!(alpha_test.reference, 200);
    assert_eq!(alpha_test.compare_op, CompareOp::Greater);
}

#[test]
fn test_billboard_alpha_reference_is_configurable() {
    assert_eq!(RenderState::billboard(128).alpha_test.unwrap().reference, 128);
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn test_defaults_write_all_channels() {
    for blend in [
        ColorBlendState::OPAQUE,
        ColorBlendState::ALPHA_BLEND,
        ColorBlendState::MULTIPLY_INVERSE_SOURCE,
    ] {
        assert_eq!(blend.color_write_mask, ColorWriteMask::ALL);
    }
    assert_eq!(ColorWriteMask::default(), ColorWriteMask::ALL);
}
