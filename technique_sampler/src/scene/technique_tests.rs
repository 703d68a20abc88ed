//! Unit tests for technique strategies

use super::*;
use crate::render::geometry::open_box;
use crate::render::{CullMode, RecordingBackend};
use crate::technique::pyramid_slots;

struct Fixture {
    config: SceneConfig,
    animation: AnimationState,
    assets: SceneAssets,
    camera: Camera,
    projector: BlobShadowProjector,
    orienter: BillboardOrienter,
    slots: Vec<BillboardSlot>,
    open_box: MeshData,
}

impl Fixture {
    fn new(config: SceneConfig) -> Self {
        let mut backend = RecordingBackend::new();
        let assets = SceneAssets::load(&mut backend, &config.manifest()).unwrap();
        let eye = Vec3::new(0.0, 2.0, 8.0);
        Self {
            animation: AnimationState::from_config(&config),
            assets,
            camera: Camera::new(Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y), Mat4::IDENTITY, eye),
            projector: BlobShadowProjector::new(config.shadow.resting_height),
            orienter: BillboardOrienter::default(),
            slots: pyramid_slots(config.billboard.base_height, config.billboard.tier_spacing),
            open_box: open_box(),
            config,
        }
    }

    fn context(&self) -> FrameContext<'_> {
        FrameContext {
            config: &self.config,
            animation: &self.animation,
            assets: &self.assets,
            camera: &self.camera,
            projector: &self.projector,
            orienter: &self.orienter,
            slots: &self.slots,
            open_box: &self.open_box,
        }
    }

    fn draws(&self, technique: Technique, phase: RenderPhase) -> Vec<DrawRequest> {
        let mut out = Vec::new();
        technique.contribute(phase, &self.context(), &mut out).unwrap();
        out
    }
}

// ============================================================================
// SELECTION
// ============================================================================

#[test]
fn test_from_set_keeps_fixed_order() {
    assert_eq!(Technique::from_set(TechniqueSet::all()), Technique::ALL.to_vec());
    assert_eq!(
        Technique::from_set(TechniqueSet::LIT_BOX | TechniqueSet::GIMBAL),
        vec![Technique::Gimbal, Technique::LitBox]
    );
    assert!(Technique::from_set(TechniqueSet::empty()).is_empty());
}

#[test]
fn test_phases() {
    assert_eq!(Technique::BlobShadow.phases(), &[RenderPhase::Opaque, RenderPhase::Shadow]);
    assert_eq!(Technique::Billboard.phases(), &[RenderPhase::Transparent]);
    for technique in Technique::ALL {
        assert_eq!(Technique::from_set(technique.flag()), vec![technique]);
    }
}

#[test]
fn test_unused_phase_adds_nothing() {
    let fixture = Fixture::new(SceneConfig::all());
    assert!(fixture.draws(Technique::Gimbal, RenderPhase::Transparent).is_empty());
    assert!(fixture.draws(Technique::Billboard, RenderPhase::Opaque).is_empty());
    assert!(fixture.draws(Technique::LitBox, RenderPhase::Shadow).is_empty());
}

// ============================================================================
// GIMBAL
// ============================================================================

#[test]
fn test_gimbal_draws_body_and_rings() {
    let fixture = Fixture::new(SceneConfig::gimbal());
    let draws = fixture.draws(Technique::Gimbal, RenderPhase::Opaque);
    let labels: Vec<_> = draws.iter().map(|d| d.label).collect();
    assert_eq!(labels, vec!["gimbal_ring_y", "gimbal_ring_x", "gimbal_ring_z", "gimbal_body"]);

    let placement = Mat4::from_translation(fixture.config.gimbal.position);
    let body = draws.iter().find(|d| d.label == "gimbal_body").unwrap();
    assert_eq!(body.world, placement * fixture.animation.gimbal.calibration());
    assert!(draws.iter().all(|d| d.state == RenderState::opaque()));
    assert!(draws.iter().all(|d| d.view == *fixture.camera.view_matrix()));
}

#[test]
fn test_gimbal_without_assets_is_an_error() {
    let mut fixture = Fixture::new(SceneConfig::gimbal());
    fixture.assets = SceneAssets::default();
    let mut out = Vec::new();
    let result = Technique::Gimbal.contribute(RenderPhase::Opaque, &fixture.context(), &mut out);
    assert!(result.is_err());
}

// ============================================================================
// BLOB SHADOW
// ============================================================================

#[test]
fn test_ball_at_bounce_height() {
    let fixture = Fixture::new(SceneConfig::blob_shadow());
    let draws = fixture.draws(Technique::BlobShadow, RenderPhase::Opaque);
    assert_eq!(draws.len(), 1);
    assert_eq!(draws[0].label, "ball");
    assert!((draws[0].world_position().y - 1.0).abs() < 1e-6);
}

#[test]
fn test_shadow_at_rest_phase() {
    let fixture = Fixture::new(SceneConfig::blob_shadow());
    let draws = fixture.draws(Technique::BlobShadow, RenderPhase::Shadow);
    assert_eq!(draws.len(), 1);
    let shadow = &draws[0];

    assert_eq!(shadow.state, RenderState::blob_shadow());
    assert_eq!(shadow.world_position().y, 0.0);
    // Height 1.0 gives rate 0.75 for both scale and color
    assert!((shadow.world.x_axis.x - 0.75).abs() < 1e-6);
    assert_eq!(shadow.world.y_axis.y, 1.0);
    match &shadow.geometry {
        DrawGeometry::Immediate(mesh) => match &mesh.vertices {
            crate::render::Vertices::PositionColor(vertices) => {
                for v in vertices {
                    assert!((v.color[0] - 0.75).abs() < 1e-6);
                    assert_eq!(v.color[3], 1.0);
                }
            }
            other => panic!("unexpected vertices {:?}", other),
        },
        other => panic!("unexpected geometry {:?}", other),
    }
    assert!(shadow.texture.is_none());
}

#[test]
fn test_shadow_samples_configured_texture() {
    let mut config = SceneConfig::blob_shadow();
    config.shadow.texture = Some("textures/blob.png".to_string());
    let fixture = Fixture::new(config);
    let draws = fixture.draws(Technique::BlobShadow, RenderPhase::Shadow);
    assert_eq!(draws[0].texture, fixture.assets.texture("textures/blob.png"));
    assert!(draws[0].texture.is_some());
}

// ============================================================================
// BILLBOARD
// ============================================================================

#[test]
fn test_billboards_face_camera() {
    let fixture = Fixture::new(SceneConfig::billboard());
    let draws = fixture.draws(Technique::Billboard, RenderPhase::Transparent);
    assert_eq!(draws.len(), 14);

    let eye = fixture.camera.eye_position();
    for draw in &draws {
        let forward = draw.world.z_axis.truncate().normalize();
        let to_eye = (eye - draw.world_position()).normalize();
        assert!((forward.dot(to_eye) + 1.0).abs() < 1e-5);
        assert!(draw.world.y_axis.truncate().dot(Vec3::Y) >= 0.0);
        assert_eq!(draw.state, RenderState::billboard(200));
        assert!(draw.texture.is_some());
    }
}

// ============================================================================
// LIT BOX
// ============================================================================

#[test]
fn test_lit_box_is_double_sided_and_lit() {
    let fixture = Fixture::new(SceneConfig::lit_box());
    let draws = fixture.draws(Technique::LitBox, RenderPhase::Opaque);
    assert_eq!(draws.len(), 1);
    let lit_box = &draws[0];
    assert_eq!(lit_box.state.rasterization.cull_mode, CullMode::None);
    assert!(!lit_box.state.blend.blend_enable);
    let lighting = lit_box.lighting.unwrap();
    assert_eq!(lighting.direction, Vec3::X);
    assert_eq!(lighting.ambient, Vec3::splat(0.3));
}
