/// Technique strategies.
///
/// Each enabled technique is one `Technique` variant. For every render
/// phase it takes part in, it appends fully described draw requests to the
/// frame's list; it never talks to the backend itself.

use glam::{Mat4, Vec3};
use crate::camera::Camera;
use crate::math::{Orientation, Transform};
use crate::error::Result;
use crate::render::{
    DrawGeometry, DrawRequest, MeshData, MeshKey, RenderPhase, RenderState, SceneAssets,
};
use crate::render::geometry::{billboard_quad, shadow_quad};
use crate::sampler_bail;
use crate::technique::{BillboardOrienter, BillboardSlot, BlobShadowProjector};
use super::animation::AnimationState;
use super::config::{SceneConfig, TechniqueSet};

/// Read-only inputs for building one frame's draws
pub struct FrameContext<'a> {
    pub config: &'a SceneConfig,
    pub animation: &'a AnimationState,
    pub assets: &'a SceneAssets,
    pub camera: &'a Camera,
    pub projector: &'a BlobShadowProjector,
    pub orienter: &'a BillboardOrienter,
    pub slots: &'a [BillboardSlot],
    pub open_box: &'a MeshData,
}

impl FrameContext<'_> {
    fn mesh(&self, name: &str) -> Result<MeshKey> {
        match self.assets.mesh(name) {
            Some(key) => Ok(key),
            None => sampler_bail!(InvalidResource, "sampler::Technique",
                "Mesh '{}' was never loaded", name),
        }
    }

    /// Request with this frame's camera already applied
    fn request(&self, label: &'static str, phase: RenderPhase, geometry: DrawGeometry) -> DrawRequest {
        DrawRequest::new(label, phase, geometry)
            .with_camera(*self.camera.view_matrix(), *self.camera.projection_matrix())
    }

    /// World position of the bouncing ball
    pub fn ball_position(&self) -> Vec3 {
        let ground = self.config.shadow.ball_position;
        Vec3::new(ground.x, self.animation.bounce.height(), ground.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    /// Body and three axis rings of the orientation gimbal
    Gimbal,
    /// Bouncing ball with a ground-projected blob shadow
    BlobShadow,
    /// Pyramid of camera-facing quads
    Billboard,
    /// Open box lit by the rotating directional light
    LitBox,
}

impl Technique {
    pub const ALL: [Technique; 4] = [
        Technique::Gimbal,
        Technique::BlobShadow,
        Technique::Billboard,
        Technique::LitBox,
    ];

    /// Enabled techniques, in a fixed order
    pub fn from_set(set: TechniqueSet) -> Vec<Technique> {
        Self::ALL.iter().copied().filter(|t| set.contains(t.flag())).collect()
    }

    pub fn flag(&self) -> TechniqueSet {
        match self {
            Technique::Gimbal => TechniqueSet::GIMBAL,
            Technique::BlobShadow => TechniqueSet::BLOB_SHADOW,
            Technique::Billboard => TechniqueSet::BILLBOARD,
            Technique::LitBox => TechniqueSet::LIT_BOX,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Technique::Gimbal => "gimbal",
            Technique::BlobShadow => "blob_shadow",
            Technique::Billboard => "billboard",
            Technique::LitBox => "lit_box",
        }
    }

    /// Phases this technique draws in
    pub fn phases(&self) -> &'static [RenderPhase] {
        match self {
            Technique::Gimbal => &[RenderPhase::Opaque],
            Technique::BlobShadow => &[RenderPhase::Opaque, RenderPhase::Shadow],
            Technique::Billboard => &[RenderPhase::Transparent],
            Technique::LitBox => &[RenderPhase::Opaque],
        }
    }

    /// Append this technique's draws for `phase`. Phases the technique
    /// does not take part in add nothing.
    pub fn contribute(
        &self,
        phase: RenderPhase,
        ctx: &FrameContext<'_>,
        out: &mut Vec<DrawRequest>,
    ) -> Result<()> {
        match (self, phase) {
            (Technique::Gimbal, RenderPhase::Opaque) => Self::gimbal(ctx, out),
            (Technique::BlobShadow, RenderPhase::Opaque) => Self::ball(ctx, out),
            (Technique::BlobShadow, RenderPhase::Shadow) => Self::blob_shadow(ctx, out),
            (Technique::Billboard, RenderPhase::Transparent) => Self::billboards(ctx, out),
            (Technique::LitBox, RenderPhase::Opaque) => Self::lit_box(ctx, out),
            _ => Ok(()),
        }
    }

    // ===== PER-TECHNIQUE DRAWS =====

    fn gimbal(ctx: &FrameContext<'_>, out: &mut Vec<DrawRequest>) -> Result<()> {
        let names = &ctx.config.assets;
        let transforms = ctx.animation.gimbal.transforms();

        let parts = [
            ("gimbal_ring_y", &names.gimbal_ring_y, transforms.ring_y),
            ("gimbal_ring_x", &names.gimbal_ring_x, transforms.ring_x),
            ("gimbal_ring_z", &names.gimbal_ring_z, transforms.ring_z),
            ("gimbal_body", &names.gimbal_body, transforms.body),
        ];
        for (label, mesh, world) in parts {
            let request = ctx
                .request(label, RenderPhase::Opaque, DrawGeometry::Mesh(ctx.mesh(mesh)?))
                .with_world(
                    Transform::from_position(ctx.config.gimbal.position)
                        .with_orientation(Orientation::Matrix(world))
                        .matrix(),
                )
                .with_state(RenderState::opaque());
            out.push(request);
        }
        Ok(())
    }

    fn ball(ctx: &FrameContext<'_>, out: &mut Vec<DrawRequest>) -> Result<()> {
        let mesh = ctx.mesh(&ctx.config.assets.ball)?;
        let world = Transform::from_position(ctx.ball_position())
            .with_uniform_scale(ctx.config.shadow.ball_scale)
            .matrix();
        out.push(
            ctx.request("ball", RenderPhase::Opaque, DrawGeometry::Mesh(mesh))
                .with_world(world)
                .with_state(RenderState::opaque()),
        );
        Ok(())
    }

    fn blob_shadow(ctx: &FrameContext<'_>, out: &mut Vec<DrawRequest>) -> Result<()> {
        let position = ctx.ball_position();
        let params = ctx.projector.params(position.y);
        let texture = ctx.config.shadow.texture.as_deref().and_then(|path| ctx.assets.texture(path));

        out.push(
            ctx.request(
                "blob_shadow",
                RenderPhase::Shadow,
                DrawGeometry::Immediate(shadow_quad(params.vertex_color())),
            )
            .with_world(ctx.projector.ground_transform(position))
            .with_state(RenderState::blob_shadow())
            .with_texture(texture),
        );
        Ok(())
    }

    fn billboards(ctx: &FrameContext<'_>, out: &mut Vec<DrawRequest>) -> Result<()> {
        let path = &ctx.config.billboard.texture;
        let texture = match ctx.assets.texture(path) {
            Some(key) => key,
            None => sampler_bail!(InvalidResource, "sampler::Technique",
                "Billboard texture '{}' was never loaded", path),
        };
        let eye = ctx.camera.eye_position();
        let size = Mat4::from_scale(Vec3::splat(ctx.config.billboard.size));
        let state = RenderState::billboard(ctx.config.billboard.alpha_reference);
        let quad = billboard_quad();

        for slot in ctx.slots {
            out.push(
                ctx.request("billboard", RenderPhase::Transparent, DrawGeometry::Immediate(quad.clone()))
                    .with_world(ctx.orienter.world_matrix(slot.position, eye) * size)
                    .with_state(state)
                    .with_texture(Some(texture)),
            );
        }
        Ok(())
    }

    fn lit_box(ctx: &FrameContext<'_>, out: &mut Vec<DrawRequest>) -> Result<()> {
        out.push(
            ctx.request("lit_box", RenderPhase::Opaque, DrawGeometry::Immediate(ctx.open_box.clone()))
                .with_state(RenderState::opaque_double_sided())
                .with_lighting(ctx.animation.light.params()),
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "technique_tests.rs"]
mod tests;
