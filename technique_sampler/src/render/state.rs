/// Render state descriptors
///
/// Fixed-function state (blend, depth, rasterizer, sampler, alpha test)
/// is a plain value attached to every draw request. Nothing is toggled
/// globally: a draw gets exactly the state it carries.

// ===== RASTERIZATION ENUMS =====

/// Face culling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullMode {
    /// No culling
    None,
    /// Cull back faces
    Back,
}

/// Front face winding order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontFace {
    /// Counter-clockwise vertices define front face
    CounterClockwise,
    /// Clockwise vertices define front face
    Clockwise,
}

// ===== DEPTH ENUMS =====

/// Comparison operator for depth and alpha tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Pass if value < reference
    Less,
    /// Pass if value > reference
    Greater,
    /// Always pass
    Always,
}

// ===== COLOR BLEND ENUMS =====

/// Blend factor. The blend equation is always
/// `src * src_factor + dst * dst_factor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    Zero,
    One,
    OneMinusSrcColor,
    OneMinusSrcAlpha,
}

// ===== SAMPLER ENUMS =====

/// Texture filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Linear,
}

/// Texture addressing outside [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    Clamp,
}

// ===== RASTERIZATION STATE =====

/// Rasterization fixed-function state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterizationState {
    /// Face culling mode
    pub cull_mode: CullMode,
    /// Front face winding order
    pub front_face: FrontFace,
}

impl Default for RasterizationState {
    /// Clockwise front faces, counter-clockwise faces culled
    fn default() -> Self {
        Self {
            cull_mode: CullMode::Back,
            front_face: FrontFace::Clockwise,
        }
    }
}

impl RasterizationState {
    pub const CULL_NONE: Self = Self {
        cull_mode: CullMode::None,
        front_face: FrontFace::Clockwise,
    };

    /// Culls clockwise-wound triangles
    pub const CULL_CLOCKWISE: Self = Self {
        cull_mode: CullMode::Back,
        front_face: FrontFace::CounterClockwise,
    };
}

// ===== DEPTH STATE =====

/// Depth testing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthStencilState {
    /// Enable depth testing
    pub depth_test_enable: bool,
    /// Enable writing to depth buffer
    pub depth_write_enable: bool,
    /// Depth comparison operator
    pub depth_compare_op: CompareOp,
}

impl Default for DepthStencilState {
    fn default() -> Self {
        Self::DEPTH_DEFAULT
    }
}

impl DepthStencilState {
    pub const DEPTH_DEFAULT: Self = Self {
        depth_test_enable: true,
        depth_write_enable: true,
        depth_compare_op: CompareOp::Less,
    };

    pub const DEPTH_NONE: Self = Self {
        depth_test_enable: false,
        depth_write_enable: false,
        depth_compare_op: CompareOp::Always,
    };
}

// ===== COLOR BLEND STATE =====

/// Color write mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorWriteMask {
    pub r: bool,
    pub g: bool,
    pub b: bool,
    pub a: bool,
}

impl ColorWriteMask {
    /// All channels enabled
    pub const ALL: Self = Self { r: true, g: true, b: true, a: true };
}

impl Default for ColorWriteMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Color blending state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBlendState {
    /// Enable blending
    pub blend_enable: bool,
    /// Source color blend factor
    pub src_color_factor: BlendFactor,
    /// Destination color blend factor
    pub dst_color_factor: BlendFactor,
    /// Source alpha blend factor
    pub src_alpha_factor: BlendFactor,
    /// Destination alpha blend factor
    pub dst_alpha_factor: BlendFactor,
    /// Color write mask
    pub color_write_mask: ColorWriteMask,
}

impl Default for ColorBlendState {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl ColorBlendState {
    pub const OPAQUE: Self = Self {
        blend_enable: false,
        src_color_factor: BlendFactor::One,
        dst_color_factor: BlendFactor::Zero,
        src_alpha_factor: BlendFactor::One,
        dst_alpha_factor: BlendFactor::Zero,
        color_write_mask: ColorWriteMask::ALL,
    };

    /// Premultiplied alpha: `src + dst * (1 - srcAlpha)`
    pub const ALPHA_BLEND: Self = Self {
        blend_enable: true,
        src_color_factor: BlendFactor::One,
        dst_color_factor: BlendFactor::OneMinusSrcAlpha,
        src_alpha_factor: BlendFactor::One,
        dst_alpha_factor: BlendFactor::OneMinusSrcAlpha,
        color_write_mask: ColorWriteMask::ALL,
    };

    /// Darkens the target: `dst * (1 - src)`; the source alpha is unused
    pub const MULTIPLY_INVERSE_SOURCE: Self = Self {
        blend_enable: true,
        src_color_factor: BlendFactor::Zero,
        dst_color_factor: BlendFactor::OneMinusSrcColor,
        src_alpha_factor: BlendFactor::Zero,
        dst_alpha_factor: BlendFactor::OneMinusSrcColor,
        color_write_mask: ColorWriteMask::ALL,
    };
}

// ===== SAMPLER STATE =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerState {
    pub filter: Filter,
    pub address_mode: AddressMode,
}

impl Default for SamplerState {
    fn default() -> Self {
        Self::LINEAR_CLAMP
    }
}

impl SamplerState {
    pub const LINEAR_CLAMP: Self = Self { filter: Filter::Linear, address_mode: AddressMode::Clamp };
}

// ===== ALPHA TEST =====

/// Alpha cutout: fragments whose alpha fails `compare_op` against
/// `reference / 255` are discarded before blending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaTestState {
    pub compare_op: CompareOp,
    pub reference: u8,
}

impl AlphaTestState {
    pub fn new(compare_op: CompareOp, reference: u8) -> Self {
        Self { compare_op, reference }
    }
}

// ===== RENDER STATE =====

/// Complete fixed-function state for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    pub blend: ColorBlendState,
    pub depth_stencil: DepthStencilState,
    pub rasterization: RasterizationState,
    pub sampler: SamplerState,
    /// `None` disables the alpha test
    pub alpha_test: Option<AlphaTestState>,
}

impl RenderState {
    /// Opaque blend, default depth, default culling, no alpha test
    pub fn opaque() -> Self {
        Self::default()
    }

    /// Opaque with culling disabled (double-sided geometry)
    pub fn opaque_double_sided() -> Self {
        Self {
            rasterization: RasterizationState::CULL_NONE,
            ..Self::default()
        }
    }

    /// Blob shadow: no depth test, `dst *= (1 - src)`, clockwise culling
    /// for the counter-clockwise authored quad
    pub fn blob_shadow() -> Self {
        Self {
            blend: ColorBlendState::MULTIPLY_INVERSE_SOURCE,
            depth_stencil: DepthStencilState::DEPTH_NONE,
            rasterization: RasterizationState::CULL_CLOCKWISE,
            sampler: SamplerState::LINEAR_CLAMP,
            alpha_test: None,
        }
    }

    /// Billboard: default depth, alpha blend, no culling, and an alpha
    /// cutout at `alpha_reference`. Blend and cutout are both active.
    pub fn billboard(alpha_reference: u8) -> Self {
        Self {
            blend: ColorBlendState::ALPHA_BLEND,
            depth_stencil: DepthStencilState::DEPTH_DEFAULT,
            rasterization: RasterizationState::CULL_NONE,
            sampler: SamplerState::LINEAR_CLAMP,
            alpha_test: Some(AlphaTestState::new(CompareOp::Greater, alpha_reference)),
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
