//! Geometry for the sample scene.
//!
//! Vertex layouts are `#[repr(C)]` and `Pod` so backends can upload them
//! as raw bytes. The procedural meshes here (shadow quad, billboard quad,
//! open box, grid) are rebuilt on the CPU; named meshes such as the gimbal
//! rings are loaded through an `AssetProvider` instead.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

// ============================================================================
// TOPOLOGY
// ============================================================================

/// Primitive topology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list (every 3 vertices = 1 triangle)
    TriangleList,
    /// Line list (every 2 vertices = 1 line)
    LineList,
}

// ============================================================================
// VERTEX LAYOUTS
// ============================================================================

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PositionColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PositionTextureVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PositionNormalVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Vertex data of one of the supported layouts
#[derive(Debug, Clone, PartialEq)]
pub enum Vertices {
    PositionColor(Vec<PositionColorVertex>),
    PositionTexture(Vec<PositionTextureVertex>),
    PositionNormal(Vec<PositionNormalVertex>),
}

impl Vertices {
    pub fn len(&self) -> usize {
        match self {
            Vertices::PositionColor(v) => v.len(),
            Vertices::PositionTexture(v) => v.len(),
            Vertices::PositionNormal(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw bytes ready for upload
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Vertices::PositionColor(v) => bytemuck::cast_slice(v),
            Vertices::PositionTexture(v) => bytemuck::cast_slice(v),
            Vertices::PositionNormal(v) => bytemuck::cast_slice(v),
        }
    }
}

// ============================================================================
// MESH DATA
// ============================================================================

/// CPU-side mesh, drawn as-is by the backend
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub topology: PrimitiveTopology,
    pub vertices: Vertices,
    /// Empty for non-indexed geometry
    pub indices: Vec<u16>,
}

impl MeshData {
    /// Number of primitives (triangles or lines) the mesh produces
    pub fn primitive_count(&self) -> usize {
        let count = if self.indices.is_empty() {
            self.vertices.len()
        } else {
            self.indices.len()
        };
        match self.topology {
            PrimitiveTopology::TriangleList => count / 3,
            PrimitiveTopology::LineList => count / 2,
        }
    }
}

// ============================================================================
// PROCEDURAL MESHES
// ============================================================================

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

/// Unit quad on the XZ plane centred at the origin, every vertex colored
/// `color`. Wound counter-clockwise when seen from above.
pub fn shadow_quad(color: Vec4) -> MeshData {
    let color = color.to_array();
    let corners = [
        [-0.5, 0.0, 0.5],
        [0.5, 0.0, 0.5],
        [0.5, 0.0, -0.5],
        [-0.5, 0.0, -0.5],
    ];
    MeshData {
        topology: PrimitiveTopology::TriangleList,
        vertices: Vertices::PositionColor(
            corners
                .iter()
                .map(|&position| PositionColorVertex { position, color })
                .collect(),
        ),
        indices: QUAD_INDICES.to_vec(),
    }
}

/// Unit quad on the XY plane centred at the origin, for billboards
pub fn billboard_quad() -> MeshData {
    let corners = [
        ([-0.5, 0.5, 0.0], [0.0, 0.0]),
        ([0.5, 0.5, 0.0], [1.0, 0.0]),
        ([0.5, -0.5, 0.0], [1.0, 1.0]),
        ([-0.5, -0.5, 0.0], [0.0, 1.0]),
    ];
    MeshData {
        topology: PrimitiveTopology::TriangleList,
        vertices: Vertices::PositionTexture(
            corners
                .iter()
                .map(|&(position, uv)| PositionTextureVertex { position, uv })
                .collect(),
        ),
        indices: QUAD_INDICES.to_vec(),
    }
}

/// Open box: four side faces of the [-1, 1] cube with outward normals
/// (+Z, -Z, +X, -X). Top and bottom are left open.
pub fn open_box() -> MeshData {
    let faces: [([[f32; 3]; 4], [f32; 3]); 4] = [
        (
            [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
            [0.0, 0.0, 1.0],
        ),
        (
            [[1.0, 1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0]],
            [0.0, 0.0, -1.0],
        ),
        (
            [[1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0]],
            [1.0, 0.0, 0.0],
        ),
        (
            [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0]],
            [-1.0, 0.0, 0.0],
        ),
    ];

    let mut vertices = Vec::with_capacity(16);
    let mut indices = Vec::with_capacity(24);
    for (face, (corners, normal)) in faces.iter().enumerate() {
        let base = (face * 4) as u16;
        vertices.extend(
            corners
                .iter()
                .map(|&position| PositionNormalVertex { position, normal: *normal }),
        );
        indices.extend(QUAD_INDICES.iter().map(|i| base + i));
    }

    MeshData {
        topology: PrimitiveTopology::TriangleList,
        vertices: Vertices::PositionNormal(vertices),
        indices,
    }
}

/// Line grid on the y = 0 plane spanning `[-half_extent, half_extent]` on
/// X and Z with `divisions` cells per side.
pub fn grid(half_extent: f32, divisions: u32, color: Vec4) -> MeshData {
    let divisions = divisions.max(1);
    let color = color.to_array();
    let step = 2.0 * half_extent / divisions as f32;

    let mut vertices = Vec::with_capacity(4 * (divisions as usize + 1));
    for i in 0..=divisions {
        let offset = -half_extent + i as f32 * step;
        // Line parallel to Z
        vertices.push(PositionColorVertex { position: [offset, 0.0, -half_extent], color });
        vertices.push(PositionColorVertex { position: [offset, 0.0, half_extent], color });
        // Line parallel to X
        vertices.push(PositionColorVertex { position: [-half_extent, 0.0, offset], color });
        vertices.push(PositionColorVertex { position: [half_extent, 0.0, offset], color });
    }

    MeshData {
        topology: PrimitiveTopology::LineList,
        vertices: Vertices::PositionColor(vertices),
        indices: Vec::new(),
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
