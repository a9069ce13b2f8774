//! # Procedural Geometry Generation
//!
//! This module provides functions to generate the basic 3D primitive shapes
//! the scene composer draws, eliminating the need for external model files.
//!
//! ## Supported Primitives
//!
//! - **Plane**: Flat rectangle in the XZ plane
//! - **Box**: Unit cube centered at the origin
//! - **Cylinder**: Capped cylinder with its base at the origin
//! - **Torus**: Ring in the XY plane
//!
//! Every shape is generated with outward normals and texture coordinates,
//! sized so that non-uniform scaling in a model matrix produces the final
//! object dimensions.

pub mod primitives;

pub use primitives::*;

/// The reusable mesh shapes a scene can draw
///
/// Each kind is loaded once into GPU memory and drawn any number of times
/// with different transforms and materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Plane,
    Box,
    Cylinder,
    Torus,
}

impl PrimitiveKind {
    /// All primitive kinds, in a fixed order
    pub const ALL: [PrimitiveKind; 4] = [
        PrimitiveKind::Plane,
        PrimitiveKind::Box,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Torus,
    ];

    /// Display name used in logs and resource labels
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Plane => "plane",
            PrimitiveKind::Box => "box",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Torus => "torus",
        }
    }

    /// Generate the geometry for this primitive at its default resolution
    pub fn generate(&self) -> GeometryData {
        match self {
            PrimitiveKind::Plane => generate_plane(2.0, 2.0),
            PrimitiveKind::Box => generate_box(),
            PrimitiveKind::Cylinder => generate_cylinder(36),
            PrimitiveKind::Torus => generate_torus(48, 24),
        }
    }
}

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
