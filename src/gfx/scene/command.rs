//! Data model for scene content
//!
//! A scene is described entirely by data: which texture files to load under
//! which tags, which material presets exist, which lights shine, and the
//! ordered draw commands that place primitives in the world. Keeping the
//! content in data keeps the composer itself free of any scene-specific
//! code.

use std::path::PathBuf;

use crate::gfx::geometry::PrimitiveKind;
use crate::gfx::lighting::LightSource;
use crate::gfx::resources::MaterialPreset;
use crate::gfx::transform::Transform;

/// How a draw call colors its surface
///
/// Texturing and flat color are mutually exclusive per draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    /// Sample the texture registered under this tag
    Textured(String),
    /// Render with a flat RGBA color, sampling disabled
    Flat([f32; 4]),
}

/// One rendered object
///
/// Placement, surface state, and the primitive to draw. Commands carry no
/// identity and retain no state between frames; the scene is an ordered
/// replay of these once per frame.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub transform: Transform,
    /// Material preset tag; `None` skips material binding
    pub material: Option<String>,
    pub surface: Surface,
    /// Texture coordinate tiling, when it differs from 1:1
    pub uv_scale: Option<[f32; 2]>,
    pub primitive: PrimitiveKind,
}

impl DrawCommand {
    /// A textured draw bound to a material preset
    pub fn textured(
        primitive: PrimitiveKind,
        transform: Transform,
        material: &str,
        texture: &str,
    ) -> Self {
        Self {
            transform,
            material: Some(material.to_string()),
            surface: Surface::Textured(texture.to_string()),
            uv_scale: None,
            primitive,
        }
    }

    /// A flat-colored draw bound to a material preset
    pub fn flat(
        primitive: PrimitiveKind,
        transform: Transform,
        material: &str,
        color: [f32; 4],
    ) -> Self {
        Self {
            transform,
            material: Some(material.to_string()),
            surface: Surface::Flat(color),
            uv_scale: None,
            primitive,
        }
    }

    /// Override the texture coordinate tiling
    pub fn with_uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Some([u, v]);
        self
    }
}

/// A texture image on disk and the tag it is registered under
#[derive(Debug, Clone)]
pub struct TextureAsset {
    pub path: PathBuf,
    pub tag: String,
}

impl TextureAsset {
    pub fn new(path: impl Into<PathBuf>, tag: &str) -> Self {
        Self {
            path: path.into(),
            tag: tag.to_string(),
        }
    }
}

/// Complete data description of a renderable scene
#[derive(Debug, Clone, Default)]
pub struct SceneDefinition {
    pub textures: Vec<TextureAsset>,
    pub materials: Vec<MaterialPreset>,
    pub lights: Vec<LightSource>,
    pub commands: Vec<DrawCommand>,
}

impl SceneDefinition {
    /// Distinct primitive kinds referenced by the commands, in first-use order
    ///
    /// This is the set of meshes that must be loaded (each exactly once)
    /// before the scene can be drawn.
    pub fn primitives(&self) -> Vec<PrimitiveKind> {
        let mut kinds = Vec::new();
        for command in &self.commands {
            if !kinds.contains(&command.primitive) {
                kinds.push(command.primitive);
            }
        }
        kinds
    }
}
