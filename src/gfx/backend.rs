//! # Graphics Backend Interfaces
//!
//! The scene composer drives the GPU exclusively through the traits in this
//! module. Uniform state is addressed by typed setter methods rather than
//! string names, so every uniform role the shaders understand is a method
//! here and nothing else can be set.
//!
//! All three traits are implemented by the same concrete renderer (they talk
//! to one graphics context), but they separate the concerns the composer
//! cares about: uniform state, texture units, and mesh primitives. Tests
//! substitute a recording double for the whole bundle.

use cgmath::Matrix4;

use crate::gfx::geometry::PrimitiveKind;
use crate::gfx::lighting::LightSource;
use crate::gfx::resources::{ImageData, MaterialPreset, TextureError};

/// Opaque identifier for a texture owned by the graphics backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Typed setters for the per-draw and per-scene uniform state
///
/// Every setter takes effect immediately and lasts until overwritten;
/// callers push transform, then material, then texture-or-color state
/// before each draw, matching immediate-mode rendering semantics.
pub trait ShaderInterface {
    /// Replace the current model matrix
    fn set_model_matrix(&mut self, model: Matrix4<f32>);

    /// Push a flat RGBA color and disable texture sampling for the next draw
    fn set_flat_color(&mut self, color: [f32; 4]);

    /// Enable texture sampling from the given texture unit for the next draw
    fn set_texture_slot(&mut self, slot: u32);

    /// Set the texture coordinate tiling factor
    fn set_uv_scale(&mut self, u: f32, v: f32);

    /// Push all five material fields
    fn set_material(&mut self, preset: &MaterialPreset);

    /// Toggle lighting for the whole scene
    fn set_lighting_enabled(&mut self, enabled: bool);

    /// Configure one of the light sources (index < [`MAX_LIGHTS`])
    ///
    /// [`MAX_LIGHTS`]: crate::gfx::lighting::MAX_LIGHTS
    fn set_light(&mut self, index: usize, light: &LightSource);
}

/// Texture creation, unit binding, and release
pub trait TextureUnits {
    /// Upload decoded image data, returning a handle owned by the backend
    fn upload_texture(
        &mut self,
        image: &ImageData,
        label: &str,
    ) -> Result<TextureHandle, TextureError>;

    /// Bind an uploaded texture to a texture unit for sampling
    fn bind_texture(&mut self, slot: u32, handle: TextureHandle);

    /// Release the GPU resources behind a handle
    fn release_texture(&mut self, handle: TextureHandle);
}

/// Load-once-draw-many access to the primitive mesh shapes
pub trait MeshLibrary {
    /// Create GPU buffers for a primitive; must be called exactly once per
    /// kind before any draw of that kind
    fn load_mesh(&mut self, kind: PrimitiveKind);

    /// Draw a previously loaded primitive with the current uniform state
    fn draw_mesh(&mut self, kind: PrimitiveKind);
}

/// The full graphics context the scene composer renders through
pub trait RenderBackend: ShaderInterface + TextureUnits + MeshLibrary {}

impl<T: ShaderInterface + TextureUnits + MeshLibrary> RenderBackend for T {}
