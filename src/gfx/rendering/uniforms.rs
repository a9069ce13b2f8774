//! GPU uniform layouts
//!
//! The CPU mirrors of the uniform structs in `shader.wgsl`. Field order,
//! padding, and sizes MUST match the WGSL declarations exactly.

use crate::gfx::lighting::{LightSource, MAX_LIGHTS};
use crate::gfx::resources::MaterialPreset;

/// Per-frame camera data (bind group 0, binding 0)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    /// Camera position (homogeneous coordinates)
    pub view_position: [f32; 4],
    /// Camera view-projection matrix
    pub view_proj: [[f32; 4]; 4],
}

impl Default for FrameUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0, 0.0, 0.0, 1.0],
            view_proj: cgmath::Matrix4::from_scale(1.0f32).into(),
        }
    }
}

/// One light source in std140-compatible layout
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    pub focal_strength: f32,
    pub ambient_color: [f32; 3],
    pub specular_intensity: f32,
    pub diffuse_color: [f32; 3],
    pub _pad0: f32,
    pub specular_color: [f32; 3],
    pub _pad1: f32,
}

impl From<&LightSource> for LightUniform {
    fn from(light: &LightSource) -> Self {
        Self {
            position: light.position,
            focal_strength: light.focal_strength,
            ambient_color: light.ambient_color,
            specular_intensity: light.specular_intensity,
            diffuse_color: light.diffuse_color,
            _pad0: 0.0,
            specular_color: light.specular_color,
            _pad1: 0.0,
        }
    }
}

/// All light state for the scene (bind group 0, binding 1)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub lights: [LightUniform; MAX_LIGHTS],
    /// Number of valid entries in `lights`
    pub count: u32,
    /// Non-zero when lighting is applied at all
    pub enabled: u32,
    pub _pad: [u32; 2],
}

/// Per-draw state snapshotted at draw time (bind group 1, binding 0,
/// dynamic offset)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub model: [[f32; 4]; 4],
    /// Color used when texturing is disabled
    pub flat_color: [f32; 4],
    pub ambient_color: [f32; 3],
    pub ambient_strength: f32,
    pub diffuse_color: [f32; 3],
    pub shininess: f32,
    pub specular_color: [f32; 3],
    /// Non-zero when the bound texture should be sampled
    pub use_texture: u32,
    pub uv_scale: [f32; 2],
    pub _pad: [f32; 2],
}

impl Default for DrawUniform {
    fn default() -> Self {
        Self {
            model: cgmath::Matrix4::from_scale(1.0f32).into(),
            flat_color: [1.0, 1.0, 1.0, 1.0],
            ambient_color: [1.0, 1.0, 1.0],
            ambient_strength: 1.0,
            diffuse_color: [1.0, 1.0, 1.0],
            shininess: 32.0,
            specular_color: [0.0, 0.0, 0.0],
            use_texture: 0,
            uv_scale: [1.0, 1.0],
            _pad: [0.0, 0.0],
        }
    }
}

impl DrawUniform {
    /// Copy all five material fields from a preset
    pub fn apply_material(&mut self, preset: &MaterialPreset) {
        self.ambient_color = preset.ambient_color;
        self.ambient_strength = preset.ambient_strength;
        self.diffuse_color = preset.diffuse_color;
        self.specular_color = preset.specular_color;
        self.shininess = preset.shininess;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sizes_match_the_wgsl_layout() {
        assert_eq!(std::mem::size_of::<FrameUniform>(), 80);
        assert_eq!(std::mem::size_of::<LightUniform>(), 64);
        assert_eq!(std::mem::size_of::<LightsUniform>(), 64 * MAX_LIGHTS + 16);
        assert_eq!(std::mem::size_of::<DrawUniform>(), 144);
    }
}
