//! # Static Light Sources
//!
//! Light configuration for the scene composer. Lights are defined once
//! during scene preparation and pushed write-only into the shader
//! interface; no per-frame light state is retained on the CPU side.

/// Maximum number of simultaneously active light sources
pub const MAX_LIGHTS: usize = 4;

/// A positional light with Phong-style color terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    /// World-space position
    pub position: [f32; 3],
    /// Ambient contribution color
    pub ambient_color: [f32; 3],
    /// Diffuse contribution color
    pub diffuse_color: [f32; 3],
    /// Specular contribution color
    pub specular_color: [f32; 3],
    /// Exponent shaping the specular falloff
    pub focal_strength: f32,
    /// Scalar applied to the specular term
    pub specular_intensity: f32,
}

impl Default for LightSource {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 0.0],
            ambient_color: [0.1, 0.1, 0.1],
            diffuse_color: [1.0, 1.0, 1.0],
            specular_color: [1.0, 1.0, 1.0],
            focal_strength: 32.0,
            specular_intensity: 1.0,
        }
    }
}
