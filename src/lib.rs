// src/lib.rs
//! Bureau 3D Scene Composer
//!
//! A fixed-function 3D scene composer built on wgpu and winit. Scenes are
//! described as data (texture assets, material presets, lights, and an
//! ordered list of draw commands over reusable mesh primitives) and
//! replayed through a stateless uniform interface once per frame.

pub mod app;
pub mod gfx;
pub mod scenes;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::ViewerApp;
pub use gfx::rendering::Camera;
pub use gfx::scene::{DrawCommand, Scene, SceneDefinition, Surface, TextureAsset};
pub use gfx::transform::Transform;

/// Creates a default viewer application instance
pub fn default() -> ViewerApp {
    ViewerApp::new()
}
