//! # Scene Composition
//!
//! This module contains the scene composer: the ordered list of draw
//! commands a scene consists of, and the [`Scene`] type that owns the
//! texture registry and material table and replays the commands through a
//! graphics backend once per frame.
//!
//! There is no scene graph and no retained per-object state; a scene is a
//! data description (a [`SceneDefinition`]) prepared once and replayed as a
//! flat sequence of transform / material / texture / draw calls.

pub mod command;
pub mod scene;

pub use command::{DrawCommand, SceneDefinition, Surface, TextureAsset};
pub use scene::Scene;
