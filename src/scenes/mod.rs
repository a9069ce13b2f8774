//! # Ready-Made Scenes
//!
//! Scene definitions shipped with the library. Each submodule builds a
//! complete [`SceneDefinition`] from plain data so the composer, registry,
//! and material table can be exercised without authoring content first.
//!
//! [`SceneDefinition`]: crate::gfx::scene::SceneDefinition

pub mod desk;
