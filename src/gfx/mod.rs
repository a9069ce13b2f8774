//! # Graphics Module
//!
//! This module contains all graphics-related functionality for the bureau
//! scene composer: the transform and binding pipeline, resource registries,
//! the backend trait seam, and the wgpu forward renderer behind it.
//!
//! ## Architecture Overview
//!
//! - **Transform** ([`transform`]) - Model matrix composition for each draw
//! - **Backend** ([`backend`]) - Typed traits the composer renders through
//! - **Resources** ([`resources`]) - Texture registry, material table, image decoding
//! - **Geometry** ([`geometry`]) - Procedural primitive mesh generation
//! - **Lighting** ([`lighting`]) - Static light source configuration
//! - **Scene** ([`scene`]) - Draw commands and the per-frame replay
//! - **Rendering** ([`rendering`]) - wgpu implementation of the backend
//!
//! The composer never touches wgpu directly; everything it does goes
//! through the [`backend`] traits, which keeps the transform and binding
//! pipeline testable without a GPU.

pub mod backend;
pub mod geometry;
pub mod lighting;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use rendering::render_engine::RenderEngine;
pub use scene::Scene;
