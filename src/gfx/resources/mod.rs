//! # Resource Management
//!
//! CPU-side resource bookkeeping for the scene composer: decoded image
//! data, the tagged texture registry, and the material preset table.
//! GPU texture objects themselves live behind the backend traits; this
//! module only tracks tags, slots, and handles.

pub mod image_data;
pub mod material;
pub mod texture_registry;
pub mod texture_resource;

pub use image_data::ImageData;
pub use material::{MaterialPreset, MaterialTable};
pub use texture_registry::{TextureRegistry, MAX_TEXTURE_SLOTS};
pub use texture_resource::TextureResource;

use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of texture loading and registration
///
/// All of these are recoverable: a failed load leaves its tag unresolved
/// and scene preparation continues with the remaining assets.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("could not load image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {path:?} has {channels} channels, only 3 or 4 are supported")]
    UnsupportedChannels { path: PathBuf, channels: u8 },

    #[error("all {capacity} texture slots are in use")]
    NoFreeSlots { capacity: usize },

    #[error("texture tag \"{0}\" is already registered")]
    DuplicateTag(String),
}
