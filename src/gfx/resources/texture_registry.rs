//! Tagged texture registry
//!
//! Associates string tags with backend texture handles and texture-unit
//! slots. Slots are assigned in registration order: the i-th registered
//! texture samples from unit i after [`TextureRegistry::bind_all`].

use crate::gfx::backend::{TextureHandle, TextureUnits};

use super::TextureError;

/// Number of texture units the forward pipeline exposes
pub const MAX_TEXTURE_SLOTS: usize = 16;

#[derive(Debug, Clone)]
struct TextureEntry {
    tag: String,
    handle: TextureHandle,
}

/// Registration-ordered table of tagged textures
///
/// Lookups are linear scans; at 16 entries that is cheaper than hashing,
/// and the entry order doubles as the slot assignment.
#[derive(Debug)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    capacity: usize,
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureRegistry {
    /// Create a registry with the standard slot capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_TEXTURE_SLOTS)
    }

    /// Create a registry with a custom slot capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a texture under a tag, returning its assigned slot
    ///
    /// Fails when every slot is taken or the tag is already in use; both
    /// are authoring errors the caller reports and survives.
    pub fn register(&mut self, tag: &str, handle: TextureHandle) -> Result<u32, TextureError> {
        if self.entries.len() >= self.capacity {
            return Err(TextureError::NoFreeSlots {
                capacity: self.capacity,
            });
        }
        if self.slot(tag).is_some() {
            return Err(TextureError::DuplicateTag(tag.to_string()));
        }

        let slot = self.entries.len() as u32;
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            handle,
        });
        Ok(slot)
    }

    /// Look up the backend handle for a tag
    pub fn handle(&self, tag: &str) -> Option<TextureHandle> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| entry.handle)
    }

    /// Look up the texture-unit slot for a tag
    pub fn slot(&self, tag: &str) -> Option<u32> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|index| index as u32)
    }

    /// Bind every registered texture to the unit matching its slot
    ///
    /// Call once after all loads and before the first draw that samples
    /// by slot.
    pub fn bind_all<B: TextureUnits>(&self, backend: &mut B) {
        for (slot, entry) in self.entries.iter().enumerate() {
            backend.bind_texture(slot as u32, entry.handle);
        }
    }

    /// Release every handle through the backend and clear the registry
    pub fn release_all<B: TextureUnits>(&mut self, backend: &mut B) {
        for entry in self.entries.drain(..) {
            backend.release_texture(entry.handle);
        }
    }

    /// Registered tags in slot order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::resources::ImageData;

    /// Minimal backend double that records texture operations
    #[derive(Default)]
    struct UnitRecorder {
        next_handle: u32,
        bound: Vec<(u32, TextureHandle)>,
        released: Vec<TextureHandle>,
    }

    impl TextureUnits for UnitRecorder {
        fn upload_texture(
            &mut self,
            _image: &ImageData,
            _label: &str,
        ) -> Result<TextureHandle, TextureError> {
            let handle = TextureHandle(self.next_handle);
            self.next_handle += 1;
            Ok(handle)
        }

        fn bind_texture(&mut self, slot: u32, handle: TextureHandle) {
            self.bound.push((slot, handle));
        }

        fn release_texture(&mut self, handle: TextureHandle) {
            self.released.push(handle);
        }
    }

    #[test]
    fn register_and_look_up_round_trip() {
        let mut registry = TextureRegistry::new();
        let slot_a = registry.register("wood", TextureHandle(7)).unwrap();
        let slot_b = registry.register("metal", TextureHandle(9)).unwrap();

        assert_eq!(slot_a, 0);
        assert_eq!(slot_b, 1);
        assert_eq!(registry.handle("wood"), Some(TextureHandle(7)));
        assert_eq!(registry.slot("wood"), Some(0));
        assert_eq!(registry.handle("metal"), Some(TextureHandle(9)));
        assert_eq!(registry.slot("metal"), Some(1));
    }

    #[test]
    fn missing_tag_returns_none() {
        let mut registry = TextureRegistry::new();
        registry.register("wood", TextureHandle(1)).unwrap();

        assert_eq!(registry.handle("granite"), None);
        assert_eq!(registry.slot("granite"), None);
    }

    #[test]
    fn rejects_duplicate_tags() {
        let mut registry = TextureRegistry::new();
        registry.register("wood", TextureHandle(1)).unwrap();

        assert!(matches!(
            registry.register("wood", TextureHandle(2)),
            Err(TextureError::DuplicateTag(_))
        ));
        // The original entry is untouched.
        assert_eq!(registry.handle("wood"), Some(TextureHandle(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn rejects_registration_beyond_capacity() {
        let mut registry = TextureRegistry::with_capacity(2);
        registry.register("a", TextureHandle(0)).unwrap();
        registry.register("b", TextureHandle(1)).unwrap();
        assert!(registry.is_full());

        assert!(matches!(
            registry.register("c", TextureHandle(2)),
            Err(TextureError::NoFreeSlots { capacity: 2 })
        ));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.slot("c"), None);
    }

    #[test]
    fn bind_all_follows_registration_order() {
        let mut registry = TextureRegistry::new();
        let handles = [TextureHandle(5), TextureHandle(3), TextureHandle(8)];
        registry.register("first", handles[0]).unwrap();
        registry.register("second", handles[1]).unwrap();
        registry.register("third", handles[2]).unwrap();

        let mut backend = UnitRecorder::default();
        registry.bind_all(&mut backend);

        assert_eq!(
            backend.bound,
            vec![(0, handles[0]), (1, handles[1]), (2, handles[2])]
        );
    }

    #[test]
    fn release_all_frees_every_handle() {
        let mut registry = TextureRegistry::new();
        registry.register("a", TextureHandle(1)).unwrap();
        registry.register("b", TextureHandle(2)).unwrap();

        let mut backend = UnitRecorder::default();
        registry.release_all(&mut backend);

        assert_eq!(backend.released, vec![TextureHandle(1), TextureHandle(2)]);
        assert!(registry.is_empty());
    }
}
