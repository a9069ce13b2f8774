//! Material preset table
//!
//! A fixed set of named Phong material presets defined during scene
//! preparation and looked up by tag before each draw. Presets are
//! immutable once defined.

use std::collections::HashMap;

/// Surface properties pushed into the shader per draw call
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialPreset {
    /// Lookup tag
    pub tag: String,
    /// Ambient reflectance color
    pub ambient_color: [f32; 3],
    /// Scalar applied to the ambient term
    pub ambient_strength: f32,
    /// Diffuse reflectance color
    pub diffuse_color: [f32; 3],
    /// Specular reflectance color
    pub specular_color: [f32; 3],
    /// Specular exponent
    pub shininess: f32,
}

/// Tag-indexed table of material presets
///
/// The first preset defined under a tag wins; redefining a tag logs a
/// warning and keeps the original, so later duplicates can never shadow
/// the preset draws already reference.
#[derive(Debug, Default)]
pub struct MaterialTable {
    presets: HashMap<String, MaterialPreset>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a preset; keeps the existing one on tag collision
    pub fn define(&mut self, preset: MaterialPreset) {
        if self.presets.contains_key(&preset.tag) {
            log::warn!(
                "material \"{}\" is already defined, keeping the first definition",
                preset.tag
            );
            return;
        }
        self.presets.insert(preset.tag.clone(), preset);
    }

    /// Look up a preset by tag
    ///
    /// A miss is a soft failure: callers skip material binding for the
    /// affected draw rather than treating it as an error.
    pub fn find(&self, tag: &str) -> Option<&MaterialPreset> {
        self.presets.get(tag)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(tag: &str, shininess: f32) -> MaterialPreset {
        MaterialPreset {
            tag: tag.to_string(),
            ambient_color: [0.1, 0.1, 0.1],
            ambient_strength: 0.2,
            diffuse_color: [0.7, 0.7, 0.7],
            specular_color: [0.5, 0.5, 0.5],
            shininess,
        }
    }

    #[test]
    fn define_and_find_round_trip() {
        let mut table = MaterialTable::new();
        table.define(preset("wood", 25.0));
        table.define(preset("metal", 80.0));

        assert_eq!(table.find("wood").unwrap().shininess, 25.0);
        assert_eq!(table.find("metal").unwrap().shininess, 80.0);
    }

    #[test]
    fn missing_tag_returns_none() {
        let table = MaterialTable::new();
        assert!(table.find("wood").is_none());
    }

    #[test]
    fn first_definition_wins_on_duplicate_tags() {
        let mut table = MaterialTable::new();
        table.define(preset("wood", 25.0));
        table.define(preset("wood", 99.0));

        assert_eq!(table.len(), 1);
        assert_eq!(table.find("wood").unwrap().shininess, 25.0);
    }
}
