//! The scene composer
//!
//! [`Scene`] owns the texture registry, the material table, and the light
//! list, and drives a graphics backend through the per-draw state setters.
//! Setters are stateless with respect to each other; each push lasts until
//! overwritten, so callers order them transform, material, texture-or-color
//! before every draw.

use std::path::Path;

use crate::gfx::backend::{MeshLibrary, RenderBackend, ShaderInterface, TextureUnits};
use crate::gfx::geometry::PrimitiveKind;
use crate::gfx::lighting::{LightSource, MAX_LIGHTS};
use crate::gfx::resources::{ImageData, MaterialPreset, MaterialTable, TextureRegistry};
use crate::gfx::transform::Transform;

use super::command::{DrawCommand, SceneDefinition, Surface};

/// Color pushed when a draw references a texture tag that never resolved
const UNRESOLVED_TEXTURE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Owns scene resources and replays the draw-command list
///
/// Populated once by [`prepare`](Self::prepare) and read-only afterwards;
/// every frame re-issues the full command sequence through the backend.
#[derive(Default)]
pub struct Scene {
    textures: TextureRegistry,
    materials: MaterialTable,
    lights: Vec<LightSource>,
    commands: Vec<DrawCommand>,
    loaded_meshes: Vec<PrimitiveKind>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load resources and take ownership of a scene description
    ///
    /// Loads every texture (a failed load is reported and skipped, later
    /// loads still run), binds the loaded textures to their slots, defines
    /// the material presets, configures the lights, and loads each distinct
    /// primitive mesh exactly once.
    ///
    /// Returns `false` when at least one texture failed to load; the scene
    /// is still renderable, with the affected tags unresolved.
    pub fn prepare<B: RenderBackend>(
        &mut self,
        backend: &mut B,
        definition: SceneDefinition,
    ) -> bool {
        let SceneDefinition {
            textures,
            materials,
            lights,
            commands,
        } = definition;

        let mut all_loaded = true;
        for asset in &textures {
            all_loaded &= self.load_texture(backend, &asset.path, &asset.tag);
        }
        self.bind_textures(backend);

        for preset in materials {
            self.define_material(preset);
        }

        for light in lights {
            self.add_light(light);
        }
        self.configure_lights(backend);

        self.commands = commands;
        for kind in self.distinct_primitives() {
            self.load_mesh(backend, kind);
        }

        all_loaded
    }

    /// Decode an image file, upload it, and register it under a tag
    ///
    /// Returns `false` and logs on failure; the registry is unchanged and
    /// subsequent loads are unaffected.
    pub fn load_texture<B: TextureUnits>(
        &mut self,
        backend: &mut B,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> bool {
        let path = path.as_ref();

        let image = match ImageData::load(path) {
            Ok(image) => image,
            Err(err) => {
                log::error!("{err}");
                return false;
            }
        };

        let handle = match backend.upload_texture(&image, tag) {
            Ok(handle) => handle,
            Err(err) => {
                log::error!("could not upload texture \"{tag}\": {err}");
                return false;
            }
        };

        match self.textures.register(tag, handle) {
            Ok(slot) => {
                log::info!(
                    "loaded texture \"{tag}\" from {} ({}x{}, {} channels) into slot {slot}",
                    path.display(),
                    image.width,
                    image.height,
                    image.source_channels
                );
                true
            }
            Err(err) => {
                log::error!("could not register texture \"{tag}\": {err}");
                backend.release_texture(handle);
                false
            }
        }
    }

    /// Bind every registered texture to the unit matching its slot
    pub fn bind_textures<B: TextureUnits>(&self, backend: &mut B) {
        self.textures.bind_all(backend);
    }

    /// Add a material preset to the table
    pub fn define_material(&mut self, preset: MaterialPreset) {
        self.materials.define(preset);
    }

    /// Add a light source, up to [`MAX_LIGHTS`]
    pub fn add_light(&mut self, light: LightSource) -> bool {
        if self.lights.len() >= MAX_LIGHTS {
            log::warn!("ignoring light source beyond the maximum of {MAX_LIGHTS}");
            return false;
        }
        self.lights.push(light);
        true
    }

    /// Push lighting state for all configured lights
    pub fn configure_lights<B: ShaderInterface>(&self, backend: &mut B) {
        backend.set_lighting_enabled(!self.lights.is_empty());
        for (index, light) in self.lights.iter().enumerate() {
            backend.set_light(index, light);
        }
    }

    /// Compose and push the model matrix for the next draw
    pub fn set_transform<B: ShaderInterface>(&self, backend: &mut B, transform: &Transform) {
        backend.set_model_matrix(transform.matrix());
    }

    /// Resolve a material tag and push its fields
    ///
    /// An unresolved tag skips the binding; the draw keeps whatever
    /// material state is already current.
    pub fn set_material<B: ShaderInterface>(&self, backend: &mut B, tag: &str) {
        match self.materials.find(tag) {
            Some(preset) => backend.set_material(preset),
            None => log::warn!("material \"{tag}\" is not defined, skipping binding"),
        }
    }

    /// Resolve a texture tag and enable sampling from its slot
    ///
    /// An unresolved tag must not poison the draw: sampling is disabled
    /// and the draw falls back to flat white instead.
    pub fn set_texture<B: ShaderInterface>(&self, backend: &mut B, tag: &str) {
        match self.textures.slot(tag) {
            Some(slot) => backend.set_texture_slot(slot),
            None => {
                log::warn!("texture \"{tag}\" is not registered, drawing untextured");
                backend.set_flat_color(UNRESOLVED_TEXTURE_COLOR);
            }
        }
    }

    /// Push a flat color and disable sampling for the next draw
    pub fn set_flat_color<B: ShaderInterface>(&self, backend: &mut B, color: [f32; 4]) {
        backend.set_flat_color(color);
    }

    /// Push the texture coordinate tiling factor
    pub fn set_uv_scale<B: ShaderInterface>(&self, backend: &mut B, u: f32, v: f32) {
        backend.set_uv_scale(u, v);
    }

    /// Replay the full draw-command list
    pub fn render<B: RenderBackend>(&self, backend: &mut B) {
        for command in &self.commands {
            self.set_transform(backend, &command.transform);

            if let Some(tag) = &command.material {
                self.set_material(backend, tag);
            }

            match &command.surface {
                Surface::Textured(tag) => self.set_texture(backend, tag),
                Surface::Flat(color) => self.set_flat_color(backend, *color),
            }

            if let Some([u, v]) = command.uv_scale {
                self.set_uv_scale(backend, u, v);
            }

            backend.draw_mesh(command.primitive);
        }
    }

    /// Release every texture handle held by the registry
    pub fn teardown<B: TextureUnits>(&mut self, backend: &mut B) {
        self.textures.release_all(backend);
    }

    /// The ordered draw commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The texture registry
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// The material table
    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// The configured lights
    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    fn distinct_primitives(&self) -> Vec<PrimitiveKind> {
        let mut kinds = Vec::new();
        for command in &self.commands {
            if !kinds.contains(&command.primitive) {
                kinds.push(command.primitive);
            }
        }
        kinds
    }

    fn load_mesh<B: MeshLibrary>(&mut self, backend: &mut B, kind: PrimitiveKind) {
        if self.loaded_meshes.contains(&kind) {
            return;
        }
        backend.load_mesh(kind);
        self.loaded_meshes.push(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::backend::TextureHandle;
    use crate::gfx::resources::TextureError;
    use cgmath::Matrix4;
    use std::fs;
    use std::path::PathBuf;

    use crate::gfx::scene::command::TextureAsset;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Model(Matrix4<f32>),
        FlatColor([f32; 4]),
        TextureSlot(u32),
        UvScale(f32, f32),
        Material(String),
        LightingEnabled(bool),
        Light(usize),
        Upload(String),
        Bind(u32, TextureHandle),
        Release(TextureHandle),
        LoadMesh(PrimitiveKind),
        DrawMesh(PrimitiveKind),
    }

    /// Backend double recording every call in order
    #[derive(Default)]
    struct RecordingBackend {
        events: Vec<Event>,
        next_handle: u32,
    }

    impl ShaderInterface for RecordingBackend {
        fn set_model_matrix(&mut self, model: Matrix4<f32>) {
            self.events.push(Event::Model(model));
        }
        fn set_flat_color(&mut self, color: [f32; 4]) {
            self.events.push(Event::FlatColor(color));
        }
        fn set_texture_slot(&mut self, slot: u32) {
            self.events.push(Event::TextureSlot(slot));
        }
        fn set_uv_scale(&mut self, u: f32, v: f32) {
            self.events.push(Event::UvScale(u, v));
        }
        fn set_material(&mut self, preset: &MaterialPreset) {
            self.events.push(Event::Material(preset.tag.clone()));
        }
        fn set_lighting_enabled(&mut self, enabled: bool) {
            self.events.push(Event::LightingEnabled(enabled));
        }
        fn set_light(&mut self, index: usize, _light: &LightSource) {
            self.events.push(Event::Light(index));
        }
    }

    impl TextureUnits for RecordingBackend {
        fn upload_texture(
            &mut self,
            _image: &ImageData,
            label: &str,
        ) -> Result<TextureHandle, TextureError> {
            let handle = TextureHandle(self.next_handle);
            self.next_handle += 1;
            self.events.push(Event::Upload(label.to_string()));
            Ok(handle)
        }
        fn bind_texture(&mut self, slot: u32, handle: TextureHandle) {
            self.events.push(Event::Bind(slot, handle));
        }
        fn release_texture(&mut self, handle: TextureHandle) {
            self.events.push(Event::Release(handle));
        }
    }

    impl MeshLibrary for RecordingBackend {
        fn load_mesh(&mut self, kind: PrimitiveKind) {
            self.events.push(Event::LoadMesh(kind));
        }
        fn draw_mesh(&mut self, kind: PrimitiveKind) {
            self.events.push(Event::DrawMesh(kind));
        }
    }

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bureau_scene_test_{name}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::new(2, 2).save(&path).unwrap();
        path
    }

    fn preset(tag: &str) -> MaterialPreset {
        MaterialPreset {
            tag: tag.to_string(),
            ambient_color: [0.2, 0.1, 0.1],
            ambient_strength: 0.3,
            diffuse_color: [0.6, 0.4, 0.2],
            specular_color: [0.1, 0.1, 0.1],
            shininess: 25.0,
        }
    }

    #[test]
    fn render_orders_state_before_each_draw() {
        let mut backend = RecordingBackend::default();
        let mut scene = Scene::new();

        let transform = Transform::new([2.0, 1.0, 1.0], [0.0, 90.0, 0.0], [1.0, 0.0, 0.0]);
        let definition = SceneDefinition {
            materials: vec![preset("wood")],
            commands: vec![
                DrawCommand::flat(PrimitiveKind::Box, transform, "wood", [0.5, 0.5, 0.5, 1.0])
                    .with_uv_scale(2.0, 3.0),
            ],
            ..Default::default()
        };
        scene.prepare(&mut backend, definition);

        backend.events.clear();
        scene.render(&mut backend);

        assert_eq!(
            backend.events,
            vec![
                Event::Model(transform.matrix()),
                Event::Material("wood".to_string()),
                Event::FlatColor([0.5, 0.5, 0.5, 1.0]),
                Event::UvScale(2.0, 3.0),
                Event::DrawMesh(PrimitiveKind::Box),
            ]
        );
    }

    #[test]
    fn unresolved_texture_draws_untextured_and_later_draws_recover() {
        let dir = test_dir("miss_recovery");
        let wood = write_png(&dir, "wood.png");

        let mut backend = RecordingBackend::default();
        let mut scene = Scene::new();
        let definition = SceneDefinition {
            textures: vec![TextureAsset::new(wood, "wood")],
            materials: vec![preset("wood")],
            commands: vec![
                DrawCommand::textured(
                    PrimitiveKind::Box,
                    Transform::default(),
                    "wood",
                    "granite",
                ),
                DrawCommand::textured(PrimitiveKind::Box, Transform::default(), "wood", "wood"),
            ],
            ..Default::default()
        };
        scene.prepare(&mut backend, definition);

        backend.events.clear();
        scene.render(&mut backend);

        // The miss disables sampling instead of pushing a bogus slot.
        assert!(backend.events.contains(&Event::FlatColor([1.0, 1.0, 1.0, 1.0])));
        assert!(!backend.events.contains(&Event::TextureSlot(u32::MAX)));

        // The following draw still binds its resolved slot.
        let slot_position = backend
            .events
            .iter()
            .position(|event| *event == Event::TextureSlot(0))
            .expect("second draw should bind slot 0");
        let draws: Vec<usize> = backend
            .events
            .iter()
            .enumerate()
            .filter(|(_, event)| matches!(event, Event::DrawMesh(_)))
            .map(|(index, _)| index)
            .collect();
        assert_eq!(draws.len(), 2);
        assert!(slot_position > draws[0] && slot_position < draws[1]);
    }

    #[test]
    fn failed_load_does_not_block_later_loads() {
        let dir = test_dir("partial_failure");
        let first = write_png(&dir, "first.png");
        let broken = dir.join("broken.png");
        fs::write(&broken, b"definitely not a png").unwrap();
        let third = write_png(&dir, "third.png");

        let mut backend = RecordingBackend::default();
        let mut scene = Scene::new();
        let definition = SceneDefinition {
            textures: vec![
                TextureAsset::new(first, "first"),
                TextureAsset::new(broken, "broken"),
                TextureAsset::new(third, "third"),
            ],
            ..Default::default()
        };

        let all_loaded = scene.prepare(&mut backend, definition);

        assert!(!all_loaded);
        assert_eq!(scene.textures().slot("first"), Some(0));
        assert_eq!(scene.textures().slot("broken"), None);
        assert_eq!(scene.textures().slot("third"), Some(1));

        // Both surviving textures were bound to their slots in order.
        assert!(backend.events.contains(&Event::Bind(0, TextureHandle(0))));
        assert!(backend.events.contains(&Event::Bind(1, TextureHandle(1))));
    }

    #[test]
    fn meshes_load_exactly_once_per_kind() {
        let mut backend = RecordingBackend::default();
        let mut scene = Scene::new();
        let definition = SceneDefinition {
            commands: vec![
                DrawCommand::flat(PrimitiveKind::Plane, Transform::default(), "m", [1.0; 4]),
                DrawCommand::flat(PrimitiveKind::Plane, Transform::default(), "m", [1.0; 4]),
                DrawCommand::flat(PrimitiveKind::Cylinder, Transform::default(), "m", [1.0; 4]),
                DrawCommand::flat(PrimitiveKind::Plane, Transform::default(), "m", [1.0; 4]),
            ],
            ..Default::default()
        };
        scene.prepare(&mut backend, definition);

        let loads: Vec<&Event> = backend
            .events
            .iter()
            .filter(|event| matches!(event, Event::LoadMesh(_)))
            .collect();
        assert_eq!(
            loads,
            vec![
                &Event::LoadMesh(PrimitiveKind::Plane),
                &Event::LoadMesh(PrimitiveKind::Cylinder),
            ]
        );
    }

    #[test]
    fn lights_configure_up_to_the_maximum() {
        let mut backend = RecordingBackend::default();
        let mut scene = Scene::new();
        let definition = SceneDefinition {
            lights: vec![LightSource::default(); 6],
            ..Default::default()
        };
        scene.prepare(&mut backend, definition);

        assert_eq!(scene.lights().len(), MAX_LIGHTS);
        assert!(backend.events.contains(&Event::LightingEnabled(true)));
        let light_events: Vec<&Event> = backend
            .events
            .iter()
            .filter(|event| matches!(event, Event::Light(_)))
            .collect();
        assert_eq!(light_events.len(), MAX_LIGHTS);
    }

    #[test]
    fn lighting_stays_disabled_without_lights() {
        let mut backend = RecordingBackend::default();
        let mut scene = Scene::new();
        scene.prepare(&mut backend, SceneDefinition::default());

        assert!(backend.events.contains(&Event::LightingEnabled(false)));
    }

    #[test]
    fn material_miss_skips_binding_but_still_draws() {
        let mut backend = RecordingBackend::default();
        let mut scene = Scene::new();
        let definition = SceneDefinition {
            commands: vec![DrawCommand::flat(
                PrimitiveKind::Torus,
                Transform::default(),
                "unknown",
                [1.0; 4],
            )],
            ..Default::default()
        };
        scene.prepare(&mut backend, definition);

        backend.events.clear();
        scene.render(&mut backend);

        assert!(!backend
            .events
            .iter()
            .any(|event| matches!(event, Event::Material(_))));
        assert!(backend.events.contains(&Event::DrawMesh(PrimitiveKind::Torus)));
    }

    #[test]
    fn teardown_releases_every_texture() {
        let dir = test_dir("teardown");
        let wood = write_png(&dir, "wood.png");
        let metal = write_png(&dir, "metal.png");

        let mut backend = RecordingBackend::default();
        let mut scene = Scene::new();
        let definition = SceneDefinition {
            textures: vec![
                TextureAsset::new(wood, "wood"),
                TextureAsset::new(metal, "metal"),
            ],
            ..Default::default()
        };
        scene.prepare(&mut backend, definition);

        backend.events.clear();
        scene.teardown(&mut backend);

        assert_eq!(
            backend.events,
            vec![
                Event::Release(TextureHandle(0)),
                Event::Release(TextureHandle(1)),
            ]
        );
        assert!(scene.textures().is_empty());
    }
}
