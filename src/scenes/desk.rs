//! A home office desk scene
//!
//! A desk with a monitor, keyboard, mouse, mug on a dish, a drawer with
//! pens and a magazine, a shelf of books, and a computer tower underneath,
//! assembled from the four primitive shapes. All placement values are
//! authored by hand; the scene is a fixed table of draw commands replayed
//! in order every frame.

use std::path::Path;

use crate::gfx::geometry::PrimitiveKind::{Box, Cylinder, Plane, Torus};
use crate::gfx::lighting::LightSource;
use crate::gfx::resources::MaterialPreset;
use crate::gfx::scene::{DrawCommand, SceneDefinition, TextureAsset};
use crate::gfx::transform::Transform;

/// Build the complete desk scene
///
/// Texture files are resolved relative to `asset_dir`; a missing file
/// leaves its tag unresolved and the affected objects render untextured.
pub fn scene(asset_dir: impl AsRef<Path>) -> SceneDefinition {
    let dir = asset_dir.as_ref();

    SceneDefinition {
        textures: vec![
            TextureAsset::new(dir.join("wood.jpg"), "Wood"),
            TextureAsset::new(dir.join("metal.jpg"), "Metal"),
            TextureAsset::new(dir.join("magazine_cover.jpg"), "Magazine Cover"),
            TextureAsset::new(dir.join("black_metal.jpg"), "Black Metal"),
            TextureAsset::new(dir.join("white.jpg"), "White"),
        ],
        materials: materials(),
        lights: lights(),
        commands: commands(),
    }
}

fn materials() -> Vec<MaterialPreset> {
    vec![
        MaterialPreset {
            tag: "Paper".to_string(),
            ambient_color: [0.8, 0.8, 0.8],
            ambient_strength: 0.2,
            diffuse_color: [0.9, 0.9, 0.9],
            specular_color: [0.05, 0.05, 0.05],
            shininess: 10.0,
        },
        MaterialPreset {
            tag: "Wood".to_string(),
            ambient_color: [0.2, 0.1, 0.1],
            ambient_strength: 0.3,
            diffuse_color: [0.6, 0.4, 0.2],
            specular_color: [0.1, 0.1, 0.1],
            shininess: 25.0,
        },
        MaterialPreset {
            tag: "Plastic".to_string(),
            ambient_color: [0.1, 0.1, 0.1],
            ambient_strength: 0.1,
            diffuse_color: [0.7, 0.7, 0.7],
            specular_color: [0.6, 0.6, 0.6],
            shininess: 30.0,
        },
        MaterialPreset {
            tag: "Metal".to_string(),
            ambient_color: [0.1, 0.1, 0.1],
            ambient_strength: 0.1,
            diffuse_color: [0.7, 0.7, 0.7],
            specular_color: [1.0, 1.0, 1.0],
            shininess: 80.0,
        },
    ]
}

fn lights() -> Vec<LightSource> {
    vec![
        LightSource {
            position: [-3.0, 4.0, 6.0],
            ambient_color: [0.1, 0.1, 0.1],
            diffuse_color: [0.7, 0.7, 0.6],
            specular_color: [0.1, 0.1, 0.1],
            focal_strength: 15.0,
            specular_intensity: 0.1,
        },
        LightSource {
            position: [3.0, 4.0, 6.0],
            ambient_color: [0.1, 0.1, 0.1],
            diffuse_color: [0.7, 0.7, 0.6],
            specular_color: [0.1, 0.1, 0.1],
            focal_strength: 15.0,
            specular_intensity: 0.1,
        },
        LightSource {
            position: [0.0, 3.0, 20.0],
            ambient_color: [0.2, 0.2, 0.2],
            diffuse_color: [0.8, 0.8, 0.8],
            specular_color: [0.1, 0.1, 0.1],
            focal_strength: 12.0,
            specular_intensity: 0.1,
        },
    ]
}

fn commands() -> Vec<DrawCommand> {
    // Shorthand for the placement triple of every object.
    fn at(scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> Transform {
        Transform::new(scale, rotation, position)
    }

    vec![
        // Floor plane under everything
        DrawCommand::textured(Plane, at([85.0, 1.0, 200.0], [0.0, 0.0, 0.0], [0.0, -32.0, -200.0]), "Wood", "Wood"),
        // Mug handle and lip
        DrawCommand::textured(Torus, at([0.35, 0.35, 0.4], [0.0, 0.0, 0.0], [-11.3, -8.85, -33.4]), "Metal", "White"),
        DrawCommand::textured(Torus, at([0.55, 0.55, 0.4], [90.0, 0.0, 0.0], [-10.5, -8.4, -33.5]), "Metal", "White"),
        // Monitor stand column
        DrawCommand::textured(Cylinder, at([0.25, 2.3, 0.25], [0.0, 0.0, 0.0], [7.7, -9.6, -30.0]), "Metal", "Metal"),
        // Mug body and the dish rings under it
        DrawCommand::textured(Cylinder, at([0.6, 1.0, 0.6], [0.0, 0.0, 0.0], [-10.5, -9.4, -33.5]), "Metal", "White"),
        DrawCommand::textured(Torus, at([0.75, 0.75, 0.3], [90.0, 0.0, 0.0], [-10.5, -9.38, -33.5]), "Metal", "White"),
        // Monitor feet
        DrawCommand::textured(Cylinder, at([2.2, 0.3, 0.2], [0.0, -125.0, 0.0], [8.9, -9.6, -31.8]), "Metal", "Metal"),
        DrawCommand::textured(Cylinder, at([2.2, 0.3, 0.2], [0.0, 3.0, 0.0], [5.7, -9.6, -29.9]), "Metal", "Metal"),
        // Bottom ring of the dish
        DrawCommand::textured(Torus, at([0.6, 0.6, 0.4], [90.0, 0.0, 0.0], [-10.5, -9.5, -33.5]), "Metal", "White"),
        // Mouse
        DrawCommand::textured(Cylinder, at([0.65, 0.75, 0.65], [0.0, 30.0, 90.0], [-3.0, -9.4, -38.0]), "Plastic", "White"),
        // Media player box on the desk
        DrawCommand::textured(Box, at([3.15, 2.5, 2.65], [0.0, 30.0, 0.0], [-4.3, -8.5, -23.2]), "Plastic", "White"),
        // Rolled book ends on the shelf, largest to smallest
        DrawCommand::textured(Cylinder, at([2.6, 1.0, 1.5], [0.0, 30.0, 90.0], [18.14, -7.8, -36.48]), "Wood", "Wood"),
        DrawCommand::textured(Cylinder, at([3.0, 1.0, 1.5], [0.0, 30.0, 90.0], [20.0, -7.4, -37.6]), "Wood", "Wood"),
        DrawCommand::textured(Cylinder, at([2.4, 1.0, 1.2], [0.0, 30.0, 90.0], [20.5, -7.6, -37.9]), "Wood", "Wood"),
        DrawCommand::textured(Cylinder, at([2.0, 1.0, 1.0], [0.0, 30.0, 90.0], [20.9, -7.8, -38.1]), "Wood", "Wood"),
        DrawCommand::textured(Cylinder, at([1.6, 1.0, 0.8], [0.0, 30.0, 90.0], [21.3, -8.2, -38.4]), "Wood", "Wood"),
        DrawCommand::textured(Cylinder, at([1.2, 1.0, 0.6], [0.0, 30.0, 90.0], [21.8, -8.6, -38.7]), "Wood", "Wood"),
        // Standing books
        DrawCommand::flat(Box, at([6.5, 1.0, 3.5], [0.0, 30.0, 90.0], [18.14, -6.5, -36.48]), "Wood", [1.0, 1.0, 1.0, 1.0]),
        DrawCommand::flat(Box, at([6.5, 1.0, 3.5], [0.0, 30.0, 90.0], [19.0, -6.5, -37.0]), "Wood", [0.6706, 0.8588, 0.8902, 1.0]),
        DrawCommand::flat(Box, at([6.5, 1.4, 3.5], [0.0, 30.0, 0.0], [-4.0, -9.5, -23.0]), "Wood", [1.0, 1.0, 1.0, 1.0]),
        // Monitor panel
        DrawCommand::textured(Box, at([14.0, 0.3, 8.5], [90.0, 0.0, -30.0], [7.75, -3.0, -30.2]), "Plastic", "Magazine Cover"),
        // Keyboard
        DrawCommand::textured(Box, at([7.0, 0.3, 3.0], [0.0, 30.0, 0.0], [2.0, -9.5, -41.0]), "Plastic", "White"),
        // Desktop slab
        DrawCommand::textured(Box, at([35.0, 0.8, 18.0], [0.0, 30.0, 0.0], [5.0, -10.0, -35.0]), "Wood", "Wood"),
        // Drawer compartment hanging under the desktop
        DrawCommand::textured(Box, at([10.0, 4.5, 14.3], [0.0, 30.0, 0.0], [14.5, -12.0, -40.5]), "Wood", "Wood"),
        // Pulled-out drawer: bottom, magazine, and two pens inside
        DrawCommand::textured(Plane, at([3.8, 1.0, 4.0], [0.0, 30.0, 0.0], [10.1, -14.2, -48.95]), "Wood", "Wood"),
        DrawCommand::textured(Plane, at([2.8, 1.0, 3.7], [0.0, 30.0, 0.0], [10.0, -14.1, -48.95]), "Paper", "Magazine Cover"),
        DrawCommand::textured(Cylinder, at([0.2, 3.0, 0.2], [90.0, 0.0, -30.0], [9.0, -13.8, -51.7]), "Plastic", "White"),
        DrawCommand::textured(Cylinder, at([0.2, 3.0, 0.2], [90.0, 0.0, -65.0], [7.1, -13.8, -50.7]), "Plastic", "White"),
        // Drawer shell: sides, track, and front face
        DrawCommand::textured(Box, at([8.0, 2.5, 0.8], [0.0, 120.0, 0.0], [6.75, -13.0, -47.0]), "Wood", "Wood"),
        DrawCommand::textured(Box, at([8.0, 2.5, 0.8], [0.0, 120.0, 0.0], [13.0, -13.0, -51.0]), "Wood", "Wood"),
        DrawCommand::textured(Box, at([8.3, 0.5, 0.1], [0.0, 120.0, 0.0], [13.5, -13.8, -51.0]), "Metal", "Metal"),
        DrawCommand::textured(Box, at([9.0, 3.5, 0.8], [0.0, 30.0, 0.0], [8.1, -12.5, -52.5]), "Wood", "Wood"),
        // Desk legs
        DrawCommand::textured(Box, at([1.0, 22.0, 1.0], [0.0, 30.0, 0.0], [-5.0, -20.99, -22.0]), "Metal", "Black Metal"),
        DrawCommand::textured(Box, at([1.0, 22.0, 1.0], [0.0, 30.0, 0.0], [3.0, -20.99, -26.0]), "Metal", "Black Metal"),
        DrawCommand::textured(Box, at([1.0, 22.0, 1.0], [0.0, 30.0, 0.0], [-12.0, -20.99, -34.0]), "Metal", "Black Metal"),
        DrawCommand::textured(Box, at([1.0, 22.0, 1.0], [0.0, 30.0, 0.0], [19.5, -20.99, -42.8]), "Metal", "Black Metal"),
        DrawCommand::textured(Box, at([1.0, 22.0, 1.0], [0.0, 30.0, 0.0], [6.47, -20.99, -43.55]), "Metal", "Black Metal"),
        DrawCommand::textured(Box, at([1.0, 22.0, 1.0], [0.0, 30.0, 0.0], [13.0, -20.99, -32.0]), "Metal", "Black Metal"),
        // Cross beams bracing the legs
        DrawCommand::textured(Box, at([1.0, 21.0, 1.0], [0.0, 30.0, 90.0], [-3.0, -11.0, -38.4]), "Metal", "Black Metal"),
        DrawCommand::textured(Box, at([1.0, 10.65, 1.0], [0.0, 30.0, 90.0], [14.8, -29.0, -40.2]), "Metal", "Black Metal"),
        DrawCommand::textured(Box, at([1.0, 13.5, 1.0], [0.0, 120.0, 90.0], [9.645, -29.0, -38.0]), "Metal", "Black Metal"),
        DrawCommand::textured(Box, at([1.0, 8.75, 1.0], [0.0, 30.0, 90.0], [-0.75, -29.0, -24.25]), "Metal", "Black Metal"),
        DrawCommand::textured(Box, at([1.0, 13.9, 1.0], [0.0, 120.0, 90.0], [-8.2, -29.0, -27.6]), "Metal", "Black Metal"),
        // Computer tower under the desk
        DrawCommand::textured(Box, at([10.0, 18.0, 5.0], [0.0, 120.0, 0.0], [-4.7, -29.0, -30.2]), "Metal", "White"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::Surface;

    #[test]
    fn fixture_has_the_full_object_list() {
        let definition = scene("assets/textures");
        assert_eq!(definition.commands.len(), 44);
        assert_eq!(definition.textures.len(), 5);
        assert_eq!(definition.materials.len(), 4);
        assert_eq!(definition.lights.len(), 3);
    }

    #[test]
    fn every_referenced_tag_resolves_within_the_fixture() {
        let definition = scene("assets/textures");

        let texture_tags: Vec<&str> = definition
            .textures
            .iter()
            .map(|asset| asset.tag.as_str())
            .collect();
        let material_tags: Vec<&str> = definition
            .materials
            .iter()
            .map(|preset| preset.tag.as_str())
            .collect();

        for command in &definition.commands {
            if let Some(material) = &command.material {
                assert!(
                    material_tags.contains(&material.as_str()),
                    "unknown material tag {material:?}"
                );
            }
            if let Surface::Textured(tag) = &command.surface {
                assert!(
                    texture_tags.contains(&tag.as_str()),
                    "unknown texture tag {tag:?}"
                );
            }
        }
    }

    #[test]
    fn fixture_uses_all_four_primitives() {
        let definition = scene("assets/textures");
        assert_eq!(definition.primitives().len(), 4);
    }
}
