//! Desk scene viewer
//!
//! Renders the built-in desk scene. Real texture images are looked for
//! under `assets/textures/`; when they are missing, small procedural
//! placeholders are generated so the demo runs standalone.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let asset_dir = texture_dir()?;
    log::info!("using textures from {}", asset_dir.display());

    let mut app = bureau::default();
    app.set_scene(bureau::scenes::desk::scene(&asset_dir));
    app.run();

    Ok(())
}

/// Prefer real assets; otherwise synthesize tinted checkerboards
fn texture_dir() -> Result<PathBuf> {
    let local = Path::new("assets/textures");
    if local.join("wood.jpg").exists() {
        return Ok(local.to_path_buf());
    }

    let dir = std::env::temp_dir().join("bureau_desk_textures");
    fs::create_dir_all(&dir)?;

    let palettes: [(&str, [u8; 3], [u8; 3]); 5] = [
        ("wood.jpg", [133, 94, 66], [110, 75, 50]),
        ("metal.jpg", [170, 174, 180], [140, 144, 150]),
        ("magazine_cover.jpg", [205, 90, 60], [240, 230, 210]),
        ("black_metal.jpg", [40, 40, 45], [25, 25, 30]),
        ("white.jpg", [235, 235, 235], [215, 215, 215]),
    ];

    for (file, base, accent) in palettes {
        let path = dir.join(file);
        if path.exists() {
            continue;
        }
        let mut img = image::RgbImage::new(64, 64);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let checker = (x / 8 + y / 8) % 2 == 0;
            *pixel = image::Rgb(if checker { base } else { accent });
        }
        img.save(&path)?;
    }

    Ok(dir)
}
