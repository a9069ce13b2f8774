//! Image decoding for texture loading
//!
//! Wraps the `image` crate behind the pixel format the renderer expects:
//! tightly packed RGBA8, flipped so row 0 is the bottom of the image
//! (texture coordinates grow upward, disk rows grow downward).

use std::path::Path;

use super::TextureError;

/// Decoded pixel data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// RGBA8 pixels, bottom row first
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Channel count of the source file (3 or 4)
    pub source_channels: u8,
}

impl ImageData {
    /// Decode an image file
    ///
    /// Only 3-channel and 4-channel sources are accepted; anything else
    /// (grayscale, palette, 16-bit variants) is rejected before upload.
    /// The image is flipped vertically and expanded to RGBA8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();

        let decoded = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let channels = decoded.color().channel_count();
        if channels != 3 && channels != 4 {
            return Err(TextureError::UnsupportedChannels {
                path: path.to_path_buf(),
                channels,
            });
        }

        let rgba = decoded.flipv().to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            pixels: rgba.into_raw(),
            width,
            height,
            source_channels: channels,
        })
    }

    /// Whether the source image carried an alpha channel
    pub fn has_alpha(&self) -> bool {
        self.source_channels == 4
    }

    /// Size of one row in bytes
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bureau_image_test_{name}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn loads_rgb_image() {
        let dir = test_dir("rgb");
        let path = dir.join("rgb.png");
        let mut img = image::RgbImage::new(4, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.save(&path).unwrap();

        let data = ImageData::load(&path).unwrap();
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.source_channels, 3);
        assert!(!data.has_alpha());
        assert_eq!(data.pixels.len(), 4 * 2 * 4);
    }

    #[test]
    fn loads_rgba_image() {
        let dir = test_dir("rgba");
        let path = dir.join("rgba.png");
        image::RgbaImage::new(2, 2).save(&path).unwrap();

        let data = ImageData::load(&path).unwrap();
        assert_eq!(data.source_channels, 4);
        assert!(data.has_alpha());
    }

    #[test]
    fn flips_rows_vertically() {
        let dir = test_dir("flip");
        let path = dir.join("flip.png");
        let mut img = image::RgbImage::new(1, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0])); // top row on disk
        img.put_pixel(0, 1, image::Rgb([0, 255, 0])); // bottom row on disk
        img.save(&path).unwrap();

        let data = ImageData::load(&path).unwrap();
        // Bottom row of the file comes first after the flip.
        assert_eq!(&data.pixels[0..3], &[0, 255, 0]);
        assert_eq!(&data.pixels[4..7], &[255, 0, 0]);
    }

    #[test]
    fn rejects_grayscale_image() {
        let dir = test_dir("gray");
        let path = dir.join("gray.png");
        image::GrayImage::new(2, 2).save(&path).unwrap();

        match ImageData::load(&path) {
            Err(TextureError::UnsupportedChannels { channels, .. }) => assert_eq!(channels, 1),
            other => panic!("expected UnsupportedChannels, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_and_corrupt_files() {
        let dir = test_dir("bad");

        assert!(matches!(
            ImageData::load(dir.join("does_not_exist.png")),
            Err(TextureError::Decode { .. })
        ));

        let garbage = dir.join("garbage.png");
        fs::write(&garbage, b"not an image at all").unwrap();
        assert!(matches!(
            ImageData::load(&garbage),
            Err(TextureError::Decode { .. })
        ));
    }
}
