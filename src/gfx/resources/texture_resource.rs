//! Texture resource management for wgpu
//!
//! Provides utilities for creating and managing GPU textures, views, and
//! samplers: scene textures uploaded from decoded image data with full mip
//! chains, solid-color fallback textures, and the depth buffer.

use super::ImageData;

/// GPU texture resource containing texture, view, and sampler
///
/// Bundles the three components needed for texture operations:
/// - Texture: The actual GPU memory allocation
/// - View: Interface for shader access
/// - Sampler: Filtering and addressing configuration
pub struct TextureResource {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl TextureResource {
    /// Standard depth buffer format used throughout the renderer
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Upload decoded image data as a sampled 2D texture
    ///
    /// The texture gets repeat addressing on both axes, linear min/mag
    /// filtering, and a complete mip chain generated on the CPU with a box
    /// filter before upload.
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &ImageData,
        label: &str,
    ) -> Self {
        let mip_level_count = mip_level_count(image.width, image.height);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: image.width,
                height: image.height,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let mut level_pixels = image.pixels.clone();
        let (mut level_width, mut level_height) = (image.width, image.height);

        for level in 0..mip_level_count {
            if level > 0 {
                (level_pixels, level_width, level_height) =
                    downsample(&level_pixels, level_width, level_height);
            }

            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: level,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                &level_pixels,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(level_width * 4),
                    rows_per_image: Some(level_height),
                },
                wgpu::Extent3d {
                    width: level_width,
                    height: level_height,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Create a 1x1 solid-color texture
    ///
    /// Used as the sampler fallback for draws that render with a flat color
    /// so the pipeline layout never needs a texture-free variant.
    pub fn solid_color(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: [u8; 4],
        label: &str,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }

    /// Creates a depth texture matching the surface configuration
    pub fn create_depth_texture(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: config.width.max(1),
            height: config.height.max(1),
            depth_or_array_layers: 1,
        };

        let desc = wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[Self::DEPTH_FORMAT],
        };

        let texture = device.create_texture(&desc);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare: Some(wgpu::CompareFunction::LessEqual),
            lod_min_clamp: 0.0,
            lod_max_clamp: 100.0,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// Full mip chain length for the given dimensions
fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// Halve an RGBA8 image with a 2x2 box filter
///
/// Odd dimensions round down to a minimum of 1; edge texels clamp.
fn downsample(pixels: &[u8], width: u32, height: u32) -> (Vec<u8>, u32, u32) {
    let out_width = (width / 2).max(1);
    let out_height = (height / 2).max(1);
    let mut out = Vec::with_capacity((out_width * out_height * 4) as usize);

    for y in 0..out_height {
        for x in 0..out_width {
            let x0 = (x * 2).min(width - 1);
            let x1 = (x * 2 + 1).min(width - 1);
            let y0 = (y * 2).min(height - 1);
            let y1 = (y * 2 + 1).min(height - 1);

            for channel in 0..4usize {
                let sum = texel(pixels, width, x0, y0)[channel] as u32
                    + texel(pixels, width, x1, y0)[channel] as u32
                    + texel(pixels, width, x0, y1)[channel] as u32
                    + texel(pixels, width, x1, y1)[channel] as u32;
                out.push((sum / 4) as u8);
            }
        }
    }

    (out, out_width, out_height)
}

fn texel(pixels: &[u8], width: u32, x: u32, y: u32) -> &[u8] {
    let offset = ((y * width + x) * 4) as usize;
    &pixels[offset..offset + 4]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mip_chain_length_covers_largest_dimension() {
        assert_eq!(mip_level_count(1, 1), 1);
        assert_eq!(mip_level_count(2, 2), 2);
        assert_eq!(mip_level_count(256, 64), 9);
        assert_eq!(mip_level_count(300, 200), 9); // 256 <= 300 < 512
    }

    #[test]
    fn downsample_averages_blocks() {
        // 2x2 image: all four texels average into one.
        let pixels = [
            0u8, 0, 0, 255, //
            100, 0, 0, 255, //
            0, 200, 0, 255, //
            0, 0, 40, 255,
        ];
        let (out, w, h) = downsample(&pixels, 2, 2);
        assert_eq!((w, h), (1, 1));
        assert_eq!(out, vec![25, 50, 10, 255]);
    }

    #[test]
    fn downsample_handles_odd_dimensions() {
        let pixels = vec![128u8; 3 * 3 * 4];
        let (out, w, h) = downsample(&pixels, 3, 3);
        assert_eq!((w, h), (1, 1));
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|&b| b == 128));
    }
}
