use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::info;
use wgpu::util::DeviceExt;

use crate::error::{PlaygroundError, Result};

/// Decode a PNG or JPEG from disk.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .map_err(|source| PlaygroundError::LoadImage { path: path.to_path_buf(), source })?
        .to_rgba8();
    info!("Loaded image {:?} ({}x{})", path, img.width(), img.height());
    Ok(img)
}

/// Square stand-in image: a checkerboard with a bright border and a marker
/// in the top-left cell so rotation and flips are easy to spot.
pub fn placeholder_image(size: u32) -> RgbaImage {
    let size = size.max(8);
    let cell = (size / 8).max(1);
    let light = Rgba([0xE8, 0xE8, 0xE8, 0xFF]);
    let dark = Rgba([0x30, 0x30, 0x38, 0xFF]);
    let border = Rgba([0xF5, 0xD0, 0x30, 0xFF]);
    let marker = Rgba([0x20, 0x60, 0xF0, 0xFF]);

    RgbaImage::from_fn(size, size, |x, y| {
        let on_border = x == 0 || y == 0 || x == size - 1 || y == size - 1;
        if on_border {
            border
        } else if x < cell && y < cell {
            marker
        } else if (x / cell + y / cell) % 2 == 0 {
            light
        } else {
            dark
        }
    })
}

/// Reject images the device cannot hold in a single 2D texture.
pub fn check_texture_size(width: u32, height: u32, max: u32) -> Result<()> {
    if width > max || height > max {
        return Err(PlaygroundError::TextureTooLarge { width, height, max });
    }
    Ok(())
}

pub struct Texture {
    pub texture_view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn from_rgba(device: &wgpu::Device, queue: &wgpu::Queue, img: &RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        check_texture_size(width, height, device.limits().max_texture_dimension_2d)?;

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("image"),
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8UnormSrgb,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            img,
        );

        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Ok(Self { texture_view, sampler, width, height })
    }
}
