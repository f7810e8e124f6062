//! Texture resource management for wgpu
//!
//! Uploads decoded [`ImageData`] as sampleable GPU textures and exposes the
//! [`GpuTextureLoader`] used when generators run against a live device.

use std::path::Path;

use super::texture::{ImageData, TextureHandle, TextureLoader};

/// GPU texture resource containing texture, view, and sampler
#[derive(Clone)]
pub struct TextureResource {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl TextureResource {
    /// Texture format for an image, sRGB when gamma correction is requested
    pub fn format_for(image: &ImageData) -> wgpu::TextureFormat {
        if image.srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        }
    }

    /// Creates a mipmapped 2D texture from decoded RGBA8 data.
    ///
    /// The sampler repeats in both directions so UVs scaled past 1.0 by a
    /// repeat factor tile the image, and filters linearly between mip levels.
    pub fn from_image(device: &wgpu::Device, queue: &wgpu::Queue, image: &ImageData, label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let format = Self::format_for(image);
        let levels = image.mip_chain();

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (mip_level, level) in levels.iter().enumerate() {
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: mip_level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                &level.data,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * level.width),
                    rows_per_image: Some(level.height),
                },
                wgpu::Extent3d {
                    width: level.width,
                    height: level.height,
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(&format!("{} Sampler", label)),
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
}

/// Loader that decodes images and uploads them to the GPU.
///
/// Borrowing the device and queue means a graphics context must exist before
/// any textured generator can run.
pub struct GpuTextureLoader<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    textures: Vec<TextureResource>,
}

impl<'a> GpuTextureLoader<'a> {
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            textures: Vec::new(),
        }
    }

    pub fn get(&self, handle: TextureHandle) -> Option<&TextureResource> {
        handle.index().and_then(|i| self.textures.get(i))
    }

    /// Hands the uploaded textures to the renderer, indexed by handle
    pub fn into_textures(self) -> Vec<TextureResource> {
        self.textures
    }
}

impl TextureLoader for GpuTextureLoader<'_> {
    fn load_texture(&mut self, path: &Path, gamma_correct: bool) -> TextureHandle {
        let image = match ImageData::from_file(path, gamma_correct) {
            Ok(image) => image,
            Err(err) => {
                log::warn!("Texture failed to load at path {:?}: {}", path, err);
                return TextureHandle::MISSING;
            }
        };

        let label = path.display().to_string();
        let resource = TextureResource::from_image(self.device, self.queue, &image, &label);
        log::info!("Uploaded texture {}x{} from {:?}", image.width, image.height, path);

        let handle = TextureHandle(self.textures.len() as u32);
        self.textures.push(resource);
        handle
    }
}
