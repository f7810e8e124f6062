//! Texture acquisition for generated meshes
//!
//! Generators only need an opaque handle back from a [`TextureLoader`]. A
//! loader that cannot decode an image logs the failure and hands out
//! [`TextureHandle::MISSING`]; texture problems never fail mesh generation.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while decoding texture images
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to read texture {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode texture {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("texture {path:?} has zero size")]
    Empty { path: PathBuf },
}

/// Opaque identifier for a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    /// Sentinel returned when a texture could not be loaded
    pub const MISSING: TextureHandle = TextureHandle(u32::MAX);

    pub fn is_missing(self) -> bool {
        self == Self::MISSING
    }

    pub fn index(self) -> Option<usize> {
        (!self.is_missing()).then_some(self.0 as usize)
    }
}

/// Semantic role of a texture in the shader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Diffuse,
    Specular,
}

impl TextureKind {
    /// Sampler uniform prefix used by the renderer
    pub fn as_str(self) -> &'static str {
        match self {
            TextureKind::Diffuse => "texture_diffuse",
            TextureKind::Specular => "texture_specular",
        }
    }
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Where a generator should load its texture from
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSource {
    pub directory: PathBuf,
    pub file_name: String,
    /// Treat the image as sRGB encoded
    pub gamma_correct: bool,
}

impl TextureSource {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>, gamma_correct: bool) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
            gamma_correct,
        }
    }

    /// Full path of the image, `directory/file_name`
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// A texture attached to a mesh. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRef {
    pub handle: TextureHandle,
    pub kind: TextureKind,
    pub source_path: PathBuf,
}

impl TextureRef {
    /// Loads `source` through `loader` and wraps the resulting handle.
    pub fn load<L: TextureLoader + ?Sized>(loader: &mut L, source: &TextureSource, kind: TextureKind) -> Self {
        let source_path = source.path();
        let handle = loader.load_texture(&source_path, source.gamma_correct);
        Self {
            handle,
            kind,
            source_path,
        }
    }
}

/// Decodes an image and registers it as a sampleable resource.
///
/// Implementations must not fail: on error they log and return
/// [`TextureHandle::MISSING`].
pub trait TextureLoader {
    fn load_texture(&mut self, path: &Path, gamma_correct: bool) -> TextureHandle;
}

/// Decoded RGBA8 image ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Whether the pixels should be sampled as sRGB
    pub srgb: bool,
}

impl ImageData {
    /// Load an image from a file path, converting it to RGBA8
    pub fn from_file(path: &Path, srgb: bool) -> Result<Self, TextureError> {
        log::debug!("Loading image from: {:?}", path);

        let bytes = std::fs::read(path).map_err(|source| TextureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let img = image::load_from_memory(&bytes).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
            srgb,
        })
    }

    #[cfg(test)]
    pub(crate) fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        Self {
            data: color.repeat(pixel_count),
            width,
            height,
            srgb: false,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Number of mip levels down to 1x1
    pub fn mip_level_count(&self) -> u32 {
        32 - self.width.max(self.height).max(1).leading_zeros()
    }

    /// Full mip chain, level 0 first. Each level halves the previous one with
    /// a triangle filter.
    pub fn mip_chain(&self) -> Vec<ImageData> {
        let Some(mut level) = image::RgbaImage::from_raw(self.width, self.height, self.data.clone()) else {
            return vec![self.clone()];
        };

        let mut chain = vec![self.clone()];
        while level.width() > 1 || level.height() > 1 {
            let width = (level.width() / 2).max(1);
            let height = (level.height() / 2).max(1);
            level = image::imageops::resize(&level, width, height, image::imageops::FilterType::Triangle);
            chain.push(ImageData {
                data: level.as_raw().clone(),
                width,
                height,
                srgb: self.srgb,
            });
        }
        chain
    }
}

/// Loader that keeps decoded images in memory. Handles index into
/// [`MemoryTextureLoader::images`].
#[derive(Debug, Default)]
pub struct MemoryTextureLoader {
    images: Vec<ImageData>,
    failures: usize,
}

impl MemoryTextureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[ImageData] {
        &self.images
    }

    pub fn get(&self, handle: TextureHandle) -> Option<&ImageData> {
        handle.index().and_then(|i| self.images.get(i))
    }

    /// Number of loads that fell back to the missing handle
    pub fn failures(&self) -> usize {
        self.failures
    }
}

impl TextureLoader for MemoryTextureLoader {
    fn load_texture(&mut self, path: &Path, gamma_correct: bool) -> TextureHandle {
        match ImageData::from_file(path, gamma_correct) {
            Ok(image) => {
                log::info!("Loaded texture {}x{} from {:?}", image.width, image.height, path);
                let handle = TextureHandle(self.images.len() as u32);
                self.images.push(image);
                handle
            }
            Err(err) => {
                log::warn!("Texture failed to load at path {:?}: {}", path, err);
                self.failures += 1;
                TextureHandle::MISSING
            }
        }
    }
}
