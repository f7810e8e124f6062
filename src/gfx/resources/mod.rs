// src/gfx/resources/mod.rs
//! Texture resources
//!
//! Handles image decoding, texture handles and GPU texture upload.

pub mod texture;
pub mod texture_resource;

// Re-export main types
pub use texture::{
    ImageData, MemoryTextureLoader, TextureError, TextureHandle, TextureKind, TextureLoader, TextureRef,
    TextureSource,
};
pub use texture_resource::{GpuTextureLoader, TextureResource};
