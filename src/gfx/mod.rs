//! # Graphics Module
//!
//! CPU-side geometry for the renderer: procedural meshes and the textures
//! they reference.
//!
//! - **Geometry** ([`geometry`]) - Vertex format, [`Mesh`] and the shape generators
//! - **Resources** ([`resources`]) - Texture handles, image decoding and GPU upload
//!
//! ## Usage
//!
//! ```no_run
//! use primgen::gfx::{generate_sphere, MemoryTextureLoader, TextureSource};
//!
//! let mut loader = MemoryTextureLoader::new();
//! let gem = generate_sphere(&mut loader, &TextureSource::new("textures", "sphere_gem.jpg", false), 4.0)?;
//! println!("{} triangles", gem.triangle_count());
//! # Ok::<(), primgen::gfx::GeometryError>(())
//! ```
//!
//! [`Mesh`]: geometry::Mesh

pub mod geometry;
pub mod resources;

// Re-export commonly used types
pub use geometry::*;
pub use resources::{
    GpuTextureLoader, MemoryTextureLoader, TextureHandle, TextureKind, TextureLoader, TextureRef, TextureSource,
};
