//! # primgen Prelude
//!
//! Commonly used types and generators in one import.
//!
//! ```no_run
//! use primgen::prelude::*;
//!
//! let mut loader = MemoryTextureLoader::new();
//! let source = TextureSource::new("textures", "table_top_2.jpg", false);
//! let table = generate_plane(&mut loader, &source, 1.0)?;
//! # Ok::<(), GeometryError>(())
//! ```

// Re-export mesh types and generators
pub use crate::gfx::geometry::{
    generate_cube, generate_cylinder, generate_debug_cube, generate_disc_cap, generate_pepper_cube, generate_plane,
    generate_primitive, generate_prism, generate_sphere, GeometryError, Mesh, Primitive, PrimitiveRequest, Vertex,
};

// Re-export texture acquisition
pub use crate::gfx::resources::{
    GpuTextureLoader, MemoryTextureLoader, TextureHandle, TextureKind, TextureLoader, TextureRef, TextureSource,
};
