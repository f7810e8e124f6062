//! # Procedural Geometry Generation
//!
//! This module generates textured primitive solids procedurally. Every
//! generator returns an immutable [`Mesh`]: interleaved vertices, a triangle
//! index list and the textures the renderer should bind.
//!
//! ## Supported Primitives
//!
//! - **Plane**: unit quad in the XZ plane
//! - **Cube**: full-wrap, partial-wrap ("pepper") and untextured debug variants
//! - **Disc cap**: short fan-closed disc with disc-projected UVs
//! - **Prism**: octagonal body with a horizontally tiling label
//! - **Cylinder**: smooth tube with flat-coloured caps
//! - **Sphere**: UV sphere with pole-safe indexing
//!
//! All meshes use +Y up and counter-clockwise winding seen from outside.
//!
//! ## Usage
//!
//! ```no_run
//! use primgen::gfx::geometry::{generate_cylinder, generate_debug_cube};
//! use primgen::gfx::resources::{MemoryTextureLoader, TextureSource};
//!
//! let mut loader = MemoryTextureLoader::new();
//! let source = TextureSource::new("textures", "salt_logo.jpg", false);
//! let container = generate_cylinder(&mut loader, &source, 2.0)?;
//! let debug = generate_debug_cube();
//! assert!(debug.textures().is_empty());
//! # Ok::<(), primgen::gfx::geometry::GeometryError>(())
//! ```

pub mod params;
pub mod primitive;
pub mod primitives;
pub mod radial;
pub mod sphere;
pub mod vertex;

#[cfg(test)]
pub(crate) mod test_utils;

pub use params::{CylinderParams, DiscCapParams, PrismParams, SphereParams};
pub use primitive::{generate_primitive, Primitive, PrimitiveRequest};
pub use primitives::*;
pub use radial::*;
pub use sphere::*;
pub use vertex::Vertex;

use thiserror::Error;

use crate::gfx::resources::{TextureKind, TextureLoader, TextureRef, TextureSource};

/// Errors raised before any geometry is generated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A shape parameter is out of range
    #[error("invalid {parameter}: {reason}")]
    Configuration {
        parameter: &'static str,
        reason: String,
    },
    /// A textured primitive was requested without a texture source
    #[error("{0} requires a texture source")]
    MissingTexture(Primitive),
}

impl GeometryError {
    pub(crate) fn configuration(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Generated geometry ready for GPU upload.
///
/// Immutable once built: the renderer reads the three sequences and never
/// writes back.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    textures: Vec<TextureRef>,
}

impl Mesh {
    /// Bundles generated data into a mesh.
    ///
    /// Index bounds and triangle grouping are generator invariants, checked
    /// in debug builds only.
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>, textures: Vec<TextureRef>) -> Self {
        debug_assert!(indices.len() % 3 == 0, "index count {} is not a multiple of 3", indices.len());
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < vertices.len()),
            "index out of range for {} vertices",
            vertices.len()
        );

        Self {
            vertices,
            indices,
            textures,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Textures to bind; empty for untextured meshes, which the renderer
    /// draws without a texture binding
    pub fn textures(&self) -> &[TextureRef] {
        &self.textures
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates the index list one triangle at a time
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn into_parts(self) -> (Vec<Vertex>, Vec<u32>, Vec<TextureRef>) {
        (self.vertices, self.indices, self.textures)
    }
}

/// Loads the single diffuse texture every textured generator carries
pub(crate) fn diffuse_textures<L: TextureLoader + ?Sized>(loader: &mut L, source: &TextureSource) -> Vec<TextureRef> {
    vec![TextureRef::load(loader, source, TextureKind::Diffuse)]
}

pub(crate) fn finish(shape: Primitive, vertices: Vec<Vertex>, indices: Vec<u32>, textures: Vec<TextureRef>) -> Mesh {
    let mesh = Mesh::new(vertices, indices, textures);
    log::debug!(
        "Generated {} mesh: {} vertices, {} triangles",
        shape,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_triangles() {
        let vertices = vec![
            Vertex::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]),
            Vertex::new([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]),
            Vertex::new([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]),
        ];
        let mesh = Mesh::new(vertices, vec![0, 1, 2], Vec::new());

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);

        let (vertices, indices, textures) = mesh.into_parts();
        assert_eq!(vertices.len(), 3);
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(textures.is_empty());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn out_of_range_index_is_caught() {
        let vertices = vec![Vertex::new([0.0; 3], [0.0, 1.0, 0.0], [0.0; 2])];
        let _ = Mesh::new(vertices, vec![0, 0, 1], Vec::new());
    }

    #[test]
    fn error_messages() {
        let err = GeometryError::configuration("stacks", "must be at least 2, got 1");
        assert_eq!(err.to_string(), "invalid stacks: must be at least 2, got 1");
        assert_eq!(
            GeometryError::MissingTexture(Primitive::Sphere).to_string(),
            "sphere requires a texture source"
        );
    }
}
