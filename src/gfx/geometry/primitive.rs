//! Shape dispatch, so a startup scene can list its meshes as data.

use std::fmt;

use super::{
    generate_cube, generate_cylinder, generate_debug_cube, generate_disc_cap, generate_pepper_cube, generate_plane,
    generate_prism, generate_sphere, GeometryError, Mesh,
};
use crate::gfx::resources::{TextureLoader, TextureSource};

/// Every shape the generators can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Plane,
    Cube,
    PepperCube,
    DebugCube,
    DiscCap,
    Prism,
    Cylinder,
    Sphere,
}

impl Primitive {
    pub const ALL: [Primitive; 8] = [
        Primitive::Plane,
        Primitive::Cube,
        Primitive::PepperCube,
        Primitive::DebugCube,
        Primitive::DiscCap,
        Primitive::Prism,
        Primitive::Cylinder,
        Primitive::Sphere,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Plane => "plane",
            Primitive::Cube => "cube",
            Primitive::PepperCube => "pepper cube",
            Primitive::DebugCube => "debug cube",
            Primitive::DiscCap => "disc cap",
            Primitive::Prism => "prism",
            Primitive::Cylinder => "cylinder",
            Primitive::Sphere => "sphere",
        }
    }

    /// Whether the generator loads a texture
    pub fn is_textured(self) -> bool {
        self != Primitive::DebugCube
    }

    /// Whether the generator tiles its UVs by a repeat factor
    pub fn uses_repeat_factor(self) -> bool {
        !matches!(self, Primitive::DebugCube | Primitive::DiscCap)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Generates `primitive` with its default shape parameters.
///
/// `repeat_factor` is ignored by shapes that do not tile, and `source` by the
/// debug cube. Textured shapes fail with [`GeometryError::MissingTexture`]
/// when `source` is `None`.
pub fn generate_primitive<L: TextureLoader + ?Sized>(
    primitive: Primitive,
    loader: &mut L,
    source: Option<&TextureSource>,
    repeat_factor: f32,
) -> Result<Mesh, GeometryError> {
    let require = || source.ok_or(GeometryError::MissingTexture(primitive));

    match primitive {
        Primitive::Plane => generate_plane(loader, require()?, repeat_factor),
        Primitive::Cube => generate_cube(loader, require()?, repeat_factor),
        Primitive::PepperCube => generate_pepper_cube(loader, require()?, repeat_factor),
        Primitive::DebugCube => Ok(generate_debug_cube()),
        Primitive::DiscCap => generate_disc_cap(loader, require()?),
        Primitive::Prism => generate_prism(loader, require()?, repeat_factor),
        Primitive::Cylinder => generate_cylinder(loader, require()?, repeat_factor),
        Primitive::Sphere => generate_sphere(loader, require()?, repeat_factor),
    }
}

/// One named mesh in a startup scene
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveRequest {
    pub name: String,
    pub primitive: Primitive,
    pub texture: Option<TextureSource>,
    pub repeat_factor: f32,
}

impl PrimitiveRequest {
    pub fn textured(name: impl Into<String>, primitive: Primitive, texture: TextureSource, repeat_factor: f32) -> Self {
        Self {
            name: name.into(),
            primitive,
            texture: Some(texture),
            repeat_factor,
        }
    }

    pub fn untextured(name: impl Into<String>, primitive: Primitive) -> Self {
        Self {
            name: name.into(),
            primitive,
            texture: None,
            repeat_factor: 1.0,
        }
    }

    pub fn generate<L: TextureLoader + ?Sized>(&self, loader: &mut L) -> Result<Mesh, GeometryError> {
        generate_primitive(self.primitive, loader, self.texture.as_ref(), self.repeat_factor)
    }
}
