//! # Flat-Faced Primitives
//!
//! Plane and cube generators. Cube faces never share vertices, so each face
//! keeps its own flat normal and its own UV corners.

use super::params::validate_repeat_factor;
use super::{diffuse_textures, finish, GeometryError, Mesh, Primitive, Vertex};
use crate::gfx::resources::{TextureLoader, TextureSource};

/// Generate a unit quad in the XZ plane facing +Y.
///
/// The texture tiles `repeat_factor` times in both directions; the
/// `(-0.5, 0, -0.5)` corner carries UV `(0, 0)`.
pub fn generate_plane<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    repeat_factor: f32,
) -> Result<Mesh, GeometryError> {
    validate_repeat_factor(repeat_factor)?;
    let r = repeat_factor;
    let up = [0.0, 1.0, 0.0];

    let vertices = vec![
        Vertex::new([-0.5, 0.0, 0.5], up, [0.0, r]),
        Vertex::new([0.5, 0.0, 0.5], up, [r, r]),
        Vertex::new([0.5, 0.0, -0.5], up, [r, 0.0]),
        Vertex::new([-0.5, 0.0, -0.5], up, [0.0, 0.0]),
    ];
    let indices = vec![0, 1, 3, 1, 2, 3];

    let textures = diffuse_textures(loader, source);
    Ok(finish(Primitive::Plane, vertices, indices, textures))
}

/// Faces of the unit cube, in vertex-buffer order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeFace {
    Bottom,
    Top,
    Front,
    Back,
    Left,
    Right,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Bottom,
        CubeFace::Top,
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Left,
        CubeFace::Right,
    ];

    pub fn normal(self) -> [f32; 3] {
        match self {
            CubeFace::Bottom => [0.0, -1.0, 0.0],
            CubeFace::Top => [0.0, 1.0, 0.0],
            CubeFace::Front => [0.0, 0.0, 1.0],
            CubeFace::Back => [0.0, 0.0, -1.0],
            CubeFace::Left => [-1.0, 0.0, 0.0],
            CubeFace::Right => [1.0, 0.0, 0.0],
        }
    }

    /// Index of the face's first vertex
    pub fn first_vertex(self) -> usize {
        self as usize * 4
    }

    fn corners(self) -> [[f32; 3]; 4] {
        match self {
            CubeFace::Bottom => [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]],
            CubeFace::Top => [[-0.5, 0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
            CubeFace::Front => [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
            CubeFace::Back => [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]],
            CubeFace::Left => [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]],
            CubeFace::Right => [[0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5]],
        }
    }
}

/// UV corners for a face, before the repeat factor is applied
const FACE_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// The left face is mirrored so the label reads the same way as on the right
const LEFT_LABEL_UVS: [[f32; 2]; 4] = [[1.0, 0.0], [0.0, 0.0], [0.0, 1.0], [1.0, 1.0]];

/// Triangles face by face: front, back, left, right, top, bottom
const CUBE_INDICES: [u32; 36] = [
    8, 9, 10, 10, 11, 8, // front
    14, 13, 12, 12, 15, 14, // back
    16, 17, 18, 18, 19, 16, // left
    20, 23, 22, 22, 21, 20, // right
    4, 6, 5, 6, 4, 7, // top
    0, 1, 2, 2, 3, 0, // bottom
];

fn scaled(uv: [f32; 2], repeat_factor: f32) -> [f32; 2] {
    [uv[0] * repeat_factor, uv[1] * repeat_factor]
}

fn cube_vertices(mut uv: impl FnMut(CubeFace, usize) -> [f32; 2]) -> Vec<Vertex> {
    CubeFace::ALL
        .iter()
        .flat_map(|&face| {
            let normal = face.normal();
            face.corners()
                .into_iter()
                .enumerate()
                .map(move |(corner, position)| (face, corner, position, normal))
        })
        .map(|(face, corner, position, normal)| Vertex::new(position, normal, uv(face, corner)))
        .collect()
}

/// Generate a unit cube centred at the origin with the texture on every face.
pub fn generate_cube<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    repeat_factor: f32,
) -> Result<Mesh, GeometryError> {
    validate_repeat_factor(repeat_factor)?;

    let vertices = cube_vertices(|_, corner| scaled(FACE_UVS[corner], repeat_factor));
    let textures = diffuse_textures(loader, source);
    Ok(finish(Primitive::Cube, vertices, CUBE_INDICES.to_vec(), textures))
}

/// Generate a cube that is labelled on its left and right faces only.
///
/// Every other face samples the single texel at UV `(0, 0)`, which renders as
/// a flat body colour. The collapsed UVs are intentional.
pub fn generate_pepper_cube<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    repeat_factor: f32,
) -> Result<Mesh, GeometryError> {
    validate_repeat_factor(repeat_factor)?;

    let vertices = cube_vertices(|face, corner| match face {
        CubeFace::Left => scaled(LEFT_LABEL_UVS[corner], repeat_factor),
        CubeFace::Right => scaled(FACE_UVS[corner], repeat_factor),
        _ => [0.0, 0.0],
    });
    let textures = diffuse_textures(loader, source);
    Ok(finish(Primitive::PepperCube, vertices, CUBE_INDICES.to_vec(), textures))
}

/// Untextured unit cube for debug visualization. Never touches a loader.
pub fn generate_debug_cube() -> Mesh {
    let vertices = cube_vertices(|_, corner| FACE_UVS[corner]);
    finish(Primitive::DebugCube, vertices, CUBE_INDICES.to_vec(), Vec::new())
}
