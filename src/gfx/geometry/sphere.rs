//! # UV Sphere
//!
//! Rings of latitude from the north pole (+Y) to the south pole, each with
//! `slices + 1` vertices so the texture seam gets its own column.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Vector3};

use super::params::{validate_repeat_factor, SphereParams};
use super::{diffuse_textures, finish, GeometryError, Mesh, Primitive, Vertex};
use crate::gfx::resources::{TextureLoader, TextureSource};

/// Generate a sphere of radius 0.5 with 36 stacks and 18 slices.
pub fn generate_sphere<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    repeat_factor: f32,
) -> Result<Mesh, GeometryError> {
    generate_sphere_with(loader, source, repeat_factor, &SphereParams::default())
}

/// Generate a UV sphere from explicit parameters.
///
/// Every vertex of the first and last ring sits on a pole. The top band
/// therefore only emits the triangle touching the ring below it, and the
/// bottom band only the one touching the ring above, so no triangle joins two
/// pole vertices.
pub fn generate_sphere_with<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    repeat_factor: f32,
    params: &SphereParams,
) -> Result<Mesh, GeometryError> {
    validate_repeat_factor(repeat_factor)?;
    params.validate()?;

    let SphereParams { radius, stacks, slices } = *params;
    let columns = slices + 1;

    let mut vertices = Vec::with_capacity((stacks as usize + 1) * columns as usize);
    for i in 0..=stacks {
        let stack_angle = PI / 2.0 - i as f32 * PI / stacks as f32;
        let ring = radius * stack_angle.cos();
        let y = radius * stack_angle.sin();
        let v = i as f32 / stacks as f32 * repeat_factor;

        for j in 0..=slices {
            let slice_angle = 2.0 * PI * j as f32 / slices as f32;
            let position = [ring * slice_angle.cos(), y, ring * slice_angle.sin()];
            // centred on the origin, so the position is the outward direction
            let normal: [f32; 3] = Vector3::from(position).normalize().into();
            let u = j as f32 / slices as f32 * repeat_factor;
            vertices.push(Vertex::new(position, normal, [u, v]));
        }
    }

    let triangles = 2 * (stacks as usize - 1) * slices as usize;
    let mut indices = Vec::with_capacity(3 * triangles);
    for i in 0..stacks {
        let upper = i * columns;
        let lower = upper + columns;
        for j in 0..slices {
            let (k1, k2) = (upper + j, lower + j);
            if i != 0 {
                indices.extend_from_slice(&[k1, k1 + 1, k2]);
            }
            if i != stacks - 1 {
                indices.extend_from_slice(&[k1 + 1, k2 + 1, k2]);
            }
        }
    }

    let textures = diffuse_textures(loader, source);
    Ok(finish(Primitive::Sphere, vertices, indices, textures))
}
