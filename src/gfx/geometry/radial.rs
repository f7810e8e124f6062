//! # Radial Primitives
//!
//! Shapes built from rings of vertices sampled at uniform angles around the
//! Y axis: the shaker cap disc, the octagonal shaker body and the cylinder.
//! Rings are sampled at `(r·cosθ, y, r·sinθ)` with θ increasing, which runs
//! clockwise when seen from above, so fans facing +Y list the next rim vertex
//! before the current one.

use std::f32::consts::PI;

use cgmath::{InnerSpace, Vector3};

use super::params::{validate_repeat_factor, CylinderParams, DiscCapParams, PrismParams};
use super::{diffuse_textures, finish, GeometryError, Mesh, Primitive, Vertex};
use crate::gfx::resources::{TextureLoader, TextureSource};

const UP: [f32; 3] = [0.0, 1.0, 0.0];
const DOWN: [f32; 3] = [0.0, -1.0, 0.0];

/// Single texel sampled by flat-coloured caps
const CAP_UV: [f32; 2] = [0.5, 0.5];

/// Point on a ring of `count` samples, as `(x, z)`
fn ring_point(radius: f32, index: u32, count: u32) -> (f32, f32) {
    let angle = 2.0 * PI * index as f32 / count as f32;
    (radius * angle.cos(), radius * angle.sin())
}

fn radial_normal(x: f32, z: f32) -> [f32; 3] {
    Vector3::new(x, 0.0, z).normalize().into()
}

/// Projects an `(x, z)` offset into disc UV space
fn disc_uv(x: f32, z: f32) -> [f32; 2] {
    [x * 0.5 + 0.5, z * 0.5 + 0.5]
}

/// Generate the circular shaker cap with default dimensions.
///
/// No repeat factor: UVs are disc-projected rather than tiled.
pub fn generate_disc_cap<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
) -> Result<Mesh, GeometryError> {
    generate_disc_cap_with(loader, source, &DiscCapParams::default())
}

/// Generate a disc cap from explicit parameters.
///
/// Each face is a ring of `segments` rim vertices followed by one hub vertex
/// in slot `segments`; the hub anchors that face's triangle fan. The side wall
/// joins the two rims directly, so the mesh has `2 * (segments + 1)` vertices.
pub fn generate_disc_cap_with<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    params: &DiscCapParams,
) -> Result<Mesh, GeometryError> {
    params.validate()?;
    let n = params.segments;

    let mut vertices = Vec::with_capacity(2 * (n as usize + 1));
    push_disc_face(&mut vertices, params, params.height, UP);
    push_disc_face(&mut vertices, params, 0.0, DOWN);

    let top_hub = n;
    let bottom = n + 1;
    let bottom_hub = bottom + n;

    let mut indices = Vec::with_capacity(12 * n as usize);
    for i in 0..n {
        indices.extend_from_slice(&[top_hub, (i + 1) % n, i]);
    }
    for i in 0..n {
        indices.extend_from_slice(&[bottom_hub, bottom + i, bottom + (i + 1) % n]);
    }
    for i in 0..n {
        let next = (i + 1) % n;
        let (t0, t1) = (i, next);
        let (b0, b1) = (bottom + i, bottom + next);
        indices.extend_from_slice(&[b0, t0, b1, t0, t1, b1]);
    }

    let textures = diffuse_textures(loader, source);
    Ok(finish(Primitive::DiscCap, vertices, indices, textures))
}

fn push_disc_face(vertices: &mut Vec<Vertex>, params: &DiscCapParams, y: f32, normal: [f32; 3]) {
    for i in 0..params.segments {
        let (x, z) = ring_point(params.radius, i, params.segments);
        vertices.push(Vertex::new([x, y, z], normal, disc_uv(x, z)));
    }
    // hub
    vertices.push(Vertex::new([0.0, y, 0.0], normal, disc_uv(0.0, 0.0)));
}

/// Generate the octagonal shaker body with default dimensions.
pub fn generate_prism<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    repeat_factor: f32,
) -> Result<Mesh, GeometryError> {
    generate_prism_with(loader, source, repeat_factor, &PrismParams::default())
}

/// Generate an octagonal prism from explicit parameters.
///
/// Side vertices come in bottom/top pairs; U advances by `repeat_factor / 8`
/// per side so the label wraps around the body. Bottom and top centre
/// vertices follow the 16 side vertices.
pub fn generate_prism_with<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    repeat_factor: f32,
    params: &PrismParams,
) -> Result<Mesh, GeometryError> {
    validate_repeat_factor(repeat_factor)?;
    params.validate()?;

    let sides = PrismParams::SIDES;
    let u_step = repeat_factor / sides as f32;

    let mut vertices = Vec::with_capacity(2 * sides as usize + 2);
    for i in 0..sides {
        let (x, z) = ring_point(params.radius, i, sides);
        let normal = radial_normal(x, z);
        let u = u_step * i as f32;
        vertices.push(Vertex::new([x, 0.0, z], normal, [u, 0.0]));
        vertices.push(Vertex::new([x, params.height, z], normal, [u, repeat_factor]));
    }

    let bottom_center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, 0.0, 0.0], DOWN, CAP_UV));
    let top_center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, params.height, 0.0], UP, CAP_UV));

    let mut indices = Vec::with_capacity(12 * sides as usize);
    for i in 0..sides {
        let (b0, t0) = (2 * i, 2 * i + 1);
        let b1 = 2 * ((i + 1) % sides);
        let t1 = b1 + 1;
        indices.extend_from_slice(&[b0, t0, b1, t0, t1, b1]);
    }
    for i in 0..sides {
        indices.extend_from_slice(&[bottom_center, 2 * i, 2 * ((i + 1) % sides)]);
    }
    for i in 0..sides {
        indices.extend_from_slice(&[top_center, 2 * ((i + 1) % sides) + 1, 2 * i + 1]);
    }

    let textures = diffuse_textures(loader, source);
    Ok(finish(Primitive::Prism, vertices, indices, textures))
}

/// Generate a 36-sector cylinder of radius 0.5 spanning y = -0.5..0.5.
pub fn generate_cylinder<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    repeat_factor: f32,
) -> Result<Mesh, GeometryError> {
    generate_cylinder_with(loader, source, repeat_factor, &CylinderParams::default())
}

/// Generate a cylinder from explicit parameters.
///
/// Vertex layout:
/// - `0..2N`: side vertices, top then bottom for each sector
/// - `2N..2N+2`: closing sector back at angle 0, UV `(0, 0)`
/// - top cap centre and `N` perimeter vertices
/// - bottom cap centre and `N` perimeter vertices
///
/// Cap vertices all sample [`CAP_UV`], so caps render as a flat colour.
pub fn generate_cylinder_with<L: TextureLoader + ?Sized>(
    loader: &mut L,
    source: &TextureSource,
    repeat_factor: f32,
    params: &CylinderParams,
) -> Result<Mesh, GeometryError> {
    validate_repeat_factor(repeat_factor)?;
    params.validate()?;

    let n = params.sector_count;
    let top = params.half_height;
    let bottom = -params.half_height;

    let mut vertices = Vec::with_capacity(4 * (n as usize + 1));
    for i in 0..n {
        let (x, z) = ring_point(params.radius, i, n);
        let normal = radial_normal(x, z);
        let u = i as f32 / n as f32 * repeat_factor;
        vertices.push(Vertex::new([x, top, z], normal, [u, 1.0]));
        vertices.push(Vertex::new([x, bottom, z], normal, [u, 0.0]));
    }
    push_closing_sector(&mut vertices, params);

    let mut indices = Vec::with_capacity(12 * n as usize);
    for i in 0..n - 1 {
        let (k1, k2) = (2 * i, 2 * i + 1);
        indices.extend_from_slice(&[k1, k1 + 2, k2, k2, k1 + 2, k2 + 2]);
    }
    // last sector wraps to sector 0
    let (k1, k2) = (2 * (n - 1), 2 * (n - 1) + 1);
    indices.extend_from_slice(&[k1, 0, k2, k2, 0, 1]);

    let top_center = push_cap(&mut vertices, params, top, UP);
    let bottom_center = push_cap(&mut vertices, params, bottom, DOWN);
    for i in 0..n {
        let (p0, p1) = (top_center + 1 + i, top_center + 1 + (i + 1) % n);
        indices.extend_from_slice(&[top_center, p1, p0]);
    }
    for i in 0..n {
        let (p0, p1) = (bottom_center + 1 + i, bottom_center + 1 + (i + 1) % n);
        indices.extend_from_slice(&[bottom_center, p0, p1]);
    }

    let textures = diffuse_textures(loader, source);
    Ok(finish(Primitive::Cylinder, vertices, indices, textures))
}

/// Appends the sector that closes the ring at angle 0.
///
/// It carries UV `(0, 0)` instead of `repeat_factor` so the wrapped label has
/// no visible seam.
fn push_closing_sector(vertices: &mut Vec<Vertex>, params: &CylinderParams) {
    let n = params.sector_count;
    let (x, z) = ring_point(params.radius, n, n);
    let normal = radial_normal(x, z);
    vertices.push(Vertex::new([x, params.half_height, z], normal, [0.0, 0.0]));
    vertices.push(Vertex::new([x, -params.half_height, z], normal, [0.0, 0.0]));
}

/// Appends a cap centre plus its perimeter and returns the centre index
fn push_cap(vertices: &mut Vec<Vertex>, params: &CylinderParams, y: f32, normal: [f32; 3]) -> u32 {
    let center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, y, 0.0], normal, CAP_UV));
    for i in 0..params.sector_count {
        let (x, z) = ring_point(params.radius, i, params.sector_count);
        vertices.push(Vertex::new([x, y, z], normal, CAP_UV));
    }
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::test_utils::{assert_closed_solid, face_normal, source, RecordingLoader};
    use crate::gfx::resources::MemoryTextureLoader;
    use approx::assert_relative_eq;

    #[test]
    fn disc_cap_counts() {
        let cap = generate_disc_cap(&mut RecordingLoader::default(), &source()).unwrap();

        assert_eq!(cap.vertex_count(), 2 * (32 + 1));
        assert_eq!(cap.triangle_count(), 32 * 2 + 32 * 2);
        assert_closed_solid(&cap, [0.0, 0.1, 0.0]);
    }

    #[test]
    fn disc_cap_fans_share_hub() {
        let cap = generate_disc_cap(&mut RecordingLoader::default(), &source()).unwrap();
        let triangles: Vec<_> = cap.triangles().collect();

        for tri in &triangles[..32] {
            assert_eq!(tri[0], 32);
        }
        for tri in &triangles[32..64] {
            assert_eq!(tri[0], 65);
        }
        assert_eq!(cap.vertices()[32].position, [0.0, 0.2, 0.0]);
        assert_eq!(cap.vertices()[65].position, [0.0, 0.0, 0.0]);
        // side wall never touches a hub
        for tri in &triangles[64..] {
            assert!(!tri.contains(&32) && !tri.contains(&65));
        }
    }

    #[test]
    fn disc_cap_uvs_are_disc_projected() {
        let cap = generate_disc_cap(&mut RecordingLoader::default(), &source()).unwrap();

        for v in cap.vertices() {
            assert_relative_eq!(v.tex_coords[0], v.position[0] * 0.5 + 0.5);
            assert_relative_eq!(v.tex_coords[1], v.position[2] * 0.5 + 0.5);
        }
        assert_eq!(cap.vertices()[32].tex_coords, [0.5, 0.5]);
    }

    #[test]
    fn disc_cap_honours_params() {
        let params = DiscCapParams {
            radius: 1.0,
            height: 0.5,
            segments: 6,
        };
        let cap = generate_disc_cap_with(&mut RecordingLoader::default(), &source(), &params).unwrap();

        assert_eq!(cap.vertex_count(), 14);
        assert_eq!(cap.triangle_count(), 24);
        assert_closed_solid(&cap, [0.0, 0.25, 0.0]);
    }

    #[test]
    fn prism_layout() {
        let prism = generate_prism(&mut RecordingLoader::default(), &source(), 5.0).unwrap();

        assert_eq!(prism.vertex_count(), 18);
        assert_eq!(prism.triangle_count(), 32);
        assert_closed_solid(&prism, [0.0, 0.5, 0.0]);

        assert_eq!(prism.vertices()[16].position, [0.0, 0.0, 0.0]);
        assert_eq!(prism.vertices()[17].position, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn prism_label_wraps_horizontally() {
        let prism = generate_prism(&mut RecordingLoader::default(), &source(), 4.0).unwrap();

        for i in 0..8 {
            let bottom = prism.vertices()[2 * i];
            let top = prism.vertices()[2 * i + 1];
            assert_relative_eq!(bottom.tex_coords[0], 0.5 * i as f32);
            assert_eq!(bottom.tex_coords[1], 0.0);
            assert_eq!(top.tex_coords, [bottom.tex_coords[0], 4.0]);
            assert_eq!(bottom.normal, top.normal);
            assert_eq!(bottom.normal[1], 0.0);
        }
    }

    #[test]
    fn prism_sides_face_outward() {
        let prism = generate_prism(&mut RecordingLoader::default(), &source(), 1.0).unwrap();

        for tri in prism.triangles().take(16) {
            let n = face_normal(&prism, tri);
            let radial = prism.vertices()[tri[0] as usize].normal;
            assert!(n.x * radial[0] + n.z * radial[2] > 0.0);
            assert_relative_eq!(n.y, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn cylinder_counts() {
        let cylinder = generate_cylinder(&mut RecordingLoader::default(), &source(), 2.0).unwrap();

        let side = 2 * (36 + 1);
        let caps = 2 * (1 + 36);
        assert_eq!(cylinder.vertex_count(), side + caps);
        assert_eq!(cylinder.triangle_count(), 36 * 2 + 36 * 2);
        assert_closed_solid(&cylinder, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn cylinder_tube_is_closed() {
        let cylinder = generate_cylinder(&mut RecordingLoader::default(), &source(), 2.0).unwrap();
        let side = &cylinder.indices()[..36 * 6];

        // sector 35 joins sector 0
        assert_eq!(&side[35 * 6..], &[70u32, 0, 71, 71, 0, 1]);
        for sector in 0..36u32 {
            assert!(side.contains(&(2 * sector)));
            assert!(side.contains(&(2 * sector + 1)));
        }
    }

    #[test]
    fn cylinder_seam_sector_has_degenerate_uv() {
        let cylinder = generate_cylinder(&mut RecordingLoader::default(), &source(), 2.0).unwrap();
        let vertices = cylinder.vertices();

        for v in &vertices[72..74] {
            assert_eq!(v.tex_coords, [0.0, 0.0]);
        }
        for axis in [0, 2] {
            assert_relative_eq!(vertices[72].position[axis], vertices[0].position[axis], epsilon = 1e-6);
        }
        assert_relative_eq!(vertices[70].tex_coords[0], 35.0 / 36.0 * 2.0);
        assert_eq!(vertices[0].tex_coords, [0.0, 1.0]);
        assert_eq!(vertices[1].tex_coords, [0.0, 0.0]);
    }

    // Flat-coloured caps: every cap vertex samples the same texel.
    #[test]
    fn cylinder_caps_sample_one_texel() {
        let cylinder = generate_cylinder(&mut RecordingLoader::default(), &source(), 2.0).unwrap();

        for v in &cylinder.vertices()[74..] {
            assert_eq!(v.tex_coords, CAP_UV);
        }
        let caps: Vec<_> = cylinder.triangles().skip(72).collect();
        assert_eq!(caps[35], [74, 75, 75 + 35]);
        assert_eq!(caps[71], [111, 112 + 35, 112]);
    }

    #[test]
    fn cylinder_honours_params() {
        let params = CylinderParams {
            radius: 2.0,
            half_height: 1.0,
            sector_count: 3,
        };
        let cylinder = generate_cylinder_with(&mut RecordingLoader::default(), &source(), 1.0, &params).unwrap();

        assert_eq!(cylinder.vertex_count(), 16);
        assert_eq!(cylinder.triangle_count(), 12);
        assert_closed_solid(&cylinder, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn doubling_repeat_factor_doubles_side_uvs() {
        let mut loader = RecordingLoader::default();
        let prisms = (
            generate_prism(&mut loader, &source(), 1.5).unwrap(),
            generate_prism(&mut loader, &source(), 3.0).unwrap(),
        );
        for (a, b) in prisms.0.vertices().iter().zip(prisms.1.vertices()).take(16) {
            assert_eq!([a.tex_coords[0] * 2.0, a.tex_coords[1] * 2.0], b.tex_coords);
        }

        let cylinders = (
            generate_cylinder(&mut loader, &source(), 1.5).unwrap(),
            generate_cylinder(&mut loader, &source(), 3.0).unwrap(),
        );
        for (a, b) in cylinders.0.vertices().iter().zip(cylinders.1.vertices()).take(72) {
            assert_eq!(a.tex_coords[0] * 2.0, b.tex_coords[0]);
            assert_eq!(a.tex_coords[1], b.tex_coords[1]);
        }
    }

    #[test]
    fn missing_texture_still_yields_mesh() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = MemoryTextureLoader::new();
        let source = TextureSource::new(dir.path(), "salt_logo.jpg", false);

        let cylinder = generate_cylinder(&mut loader, &source, 2.0).unwrap();

        assert_eq!(cylinder.textures().len(), 1);
        assert!(cylinder.textures()[0].handle.is_missing());
        assert_eq!(cylinder.textures()[0].source_path, dir.path().join("salt_logo.jpg"));
        assert_eq!(loader.failures(), 1);
        assert_closed_solid(&cylinder, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn invalid_params_skip_texture_load() {
        let mut loader = RecordingLoader::default();
        let cylinder = CylinderParams {
            sector_count: 0,
            ..Default::default()
        };
        let cap = DiscCapParams {
            height: f32::NAN,
            ..Default::default()
        };

        assert!(generate_cylinder_with(&mut loader, &source(), 1.0, &cylinder).is_err());
        assert!(generate_disc_cap_with(&mut loader, &source(), &cap).is_err());
        assert!(generate_prism(&mut loader, &source(), 0.0).is_err());
        assert!(loader.calls.is_empty());
    }
}
