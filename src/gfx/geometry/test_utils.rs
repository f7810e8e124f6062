//! Shared mesh invariant checks for generator tests

use std::path::{Path, PathBuf};

use cgmath::{InnerSpace, Point3, Vector3};

use super::Mesh;
use crate::gfx::resources::{TextureHandle, TextureLoader, TextureSource};

/// Loader that records requests and hands out a fixed handle
#[derive(Debug, Default)]
pub struct RecordingLoader {
    pub calls: Vec<(PathBuf, bool)>,
}

impl TextureLoader for RecordingLoader {
    fn load_texture(&mut self, path: &Path, gamma_correct: bool) -> TextureHandle {
        self.calls.push((path.to_path_buf(), gamma_correct));
        TextureHandle(7)
    }
}

pub fn source() -> TextureSource {
    TextureSource::new("textures", "label.jpg", false)
}

pub fn assert_indices_valid(mesh: &Mesh) {
    assert_eq!(mesh.indices().len() % 3, 0);
    let max = mesh.indices().iter().copied().max().expect("mesh has no indices");
    assert!((max as usize) < mesh.vertex_count(), "index {max} out of range");
}

pub fn assert_unit_normals(mesh: &Mesh) {
    for (i, v) in mesh.vertices().iter().enumerate() {
        let len = Vector3::from(v.normal).magnitude();
        assert!((len - 1.0).abs() < 1e-5, "normal {i} has length {len}");
    }
}

fn position(mesh: &Mesh, index: u32) -> Point3<f32> {
    Point3::from(mesh.vertices()[index as usize].position)
}

/// Geometric normal of a triangle, unnormalized
pub fn face_normal(mesh: &Mesh, tri: [u32; 3]) -> Vector3<f32> {
    let [a, b, c] = tri.map(|i| position(mesh, i));
    (b - a).cross(c - a)
}

/// Every non-degenerate triangle must face away from `interior`
pub fn assert_outward(mesh: &Mesh, interior: [f32; 3]) {
    let interior = Point3::from(interior);
    for (n, tri) in mesh.triangles().enumerate() {
        let normal = face_normal(mesh, tri);
        if normal.magnitude() < 1e-9 {
            continue;
        }
        let [a, b, c] = tri.map(|i| position(mesh, i));
        let centroid = Point3::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0, (a.z + b.z + c.z) / 3.0);
        assert!(
            normal.dot(centroid - interior) > 0.0,
            "triangle {n} {tri:?} faces inward"
        );
    }
}

/// Runs the invariants shared by every closed solid
pub fn assert_closed_solid(mesh: &Mesh, interior: [f32; 3]) {
    assert_indices_valid(mesh);
    assert_unit_normals(mesh);
    assert_outward(mesh, interior);
}
