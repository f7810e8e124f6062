//! Generates the shaker-table startup meshes and logs their sizes.
//!
//! Usage: `mesh_report [TEXTURE_DIR]` (defaults to `textures`). Images are
//! decoded in memory; missing files fall back to the missing-texture handle.

use anyhow::Context;
use env_logger::Env;
use primgen::prelude::*;

/// Logger that defaults to `info` unless the filter variable says otherwise
fn logger_builder(env: Env<'_>) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or("info"))
}

fn startup_requests(dir: &str) -> Vec<PrimitiveRequest> {
    let tex = |file: &str| TextureSource::new(dir, file, false);
    vec![
        PrimitiveRequest::textured("salt shaker cap", Primitive::DiscCap, tex("shaker_cap.jpg"), 1.0),
        PrimitiveRequest::textured("salt shaker body", Primitive::Prism, tex("salt.jpg"), 5.0),
        PrimitiveRequest::textured("pepper shaker cap", Primitive::DiscCap, tex("shaker_cap.jpg"), 1.0),
        PrimitiveRequest::textured("pepper shaker body", Primitive::Prism, tex("black_pepper.jpg"), 5.0),
        PrimitiveRequest::textured("salt container", Primitive::Cylinder, tex("salt_logo.jpg"), 2.0),
        PrimitiveRequest::textured("pepper container", Primitive::PepperCube, tex("pepper_logo.jpg"), 1.0),
        PrimitiveRequest::textured("gem sphere", Primitive::Sphere, tex("sphere_gem.jpg"), 4.0),
        PrimitiveRequest::textured("gem sphere 2", Primitive::Sphere, tex("sphere_gem_2.png"), 4.0),
        PrimitiveRequest::textured("sphere holder", Primitive::Cube, tex("table_top.jpg"), 3.0),
        PrimitiveRequest::textured("table", Primitive::Plane, tex("table_top_2.jpg"), 1.0),
        PrimitiveRequest::untextured("debug cube", Primitive::DebugCube),
    ]
}

fn main() -> anyhow::Result<()> {
    logger_builder(Env::default()).init();

    let dir = std::env::args().nth(1).unwrap_or_else(|| "textures".to_string());
    let mut loader = MemoryTextureLoader::new();

    for request in startup_requests(&dir) {
        let mesh = request
            .generate(&mut loader)
            .with_context(|| format!("generating {}", request.name))?;
        let missing = mesh.textures().iter().filter(|t| t.handle.is_missing()).count();
        log::info!(
            "{:<20} {:>12}: {:>5} vertices, {:>5} triangles, {} texture(s), {} missing",
            request.name,
            request.primitive,
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.textures().len(),
            missing
        );
    }

    log::info!(
        "Decoded {} texture(s), {} failed",
        loader.images().len(),
        loader.failures()
    );
    Ok(())
}
