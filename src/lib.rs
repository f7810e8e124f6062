// src/lib.rs
//! primgen
//!
//! Procedural mesh generation for textured primitive solids, producing
//! vertex and index buffers ready for a wgpu renderer.

pub mod gfx;
pub mod prelude;
