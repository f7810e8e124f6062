//! # Shape Parameters
//!
//! Per-shape constants with their documented defaults. Every generator
//! validates its parameters before touching the texture loader, so a bad
//! configuration fails fast instead of producing NaN normals or an empty mesh.

use super::GeometryError;

/// Fails unless `repeat_factor` is finite and strictly positive.
pub fn validate_repeat_factor(repeat_factor: f32) -> Result<(), GeometryError> {
    positive("repeat_factor", repeat_factor)
}

fn positive(parameter: &'static str, value: f32) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::configuration(
            parameter,
            format!("must be finite and greater than zero, got {value}"),
        ))
    }
}

fn at_least(parameter: &'static str, value: u32, min: u32) -> Result<(), GeometryError> {
    if value >= min {
        Ok(())
    } else {
        Err(GeometryError::configuration(
            parameter,
            format!("must be at least {min}, got {value}"),
        ))
    }
}

/// Fails unless the shape's vertex count is addressable by a `u32` index.
fn addressable(parameter: &'static str, vertex_count: Option<u32>) -> Result<(), GeometryError> {
    match vertex_count {
        Some(_) => Ok(()),
        None => Err(GeometryError::configuration(
            parameter,
            "too large: vertex count does not fit in a u32 index buffer",
        )),
    }
}

/// Circular shaker cap: a short disc with fan-closed faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscCapParams {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

impl Default for DiscCapParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 0.2,
            segments: 32,
        }
    }
}

impl DiscCapParams {
    pub fn validate(&self) -> Result<(), GeometryError> {
        positive("radius", self.radius)?;
        positive("height", self.height)?;
        at_least("segments", self.segments, 3)?;
        addressable("segments", self.vertex_count())
    }

    /// Two rings of rim vertices plus a hub each, `None` on overflow
    pub fn vertex_count(&self) -> Option<u32> {
        self.segments.checked_add(1)?.checked_mul(2)
    }
}

/// Octagonal shaker body. The side count is fixed at eight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrismParams {
    pub radius: f32,
    pub height: f32,
}

impl PrismParams {
    pub const SIDES: u32 = 8;

    pub fn validate(&self) -> Result<(), GeometryError> {
        positive("radius", self.radius)?;
        positive("height", self.height)
    }
}

impl Default for PrismParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
        }
    }
}

/// Smooth cylinder centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderParams {
    pub radius: f32,
    pub half_height: f32,
    pub sector_count: u32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            half_height: 0.5,
            sector_count: 36,
        }
    }
}

impl CylinderParams {
    pub fn validate(&self) -> Result<(), GeometryError> {
        positive("radius", self.radius)?;
        positive("half_height", self.half_height)?;
        at_least("sector_count", self.sector_count, 3)?;
        addressable("sector_count", self.vertex_count())
    }

    /// Side ring with its closing sector plus two fan-closed caps, `None` on overflow
    pub fn vertex_count(&self) -> Option<u32> {
        self.sector_count.checked_add(1)?.checked_mul(4)
    }
}

/// UV sphere centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams {
    pub radius: f32,
    /// Horizontal bands from pole to pole
    pub stacks: u32,
    /// Longitude divisions per band
    pub slices: u32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 0.5,
            stacks: 36,
            slices: 18,
        }
    }
}

impl SphereParams {
    pub fn validate(&self) -> Result<(), GeometryError> {
        positive("radius", self.radius)?;
        at_least("stacks", self.stacks, 2)?;
        at_least("slices", self.slices, 3)?;
        addressable("stacks", self.vertex_count())
    }

    /// `stacks + 1` rings of `slices + 1` vertices, `None` on overflow
    pub fn vertex_count(&self) -> Option<u32> {
        self.stacks.checked_add(1)?.checked_mul(self.slices.checked_add(1)?)
    }
}
