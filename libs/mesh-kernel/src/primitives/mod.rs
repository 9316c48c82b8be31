//! # Primitives
//!
//! Mesh generation for canonical solids and surfaces.
//!
//! Every shape is first built in its canonical frame (origin-centered or
//! origin-based, axis-aligned) and the `*_between` / `*_at` overloads place
//! it with a transform. Tessellation density is always an explicit
//! `radial_samples` argument.

pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod sphere;
pub mod surface;
pub mod tube;

pub use cone::{cone, cone_between};
pub use cuboid::{cuboid, cuboid_between};
pub use cylinder::{cylinder, cylinder_between};
pub use sphere::{sphere, sphere_at};
pub use surface::rectangular_surface;
pub use tube::{swept_tube, CurveKind};

use std::f64::consts::TAU;

use crate::error::{MeshError, MeshResult};

/// Rejects sample counts that cannot close a ring.
pub(crate) fn check_radial_samples(shape: &str, radial_samples: u32, min: u32) -> MeshResult<()> {
    if radial_samples < min {
        return Err(MeshError::invalid_argument(format!(
            "{} radial samples must be at least {}: {}",
            shape, min, radial_samples
        )));
    }
    Ok(())
}

/// Rejects non-finite and non-positive dimensions.
pub(crate) fn check_positive(shape: &str, what: &str, value: f64) -> MeshResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "{} {} must be positive: {}",
            shape, what, value
        )));
    }
    Ok(())
}

/// `(cos, sin)` of the `index`-th of `samples` equal steps around a ring.
#[inline]
pub(crate) fn ring_angle(index: u32, samples: u32) -> (f64, f64) {
    let beta = TAU * index as f64 / samples as f64;
    (beta.cos(), beta.sin())
}
