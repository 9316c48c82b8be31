//! # Cone Primitive
//!
//! Right circular cone with its base on the `x = 0` plane and the apex on
//! the positive x axis.


use config::constants::{EPSILON, MIN_RADIAL_SAMPLES};
use glam::DVec3;

use super::{check_positive, check_radial_samples, ring_angle};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::transform::{rotation_mapping, translation};

/// Creates a cone whose base is centered at the origin and whose apex is at
/// `(length, 0, 0)`.
///
/// Vertex order is the base ring (`0..n`), the base center (`n`) and the
/// apex (`n + 1`). The `n` base-fan triangles come first, followed by the
/// `n` lateral triangles.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::cone;
///
/// let mesh = cone(2.0, 1.0, 8).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
pub fn cone(length: f64, radius: f64, radial_samples: u32) -> MeshResult<Mesh> {
    check_positive("Cone", "length", length)?;
    check_positive("Cone", "radius", radius)?;
    check_radial_samples("Cone", radial_samples, MIN_RADIAL_SAMPLES)?;

    let n = radial_samples;
    let mut mesh = Mesh::with_capacity(n as usize + 2, 2 * n as usize);

    for i in 0..n {
        let (cos, sin) = ring_angle(i, n);
        mesh.add_vertex(DVec3::new(0.0, radius * cos, radius * sin));
    }
    let base_center = mesh.add_vertex(DVec3::ZERO);
    let apex = mesh.add_vertex(DVec3::new(length, 0.0, 0.0));

    for j in 0..n {
        mesh.add_triangle(base_center, (j + 1) % n, j)?;
    }
    for j in 0..n {
        mesh.add_triangle(apex, j, (j + 1) % n)?;
    }

    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cone"
    );
    Ok(mesh)
}

/// Creates a cone with its base centered at `base` and its apex at `apex`.
pub fn cone_between(base: DVec3, apex: DVec3, radius: f64, radial_samples: u32) -> MeshResult<Mesh> {
    let axis = apex - base;
    let length = axis.length();
    if !length.is_finite() || length < EPSILON {
        return Err(MeshError::degenerate(format!(
            "Cone base and apex must differ: {:?} and {:?}",
            base, apex
        )));
    }

    let mut mesh = cone(length, radius, radial_samples)?;
    mesh.transform(&(translation(base) * rotation_mapping(DVec3::X, axis)?));
    Ok(mesh)
}
