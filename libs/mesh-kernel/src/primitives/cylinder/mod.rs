//! # Cylinder Primitive
//!
//! Capped cylinder along the x axis, centered at the origin.


use config::constants::{EPSILON, MIN_RADIAL_SAMPLES};
use glam::DVec3;

use super::{check_positive, check_radial_samples, ring_angle};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::transform::{rotation_mapping, translation};

/// Creates a cylinder of the given length and radius along the x axis.
///
/// # Arguments
///
/// * `length` - Distance between the caps, which sit at `x = ±length/2`
/// * `radius` - Ring radius in the y/z plane
/// * `radial_samples` - Vertices per ring (at least 3)
///
/// # Returns
///
/// A mesh with `2n + 2` vertices (the `+x` ring, the `-x` ring, then the
/// `+x` and `-x` cap centers) and `4n` triangles.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::cylinder;
///
/// let mesh = cylinder(2.0, 0.5, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 34);
/// assert_eq!(mesh.triangle_count(), 64);
/// ```
pub fn cylinder(length: f64, radius: f64, radial_samples: u32) -> MeshResult<Mesh> {
    check_positive("Cylinder", "length", length)?;
    check_positive("Cylinder", "radius", radius)?;
    check_radial_samples("Cylinder", radial_samples, MIN_RADIAL_SAMPLES)?;

    let n = radial_samples;
    let half_length = length / 2.0;
    let mut mesh = Mesh::with_capacity(2 * n as usize + 2, 4 * n as usize);

    for x in [half_length, -half_length] {
        for i in 0..n {
            let (cos, sin) = ring_angle(i, n);
            mesh.add_vertex(DVec3::new(x, radius * cos, radius * sin));
        }
    }
    let right_center = mesh.add_vertex(DVec3::new(half_length, 0.0, 0.0));
    let left_center = mesh.add_vertex(DVec3::new(-half_length, 0.0, 0.0));

    for i in 0..n {
        let j = (i + 1) % n;
        let (right_i, right_j) = (i, j);
        let (left_i, left_j) = (i + n, j + n);

        // Side quad
        mesh.add_triangle(right_i, left_j, right_j)?;
        mesh.add_triangle(left_i, left_j, right_i)?;
        // Cap fans
        mesh.add_triangle(right_i, right_j, right_center)?;
        mesh.add_triangle(left_j, left_i, left_center)?;
    }

    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cylinder"
    );
    Ok(mesh)
}

/// Creates a cylinder whose cap centers are `cap_a` and `cap_b`.
///
/// The canonical cylinder is rotated from `+x` onto `cap_b - cap_a` and then
/// moved to the midpoint.
pub fn cylinder_between(
    cap_a: DVec3,
    cap_b: DVec3,
    radius: f64,
    radial_samples: u32,
) -> MeshResult<Mesh> {
    let axis = cap_b - cap_a;
    let length = axis.length();
    if !length.is_finite() || length < EPSILON {
        return Err(MeshError::degenerate(format!(
            "Cylinder cap centers must differ: {:?} and {:?}",
            cap_a, cap_b
        )));
    }

    let mut mesh = cylinder(length, radius, radial_samples)?;
    let placement = translation((cap_a + cap_b) / 2.0) * rotation_mapping(DVec3::X, axis)?;
    mesh.transform(&placement);
    Ok(mesh)
}
