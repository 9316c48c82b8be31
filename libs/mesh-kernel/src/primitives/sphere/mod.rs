//! # Sphere Primitive
//!
//! UV sphere built from latitude bands between two poles on the z axis.


use std::f64::consts::{FRAC_PI_2, PI};

use config::constants::MIN_SPHERE_RADIAL_SAMPLES;
use glam::DVec3;

use super::{check_positive, check_radial_samples, ring_angle};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::transform::translation;

/// Creates a sphere of the given radius centered at the origin.
///
/// `radial_samples` is the number of vertices per latitude band; there are
/// `radial_samples / 2 - 1` interior bands, so at least 4 samples are needed.
/// Band vertices come first (top band to bottom band), followed by the
/// `+z` pole and the `-z` pole.
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::sphere;
///
/// // n = 4 gives an octahedron
/// let mesh = sphere(1.0, 4).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn sphere(radius: f64, radial_samples: u32) -> MeshResult<Mesh> {
    check_positive("Sphere", "radius", radius)?;
    check_radial_samples("Sphere", radial_samples, MIN_SPHERE_RADIAL_SAMPLES)?;

    let n = radial_samples;
    let polar = n / 2;
    let bands = polar - 1;
    let mut mesh = Mesh::with_capacity((n * bands) as usize + 2, (2 * n * bands) as usize);

    for i in 1..polar {
        let alpha = FRAC_PI_2 - PI * i as f64 / polar as f64;
        let (ring_radius, z) = (radius * alpha.cos(), radius * alpha.sin());
        for j in 0..n {
            let (cos, sin) = ring_angle(j, n);
            mesh.add_vertex(DVec3::new(ring_radius * cos, ring_radius * sin, z));
        }
    }
    let top = mesh.add_vertex(DVec3::new(0.0, 0.0, radius));
    let bottom = mesh.add_vertex(DVec3::new(0.0, 0.0, -radius));

    // Top fan
    for j in 0..n {
        mesh.add_triangle(top, j, (j + 1) % n)?;
    }

    // Quad strips between consecutive bands
    for i in 1..bands {
        let upper = (i - 1) * n;
        let lower = i * n;
        for j in 0..n {
            let j_next = (j + 1) % n;
            mesh.add_triangle(upper + j, lower + j, upper + j_next)?;
            mesh.add_triangle(lower + j, lower + j_next, upper + j_next)?;
        }
    }

    // Bottom fan
    let last = top - n;
    for j in 0..n {
        mesh.add_triangle(bottom, last + (j + 1) % n, last + j)?;
    }

    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated sphere"
    );
    Ok(mesh)
}

/// Creates a sphere centered at `center`.
pub fn sphere_at(center: DVec3, radius: f64, radial_samples: u32) -> MeshResult<Mesh> {
    let mut mesh = sphere(radius, radial_samples)?;
    mesh.transform(&translation(center));
    Ok(mesh)
}
