//! # Cuboid Primitive
//!
//! Axis-aligned box from a fixed corner and triangle table.


use glam::DVec3;

use super::check_positive;
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::transform::translation;

/// Triangle table keyed to the corner order produced by [`cuboid`]:
/// corners 0-3 ring the `+z` face and 4-7 the `-z` face, both starting at
/// `(-x, -y)` and running counter-clockwise seen from `+z`.
const CUBOID_TRIANGLES: [[u32; 3]; 12] = [
    [5, 4, 7],
    [5, 7, 6],
    [7, 2, 6],
    [7, 3, 2],
    [1, 0, 4],
    [1, 3, 0],
    [5, 6, 2],
    [5, 2, 1],
    [4, 5, 1],
    [1, 2, 3],
    [0, 3, 4],
    [4, 3, 7],
];

/// Creates a box of the given edge lengths centered at the origin.
///
/// # Returns
///
/// A mesh with 8 vertices at `(±sx/2, ±sy/2, ±sz/2)` and 12 triangles
/// (2 per face).
///
/// # Example
///
/// ```rust
/// use mesh_kernel::primitives::cuboid;
/// use glam::DVec3;
///
/// let mesh = cuboid(DVec3::new(2.0, 3.0, 4.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!((mesh.volume() - 24.0).abs() < 1e-9);
/// ```
pub fn cuboid(size: DVec3) -> MeshResult<Mesh> {
    check_positive("Cuboid", "size x", size.x)?;
    check_positive("Cuboid", "size y", size.y)?;
    check_positive("Cuboid", "size z", size.z)?;

    let max = size / 2.0;
    let min = -max;

    let mut mesh = Mesh::with_capacity(8, CUBOID_TRIANGLES.len());

    for z in [max.z, min.z] {
        mesh.add_vertex(DVec3::new(min.x, min.y, z));
        mesh.add_vertex(DVec3::new(max.x, min.y, z));
        mesh.add_vertex(DVec3::new(max.x, max.y, z));
        mesh.add_vertex(DVec3::new(min.x, max.y, z));
    }

    for [a, b, c] in CUBOID_TRIANGLES {
        mesh.add_triangle(a, b, c)?;
    }

    tracing::debug!(?size, "generated cuboid");
    Ok(mesh)
}

/// Creates the axis-aligned box spanning `min` to `max`.
///
/// Built as `cuboid(max - min)` translated to `(min + max) / 2`, so every
/// component of `max` must exceed the matching component of `min`.
pub fn cuboid_between(min: DVec3, max: DVec3) -> MeshResult<Mesh> {
    let mut mesh = cuboid(max - min)?;
    mesh.transform(&translation((min + max) / 2.0));
    Ok(mesh)
}
