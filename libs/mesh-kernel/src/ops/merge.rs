//! # Mesh Merge
//!
//! Concatenates meshes into one buffer. Ids of each appended mesh are
//! offset by the vertex count accumulated before it; coincident vertices are
//! never welded, so merged meshes stay disjoint components.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use mesh_kernel::ops::merge::connect;
//! use mesh_kernel::primitives::cuboid;
//!
//! let a = cuboid(DVec3::ONE).unwrap();
//! let b = cuboid(DVec3::splat(2.0)).unwrap();
//! let merged = connect(&a, &b);
//! assert_eq!(merged.vertex_count(), 16);
//! assert_eq!(merged.triangle(12), [8, 10, 9]);
//! ```

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Returns `a` followed by `b`, with `b`'s ids shifted by `a.vertex_count()`.
pub fn connect(a: &Mesh, b: &Mesh) -> Mesh {
    let mut merged = Mesh::with_capacity(
        a.vertex_count() + b.vertex_count(),
        a.triangle_count() + b.triangle_count(),
    );
    merged.merge(a);
    merged.merge(b);
    merged
}

/// Left fold of [`connect`] over `meshes` in order.
///
/// # Errors
///
/// [`MeshError::InvalidArgument`] when `meshes` is empty.
pub fn connect_all(meshes: &[Mesh]) -> MeshResult<Mesh> {
    let (first, rest) = meshes
        .split_first()
        .ok_or_else(|| MeshError::invalid_argument("Cannot connect an empty list of meshes"))?;

    let mut merged = Mesh::with_capacity(
        meshes.iter().map(Mesh::vertex_count).sum(),
        meshes.iter().map(Mesh::triangle_count).sum(),
    );
    merged.merge(first);
    for mesh in rest {
        merged.merge(mesh);
    }

    tracing::debug!(
        parts = meshes.len(),
        vertices = merged.vertex_count(),
        triangles = merged.triangle_count(),
        "connected meshes"
    );
    Ok(merged)
}

/// Same result as [`connect_all`], but takes ownership and frees each part
/// as soon as it has been copied.
pub fn connect_owned(meshes: Vec<Mesh>) -> MeshResult<Mesh> {
    if meshes.is_empty() {
        return Err(MeshError::invalid_argument("Cannot connect an empty list of meshes"));
    }

    let mut merged = Mesh::with_capacity(
        meshes.iter().map(Mesh::vertex_count).sum(),
        meshes.iter().map(Mesh::triangle_count).sum(),
    );
    for mesh in meshes {
        merged.merge(&mesh);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cone, cuboid, sphere};
    use approx::assert_relative_eq;
    use glam::DVec3;

    fn single_triangle(offset: f64) -> Mesh {
        Mesh::from_buffers(
            vec![
                DVec3::new(offset, 0.0, 0.0),
                DVec3::new(offset + 1.0, 0.0, 0.0),
                DVec3::new(offset, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_connect_offsets_second_mesh() {
        let merged = connect(&single_triangle(0.0), &single_triangle(5.0));
        assert_eq!(merged.vertex_count(), 6);
        assert_eq!(merged.triangles(), &[[0, 1, 2], [3, 4, 5]]);
        assert_eq!(merged.vertex(3), DVec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_connect_leaves_inputs_untouched() {
        let a = cuboid(DVec3::ONE).unwrap();
        let b = cuboid(DVec3::ONE).unwrap();
        let before = a.clone();
        let _ = connect(&a, &b);
        assert_eq!(a, before);
    }

    #[test]
    fn test_connect_all_in_order() {
        let parts = vec![
            single_triangle(0.0),
            single_triangle(1.0),
            single_triangle(2.0),
        ];
        let merged = connect_all(&parts).unwrap();
        assert_eq!(merged.vertex_count(), 9);
        assert_eq!(merged.triangles(), &[[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(merged.vertex(6).x, 2.0);
    }

    #[test]
    fn test_connect_all_single_mesh_is_copy() {
        let mesh = sphere(1.0, 8).unwrap();
        let merged = connect_all(std::slice::from_ref(&mesh)).unwrap();
        assert_eq!(merged, mesh);
    }

    #[test]
    fn test_connect_all_empty() {
        assert!(matches!(connect_all(&[]), Err(MeshError::InvalidArgument { .. })));
        assert!(connect_owned(Vec::new()).is_err());
    }

    #[test]
    fn test_volume_is_additive_for_disjoint_parts() {
        let a = cuboid(DVec3::new(1.0, 2.0, 3.0)).unwrap();
        let b = cone(2.0, 1.0, 12).unwrap();
        let merged = connect(&a, &b);
        assert_relative_eq!(merged.volume(), a.volume() + b.volume(), max_relative = 1e-12);
        assert!(merged.validate());
    }

    #[test]
    fn test_connect_owned_matches_borrowed() {
        let parts = vec![cuboid(DVec3::ONE).unwrap(), sphere(0.5, 6).unwrap()];
        let borrowed = connect_all(&parts).unwrap();
        let owned = connect_owned(parts).unwrap();
        assert_eq!(owned, borrowed);
    }
}
