//! # Rectangular Surface
//!
//! Ruled quad mesh over a row-major grid of points.


use config::constants::MIN_GRID_DIMENSION;
use glam::DVec3;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Triangulates a `rows x cols` grid of points stored row by row.
///
/// Point `(i, j)` is `points[i * cols + j]`. Every cell is split along the
/// diagonal from `(i, j + 1)` to `(i + 1, j)`.
///
/// # Errors
///
/// - [`MeshError::InvalidArgument`] when either dimension is below 2
/// - [`MeshError::GridSizeMismatch`] when `points.len() != rows * cols`
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_kernel::primitives::rectangular_surface;
///
/// let points = [
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
/// ];
/// let mesh = rectangular_surface(&points, 2, 2).unwrap();
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
pub fn rectangular_surface(points: &[DVec3], rows: usize, cols: usize) -> MeshResult<Mesh> {
    if rows < MIN_GRID_DIMENSION || cols < MIN_GRID_DIMENSION {
        return Err(MeshError::invalid_argument(format!(
            "Surface grid needs at least {0}x{0} points: {1}x{2}",
            MIN_GRID_DIMENSION, rows, cols
        )));
    }
    if rows.checked_mul(cols) != Some(points.len()) {
        return Err(MeshError::GridSizeMismatch {
            rows,
            cols,
            points: points.len(),
        });
    }

    let mut mesh = Mesh::with_capacity(points.len(), 2 * (rows - 1) * (cols - 1));
    for &point in points {
        mesh.add_vertex(point);
    }

    let stride = cols as u32;
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let id = (i * cols + j) as u32;
            mesh.add_triangle(id, id + stride, id + 1)?;
            mesh.add_triangle(id + 1, id + stride, id + stride + 1)?;
        }
    }

    tracing::debug!(rows, cols, triangles = mesh.triangle_count(), "generated surface");
    Ok(mesh)
}
