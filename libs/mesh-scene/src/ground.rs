//! # Ground Grid
//!
//! Square grid of thin cylinders lying in a horizontal (`y = const`) plane.
//! Lines are independent, so they are built in parallel.

use config::constants::GROUND_LINE_RADIUS_RATIO;
use glam::DVec3;
use mesh_kernel::ops::merge::connect_owned;
use mesh_kernel::primitives::cylinder_between;
use mesh_kernel::{Mesh, MeshError, MeshResult};
use rayon::prelude::*;

/// Endpoints of the `2 * (cells + 1)` grid lines centered on `origin`.
///
/// The first `cells + 1` lines run along x at increasing z, the rest run
/// along z at increasing x. All lie in the plane `y = origin.y`.
///
/// # Errors
///
/// [`MeshError::InvalidArgument`] when `cells` is zero.
pub fn ground_lines(origin: DVec3, size: f64, cells: u32) -> MeshResult<Vec<(DVec3, DVec3)>> {
    if cells == 0 {
        return Err(MeshError::invalid_argument("Ground grid needs at least one cell"));
    }
    let half = size / 2.0;
    let offset = |i: u32| -half + size * i as f64 / cells as f64;

    let along_x = (0..=cells).map(|i| {
        let z = offset(i);
        (origin + DVec3::new(-half, 0.0, z), origin + DVec3::new(half, 0.0, z))
    });
    let along_z = (0..=cells).map(|i| {
        let x = offset(i);
        (origin + DVec3::new(x, 0.0, -half), origin + DVec3::new(x, 0.0, half))
    });
    Ok(along_x.chain(along_z).collect())
}

/// Builds one cylinder per grid line, in [`ground_lines`] order.
///
/// # Errors
///
/// [`MeshError::InvalidArgument`] when `cells` is zero; otherwise whatever
/// the cylinder generator reports for `size` and `radial_samples`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_scene::ground_grid;
///
/// let lines = ground_grid(DVec3::ZERO, 4.0, 4, 8).unwrap();
/// assert_eq!(lines.len(), 10);
/// ```
pub fn ground_grid(
    origin: DVec3,
    size: f64,
    cells: u32,
    radial_samples: u32,
) -> MeshResult<Vec<Mesh>> {
    let radius = GROUND_LINE_RADIUS_RATIO * size;

    let lines: Vec<Mesh> = ground_lines(origin, size, cells)?
        .par_iter()
        .map(|&(start, end)| cylinder_between(start, end, radius, radial_samples))
        .collect::<MeshResult<_>>()?;

    tracing::debug!(?origin, size, lines = lines.len(), "generated ground grid");
    Ok(lines)
}

/// The ground grid merged into one mesh.
pub fn ground_grid_mesh(
    origin: DVec3,
    size: f64,
    cells: u32,
    radial_samples: u32,
) -> MeshResult<Mesh> {
    connect_owned(ground_grid(origin, size, cells, radial_samples)?)
}
