//! # Axes Triad
//!
//! Three colored arrows along `+x`, `+y` and `+z` joined by a hub sphere.
//! Each arrow is a cylinder shaft ending in a cone head.

use config::constants::{
    AXES_HEAD_RADIUS_RATIO, AXES_HUB_RADIUS_RATIO, AXES_SHAFT_FRACTION, AXES_SHAFT_RADIUS_RATIO,
};
use glam::DVec3;
use mesh_kernel::ops::merge::connect_owned;
use mesh_kernel::primitives::{cone_between, cylinder_between, sphere_at};
use mesh_kernel::{Mesh, MeshResult};

use crate::color::{ColoredMesh, NamedColor};

const AXES: [(DVec3, NamedColor); 3] = [
    (DVec3::X, NamedColor::Red),
    (DVec3::Y, NamedColor::Green),
    (DVec3::Z, NamedColor::Blue),
];

/// Builds the seven parts of an axes triad at `origin`.
///
/// Order is x shaft, x head, y shaft, y head, z shaft, z head, hub. Shafts
/// run from `origin` to `0.9 * size` along their axis with radius
/// `0.02 * size`; heads continue to `size` with base radius `0.04 * size`;
/// the hub sphere has radius `0.04 * size`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_scene::{axes_triad, NamedColor};
///
/// let parts = axes_triad(DVec3::ZERO, 2.0, 16).unwrap();
/// assert_eq!(parts.len(), 7);
/// assert_eq!(parts[0].color, NamedColor::Red);
/// ```
pub fn axes_triad(origin: DVec3, size: f64, radial_samples: u32) -> MeshResult<Vec<ColoredMesh>> {
    let shaft_radius = AXES_SHAFT_RADIUS_RATIO * size;
    let head_radius = AXES_HEAD_RADIUS_RATIO * size;
    let hub_radius = AXES_HUB_RADIUS_RATIO * size;

    let mut parts = Vec::with_capacity(2 * AXES.len() + 1);
    for (axis, color) in AXES {
        let shaft_end = origin + axis * (AXES_SHAFT_FRACTION * size);
        let tip = origin + axis * size;

        let shaft = cylinder_between(origin, shaft_end, shaft_radius, radial_samples)?;
        let head = cone_between(shaft_end, tip, head_radius, radial_samples)?;
        parts.push(ColoredMesh::new(shaft, color));
        parts.push(ColoredMesh::new(head, color));
    }
    parts.push(ColoredMesh::new(
        sphere_at(origin, hub_radius, radial_samples)?,
        NamedColor::Gray,
    ));

    tracing::debug!(?origin, size, parts = parts.len(), "generated axes triad");
    Ok(parts)
}

/// The axes triad merged into one mesh.
///
/// The intermediate parts are released as soon as they are copied.
pub fn axes_triad_mesh(origin: DVec3, size: f64, radial_samples: u32) -> MeshResult<Mesh> {
    let parts = axes_triad(origin, size, radial_samples)?;
    connect_owned(parts.into_iter().map(|part| part.mesh).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_kernel::MeshError;

    #[test]
    fn test_triad_part_order_and_colors() {
        let parts = axes_triad(DVec3::ZERO, 2.0, 12).unwrap();
        let colors: Vec<NamedColor> = parts.iter().map(|p| p.color).collect();
        assert_eq!(
            colors,
            [
                NamedColor::Red,
                NamedColor::Red,
                NamedColor::Green,
                NamedColor::Green,
                NamedColor::Blue,
                NamedColor::Blue,
                NamedColor::Gray,
            ]
        );
        for part in &parts {
            assert!(part.mesh.validate());
        }
    }

    #[test]
    fn test_triad_tips_reach_size() {
        let origin = DVec3::new(1.0, 2.0, 3.0);
        let size = 2.0;
        let parts = axes_triad(origin, size, 12).unwrap();
        for (k, (axis, _)) in AXES.iter().enumerate() {
            let (_, max) = parts[2 * k + 1].mesh.bounding_box();
            assert_relative_eq!(max.dot(*axis), (origin + *axis * size).dot(*axis), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_triad_shaft_radius() {
        let parts = axes_triad(DVec3::ZERO, 10.0, 16).unwrap();
        // x shaft: ring vertices sit at 0.02 * size from the x axis
        for v in &parts[0].mesh.vertices()[..32] {
            assert_relative_eq!(v.y.hypot(v.z), 0.2, epsilon = 1e-9);
        }
        let hub = &parts[6].mesh;
        for v in hub.vertices() {
            assert_relative_eq!(v.length(), 0.4, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_merged_triad_counts() {
        let n = 10;
        let parts = axes_triad(DVec3::ZERO, 1.0, n).unwrap();
        let merged = axes_triad_mesh(DVec3::ZERO, 1.0, n).unwrap();
        let vertices: usize = parts.iter().map(|p| p.mesh.vertex_count()).sum();
        let triangles: usize = parts.iter().map(|p| p.mesh.triangle_count()).sum();
        assert_eq!(merged.vertex_count(), vertices);
        assert_eq!(merged.triangle_count(), triangles);
        assert!(merged.validate());
    }

    #[test]
    fn test_triad_rejects_zero_size() {
        let result = axes_triad(DVec3::ZERO, 0.0, 12);
        assert!(matches!(result, Err(MeshError::DegenerateGeometry { .. })));
    }
}
