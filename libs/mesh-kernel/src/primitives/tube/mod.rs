//! # Swept Tube
//!
//! Circular tube swept along a 3D polyline, either open (capped at both
//! ends) or closed (the last ring joins the first).


use std::fmt;
use std::str::FromStr;

use config::constants::{
    approx_zero, EPSILON, MIN_CLOSED_POLYLINE_POINTS, MIN_POLYLINE_POINTS, MIN_RADIAL_SAMPLES,
};
use glam::DVec3;

use super::{check_positive, check_radial_samples, ring_angle};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

/// Whether a polyline returns to its first point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// Ends are separate; the tube gets a cap at each end.
    Open,
    /// The last point connects back to the first.
    Closed,
}

impl CurveKind {
    /// Minimum polyline length for this kind of curve.
    pub fn min_points(self) -> usize {
        match self {
            CurveKind::Open => MIN_POLYLINE_POINTS,
            CurveKind::Closed => MIN_CLOSED_POLYLINE_POINTS,
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveKind::Open => write!(f, "open"),
            CurveKind::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for CurveKind {
    type Err = MeshError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(CurveKind::Open),
            "closed" => Ok(CurveKind::Closed),
            other => Err(MeshError::invalid_argument(format!(
                "Unknown curve kind '{}', expected 'open' or 'closed'",
                other
            ))),
        }
    }
}

/// Local frame of one ring.
#[derive(Debug, Clone, Copy)]
struct RingFrame {
    normal: DVec3,
    binormal: DVec3,
}

/// Sweeps a circle of `radius` along `points`.
///
/// Each polyline point gets a ring of `radial_samples` vertices in the
/// plane spanned by its normal and binormal. The tangent is the forward
/// difference to the next point (the backward difference at the end of an
/// open curve, the wrap to the first point on a closed one). The normal is
/// the part of `point - center` orthogonal to the tangent, where `center` is
/// the mean of all points.
///
/// Vertex order is ring by ring; open curves append the first and last
/// polyline points as cap centers.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_kernel::primitives::{swept_tube, CurveKind};
///
/// let points = [DVec3::ZERO, DVec3::X, DVec3::new(2.0, 1.0, 0.0)];
/// let mesh = swept_tube(&points, 0.1, 8, CurveKind::Open).unwrap();
/// assert_eq!(mesh.vertex_count(), 3 * 8 + 2);
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 2 + 2 * 8);
/// ```
pub fn swept_tube(
    points: &[DVec3],
    radius: f64,
    radial_samples: u32,
    kind: CurveKind,
) -> MeshResult<Mesh> {
    check_positive("Tube", "radius", radius)?;
    check_radial_samples("Tube", radial_samples, MIN_RADIAL_SAMPLES)?;
    if points.len() < kind.min_points() {
        return Err(MeshError::invalid_argument(format!(
            "A {} tube needs at least {} points: {}",
            kind,
            kind.min_points(),
            points.len()
        )));
    }

    let frames = ring_frames(points, kind)?;
    let n = radial_samples;
    let m = points.len() as u32;
    let segments = match kind {
        CurveKind::Open => m - 1,
        CurveKind::Closed => m,
    };
    let (cap_vertices, cap_triangles) = match kind {
        CurveKind::Open => (2, 2 * n as usize),
        CurveKind::Closed => (0, 0),
    };
    let mut mesh = Mesh::with_capacity(
        (m * n) as usize + cap_vertices,
        2 * (segments * n) as usize + cap_triangles,
    );

    for (point, frame) in points.iter().zip(&frames) {
        for j in 0..n {
            let (cos, sin) = ring_angle(j, n);
            let offset = frame.normal * cos + frame.binormal * sin;
            mesh.add_vertex(*point + offset * radius);
        }
    }

    for i in 0..segments {
        let ring = i * n;
        let next = (ring + n) % (m * n);
        for j in 0..n {
            let j_next = (j + 1) % n;
            mesh.add_triangle(ring + j, next + j_next, next + j)?;
            mesh.add_triangle(ring + j, ring + j_next, next + j_next)?;
        }
    }

    if kind == CurveKind::Open {
        let start = mesh.add_vertex(points[0]);
        let end = mesh.add_vertex(points[points.len() - 1]);
        let last = (m - 1) * n;
        for j in 0..n {
            let j_next = (j + 1) % n;
            mesh.add_triangle(start, j_next, j)?;
            mesh.add_triangle(end, last + j, last + j_next)?;
        }
    }

    tracing::debug!(
        %kind,
        points = points.len(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated swept tube"
    );
    Ok(mesh)
}

/// Computes the normal/binormal pair of every ring.
fn ring_frames(points: &[DVec3], kind: CurveKind) -> MeshResult<Vec<RingFrame>> {
    let count = points.len();
    let center = points.iter().copied().sum::<DVec3>() / count as f64;
    let mut frames: Vec<RingFrame> = Vec::with_capacity(count);

    for (i, &point) in points.iter().enumerate() {
        let step = if i + 1 < count {
            points[i + 1] - point
        } else {
            match kind {
                CurveKind::Closed => points[0] - point,
                CurveKind::Open => point - points[i - 1],
            }
        };
        let tangent = step.try_normalize().ok_or_else(|| {
            MeshError::degenerate(format!("Tube polyline has a zero-length segment at point {}", i))
        })?;

        let radial = point - center;
        let mut normal = radial - tangent * radial.dot(tangent);
        // Relative to the radial length so tiny curves keep their own frames
        if normal.length() <= radial.length() * EPSILON {
            // Radial direction runs along the tangent; carry the previous frame
            normal = match frames.last() {
                Some(previous) => previous.normal - tangent * previous.normal.dot(tangent),
                None => tangent.any_orthonormal_vector(),
            };
            if approx_zero(normal.length()) {
                normal = tangent.any_orthonormal_vector();
            }
        }
        let normal = normal.normalize();

        frames.push(RingFrame {
            normal,
            binormal: tangent.cross(normal),
        });
    }
    Ok(frames)
}
