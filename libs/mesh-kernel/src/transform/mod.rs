//! # Transform Builders
//!
//! Constructors for the affine transforms used to place canonical shapes,
//! plus point/direction application.
//!
//! Transforms are `glam::DAffine3`: a 3×3 linear part and a translation.
//! Composition is `a * b`, which applies `b` first. Placement code builds
//! `translation * rotation` (or `translation * rotation * scaling`) so the
//! shape is scaled, then rotated, then moved.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use mesh_kernel::transform::{apply_point, rotation_about_axis, translation};
//!
//! let rotate = rotation_about_axis(DVec3::Z, std::f64::consts::FRAC_PI_2).unwrap();
//! let place = translation(DVec3::new(1.0, 0.0, 0.0)) * rotate;
//! let p = apply_point(&place, DVec3::X);
//! assert!(p.abs_diff_eq(DVec3::new(1.0, 1.0, 0.0), 1e-12));
//! ```


use std::f64::consts::PI;

use config::constants::{EPSILON, ROTATION_AXIS_EPSILON};
use glam::{DAffine3, DVec3};

use crate::error::{MeshError, MeshResult};

// =============================================================================
// BUILDERS
// =============================================================================

/// Pure translation by `offset`.
pub fn translation(offset: DVec3) -> DAffine3 {
    DAffine3::from_translation(offset)
}

/// Per-axis scaling about the origin.
pub fn scaling(factors: DVec3) -> DAffine3 {
    DAffine3::from_scale(factors)
}

/// Uniform scaling about the origin.
pub fn uniform_scaling(factor: f64) -> DAffine3 {
    scaling(DVec3::splat(factor))
}

/// Rotation by `angle` radians about `axis` through the origin.
///
/// The axis is normalized internally. A zero-length (or non-finite) axis has
/// no defined rotation and is rejected.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_kernel::transform::rotation_about_axis;
///
/// assert!(rotation_about_axis(DVec3::ZERO, 1.0).is_err());
/// ```
pub fn rotation_about_axis(axis: DVec3, angle: f64) -> MeshResult<DAffine3> {
    let axis = unit_direction(axis, "rotation axis")?;
    Ok(DAffine3::from_axis_angle(axis, angle))
}

/// Rotation by `angle` radians about `axis` through `center`.
///
/// Equal to `translation(center) * rotation_about_axis(axis, angle) *
/// translation(-center)`; `center` itself stays fixed.
pub fn rotation_about_center(axis: DVec3, angle: f64, center: DVec3) -> MeshResult<DAffine3> {
    Ok(translation(center) * rotation_about_axis(axis, angle)? * translation(-center))
}

/// Minimal rotation taking the direction of `source` onto the direction of
/// `target`.
///
/// Both directions are normalized first. When they are parallel the result is
/// the identity. When they are anti-parallel every axis perpendicular to
/// `source` gives a valid 180° rotation, so the choice is not unique: the
/// axis is `(0,-1,0) × source`, or `(0,0,1) × source` when `source` lies along
/// the y axis.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_kernel::transform::{apply_direction, rotation_mapping};
///
/// let flip = rotation_mapping(DVec3::X, -DVec3::X).unwrap();
/// assert!(apply_direction(&flip, DVec3::X).abs_diff_eq(-DVec3::X, 1e-12));
/// ```
pub fn rotation_mapping(source: DVec3, target: DVec3) -> MeshResult<DAffine3> {
    let source = unit_direction(source, "source direction")?;
    let target = unit_direction(target, "target direction")?;

    let axis = source.cross(target);
    if axis.length() >= ROTATION_AXIS_EPSILON {
        let angle = source.dot(target).clamp(-1.0, 1.0).acos();
        return rotation_about_axis(axis, angle);
    }

    if source.dot(target) > 0.0 {
        return Ok(DAffine3::IDENTITY);
    }

    let mut half_turn_axis = DVec3::NEG_Y.cross(source);
    if half_turn_axis.length() < ROTATION_AXIS_EPSILON {
        half_turn_axis = DVec3::Z.cross(source);
    }
    tracing::debug!(?source, ?half_turn_axis, "anti-parallel directions, rotating half a turn");
    rotation_about_axis(half_turn_axis, PI)
}

// =============================================================================
// APPLICATION
// =============================================================================

/// Maps a point through the full transform.
#[inline]
pub fn apply_point(transform: &DAffine3, point: DVec3) -> DVec3 {
    transform.transform_point3(point)
}

/// Maps a direction through the linear part only; translation is ignored.
#[inline]
pub fn apply_direction(transform: &DAffine3, direction: DVec3) -> DVec3 {
    transform.transform_vector3(direction)
}

/// Normalizes `v`, rejecting zero-length and non-finite input.
fn unit_direction(v: DVec3, what: &str) -> MeshResult<DVec3> {
    if !v.is_finite() || v.length() < EPSILON {
        return Err(MeshError::invalid_argument(format!(
            "{} must be a finite non-zero vector: {:?}",
            what, v
        )));
    }
    Ok(v.normalize())
}
