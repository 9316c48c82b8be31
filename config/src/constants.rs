//! # Configuration Constants
//!
//! Centralized constants for the mesh kernel. All geometry tolerances,
//! tessellation minimums and scene proportions are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Minimum sample counts that still form closed rings
//! - **Axes Triad**: Proportions of the shaft/head/hub parts
//! - **Ground Grid**: Proportions of the grid lines
//! - **Scene Defaults**: Values the scene context starts from

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and as the lower bound below which a length or an
/// area counts as zero.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Length below which the cross product of two unit directions counts as
/// zero when building a direction-to-direction rotation.
///
/// Below this threshold the directions are treated as parallel or
/// anti-parallel and the rotation axis is chosen explicitly.
///
/// # Example
///
/// ```rust
/// use config::constants::ROTATION_AXIS_EPSILON;
///
/// let sin_angle = (1e-14_f64).sin();
/// assert!(sin_angle < ROTATION_AXIS_EPSILON);
/// ```
pub const ROTATION_AXIS_EPSILON: f64 = 1e-10;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of samples around a ring.
///
/// Fewer than 3 samples cannot enclose an area, so cylinders, cones and
/// swept tubes reject anything below this.
pub const MIN_RADIAL_SAMPLES: u32 = 3;

/// Minimum number of radial samples for a latitude/longitude sphere.
///
/// The sphere uses `samples / 2 - 1` interior latitude bands and needs at
/// least one of them between the poles.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SPHERE_RADIAL_SAMPLES;
///
/// let bands = MIN_SPHERE_RADIAL_SAMPLES / 2 - 1;
/// assert_eq!(bands, 1);
/// ```
pub const MIN_SPHERE_RADIAL_SAMPLES: u32 = 4;

/// Minimum number of rows and of columns of a ruled grid surface.
pub const MIN_GRID_DIMENSION: usize = 2;

/// Minimum number of polyline points for an open swept tube.
pub const MIN_POLYLINE_POINTS: usize = 2;

/// Minimum number of polyline points for a closed swept tube.
///
/// Two points would make the closing segment retrace the first one.
pub const MIN_CLOSED_POLYLINE_POINTS: usize = 3;

// =============================================================================
// AXES TRIAD CONSTANTS
// =============================================================================

/// Fraction of the triad size covered by each axis shaft.
///
/// The arrow head (a cone) spans the remaining fraction up to the full size.
pub const AXES_SHAFT_FRACTION: f64 = 0.9;

/// Shaft cylinder radius as a fraction of the triad size.
pub const AXES_SHAFT_RADIUS_RATIO: f64 = 0.02;

/// Arrow head cone radius as a fraction of the triad size.
pub const AXES_HEAD_RADIUS_RATIO: f64 = 0.04;

/// Hub sphere radius as a fraction of the triad size.
pub const AXES_HUB_RADIUS_RATIO: f64 = 0.04;

// =============================================================================
// GROUND GRID CONSTANTS
// =============================================================================

/// Grid line cylinder radius as a fraction of the grid size.
///
/// # Example
///
/// ```rust
/// use config::constants::GROUND_LINE_RADIUS_RATIO;
///
/// let radius = 4.0 * GROUND_LINE_RADIUS_RATIO;
/// assert!((radius - 0.008).abs() < 1e-12);
/// ```
pub const GROUND_LINE_RADIUS_RATIO: f64 = 0.002;

// =============================================================================
// SCENE DEFAULTS
// =============================================================================

/// Default edge length of the axes triad.
pub const DEFAULT_AXES_SIZE: f64 = 2.0;

/// Default radial sample count for the axes triad parts.
pub const DEFAULT_AXES_SAMPLES: u32 = 40;

/// Default edge length of the square ground grid.
pub const DEFAULT_GROUND_SIZE: f64 = 4.0;

/// Default number of cells along each side of the ground grid.
pub const DEFAULT_GROUND_CELLS: u32 = 4;

/// Default radial sample count for the ground grid lines.
pub const DEFAULT_GROUND_SAMPLES: u32 = 20;

/// Default color for model meshes (light blue, RGB in `[0.0, 1.0]`).
pub const DEFAULT_MODEL_COLOR: [f32; 3] = [0.6, 0.6, 0.9];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
