//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_rotation_axis_epsilon_is_small() {
    assert!(ROTATION_AXIS_EPSILON > 0.0);
    assert!(ROTATION_AXIS_EPSILON < 1e-6);
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_min_radial_samples_forms_a_ring() {
    // A ring needs at least 3 points to enclose an area
    assert_eq!(MIN_RADIAL_SAMPLES, 3);
}

#[test]
fn test_min_sphere_samples_has_an_interior_band() {
    assert!(MIN_SPHERE_RADIAL_SAMPLES / 2 >= 2);
    assert!(MIN_SPHERE_RADIAL_SAMPLES >= MIN_RADIAL_SAMPLES);
}

#[test]
fn test_grid_and_polyline_minimums() {
    assert_eq!(MIN_GRID_DIMENSION, 2);
    assert!(MIN_CLOSED_POLYLINE_POINTS > MIN_POLYLINE_POINTS);
}

// =============================================================================
// SCENE PROPORTION TESTS
// =============================================================================

#[test]
fn test_axes_shaft_leaves_room_for_head() {
    assert!(AXES_SHAFT_FRACTION > 0.0);
    assert!(AXES_SHAFT_FRACTION < 1.0);
}

#[test]
fn test_axes_head_wider_than_shaft() {
    // The arrow head must overhang the shaft to read as an arrow
    assert!(AXES_HEAD_RADIUS_RATIO > AXES_SHAFT_RADIUS_RATIO);
}

#[test]
fn test_ground_line_thinner_than_cell() {
    let cell = DEFAULT_GROUND_SIZE / DEFAULT_GROUND_CELLS as f64;
    let radius = DEFAULT_GROUND_SIZE * GROUND_LINE_RADIUS_RATIO;
    assert!(2.0 * radius < cell);
}

#[test]
fn test_scene_default_samples_are_valid() {
    assert!(DEFAULT_AXES_SAMPLES >= MIN_SPHERE_RADIAL_SAMPLES);
    assert!(DEFAULT_GROUND_SAMPLES >= MIN_RADIAL_SAMPLES);
    assert!(DEFAULT_GROUND_CELLS >= 1);
}

#[test]
fn test_default_model_color_in_unit_range() {
    for channel in DEFAULT_MODEL_COLOR {
        assert!((0.0..=1.0).contains(&channel));
    }
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(-5.5, -5.5));
}

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 1.0 - large_diff));
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_exact_zero() {
    assert!(approx_zero(0.0));
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON / 2.0;
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_non_zero_values() {
    assert!(!approx_zero(1.0));
    assert!(!approx_zero(-1.0));
    assert!(!approx_zero(0.1));
}
