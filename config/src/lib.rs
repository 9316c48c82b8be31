//! # Config Crate
//!
//! Centralized configuration constants for the mesh kernel and scene crates.
//! Tolerances, tessellation minimums and the proportions of the compound
//! scene shapes live here so no crate scatters its own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, EPSILON, MIN_RADIAL_SAMPLES};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(approx_zero(value));
//! assert!(value.abs() < EPSILON);
//!
//! let requested = 2;
//! assert!(requested < MIN_RADIAL_SAMPLES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Explicit Resolution**: Nothing here silently picks a sample count for a
//!   primitive; scene defaults are only read by the scene crate
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
