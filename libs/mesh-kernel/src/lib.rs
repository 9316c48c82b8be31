//! # Mesh Kernel
//!
//! Procedural triangle meshes and the affine transforms that place them.
//!
//! ## Architecture
//!
//! ```text
//! transform (DAffine3 builders)
//!     ↓
//! primitives (canonical shape → placed shape) → Mesh
//!     ↓
//! ops::merge (concatenate) / ops::boolean (external kernel seam)
//!     ↓
//! io::obj (Wavefront OBJ)
//! ```
//!
//! ## Conventions
//!
//! - Positions are `f64` (`glam::DVec3`); triangle ids are `u32`
//! - Triangles are wound counter-clockwise seen from outside, so closed
//!   meshes have positive [`Mesh::volume`]
//! - Generators take their tessellation density as an explicit
//!   `radial_samples` argument and never read global state
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use mesh_kernel::ops::merge::connect;
//! use mesh_kernel::primitives::{cone_between, cylinder_between};
//!
//! let shaft = cylinder_between(DVec3::ZERO, DVec3::new(0.0, 0.0, 0.9), 0.02, 16).unwrap();
//! let head = cone_between(DVec3::new(0.0, 0.0, 0.9), DVec3::Z, 0.04, 16).unwrap();
//! let arrow = connect(&shaft, &head);
//! assert_eq!(arrow.vertex_count(), 34 + 18);
//! ```

pub mod error;
pub mod io;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod transform;

pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
