//! # Mesh Operations
//!
//! Operations that combine meshes: buffer concatenation and the seam to an
//! external boolean (CSG) kernel.

pub mod boolean;
pub mod merge;

pub use boolean::{BooleanKernel, BooleanOp};
pub use merge::{connect, connect_all, connect_owned};
