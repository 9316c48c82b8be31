//! # Boolean Operations (CSG)
//!
//! Interface to an external solid-geometry kernel. This crate does not
//! compute booleans itself; callers plug in a [`BooleanKernel`] and the
//! convenience functions below route each operation through it.
//!
//! ## Example
//!
//! ```rust
//! use mesh_kernel::ops::boolean::{union, BooleanKernel, BooleanOp};
//! use mesh_kernel::ops::merge::connect;
//! use mesh_kernel::{Mesh, MeshResult};
//!
//! /// Treats union of disjoint solids as plain concatenation.
//! struct Concatenate;
//!
//! impl BooleanKernel for Concatenate {
//!     fn combine(&self, a: &Mesh, b: &Mesh, _op: BooleanOp) -> MeshResult<Mesh> {
//!         Ok(connect(a, b))
//!     }
//! }
//!
//! let result = union(&Concatenate, &Mesh::new(), &Mesh::new()).unwrap();
//! assert!(result.is_empty());
//! ```

use std::fmt;

use crate::error::MeshResult;
use crate::mesh::Mesh;

/// Boolean operation requested from a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    /// Everything inside either operand.
    Union,
    /// Everything inside both operands.
    Intersect,
    /// The first operand with the second removed.
    Minus,
    /// Everything inside exactly one operand.
    Xor,
    /// Both operands with their mutual intersections resolved into shared
    /// edges, keeping all pieces.
    Resolve,
}

impl BooleanOp {
    /// All operations, in declaration order.
    pub const ALL: [BooleanOp; 5] = [
        BooleanOp::Union,
        BooleanOp::Intersect,
        BooleanOp::Minus,
        BooleanOp::Xor,
        BooleanOp::Resolve,
    ];
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BooleanOp::Union => "union",
            BooleanOp::Intersect => "intersect",
            BooleanOp::Minus => "minus",
            BooleanOp::Xor => "xor",
            BooleanOp::Resolve => "resolve",
        };
        f.write_str(name)
    }
}

/// A solid-geometry kernel able to combine two closed meshes.
///
/// Implementations must not modify their inputs and should report kernel
/// failures as [`MeshError::BooleanFailed`](crate::error::MeshError::BooleanFailed).
pub trait BooleanKernel {
    /// Combines `a` and `b` with `op`.
    fn combine(&self, a: &Mesh, b: &Mesh, op: BooleanOp) -> MeshResult<Mesh>;
}

/// Union of `a` and `b`.
pub fn union<K: BooleanKernel + ?Sized>(kernel: &K, a: &Mesh, b: &Mesh) -> MeshResult<Mesh> {
    run(kernel, a, b, BooleanOp::Union)
}

/// Intersection of `a` and `b`.
pub fn intersect<K: BooleanKernel + ?Sized>(kernel: &K, a: &Mesh, b: &Mesh) -> MeshResult<Mesh> {
    run(kernel, a, b, BooleanOp::Intersect)
}

/// `a` with `b` removed.
pub fn minus<K: BooleanKernel + ?Sized>(kernel: &K, a: &Mesh, b: &Mesh) -> MeshResult<Mesh> {
    run(kernel, a, b, BooleanOp::Minus)
}

/// Symmetric difference of `a` and `b`.
pub fn xor<K: BooleanKernel + ?Sized>(kernel: &K, a: &Mesh, b: &Mesh) -> MeshResult<Mesh> {
    run(kernel, a, b, BooleanOp::Xor)
}

/// `a` and `b` resolved against each other.
pub fn resolve<K: BooleanKernel + ?Sized>(kernel: &K, a: &Mesh, b: &Mesh) -> MeshResult<Mesh> {
    run(kernel, a, b, BooleanOp::Resolve)
}

fn run<K: BooleanKernel + ?Sized>(
    kernel: &K,
    a: &Mesh,
    b: &Mesh,
    op: BooleanOp,
) -> MeshResult<Mesh> {
    tracing::debug!(
        %op,
        a_triangles = a.triangle_count(),
        b_triangles = b.triangle_count(),
        "boolean operation"
    );
    kernel.combine(a, b, op)
}
