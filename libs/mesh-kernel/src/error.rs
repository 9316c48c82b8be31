//! # Mesh Errors
//!
//! Error types for transform construction, mesh generation and mesh I/O.
//!
//! ## Error Policy
//!
//! - Invalid arguments fail fast; no generator emits partial topology
//! - Preconditions that cannot be checked cheaply (closed, consistently wound
//!   input for the volume integrals) are documented, not detected
//! - A failed call never modifies the mesh it was given

use thiserror::Error;

use crate::ops::boolean::BooleanOp;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building transforms or meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// An argument outside the operation's domain (zero-length axis, empty
    /// merge list, too few samples or points).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// Degenerate geometry (non-positive size, coincident endpoints,
    /// zero-length segments).
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What made the geometry degenerate
        message: String,
    },

    /// Grid point count does not match the requested grid shape.
    #[error("Grid size mismatch: {rows}x{cols} grid needs {expected} points, got {points}", expected = grid_point_count(.rows, .cols))]
    GridSizeMismatch {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
        /// Points supplied
        points: usize,
    },

    /// A triangle references a vertex id that does not exist.
    #[error("Triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending triangle
        triangle: usize,
        /// Offending vertex id
        index: u32,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },

    /// A flat buffer whose length is not a whole number of rows.
    #[error("Malformed buffer: {message}")]
    MalformedBuffer {
        /// Which buffer and why
        message: String,
    },

    /// Filesystem error from the OBJ collaborator.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The OBJ reader rejected the input.
    #[error("OBJ parse error: {0}")]
    ObjParse(String),

    /// A boolean kernel reported a failure.
    #[error("Boolean operation '{op}' failed: {message}")]
    BooleanFailed {
        /// The requested operation
        op: BooleanOp,
        /// Message from the kernel
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a malformed buffer error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBuffer {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(op: BooleanOp, message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            op,
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Point count of a `rows x cols` grid, which may not fit in `usize`.
fn grid_point_count(rows: &usize, cols: &usize) -> String {
    rows.checked_mul(*cols)
        .map_or_else(|| format!("more than {}", usize::MAX), |count| count.to_string())
}

/// Result type alias for mesh kernel operations.
pub type MeshResult<T> = Result<T, MeshError>;
