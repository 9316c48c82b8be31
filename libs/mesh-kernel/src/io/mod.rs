//! # Mesh File I/O
//!
//! Wavefront OBJ reading and writing.

pub mod obj;

pub use obj::{load_obj, read_obj, save_obj, write_obj};
