//! # Colors
//!
//! Fixed display palette and the mesh/color pairing used by compound
//! generators.

use mesh_kernel::Mesh;
use serde::{Deserialize, Serialize};

/// A palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedColor {
    /// Axis x
    Red,
    /// Orange
    Orange,
    /// Yellow
    Yellow,
    /// Axis y
    Green,
    /// Cyan
    Cyan,
    /// Axis z
    Blue,
    /// Purple
    Purple,
    /// Pink
    Pink,
    /// Brown
    Brown,
    /// Axes hub
    Gray,
    /// Default model color
    LightBlue,
    /// Ground grid
    LightGray,
    /// Light salmon
    LightSalmon,
    /// Black
    Black,
    /// White
    White,
}

impl NamedColor {
    /// Every palette entry, in declaration order.
    pub const ALL: [NamedColor; 15] = [
        NamedColor::Red,
        NamedColor::Orange,
        NamedColor::Yellow,
        NamedColor::Green,
        NamedColor::Cyan,
        NamedColor::Blue,
        NamedColor::Purple,
        NamedColor::Pink,
        NamedColor::Brown,
        NamedColor::Gray,
        NamedColor::LightBlue,
        NamedColor::LightGray,
        NamedColor::LightSalmon,
        NamedColor::Black,
        NamedColor::White,
    ];

    /// Linear RGB components in `[0, 1]`.
    ///
    /// The palette is tuned for a white background, so `Black` and `White`
    /// are tinted rather than pure.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            NamedColor::Red => [0.9, 0.4, 0.4],
            NamedColor::Orange => [0.9, 0.6, 0.4],
            NamedColor::Yellow => [0.9, 0.9, 0.5],
            NamedColor::Green => [0.4, 0.9, 0.4],
            NamedColor::Cyan => [0.4, 0.9, 0.9],
            NamedColor::Blue => [0.4, 0.4, 0.9],
            NamedColor::Purple => [0.7, 0.3, 0.9],
            NamedColor::Pink => [0.5, 0.2, 0.5],
            NamedColor::Brown => [0.4, 0.8, 0.7],
            NamedColor::Gray => [0.6, 0.6, 0.6],
            NamedColor::LightBlue => [0.6, 0.6, 0.9],
            NamedColor::LightGray => [0.8, 0.8, 0.8],
            NamedColor::LightSalmon => [0.9, 0.6, 0.5],
            NamedColor::Black => [0.3, 0.4, 0.7],
            NamedColor::White => [0.6, 0.6, 0.3],
        }
    }
}

impl From<NamedColor> for [f32; 3] {
    fn from(color: NamedColor) -> Self {
        color.rgb()
    }
}

/// A mesh paired with its display color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredMesh {
    /// Geometry
    pub mesh: Mesh,
    /// Display color
    pub color: NamedColor,
}

impl ColoredMesh {
    /// Pairs `mesh` with `color`.
    pub fn new(mesh: Mesh, color: NamedColor) -> Self {
        Self { mesh, color }
    }
}
