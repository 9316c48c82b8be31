//! # Scene Configuration
//!
//! Runtime parameters for the ground and axes layers and the default
//! model color. Every field has a default taken from `config::constants`,
//! so partial documents deserialize.
//!
//! ## Example
//!
//! ```rust
//! use mesh_scene::SceneConfig;
//!
//! let config: SceneConfig = serde_json::from_str(r#"{ "ground_cells": 6 }"#).unwrap();
//! assert_eq!(config.ground_cells, 6);
//! assert_eq!(config.axes_samples, 40);
//! ```

use config::constants::{
    DEFAULT_AXES_SAMPLES, DEFAULT_AXES_SIZE, DEFAULT_GROUND_CELLS, DEFAULT_GROUND_SAMPLES,
    DEFAULT_GROUND_SIZE, DEFAULT_MODEL_COLOR,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Parameters of a [`Scene`](crate::Scene).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Center of the ground grid.
    pub ground_origin: DVec3,
    /// Edge length of the square ground grid.
    pub ground_size: f64,
    /// Cells per side of the ground grid.
    pub ground_cells: u32,
    /// Radial samples of each ground line.
    pub ground_samples: u32,
    /// Where the three axes meet.
    pub axes_origin: DVec3,
    /// Length of each axis arrow.
    pub axes_size: f64,
    /// Radial samples of the axes parts.
    pub axes_samples: u32,
    /// Color used by [`Scene::add_model_default`](crate::Scene::add_model_default).
    pub model_color: [f32; 3],
    /// Initial visibility of the model layer.
    pub show_model: bool,
    /// Initial visibility of the ground layer.
    pub show_ground: bool,
    /// Initial visibility of the axes layer.
    pub show_axes: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ground_origin: DVec3::ZERO,
            ground_size: DEFAULT_GROUND_SIZE,
            ground_cells: DEFAULT_GROUND_CELLS,
            ground_samples: DEFAULT_GROUND_SAMPLES,
            axes_origin: DVec3::ZERO,
            axes_size: DEFAULT_AXES_SIZE,
            axes_samples: DEFAULT_AXES_SAMPLES,
            model_color: DEFAULT_MODEL_COLOR,
            show_model: true,
            show_ground: true,
            show_axes: true,
        }
    }
}
