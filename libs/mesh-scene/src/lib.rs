//! # Mesh Scene
//!
//! Scene-level geometry for a mesh viewer: an axes triad, a ground grid,
//! a named color palette and the [`Scene`] context that turns meshes into
//! display records. Nothing here renders; a viewer consumes
//! [`DisplayRecord`]s.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_scene::{Scene, SceneConfig, SceneLayer};
//!
//! let mut scene = Scene::from_config(&SceneConfig::default()).unwrap();
//! assert_eq!(scene.layer_len(SceneLayer::Axes), 7);
//! assert_eq!(scene.layer_len(SceneLayer::Ground), 10);
//!
//! scene.set_layer_visible(SceneLayer::Ground, false);
//! assert!(scene
//!     .records()
//!     .iter()
//!     .filter(|r| r.layer == SceneLayer::Ground)
//!     .all(|r| !r.visible));
//! ```

pub mod axes;
pub mod color;
pub mod ground;
pub mod scene;
pub mod settings;

pub use axes::{axes_triad, axes_triad_mesh};
pub use color::{ColoredMesh, NamedColor};
pub use ground::{ground_grid, ground_grid_mesh, ground_lines};
pub use scene::{DisplayRecord, Scene, SceneLayer};
pub use settings::SceneConfig;
