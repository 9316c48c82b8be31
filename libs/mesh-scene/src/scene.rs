//! # Scene Context
//!
//! Holds the display records handed to a viewer, grouped by layer, together
//! with the per-layer visibility flags. Records are always kept in layer
//! order (models, then ground, then axes), whatever order layers are added
//! in.

use config::constants::DEFAULT_MODEL_COLOR;
use glam::DVec3;
use mesh_kernel::{Mesh, MeshResult};
use serde::{Deserialize, Serialize};

use crate::axes::axes_triad;
use crate::color::NamedColor;
use crate::ground::ground_grid;
use crate::settings::SceneConfig;

/// Group a display record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneLayer {
    /// User geometry
    Model,
    /// Ground grid lines
    Ground,
    /// Axes triad parts
    Axes,
}

/// One mesh as the viewer receives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    /// Owning layer
    pub layer: SceneLayer,
    /// Vertex positions, one row per vertex
    pub vertices: Vec<[f64; 3]>,
    /// Triangle vertex ids, one row per triangle
    pub triangles: Vec<[u32; 3]>,
    /// Face color
    pub color: [f32; 3],
    /// Whether the viewer should draw it
    pub visible: bool,
}

/// Per-layer visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LayerVisibility {
    model: bool,
    ground: bool,
    axes: bool,
}

impl LayerVisibility {
    fn get(&self, layer: SceneLayer) -> bool {
        match layer {
            SceneLayer::Model => self.model,
            SceneLayer::Ground => self.ground,
            SceneLayer::Axes => self.axes,
        }
    }

    fn set(&mut self, layer: SceneLayer, visible: bool) {
        match layer {
            SceneLayer::Model => self.model = visible,
            SceneLayer::Ground => self.ground = visible,
            SceneLayer::Axes => self.axes = visible,
        }
    }
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            model: true,
            ground: true,
            axes: true,
        }
    }
}

/// Display records plus layer visibility.
#[derive(Debug, Clone)]
pub struct Scene {
    records: Vec<DisplayRecord>,
    visibility: LayerVisibility,
    model_color: [f32; 3],
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            visibility: LayerVisibility::default(),
            model_color: DEFAULT_MODEL_COLOR,
        }
    }
}

impl Scene {
    /// Creates an empty scene with every layer visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene with the ground and axes layers described by
    /// `config`, using its initial visibility flags.
    pub fn from_config(config: &SceneConfig) -> MeshResult<Self> {
        let mut scene = Self {
            model_color: config.model_color,
            ..Self::new()
        };
        scene.set_layer_visible(SceneLayer::Model, config.show_model);
        scene.set_layer_visible(SceneLayer::Ground, config.show_ground);
        scene.set_layer_visible(SceneLayer::Axes, config.show_axes);
        scene.add_ground(config)?;
        scene.add_axes(config)?;
        Ok(scene)
    }

    /// Adds a model mesh drawn in `color`.
    pub fn add_model(&mut self, mesh: &Mesh, color: impl Into<[f32; 3]>) {
        self.insert(SceneLayer::Model, mesh, color.into());
        tracing::info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "added model to scene"
        );
    }

    /// Adds a model mesh drawn in the scene's default model color.
    pub fn add_model_default(&mut self, mesh: &Mesh) {
        self.add_model(mesh, self.model_color);
    }

    /// Adds one record per ground line, centered on `config.ground_origin`.
    ///
    /// Calling it again adds a second grid (at whatever origin the config
    /// then names).
    pub fn add_ground(&mut self, config: &SceneConfig) -> MeshResult<()> {
        let lines = ground_grid(
            config.ground_origin,
            config.ground_size,
            config.ground_cells,
            config.ground_samples,
        )?;
        let count = lines.len();
        for line in lines {
            self.insert(SceneLayer::Ground, &line, NamedColor::LightGray.rgb());
        }
        tracing::info!(origin = ?config.ground_origin, lines = count, "added ground to scene");
        Ok(())
    }

    /// Adds the seven axes-triad parts at `config.axes_origin`.
    pub fn add_axes(&mut self, config: &SceneConfig) -> MeshResult<()> {
        let parts = axes_triad(config.axes_origin, config.axes_size, config.axes_samples)?;
        let count = parts.len();
        for part in parts {
            self.insert(SceneLayer::Axes, &part.mesh, part.color.rgb());
        }
        tracing::info!(origin = ?config.axes_origin, parts = count, "added axes to scene");
        Ok(())
    }

    /// Shows or hides every record of `layer`, including ones added later.
    pub fn set_layer_visible(&mut self, layer: SceneLayer, visible: bool) {
        self.visibility.set(layer, visible);
        for record in self.records.iter_mut().filter(|r| r.layer == layer) {
            record.visible = visible;
        }
    }

    /// Current visibility of `layer`.
    pub fn is_layer_visible(&self, layer: SceneLayer) -> bool {
        self.visibility.get(layer)
    }

    /// All records, grouped by layer in [`SceneLayer`] order.
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    /// Number of records in `layer`.
    pub fn layer_len(&self, layer: SceneLayer) -> usize {
        self.records.iter().filter(|r| r.layer == layer).count()
    }

    /// Removes every record of `layer`; its visibility flag is kept.
    pub fn clear_layer(&mut self, layer: SceneLayer) {
        self.records.retain(|r| r.layer != layer);
    }

    /// Bounds of every visible record, or `None` when nothing is visible.
    pub fn visible_bounds(&self) -> Option<(DVec3, DVec3)> {
        self.records
            .iter()
            .filter(|r| r.visible)
            .flat_map(|r| r.vertices.iter().map(|&v| DVec3::from_array(v)))
            .fold(None, |bounds, v| match bounds {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }

    fn insert(&mut self, layer: SceneLayer, mesh: &Mesh, color: [f32; 3]) {
        let record = DisplayRecord {
            layer,
            vertices: mesh.vertex_rows(),
            triangles: mesh.triangle_rows(),
            color,
            visible: self.visibility.get(layer),
        };
        let at = self.records.partition_point(|r| r.layer <= layer);
        self.records.insert(at, record);
    }
}
