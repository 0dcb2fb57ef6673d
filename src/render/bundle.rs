//! Render bundle: the payload handed to the rendering backend.

use serde::Serialize;

use super::constants::{
    EDGE_LINE_COLOR, MARKER_SIZE_MODE, SCENE_ASPECT_MODE, SCENE_HEIGHT, SCENE_WIDTH,
};
use super::edges::EdgeGeometry;
use super::options::{MarkerSymbol, RenderMode};

/// Node positions in list order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Positions {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Positions {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Per-node marker styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Markers {
    pub colors: Vec<String>,
    pub sizes: Vec<f64>,
    pub size_mode: &'static str,
}

impl Markers {
    pub fn new(colors: Vec<String>, sizes: Vec<f64>) -> Self {
        Self {
            colors,
            sizes,
            size_mode: MARKER_SIZE_MODE,
        }
    }
}

/// Interpolated mesh drawn beneath the markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshSurface {
    pub opacity: f64,
    /// Node position in the list; drives the gradient.
    pub intensity: Vec<usize>,
    pub colorscale: &'static str,
    pub cmin: usize,
    pub cmax: usize,
}

/// Mode-specific geometry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ModeGeometry {
    /// Markers shaped by `symbol`.
    Scatter { symbol: MarkerSymbol },
    /// Markers only.
    Surface,
    /// Markers plus a polyline through nodes in list order.
    Line { line_color: &'static str },
    /// Markers above a translucent mesh.
    Mesh(MeshSurface),
}

impl ModeGeometry {
    pub fn mode(&self) -> RenderMode {
        match self {
            ModeGeometry::Scatter { .. } => RenderMode::Scatter,
            ModeGeometry::Surface => RenderMode::Surface,
            ModeGeometry::Line { .. } => RenderMode::Line,
            ModeGeometry::Mesh(_) => RenderMode::Mesh,
        }
    }
}

/// Adjacency edges drawn as independent segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeLines {
    #[serde(flatten)]
    pub geometry: EdgeGeometry,
    pub line_color: &'static str,
}

impl EdgeLines {
    pub fn new(geometry: EdgeGeometry) -> Self {
        Self {
            geometry,
            line_color: EDGE_LINE_COLOR,
        }
    }
}

/// Axis title wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: &'static str,
}

/// Scene layout shared by every mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub aspect_mode: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            xaxis: Axis { title: "X" },
            yaxis: Axis { title: "Y" },
            zaxis: Axis { title: "Z" },
            aspect_mode: SCENE_ASPECT_MODE,
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
        }
    }
}

/// Everything needed to draw one render cycle.
///
/// All per-node sequences have the same length as the input node list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBundle {
    pub positions: Positions,
    pub markers: Markers,
    pub hover_text: Vec<String>,
    pub geometry: ModeGeometry,
    /// Present only when links are shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<EdgeLines>,
    pub layout: SceneLayout,
}

impl RenderBundle {
    pub fn mode(&self) -> RenderMode {
        self.geometry.mode()
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Serialize for the rendering backend.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
