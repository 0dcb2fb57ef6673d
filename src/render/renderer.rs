//! Render-mode dispatch and bundle assembly.

use super::bundle::{
    EdgeLines, Markers, MeshSurface, ModeGeometry, Positions, RenderBundle, SceneLayout,
};
use super::constants::{LINE_MODE_COLOR, MESH_COLORSCALE, MESH_OPACITY};
use super::edges::EdgeGeometry;
use super::height::adjust_height;
use super::hover::hover_texts;
use super::options::{RenderMode, RenderOptions};
use super::style::NodeStyles;
use crate::error::AppError;
use crate::materials::MaterialTables;
use crate::models::GraphNode;

/// Assembles render bundles from a node list.
///
/// Holds only the read-only material tables; every call is independent.
#[derive(Debug, Clone, Copy)]
pub struct GraphRenderer<'a> {
    tables: &'a MaterialTables,
}

impl<'a> GraphRenderer<'a> {
    pub fn new(tables: &'a MaterialTables) -> Self {
        Self { tables }
    }

    /// Build the bundle for `options.mode`.
    ///
    /// Heights are used as given; see [`render_nodes`] for the full pipeline.
    pub fn render(&self, nodes: &[GraphNode], options: &RenderOptions) -> RenderBundle {
        tracing::info!("Generating 3D {} plot", options.mode);

        let positions = Positions {
            x: nodes.iter().map(|n| n.x.get()).collect(),
            y: nodes.iter().map(|n| n.y.get()).collect(),
            z: nodes.iter().map(|n| n.z.get()).collect(),
        };

        let edges = EdgeGeometry::for_display(nodes, options.show_links());
        let hover_text = hover_texts(nodes, options.sections);
        let styles = NodeStyles::resolve(nodes, self.tables, options.size_scale);

        let geometry = match options.mode {
            RenderMode::Scatter => ModeGeometry::Scatter {
                symbol: options.symbol,
            },
            // Symbol is ignored outside scatter mode
            RenderMode::Surface => ModeGeometry::Surface,
            RenderMode::Line => ModeGeometry::Line {
                line_color: LINE_MODE_COLOR,
            },
            RenderMode::Mesh => ModeGeometry::Mesh(MeshSurface {
                opacity: MESH_OPACITY,
                intensity: (0..nodes.len()).collect(),
                colorscale: MESH_COLORSCALE,
                cmin: 0,
                cmax: nodes.len().saturating_sub(1),
            }),
        };

        let edges = options.show_links().then(|| EdgeLines::new(edges));
        tracing::debug!(
            "Bundle has {} nodes, {} edge segments",
            nodes.len(),
            edges.as_ref().map_or(0, |e| e.geometry.segment_count())
        );

        let bundle = RenderBundle {
            positions,
            markers: Markers::new(styles.colors, styles.sizes),
            hover_text,
            geometry,
            edges,
            layout: SceneLayout::default(),
        };

        tracing::info!("3D {} plot generated successfully", options.mode);
        bundle
    }

    /// Build the bundle for a mode given by name, overriding `options.mode`.
    ///
    /// An unrecognized name is logged and reported as [`AppError::InvalidMode`];
    /// the caller should show nothing for this cycle.
    pub fn render_named(
        &self,
        nodes: &[GraphNode],
        mode: &str,
        options: &RenderOptions,
    ) -> Result<RenderBundle, AppError> {
        let mode: RenderMode = mode.parse().inspect_err(|e| tracing::error!("{}", e))?;
        let options = RenderOptions {
            mode,
            ..options.clone()
        };
        Ok(self.render(nodes, &options))
    }
}

/// Full pipeline: height adjustment, then bundle assembly.
pub fn render_nodes(
    nodes: Vec<GraphNode>,
    options: &RenderOptions,
    tables: &MaterialTables,
) -> RenderBundle {
    let nodes = adjust_height(nodes, options.keep_height);
    GraphRenderer::new(tables).render(&nodes, options)
}
