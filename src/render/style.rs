//! Per-node marker color and size.

use crate::materials::MaterialTables;
use crate::models::GraphNode;

/// Marker colors and sizes, one entry per node in list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStyles {
    pub colors: Vec<String>,
    pub sizes: Vec<f64>,
}

impl NodeStyles {
    /// Resolve color from material and size from `radius * size_scale`.
    ///
    /// Sizes are not clamped; zero or negative radii pass through.
    pub fn resolve(nodes: &[GraphNode], tables: &MaterialTables, size_scale: f64) -> Self {
        let (colors, sizes) = nodes
            .iter()
            .map(|node| {
                (
                    tables.color_for_material(&node.material).to_string(),
                    node.radius.get() * size_scale,
                )
            })
            .unzip();

        Self { colors, sizes }
    }
}
