//! Domain models for the level graph.

mod node;

pub use node::{GraphNode, MaterialCode, NodeId, Scalar};

use std::path::Path;

use crate::error::AppError;

/// Parse a node list from JSON text.
///
/// `source_name` is only used to label errors.
pub fn parse_nodes(source_name: &str, content: &str) -> Result<Vec<GraphNode>, AppError> {
    serde_json::from_str(content).map_err(|source| AppError::Input {
        source_name: source_name.to_string(),
        source,
    })
}

/// Load a node list from a JSON file produced by the level file parser.
pub fn load_nodes(path: &Path) -> Result<Vec<GraphNode>, AppError> {
    let content = std::fs::read_to_string(path)?;
    let nodes = parse_nodes(&path.display().to_string(), &content)?;
    tracing::debug!("Loaded {} nodes from {}", nodes.len(), path.display());
    Ok(nodes)
}

/// Serialize a node list as pretty JSON.
pub fn nodes_to_json(nodes: &[GraphNode]) -> Result<String, AppError> {
    serde_json::to_string_pretty(nodes).map_err(AppError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nodes_reports_source() {
        let err = parse_nodes("level1.json", r#"[{"id": 1, "x": 0}]"#).unwrap_err();
        assert!(matches!(err, AppError::Input { .. }));
        assert!(err.to_string().contains("level1.json"));
    }

    #[test]
    fn test_export_preserves_input_types() {
        let input = serde_json::json!([
            {"id": 1, "x": 0, "y": 2.5, "z": 7, "material": 12, "gamma": 2, "radius": 3, "edges": [2]},
            {"id": "b", "x": 1.0, "y": 1, "z": 0.5, "material": "12", "gamma": 0.5, "radius": 1.0,
             "criteria": {"team": 2}, "edges": []},
            {"id": 3, "x": 1, "y": 1, "z": 1, "gamma": 0, "radius": 0, "edges": []}
        ]);

        let nodes = parse_nodes("level", &input.to_string()).unwrap();
        let exported: serde_json::Value =
            serde_json::from_str(&nodes_to_json(&nodes).unwrap()).unwrap();

        assert_eq!(exported, input);
    }

    #[test]
    fn test_export_keeps_edges() {
        let nodes = vec![GraphNode::new(1, 1.0, 2.0, 3.0).with_edges([2, 3])];
        let json = nodes_to_json(&nodes).unwrap();
        let parsed = parse_nodes("export", &json).unwrap();
        assert_eq!(parsed, nodes);
    }
}
