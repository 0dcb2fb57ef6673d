//! Adjacency lists to independent line segments.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{GraphNode, NodeId};

/// Pen-up marker. Breaks the polyline so unrelated segments stay apart.
pub const PEN_UP: Option<f64> = None;

/// Flat segment coordinates: `from, to, PEN_UP` per drawn edge.
///
/// The three sequences always have equal length. An edge listed on both
/// endpoints is drawn twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdgeGeometry {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
    pub z: Vec<Option<f64>>,
}

impl EdgeGeometry {
    /// Build segments for every resolvable edge. Dangling ids are skipped.
    pub fn build(nodes: &[GraphNode]) -> Self {
        // Index by identity; the first node wins if ids repeat
        let mut by_id: HashMap<&NodeId, &GraphNode> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            by_id.entry(&node.id).or_insert(node);
        }

        let mut geometry = Self::default();
        let mut skipped = 0usize;
        for source in nodes {
            for target_id in &source.edges {
                match by_id.get(target_id) {
                    Some(target) => geometry.push_segment(source, target),
                    None => skipped += 1,
                }
            }
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} edges with unknown target ids", skipped);
        }
        geometry
    }

    /// Build segments only when links are shown; otherwise skip the scan entirely.
    pub fn for_display(nodes: &[GraphNode], show_links: bool) -> Self {
        if show_links {
            Self::build(nodes)
        } else {
            Self::default()
        }
    }

    /// Number of drawn segments.
    pub fn segment_count(&self) -> usize {
        self.x.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    fn push_segment(&mut self, from: &GraphNode, to: &GraphNode) {
        self.x.extend([Some(from.x.get()), Some(to.x.get()), PEN_UP]);
        self.y.extend([Some(from.y.get()), Some(to.y.get()), PEN_UP]);
        self.z.extend([Some(from.z.get()), Some(to.z.get()), PEN_UP]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Vec<GraphNode> {
        vec![
            GraphNode::new(1, 0.0, 0.0, 0.0)
                .with_material("A")
                .with_edges([2]),
            GraphNode::new(2, 1.0, 1.0, 1.0).with_material("B"),
        ]
    }

    #[test]
    fn test_single_edge_segment() {
        let geometry = EdgeGeometry::for_display(&pair(), true);
        let expected = vec![Some(0.0), Some(1.0), None];
        assert_eq!(geometry.x, expected);
        assert_eq!(geometry.y, expected);
        assert_eq!(geometry.z, expected);
        assert_eq!(geometry.segment_count(), 1);
    }

    #[test]
    fn test_hidden_links_yield_nothing() {
        assert!(EdgeGeometry::for_display(&pair(), false).is_empty());
    }

    #[test]
    fn test_no_edges_is_empty() {
        let nodes = vec![
            GraphNode::new(1, 0.0, 0.0, 0.0),
            GraphNode::new(2, 5.0, 5.0, 5.0),
        ];
        let geometry = EdgeGeometry::build(&nodes);
        assert!(geometry.x.is_empty() && geometry.y.is_empty() && geometry.z.is_empty());
    }

    #[test]
    fn test_dangling_edges_are_skipped() {
        let nodes = vec![
            GraphNode::new(1, 0.0, 0.0, 0.0).with_edges([2, 99]),
            GraphNode::new(2, 1.0, 2.0, 3.0).with_edges([1000]),
        ];
        let geometry = EdgeGeometry::build(&nodes);
        assert_eq!(geometry.segment_count(), 1);
        assert_eq!(geometry.z, vec![Some(0.0), Some(3.0), None]);
    }

    #[test]
    fn test_lookup_is_by_id_not_position() {
        let nodes = vec![
            GraphNode::new(10, 0.0, 0.0, 0.0).with_edges([30]),
            GraphNode::new(20, 7.0, 7.0, 7.0),
            GraphNode::new(30, 9.0, 8.0, 7.0),
        ];
        let geometry = EdgeGeometry::build(&nodes);
        assert_eq!(geometry.x, vec![Some(0.0), Some(9.0), None]);
    }

    #[test]
    fn test_mutual_edges_are_drawn_twice() {
        let nodes = vec![
            GraphNode::new(1, 0.0, 0.0, 0.0).with_edges([2]),
            GraphNode::new(2, 1.0, 1.0, 1.0).with_edges([1]),
        ];
        let geometry = EdgeGeometry::build(&nodes);
        assert_eq!(geometry.segment_count(), 2);
        assert_eq!(
            geometry.x,
            vec![Some(0.0), Some(1.0), None, Some(1.0), Some(0.0), None]
        );
    }

    #[test]
    fn test_length_is_three_per_edge() {
        let nodes = vec![
            GraphNode::new(1, 0.0, 0.0, 0.0).with_edges([2, 3]),
            GraphNode::new(2, 1.0, 0.0, 0.0).with_edges([3]),
            GraphNode::new(3, 2.0, 0.0, 0.0).with_edges([1, 2]),
        ];
        let total_edges: usize = nodes.iter().map(|n| n.edges.len()).sum();
        let geometry = EdgeGeometry::build(&nodes);
        assert_eq!(geometry.x.len(), 3 * total_edges);
        assert_eq!(geometry.y.len(), geometry.x.len());
        assert_eq!(geometry.z.len(), geometry.x.len());
    }
}
