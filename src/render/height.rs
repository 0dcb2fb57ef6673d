//! Optional collapse of the vertical axis.

use super::constants::FLAT_HEIGHT;
use crate::models::GraphNode;

/// Flatten every node onto the ground plane unless `keep_height` is set.
///
/// Only `z` changes. Idempotent for a given flag.
pub fn adjust_height(mut nodes: Vec<GraphNode>, keep_height: bool) -> Vec<GraphNode> {
    if !keep_height {
        for node in &mut nodes {
            node.z = FLAT_HEIGHT.into();
        }
    }
    nodes
}
