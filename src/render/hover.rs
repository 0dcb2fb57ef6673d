//! Per-node hover text.

use super::constants::{LINK_SEPARATOR, SECTION_BREAK};
use super::options::HoverSections;
use crate::models::GraphNode;

type SectionFormatter = fn(&GraphNode) -> String;

fn links_section(node: &GraphNode) -> String {
    let ids: Vec<String> = node.edges.iter().map(ToString::to_string).collect();
    format!("Links: {}", ids.join(LINK_SEPARATOR))
}

fn material_section(node: &GraphNode) -> String {
    format!("Material: {}", node.material)
}

fn gamma_radius_section(node: &GraphNode) -> String {
    format!("Gamma: {}{}Radius: {}", node.gamma, SECTION_BREAK, node.radius)
}

fn criteria_section(node: &GraphNode) -> String {
    format!("Criteria: {}", node.criteria_text())
}

/// Sections in display order, paired with whether they are enabled.
fn ordered_sections(sections: HoverSections) -> [(bool, SectionFormatter); 4] {
    [
        (sections.links, links_section),
        (sections.material, material_section),
        (sections.gamma_radius, gamma_radius_section),
        (sections.criteria, criteria_section),
    ]
}

/// Hover text for one node: `Node ID: <id>` followed by the enabled sections.
pub fn hover_text(node: &GraphNode, sections: HoverSections) -> String {
    let mut text = format!("Node ID: {}", node.id);
    for (enabled, format_section) in ordered_sections(sections) {
        if enabled {
            text.push_str(SECTION_BREAK);
            text.push_str(&format_section(node));
        }
    }
    text
}

/// Hover text for every node, in list order.
pub fn hover_texts(nodes: &[GraphNode], sections: HoverSections) -> Vec<String> {
    nodes.iter().map(|node| hover_text(node, sections)).collect()
}
