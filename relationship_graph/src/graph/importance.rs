//! Node importance - degree counts and the visual radius derived from them.

use std::collections::HashMap;

use super::{GraphEdge, GraphNode, NodeId};
use crate::config::RadiusConfig;

/// Number of edges touching `node`.
pub fn degree(node: &NodeId, edges: &[GraphEdge]) -> u32 {
    edges.iter().filter(|edge| edge.touches(node)).count() as u32
}

/// Rendered radius for a node of the given importance.
pub fn radius_for(importance: u32, config: &RadiusConfig) -> f64 {
    let growth = (importance as f64 * config.scale_factor).min(config.importance_cap);
    (config.base_radius + growth).min(config.max_radius)
}

/// Recompute importance and radius for every node from the edge set.
pub fn rank_nodes(nodes: &mut [GraphNode], edges: &[GraphEdge], config: &RadiusConfig) {
    let mut degrees: HashMap<&NodeId, u32> = HashMap::with_capacity(nodes.len());
    for edge in edges {
        *degrees.entry(&edge.source).or_default() += 1;
        *degrees.entry(&edge.target).or_default() += 1;
    }

    for node in nodes.iter_mut() {
        node.importance = degrees.get(&node.id).copied().unwrap_or(0);
        node.radius = radius_for(node.importance, config);
    }
}

/// The `limit` most connected nodes, highest importance first, ties by name.
pub fn most_connected(nodes: &[GraphNode], limit: usize) -> Vec<&GraphNode> {
    let mut ranked: Vec<_> = nodes.iter().collect();
    ranked.sort_by(|a, b| b.importance.cmp(&a.importance).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}
