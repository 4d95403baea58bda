//! Campaign graph - the node arena and edge list for one build.

use std::collections::HashMap;

use super::{rank_nodes, GraphEdge, GraphNode, GraphView, NodeId};
use crate::config::RadiusConfig;

/// What happened when a link was recorded between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// No edge existed for the pair; one was created.
    Created,
    /// The pair already had an edge and the new strength raised its weight.
    Strengthened,
    /// The pair already had an edge at least as strong.
    Unchanged,
    /// One of the indices is out of range, or both are the same node.
    Rejected,
}

/// One graph snapshot.
///
/// Nodes live in an arena addressed by index; the id lookup is kept in sync
/// with it. Nothing here is carried over between builds, and the graph is
/// not serialized: renderers read a [`crate::view::GraphSnapshot`] instead.
#[derive(Debug, Clone, Default)]
pub struct CampaignGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    index: HashMap<NodeId, usize>,
}

impl CampaignGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the arena.
    ///
    /// Returns the node's index, or `None` if a node with the same id is
    /// already present (the existing node is kept).
    pub fn add_node(&mut self, node: GraphNode) -> Option<usize> {
        if self.index.contains_key(&node.id) {
            return None;
        }
        let idx = self.nodes.len();
        self.index.insert(node.id.clone(), idx);
        self.nodes.push(node);
        Some(idx)
    }

    /// Record a link between two nodes by index.
    ///
    /// The existing edge list is scanned for the pair in either direction. A
    /// repeated pair never adds a second edge; it only keeps the larger of
    /// the old and new strength.
    pub fn link(&mut self, source: usize, target: usize, strength: u32) -> LinkOutcome {
        if source == target || source >= self.nodes.len() || target >= self.nodes.len() {
            return LinkOutcome::Rejected;
        }
        let source_id = &self.nodes[source].id;
        let target_id = &self.nodes[target].id;

        if let Some(edge) = self
            .edges
            .iter_mut()
            .find(|edge| edge.connects(source_id, target_id))
        {
            if strength > edge.weight {
                edge.weight = strength;
                return LinkOutcome::Strengthened;
            }
            return LinkOutcome::Unchanged;
        }

        self.edges.push(GraphEdge::new(
            source_id.clone(),
            target_id.clone(),
            strength,
        ));
        LinkOutcome::Created
    }

    /// Recompute importance and radius of every node.
    pub fn rank(&mut self, config: &RadiusConfig) {
        rank_nodes(&mut self.nodes, &self.edges, config);
    }

    /// Get node by ID.
    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Arena index of a node.
    pub fn index_of(&self, id: &NodeId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Exclusive access to the node arena for the layout simulator.
    pub fn nodes_mut(&mut self) -> &mut [GraphNode] {
        &mut self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Split borrow: mutable nodes alongside the (read-only) edges.
    pub fn layout_parts(&mut self) -> (&mut [GraphNode], &[GraphEdge]) {
        (&mut self.nodes, &self.edges)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge joining two nodes, if any.
    pub fn edge_between(&self, a: &NodeId, b: &NodeId) -> Option<&GraphEdge> {
        self.edges.iter().find(|edge| edge.connects(a, b))
    }

    /// All nodes sharing an edge with `id`.
    pub fn neighbors(&self, id: &NodeId) -> Vec<&GraphNode> {
        self.edges
            .iter()
            .filter_map(|edge| edge.other_end(id))
            .filter_map(|other| self.node(other))
            .collect()
    }

    /// Owned copy of the whole graph, for the filter and focus queries.
    pub fn view(&self) -> GraphView {
        GraphView::new(self.nodes.clone(), self.edges.clone())
    }
}
