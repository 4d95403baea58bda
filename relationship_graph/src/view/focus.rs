//! Focus resolver - the connected component around a seed node.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{GraphEdge, GraphNode, GraphView, NodeId};

/// Breadth-first walk over the undirected edges, starting at `seed`.
///
/// Returns every reached id in visit order, seed first. Each id is visited
/// once. A seed no edge touches comes back alone.
pub fn connected_component(seed: &NodeId, edges: &[GraphEdge]) -> Vec<NodeId> {
    let mut adjacency: HashMap<&NodeId, Vec<&NodeId>> = HashMap::new();
    for edge in edges {
        adjacency.entry(&edge.source).or_default().push(&edge.target);
        adjacency.entry(&edge.target).or_default().push(&edge.source);
    }

    let mut visited: HashSet<&NodeId> = HashSet::from([seed]);
    let mut order = vec![seed.clone()];
    let mut queue = VecDeque::from([seed]);

    while let Some(current) = queue.pop_front() {
        for &next in adjacency.get(current).map(Vec::as_slice).unwrap_or(&[]) {
            if visited.insert(next) {
                order.push(next.clone());
                queue.push_back(next);
            }
        }
    }

    order
}

/// The subgraph induced by the seed's connected component.
///
/// Only edges between nodes of `nodes` are walked.
///
/// A seed missing from `nodes` yields an empty view: its component is just
/// the seed id (see [`connected_component`]), but there is no node to render
/// for it, so nothing is drawn. This is the render-level form of the
/// single-id component and never fails.
pub fn focus_subgraph(seed: &NodeId, nodes: &[GraphNode], edges: &[GraphEdge]) -> GraphView {
    let present: HashSet<&NodeId> = nodes.iter().map(|node| &node.id).collect();
    if !present.contains(seed) {
        return GraphView::default();
    }

    let walkable: Vec<GraphEdge> = edges
        .iter()
        .filter(|edge| present.contains(&edge.source) && present.contains(&edge.target))
        .cloned()
        .collect();

    let reached: HashSet<NodeId> = connected_component(seed, &walkable).into_iter().collect();

    let kept_nodes = nodes
        .iter()
        .filter(|node| reached.contains(&node.id))
        .cloned()
        .collect();
    let kept_edges = walkable
        .into_iter()
        .filter(|edge| reached.contains(&edge.source) && reached.contains(&edge.target))
        .collect();

    GraphView::new(kept_nodes, kept_edges)
}

impl GraphView {
    /// [`focus_subgraph`] over this view.
    pub fn focus(&self, seed: &NodeId) -> GraphView {
        focus_subgraph(seed, &self.nodes, &self.edges)
    }
}
