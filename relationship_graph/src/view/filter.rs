//! Type filter - restricts a graph to a set of entity kinds.

use std::collections::{BTreeSet, HashSet};

use campaign_records::EntityType;
use serde::{Deserialize, Serialize};

use crate::graph::{GraphEdge, GraphNode, GraphView, NodeId};

/// The entity kinds currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeSelection(BTreeSet<EntityType>);

impl TypeSelection {
    /// Every kind selected.
    pub fn all() -> Self {
        Self(EntityType::ALL.into_iter().collect())
    }

    /// Nothing selected.
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, kind: EntityType) -> bool {
        self.0.contains(&kind)
    }

    pub fn insert(&mut self, kind: EntityType) {
        self.0.insert(kind);
    }

    pub fn remove(&mut self, kind: EntityType) {
        self.0.remove(&kind);
    }

    /// Flip one kind on or off. Returns whether it is now selected.
    pub fn toggle(&mut self, kind: EntityType) -> bool {
        if self.0.remove(&kind) {
            false
        } else {
            self.0.insert(kind);
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityType> + '_ {
        self.0.iter().copied()
    }
}

impl Default for TypeSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<EntityType> for TypeSelection {
    fn from_iter<I: IntoIterator<Item = EntityType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Keep the nodes of the selected kinds and the edges between them.
pub fn filter_by_types(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    selection: &TypeSelection,
) -> GraphView {
    let kept: Vec<GraphNode> = nodes
        .iter()
        .filter(|node| selection.contains(node.entity_type))
        .cloned()
        .collect();

    let ids: HashSet<&NodeId> = kept.iter().map(|node| &node.id).collect();
    let kept_edges = edges
        .iter()
        .filter(|edge| ids.contains(&edge.source) && ids.contains(&edge.target))
        .cloned()
        .collect();

    GraphView::new(kept, kept_edges)
}

impl GraphView {
    /// [`filter_by_types`] over this view.
    pub fn filter_types(&self, selection: &TypeSelection) -> GraphView {
        filter_by_types(&self.nodes, &self.edges, selection)
    }
}
