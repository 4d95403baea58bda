//! Render snapshot - the full replacement node/edge lists sent to the
//! rendering surface after every rebuild, filter or focus change.

use std::collections::BTreeMap;

use campaign_records::EntityType;
use serde::{Deserialize, Serialize};

use crate::graph::{most_connected, EdgeId, GraphEdge, GraphNode, GraphView, NodeId};

/// A node as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderNode {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub importance: u32,
    pub color: String,
    pub label: String,
}

impl From<&GraphNode> for RenderNode {
    fn from(node: &GraphNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            entity_type: node.entity_type,
            x: node.position.x,
            y: node.position.y,
            radius: node.radius,
            importance: node.importance,
            color: node.entity_type.color().to_string(),
            label: node.entity_type.label().to_string(),
        }
    }
}

/// An edge as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: u32,
}

impl From<&GraphEdge> for RenderEdge {
    fn from(edge: &GraphEdge) -> Self {
        Self {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            weight: edge.weight,
        }
    }
}

/// Everything the renderer needs to draw the current graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

impl GraphSnapshot {
    pub fn from_view(view: &GraphView) -> Self {
        Self {
            nodes: view.nodes.iter().map(RenderNode::from).collect(),
            edges: view.edges.iter().map(RenderEdge::from).collect(),
        }
    }

    /// Serialize the snapshot to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn node(&self, id: &NodeId) -> Option<&RenderNode> {
        self.nodes.iter().find(|node| node.id == *id)
    }
}

/// Headline numbers for the stats panel shown beside the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes_by_type: BTreeMap<EntityType, usize>,
    /// Most connected nodes with their importance, highest first.
    pub most_connected: Vec<(NodeId, String, u32)>,
}

impl GraphSummary {
    pub fn from_view(view: &GraphView, top: usize) -> Self {
        let mut nodes_by_type: BTreeMap<EntityType, usize> = BTreeMap::new();
        for node in &view.nodes {
            *nodes_by_type.entry(node.entity_type).or_default() += 1;
        }

        Self {
            node_count: view.nodes.len(),
            edge_count: view.edges.len(),
            nodes_by_type,
            most_connected: most_connected(&view.nodes, top)
                .into_iter()
                .map(|node| (node.id.clone(), node.name.clone(), node.importance))
                .collect(),
        }
    }
}
