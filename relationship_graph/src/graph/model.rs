//! Node and edge definitions for the relationship graph.

use campaign_records::{EntityId, EntityType};
use serde::{Deserialize, Serialize};

/// Node identity, `"{entityType}-{entityId}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// The node id owned by a given entity. Stable across rebuilds.
    pub fn for_entity(entity_type: EntityType, entity_id: &EntityId) -> Self {
        Self(format!("{}-{}", entity_type.as_str(), entity_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Edge identity, identical for both orderings of the same endpoint pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl EdgeId {
    pub const SEPARATOR: &'static str = "<->";

    /// Sort the endpoints and join them.
    pub fn canonical(a: &NodeId, b: &NodeId) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self(format!("{}{}{}", low, Self::SEPARATOR, high))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only pointer back to the record a node was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub entity_type: EntityType,
    pub entity_id: EntityId,
}

/// Canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Transient simulation state. Zero outside of a layout run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f64,
    pub vy: f64,
}

/// A campaign entity in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub name: String,
    pub entity_type: EntityType,
    pub data_ref: EntityRef,
    pub position: Position,
    pub velocity: Velocity,
    /// Degree in the current edge set.
    pub importance: u32,
    pub radius: f64,
}

impl GraphNode {
    /// Create an unplaced node for an entity.
    pub fn new(entity_type: EntityType, entity_id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id: NodeId::for_entity(entity_type, &entity_id),
            name: name.into(),
            entity_type,
            data_ref: EntityRef {
                entity_type,
                entity_id,
            },
            position: Position::default(),
            velocity: Velocity::default(),
            importance: 0,
            radius: 0.0,
        }
    }
}

/// An undirected connection between two nodes.
///
/// `source` is the node whose text produced the first link to `target`; the
/// relation itself is symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    /// Connection strength, never below 1.
    pub weight: u32,
}

impl GraphEdge {
    pub fn new(source: NodeId, target: NodeId, weight: u32) -> Self {
        Self {
            id: EdgeId::canonical(&source, &target),
            source,
            target,
            weight: weight.max(1),
        }
    }

    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    /// Whether `node` is one of the endpoints.
    pub fn touches(&self, node: &NodeId) -> bool {
        self.source == *node || self.target == *node
    }

    /// The endpoint opposite `node`, if `node` is an endpoint.
    pub fn other_end(&self, node: &NodeId) -> Option<&NodeId> {
        if self.source == *node {
            Some(&self.target)
        } else if self.target == *node {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// An owned node/edge subset, as produced by the filter and focus queries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphView {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|node| node.id == *id)
    }
}
