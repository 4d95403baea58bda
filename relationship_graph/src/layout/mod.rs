//! Layout Simulator - force-directed placement of graph nodes.
//!
//! Each run works as follows:
//! 1. **Seeding**: Nodes are scattered pseudo-randomly inside the canvas
//! 2. **Repulsion**: Every node pair pushes apart with `k_rep / (d² + ε)`
//! 3. **Attraction**: Every edge pulls its endpoints together with `k_att · d`
//! 4. **Integration**: Forces feed damped velocities, velocities move nodes
//! 5. **Clamping**: Positions are kept inside the padded canvas bounds
//!
//! Repulsion is evaluated for every pair, so a run costs
//! O(iterations · N²). That is fine for campaign-sized graphs in the low
//! hundreds of nodes; larger graphs should set a time budget.

mod forces;

pub use forces::*;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ConfigResult, LayoutConfig};
use crate::graph::{CampaignGraph, GraphEdge, GraphNode, NodeId, Position, Velocity};

/// Summary of one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Steps actually completed.
    pub iterations: u32,
    /// Whether the time budget cut the run short.
    pub stopped_early: bool,
    /// Kinetic energy left in the system when the run ended.
    pub kinetic_energy: f64,
}

/// Runs the force simulation over a node arena.
pub struct LayoutSimulator {
    config: LayoutConfig,
}

impl LayoutSimulator {
    /// Create a new simulator with the given configuration.
    ///
    /// The configuration is trusted as is; use [`LayoutSimulator::try_new`]
    /// for settings that have not been through [`LayoutConfig::validate`].
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Create a simulator after checking that the padded canvas is non-empty.
    pub fn try_new(config: LayoutConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a simulator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(LayoutConfig::default())
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Seed positions, then run the simulation once.
    pub fn layout(&self, graph: &mut CampaignGraph) -> LayoutReport {
        let (nodes, edges) = graph.layout_parts();
        self.seed_positions(nodes);
        self.run(nodes, edges)
    }

    /// Scatter nodes uniformly inside the padded canvas.
    ///
    /// Uses the configured seed when there is one, so seeded layouts repeat
    /// exactly.
    pub fn seed_positions(&self, nodes: &mut [GraphNode]) {
        let mut rng = match self.config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };

        let span_x = (self.config.max_x() - self.config.min_x()).max(0.0);
        let span_y = (self.config.max_y() - self.config.min_y()).max(0.0);

        for node in nodes.iter_mut() {
            node.position = Position::new(
                self.config.min_x() + rng.f64() * span_x,
                self.config.min_y() + rng.f64() * span_y,
            );
            node.velocity = Velocity::default();
        }
    }

    /// Run the configured number of iterations from the current positions.
    ///
    /// Velocities are zeroed when the run ends. Edges naming unknown nodes
    /// are ignored.
    pub fn run(&self, nodes: &mut [GraphNode], edges: &[GraphEdge]) -> LayoutReport {
        let index: HashMap<&NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (&node.id, idx))
            .collect();
        let springs: Vec<(usize, usize)> = edges
            .iter()
            .filter_map(|edge| Some((*index.get(&edge.source)?, *index.get(&edge.target)?)))
            .collect();
        drop(index);

        let budget = self.config.max_duration_ms.map(Duration::from_millis);
        let started = Instant::now();
        let mut report = LayoutReport::default();
        let mut forces = vec![Force::default(); nodes.len()];

        for _ in 0..self.config.iterations {
            if let Some(budget) = budget {
                if started.elapsed() >= budget {
                    report.stopped_early = true;
                    debug!(
                        completed = report.iterations,
                        budget_ms = budget.as_millis() as u64,
                        "layout time budget exhausted"
                    );
                    break;
                }
            }

            forces.iter_mut().for_each(|f| *f = Force::default());
            accumulate_repulsion(nodes, &mut forces, &self.config);
            accumulate_attraction(nodes, &springs, &mut forces, &self.config);
            self.integrate(nodes, &forces);

            report.iterations += 1;
        }

        report.kinetic_energy = kinetic_energy(nodes);
        for node in nodes.iter_mut() {
            node.velocity = Velocity::default();
        }

        info!(
            nodes = nodes.len(),
            edges = springs.len(),
            iterations = report.iterations,
            stopped_early = report.stopped_early,
            "layout finished"
        );

        report
    }

    /// Move a single node to a dragged position, clamped to the canvas.
    ///
    /// Non-finite coordinates keep the node's current value on that axis.
    /// No other node moves and the simulation is not re-run.
    pub fn drag_node(&self, node: &mut GraphNode, x: f64, y: f64) {
        let x = if x.is_finite() { x } else { node.position.x };
        let y = if y.is_finite() { y } else { node.position.y };
        node.position = self.clamp(Position::new(x, y));
        node.velocity = Velocity::default();
    }

    /// Drag a node of a graph by id. Returns `false` if the id is unknown.
    pub fn drag(&self, graph: &mut CampaignGraph, id: &NodeId, x: f64, y: f64) -> bool {
        let Some(idx) = graph.index_of(id) else {
            return false;
        };
        self.drag_node(&mut graph.nodes_mut()[idx], x, y);
        true
    }

    /// Pull a position into the padded canvas bounds.
    pub fn clamp(&self, position: Position) -> Position {
        Position::new(
            position.x.max(self.config.min_x()).min(self.config.max_x()),
            position.y.max(self.config.min_y()).min(self.config.max_y()),
        )
    }

    /// Whether a position lies inside the padded canvas bounds.
    pub fn in_bounds(&self, position: Position) -> bool {
        (self.config.min_x()..=self.config.max_x()).contains(&position.x)
            && (self.config.min_y()..=self.config.max_y()).contains(&position.y)
    }

    fn integrate(&self, nodes: &mut [GraphNode], forces: &[Force]) {
        let damping = self.config.damping;
        for (node, force) in nodes.iter_mut().zip(forces) {
            node.velocity.vx = (node.velocity.vx + force.fx) * damping;
            node.velocity.vy = (node.velocity.vy + force.fy) * damping;

            let moved = Position::new(
                node.position.x + node.velocity.vx,
                node.position.y + node.velocity.vy,
            );
            node.position = self.clamp(moved);
        }
    }
}

impl Default for LayoutSimulator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn kinetic_energy(nodes: &[GraphNode]) -> f64 {
    nodes
        .iter()
        .map(|node| 0.5 * (node.velocity.vx.powi(2) + node.velocity.vy.powi(2)))
        .sum()
}
