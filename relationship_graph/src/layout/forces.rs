//! Force accumulation for one simulation step.

use crate::config::LayoutConfig;
use crate::graph::GraphNode;

/// Net force on a node for the current step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Force {
    pub fx: f64,
    pub fy: f64,
}

/// Inverse-square repulsion between every unordered node pair.
pub fn accumulate_repulsion(nodes: &[GraphNode], forces: &mut [Force], config: &LayoutConfig) {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let mut dx = nodes[i].position.x - nodes[j].position.x;
            let mut dy = nodes[i].position.y - nodes[j].position.y;

            // Coincident nodes get an arbitrary but fixed axis to split along.
            if dx == 0.0 && dy == 0.0 {
                dx = 1.0;
                dy = 0.0;
            }

            let dist_sq = dx * dx + dy * dy + config.epsilon;
            let dist = dist_sq.sqrt();
            let magnitude = config.repulsion_strength / dist_sq;
            let fx = magnitude * dx / dist;
            let fy = magnitude * dy / dist;

            forces[i].fx += fx;
            forces[i].fy += fy;
            forces[j].fx -= fx;
            forces[j].fy -= fy;
        }
    }
}

/// Linear spring attraction along every edge, given as arena index pairs.
pub fn accumulate_attraction(
    nodes: &[GraphNode],
    springs: &[(usize, usize)],
    forces: &mut [Force],
    config: &LayoutConfig,
) {
    for &(source, target) in springs {
        let dx = nodes[target].position.x - nodes[source].position.x;
        let dy = nodes[target].position.y - nodes[source].position.y;

        // k · d along the unit direction is k · (dx, dy).
        let fx = config.attraction_strength * dx;
        let fy = config.attraction_strength * dy;

        forces[source].fx += fx;
        forces[source].fy += fy;
        forces[target].fx -= fx;
        forces[target].fy -= fy;
    }
}
