//! Relationship graph - nodes for campaign entities, edges for the
//! `[[wiki-links]]` between them.
//!
//! The graph consists of:
//! - **Nodes**: One per entity, addressed by index in an arena
//! - **Edges**: One per linked entity pair, weighted by mutual mentions
//! - **Importance**: Node degree, driving the rendered radius

mod builder;
mod campaign_graph;
mod importance;
mod links;
mod model;
mod scoring;

pub use builder::*;
pub use campaign_graph::*;
pub use importance::*;
pub use links::*;
pub use model::*;
pub use scoring::*;
