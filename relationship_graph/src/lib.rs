//! # Relationship Graph
//!
//! The engine behind the campaign relationship view. It reads the
//! `[[wiki-links]]` campaign entities write about each other, turns them into
//! a weighted graph, lays that graph out with a force simulation and answers
//! the filter and focus queries the renderer issues.
//!
//! ## Core Components
//!
//! - **graph**: Link extraction, graph building, connection strength and node importance
//! - **layout**: Force-directed placement inside a padded canvas
//! - **view**: Type filter, focus resolver, explorer state and render snapshots
//! - **config**: Canvas, force and sizing settings, loadable from TOML
//!
//! ## Design Philosophy
//!
//! - **Total**: Every graph operation accepts any input; bad links are skipped, never raised
//! - **Rebuilt, not patched**: A changed collection means a new graph
//! - **Snapshot-Driven**: The renderer always receives full replacement node and edge lists

pub mod config;
pub mod graph;
pub mod layout;
pub mod view;

pub use config::*;
pub use graph::*;
pub use layout::*;
pub use view::*;
