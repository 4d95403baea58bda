//! View module - per-interaction queries over a laid-out graph and the
//! snapshot handed to the renderer.
//!
//! Filtering and focusing never touch the graph itself; they copy out the
//! subset that should be shown.

mod explorer;
mod filter;
mod focus;
mod snapshot;

pub use explorer::*;
pub use filter::*;
pub use focus::*;
pub use snapshot::*;
