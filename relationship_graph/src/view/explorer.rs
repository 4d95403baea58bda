//! Graph explorer - owns the current graph snapshot and the selection state
//! the renderer drives.

use campaign_records::{EntityCollection, EntityType};
use tracing::debug;

use super::{GraphSnapshot, GraphSummary, TypeSelection};
use crate::config::{ConfigResult, GraphConfig};
use crate::graph::{BuildReport, CampaignGraph, GraphBuilder, GraphView, NodeId};
use crate::layout::{LayoutReport, LayoutSimulator};

/// The interaction boundary between the engine and the rendering surface.
///
/// A rebuild discards the previous graph, positions included. Type selection
/// and focus are caller state and survive rebuilds.
pub struct GraphExplorer {
    builder: GraphBuilder,
    simulator: LayoutSimulator,
    graph: CampaignGraph,
    build_report: BuildReport,
    layout_report: LayoutReport,
    selected_types: TypeSelection,
    focus: Option<NodeId>,
}

impl GraphExplorer {
    /// Build and lay out the graph for a collection.
    ///
    /// The configuration is validated first; a padded canvas with no room
    /// left in it is refused rather than laid out out of bounds.
    pub fn new(collection: &EntityCollection, config: GraphConfig) -> ConfigResult<Self> {
        config.validate()?;
        let mut explorer = Self {
            builder: GraphBuilder::new(config.radius),
            simulator: LayoutSimulator::new(config.layout),
            graph: CampaignGraph::new(),
            build_report: BuildReport::default(),
            layout_report: LayoutReport::default(),
            selected_types: TypeSelection::all(),
            focus: None,
        };
        explorer.rebuild(collection);
        Ok(explorer)
    }

    /// Create an explorer with default configuration.
    pub fn with_defaults(collection: &EntityCollection) -> ConfigResult<Self> {
        Self::new(collection, GraphConfig::default())
    }

    /// Replace the graph after the entity collection changed.
    pub fn rebuild(&mut self, collection: &EntityCollection) {
        let (mut graph, build_report) = self.builder.build(collection);
        self.layout_report = self.simulator.layout(&mut graph);
        self.graph = graph;
        self.build_report = build_report;
    }

    pub fn set_selected_types(&mut self, selection: TypeSelection) {
        self.selected_types = selection;
    }

    /// Flip one kind in the type selection. Returns whether it is now shown.
    pub fn toggle_type(&mut self, kind: EntityType) -> bool {
        self.selected_types.toggle(kind)
    }

    pub fn selected_types(&self) -> &TypeSelection {
        &self.selected_types
    }

    /// Enter focus mode on a node, or leave it with `None`.
    pub fn set_focus_node(&mut self, focus: Option<NodeId>) {
        debug!(focus = ?focus, "focus changed");
        self.focus = focus;
    }

    pub fn focus_node(&self) -> Option<&NodeId> {
        self.focus.as_ref()
    }

    /// Move one node to where the user dropped it.
    ///
    /// Returns `false` if the node does not exist in the current graph.
    pub fn drag_node(&mut self, id: &NodeId, x: f64, y: f64) -> bool {
        self.simulator.drag(&mut self.graph, id, x, y)
    }

    pub fn graph(&self) -> &CampaignGraph {
        &self.graph
    }

    pub fn build_report(&self) -> &BuildReport {
        &self.build_report
    }

    pub fn layout_report(&self) -> &LayoutReport {
        &self.layout_report
    }

    /// The graph after the type filter and, if set, the focus.
    pub fn visible(&self) -> GraphView {
        let filtered = self.graph.view().filter_types(&self.selected_types);
        match &self.focus {
            Some(seed) => filtered.focus(seed),
            None => filtered,
        }
    }

    /// Full replacement snapshot for the renderer.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::from_view(&self.visible())
    }

    /// Stats over the whole graph, ignoring filter and focus.
    pub fn summary(&self, top: usize) -> GraphSummary {
        GraphSummary::from_view(&self.graph.view(), top)
    }
}
