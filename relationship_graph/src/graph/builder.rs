//! Graph builder - turns an entity collection into nodes and weighted edges.

use std::collections::HashMap;

use campaign_records::{Entity, EntityCollection};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{extract_entity_links, CampaignGraph, GraphNode, LinkOutcome, MentionCounter};
use crate::config::RadiusConfig;

/// Counters describing one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Records read from the collection.
    pub entities: usize,
    /// Links found in text, before resolution.
    pub links_seen: usize,
    /// Links naming no known entity.
    pub unresolved_links: usize,
    /// Links from an entity to itself.
    pub self_references: usize,
    /// Links to a pair that already had an edge.
    pub duplicate_links: usize,
    /// Display names claimed by more than one entity.
    pub name_collisions: usize,
    /// Records whose node id was already taken.
    pub duplicate_ids: usize,
}

/// Builds a [`CampaignGraph`] from scratch.
pub struct GraphBuilder {
    radius: RadiusConfig,
}

impl GraphBuilder {
    /// Create a new builder with the given sizing configuration.
    pub fn new(radius: RadiusConfig) -> Self {
        Self { radius }
    }

    /// Create a builder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RadiusConfig::default())
    }

    /// Build the graph for an entity collection.
    ///
    /// # Algorithm
    ///
    /// 1. Create one node per entity, in bucket order
    /// 2. Index lower-cased display names; a later entity wins a collision
    /// 3. For every node, extract its links and resolve them by name
    /// 4. Skip unresolved names and self references
    /// 5. Create one edge per pair, keeping the strongest observed strength
    /// 6. Rank nodes by degree
    pub fn build(&self, collection: &EntityCollection) -> (CampaignGraph, BuildReport) {
        let mut graph = CampaignGraph::new();
        let mut report = BuildReport::default();

        // Step 1 & 2: nodes and the name index
        let mut members: Vec<(usize, Entity, String)> = Vec::with_capacity(collection.len());
        let mut name_index: HashMap<String, usize> = HashMap::new();

        for entity in collection.iter() {
            report.entities += 1;

            let node = GraphNode::new(entity.entity_type(), entity.id().clone(), entity.name());
            let Some(idx) = graph.add_node(node) else {
                warn!(
                    entity_type = %entity.entity_type(),
                    entity_id = %entity.id(),
                    "duplicate entity id, record skipped"
                );
                report.duplicate_ids += 1;
                continue;
            };

            if let Some(previous) = name_index.insert(entity.name().to_lowercase(), idx) {
                warn!(
                    name = entity.name(),
                    replaced = %graph.nodes()[previous].id,
                    "display name shared by several entities, links resolve to the last one"
                );
                report.name_collisions += 1;
            }

            let text = entity.combined_text();
            members.push((idx, entity, text));
        }

        let texts: HashMap<usize, &str> = members
            .iter()
            .map(|(idx, _, text)| (*idx, text.as_str()))
            .collect();

        // Step 3-5: links to edges
        let mut mentions = MentionCounter::new();
        let mut links: Vec<(usize, usize, u32)> = Vec::new();
        for (source_idx, entity, source_text) in &members {
            for target_name in extract_entity_links(entity) {
                report.links_seen += 1;

                let Some(&target_idx) = name_index.get(&target_name.to_lowercase()) else {
                    debug!(source = entity.name(), target = %target_name, "unresolved link");
                    report.unresolved_links += 1;
                    continue;
                };
                if target_idx == *source_idx {
                    report.self_references += 1;
                    continue;
                }

                let target_node = &graph.nodes()[target_idx];
                let target_text = texts.get(&target_idx).copied().unwrap_or("");
                let strength = mentions.strength(
                    entity.name(),
                    source_text,
                    &target_node.name,
                    target_text,
                );
                links.push((*source_idx, target_idx, strength));
            }
        }

        for (source, target, strength) in links {
            match graph.link(source, target, strength) {
                LinkOutcome::Created => {}
                LinkOutcome::Strengthened | LinkOutcome::Unchanged => report.duplicate_links += 1,
                LinkOutcome::Rejected => report.self_references += 1,
            }
        }

        // Step 6: importance
        graph.rank(&self.radius);

        info!(
            entities = report.entities,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            unresolved = report.unresolved_links,
            "relationship graph built"
        );

        (graph, report)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeId, NodeId};
    use campaign_records::{EntityId, EntityType, Location, LoreEntry, Note, Npc};
    use std::collections::HashSet;

    fn build(collection: &EntityCollection) -> (CampaignGraph, BuildReport) {
        GraphBuilder::with_defaults().build(collection)
    }

    #[test]
    fn test_one_node_per_entity() {
        let collection = EntityCollection::new()
            .with(Npc::new("Mira"))
            .with(Location::new("Saltmarsh"))
            .with(Note::new("Rumours"));

        let (graph, report) = build(&collection);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(report.entities, 3);
    }

    #[test]
    fn test_node_ids_are_stable() {
        let id = EntityId::new();
        let collection = EntityCollection::new().with(Npc::new("Mira").with_id(id.clone()));

        let (first, _) = build(&collection);
        let (second, _) = build(&collection);
        assert_eq!(first.nodes()[0].id, second.nodes()[0].id);
        assert_eq!(first.nodes()[0].id, NodeId::for_entity(EntityType::Npc, &id));
    }

    #[test]
    fn test_node_ids_stable_across_json_loads() {
        let json = r#"{
            "npcs": [{"id": "abc123XYZ", "name": "Mira", "notes": "Fled [[Saltmarsh]]"}],
            "locations": [{"id": "loc-7", "name": "Saltmarsh"}]
        }"#;

        let (first, _) = build(&EntityCollection::from_json(json).unwrap());
        let (second, _) = build(&EntityCollection::from_json(json).unwrap());

        let ids = |graph: &CampaignGraph| -> Vec<NodeId> {
            graph.nodes().iter().map(|node| node.id.clone()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(
            ids(&first),
            vec![NodeId::from("npc-abc123XYZ"), NodeId::from("location-loc-7")]
        );
        assert_eq!(first.edges()[0].id, second.edges()[0].id);
        assert_eq!(first.edges()[0].id.as_str(), "location-loc-7<->npc-abc123XYZ");
    }

    #[test]
    fn test_mutual_notes_scenario() {
        let collection = EntityCollection::new()
            .with(Note::new("A").with_content("see [[B]]"))
            .with(Note::new("B").with_content("mentions [[A]] twice, [[A]] again"));

        let (graph, report) = build(&collection);
        assert_eq!(graph.edge_count(), 1);

        let edge = &graph.edges()[0];
        let a = &graph.nodes()[0].id;
        let b = &graph.nodes()[1].id;
        assert!(edge.connects(a, b));
        assert_eq!(edge.id, EdgeId::canonical(a, b));
        assert_eq!(edge.weight, 3);
        assert_eq!(report.links_seen, 3);
        assert_eq!(report.duplicate_links, 2);
    }

    #[test]
    fn test_unknown_target_scenario() {
        let collection =
            EntityCollection::new().with(Npc::new("X").with_description("Hunts [[Ghost]]"));

        let (graph, report) = build(&collection);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(report.unresolved_links, 1);
    }

    #[test]
    fn test_self_reference_is_ignored() {
        let collection = EntityCollection::new()
            .with(Npc::new("Narcissus").with_notes("Loves [[narcissus]] and [[Narcissus]]"));

        let (graph, report) = build(&collection);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(report.self_references, 2);
    }

    #[test]
    fn test_case_insensitive_resolution() {
        let collection = EntityCollection::new()
            .with(Npc::new("Mira the Fence"))
            .with(Note::new("Debts").with_content("Owed to [[MIRA THE FENCE]]"));

        let (graph, _) = build(&collection);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.nodes()[0].importance, 1);
    }

    #[test]
    fn test_exact_match_only() {
        let collection = EntityCollection::new()
            .with(Npc::new("Mira"))
            .with(Note::new("Debts").with_content("Owed to [[Mira ]] and [[Mir]]"));

        let (graph, report) = build(&collection);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(report.unresolved_links, 2);
    }

    #[test]
    fn test_name_collision_last_writer_wins() {
        let first = Npc::new("Twin");
        let second = Location::new("Twin");
        let second_id = NodeId::for_entity(EntityType::Location, &second.id);
        let collection = EntityCollection::new()
            .with(first)
            .with(second)
            .with(Note::new("Letter").with_content("From [[twin]]"));

        let (graph, report) = build(&collection);
        assert_eq!(report.name_collisions, 1);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edges()[0].touches(&second_id));
    }

    #[test]
    fn test_duplicate_entity_ids_are_skipped() {
        let id = EntityId::new();
        let collection = EntityCollection::new()
            .with(Npc::new("First").with_id(id.clone()))
            .with(Npc::new("Second").with_id(id));

        let (graph, report) = build(&collection);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes()[0].name, "First");
        assert_eq!(report.duplicate_ids, 1);
    }

    #[test]
    fn test_strength_keeps_maximum() {
        // Both directions produce the same strength; weight must not double.
        let collection = EntityCollection::new()
            .with(LoreEntry::new("Sundering").with_content("Caused by [[Vecna]]"))
            .with(Npc::new("Vecna").with_description("Caused the [[Sundering]]"));

        let (graph, _) = build(&collection);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges()[0].weight, 2);
    }

    #[test]
    fn test_no_self_loops_and_unique_pairs() {
        let collection = EntityCollection::new()
            .with(Npc::new("A").with_description("[[B]] [[C]] [[A]] [[b]]"))
            .with(Npc::new("B").with_description("[[A]] [[C]]"))
            .with(Npc::new("C").with_description("[[A]] [[B]] [[C]]"));

        let (graph, _) = build(&collection);
        assert_eq!(graph.edge_count(), 3);

        let mut pairs = HashSet::new();
        for edge in graph.edges() {
            assert_ne!(edge.source, edge.target);
            assert!(edge.weight >= 1);
            let mut pair = [edge.source.clone(), edge.target.clone()];
            pair.sort();
            assert!(pairs.insert(pair));
        }
        for node in graph.nodes() {
            assert_eq!(node.importance, 2);
        }
    }
}
