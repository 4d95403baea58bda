//! End-to-end behaviour of the relationship graph, from entity collection to
//! render snapshot.

use std::collections::HashSet;

use campaign_records::{EntityCollection, EntityType, Location, LoreEntry, Note, Npc};
use relationship_graph::{
    GraphBuilder, GraphConfig, GraphExplorer, LayoutConfig, LayoutSimulator, NodeId,
    TypeSelection,
};

fn seeded_config(seed: u64) -> GraphConfig {
    GraphConfig {
        layout: LayoutConfig {
            seed: Some(seed),
            ..LayoutConfig::default()
        },
        ..GraphConfig::default()
    }
}

fn node_id(explorer: &GraphExplorer, name: &str) -> NodeId {
    explorer
        .graph()
        .nodes()
        .iter()
        .find(|node| node.name == name)
        .map(|node| node.id.clone())
        .unwrap()
}

#[test]
fn test_mutual_mentions_make_one_weighted_edge() {
    let collection = EntityCollection::new()
        .with(Note::new("A").with_content("see [[B]]"))
        .with(Note::new("B").with_content("mentions [[A]] twice, [[A]] again"));

    let explorer = GraphExplorer::new(&collection, seeded_config(1)).unwrap();
    let snapshot = explorer.snapshot();

    assert_eq!(snapshot.edges.len(), 1);
    assert!(snapshot.edges[0].weight >= 3);
}

#[test]
fn test_reference_to_unknown_entity() {
    let collection =
        EntityCollection::new().with(Npc::new("X").with_description("Fears [[Ghost]]"));

    let explorer = GraphExplorer::new(&collection, seeded_config(2)).unwrap();
    let snapshot = explorer.snapshot();

    assert_eq!(snapshot.nodes.len(), 1);
    assert_eq!(snapshot.nodes[0].name, "X");
    assert!(snapshot.edges.is_empty());
}

#[test]
fn test_filter_drops_a_triangle_corner() {
    let collection = EntityCollection::new()
        .with(Npc::new("A").with_description("Knows [[B]] and [[C]]"))
        .with(Location::new("B").with_description("Home of [[C]]"))
        .with(LoreEntry::new("C").with_content("Tells of [[A]]"));

    let mut explorer = GraphExplorer::new(&collection, seeded_config(3)).unwrap();
    assert_eq!(explorer.snapshot().edges.len(), 3);

    explorer.set_selected_types([EntityType::Npc, EntityType::Location].into_iter().collect());
    let snapshot = explorer.snapshot();

    let a = node_id(&explorer, "A");
    let b = node_id(&explorer, "B");
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.edges.len(), 1);
    let edge = &snapshot.edges[0];
    assert!(
        (edge.source == a && edge.target == b) || (edge.source == b && edge.target == a)
    );
}

#[test]
fn test_focus_ignores_disjoint_component() {
    let collection = EntityCollection::new()
        .with(Npc::new("A").with_description("Serves [[B]]"))
        .with(Npc::new("B").with_description("Rules over [[C]]"))
        .with(Npc::new("C"))
        .with(Npc::new("D").with_description("Married to [[E]]"))
        .with(Npc::new("E"));

    let mut explorer = GraphExplorer::new(&collection, seeded_config(4)).unwrap();
    explorer.set_focus_node(Some(node_id(&explorer, "A")));

    let names: HashSet<_> = explorer
        .snapshot()
        .nodes
        .into_iter()
        .map(|node| node.name)
        .collect();
    assert_eq!(names, HashSet::from(["A".to_string(), "B".to_string(), "C".to_string()]));
}

#[test]
fn test_focus_after_filter_and_missing_seed() {
    let collection = EntityCollection::new()
        .with(Npc::new("A").with_description("[[Hub]]"))
        .with(Location::new("Hub").with_description("[[B]]"))
        .with(Npc::new("B"));

    let mut explorer = GraphExplorer::new(&collection, seeded_config(5)).unwrap();
    let a = node_id(&explorer, "A");

    explorer.set_selected_types([EntityType::Npc].into_iter().collect());
    explorer.set_focus_node(Some(a.clone()));
    let snapshot = explorer.snapshot();
    assert_eq!(snapshot.nodes.len(), 1);
    assert_eq!(snapshot.nodes[0].id, a);

    explorer.set_focus_node(Some(NodeId::from("npc-ghost")));
    let snapshot = explorer.snapshot();
    assert!(snapshot.nodes.is_empty());
    assert!(snapshot.edges.is_empty());
}

#[test]
fn test_positions_stay_in_bounds_through_drags() {
    let mut collection = EntityCollection::new();
    for i in 0..30 {
        let next = (i + 1) % 30;
        collection.push(Npc::new(format!("Npc {i}")).with_description(format!("[[Npc {next}]]")));
    }

    let config = seeded_config(6);
    let layout = config.layout.clone();
    let mut explorer = GraphExplorer::new(&collection, config).unwrap();

    let ids: Vec<_> = explorer.graph().nodes().iter().map(|n| n.id.clone()).collect();
    for (i, id) in ids.iter().enumerate() {
        let wild = if i % 2 == 0 { -1e6 } else { 1e6 };
        explorer.drag_node(id, wild, -wild);
    }

    for node in explorer.snapshot().nodes {
        assert!(node.x >= layout.min_x() && node.x <= layout.max_x());
        assert!(node.y >= layout.min_y() && node.y <= layout.max_y());
    }
}

#[test]
fn test_graph_invariants_on_dense_campaign() {
    let names = ["Aria", "Bram", "Cass", "Dov", "Elin", "Fen"];
    let mut collection = EntityCollection::new();
    for (i, name) in names.iter().enumerate() {
        let links: String = names
            .iter()
            .cycle()
            .skip(i)
            .take(4)
            .map(|other| format!("[[{other}]] "))
            .collect();
        collection.push(Note::new(*name).with_content(links));
    }

    let (graph, _) = GraphBuilder::with_defaults().build(&collection);

    let mut pairs = HashSet::new();
    for edge in graph.edges() {
        assert_ne!(edge.source, edge.target);
        assert!(edge.weight >= 1);
        assert!(graph.node(&edge.source).is_some());
        assert!(graph.node(&edge.target).is_some());
        let mut pair = [edge.source.clone(), edge.target.clone()];
        pair.sort();
        assert!(pairs.insert(pair));
    }
    for node in graph.nodes() {
        let degree = graph.edges().iter().filter(|e| e.touches(&node.id)).count() as u32;
        assert_eq!(node.importance, degree);
    }
}

#[test]
fn test_json_collection_to_snapshot() {
    let json = r#"{
        "npcs": [
            {"id": "00000000-0000-0000-0000-00000000000a", "name": "Mira", "notes": "Fences goods at [[the docks]]"}
        ],
        "locations": [
            {"id": "00000000-0000-0000-0000-00000000000b", "name": "The Docks", "secrets": "[[Mira]] hides loot here"}
        ],
        "sessions": [
            {"id": "00000000-0000-0000-0000-00000000000c", "title": "Session 3", "summary": "Met [[Mira]] at [[The Docks]]"}
        ]
    }"#;

    let collection = EntityCollection::from_json(json).unwrap();
    let config = GraphConfig::from_toml_str("[layout]\nseed = 8\niterations = 20").unwrap();
    let explorer = GraphExplorer::new(&collection, config).unwrap();

    let snapshot = explorer.snapshot();
    assert_eq!(snapshot.nodes.len(), 3);
    assert_eq!(snapshot.edges.len(), 3);
    assert_eq!(explorer.layout_report().iterations, 20);

    let mira = snapshot
        .node(&NodeId::from("npc-00000000-0000-0000-0000-00000000000a"))
        .unwrap();
    assert_eq!(mira.importance, 2);

    let json = snapshot.to_json().unwrap();
    assert!(json.contains("\"type\":\"session\""));
}

#[test]
fn test_seeded_layouts_repeat() {
    let collection = EntityCollection::new()
        .with(Npc::new("A").with_description("[[B]]"))
        .with(Npc::new("B"))
        .with(Npc::new("C"));

    let first = GraphExplorer::new(&collection, seeded_config(10)).unwrap().snapshot();
    let second = GraphExplorer::new(&collection, seeded_config(10)).unwrap().snapshot();
    assert_eq!(first, second);
}

#[test]
fn test_standalone_simulator_on_built_graph() {
    let collection = EntityCollection::new()
        .with(Npc::new("A").with_description("[[B]]"))
        .with(Npc::new("B"));

    let (mut graph, _) = GraphBuilder::with_defaults().build(&collection);
    let simulator = LayoutSimulator::new(LayoutConfig {
        seed: Some(12),
        ..LayoutConfig::default()
    });
    let report = simulator.layout(&mut graph);

    assert_eq!(report.iterations, 50);
    assert!(graph.nodes().iter().all(|n| simulator.in_bounds(n.position)));
    assert_eq!(TypeSelection::default(), TypeSelection::all());
}

#[test]
fn test_store_ids_survive_reload_and_rebuild() {
    let json = r#"{
        "npcs": [{"id": "abc123XYZ", "name": "Mira", "notes": "Lives in [[Saltmarsh]]"}],
        "locations": [{"id": "loc-7", "name": "Saltmarsh"}],
        "notes": [{"id": "n-1", "title": "Elsewhere"}]
    }"#;

    let collection = EntityCollection::from_json(json).unwrap();
    let mut explorer = GraphExplorer::new(&collection, seeded_config(13)).unwrap();
    let mira = NodeId::from("npc-abc123XYZ");
    explorer.set_focus_node(Some(mira.clone()));
    assert_eq!(explorer.snapshot().nodes.len(), 2);

    let reloaded = EntityCollection::from_json(json).unwrap();
    explorer.rebuild(&reloaded);

    let snapshot = explorer.snapshot();
    assert_eq!(snapshot.nodes.len(), 2);
    assert!(snapshot.node(&mira).is_some());
    assert!(snapshot.node(&NodeId::from("location-loc-7")).is_some());
    assert_eq!(snapshot.edges.len(), 1);
}

#[test]
fn test_explorer_refuses_canvas_without_room() {
    let collection = EntityCollection::new().with(Npc::new("A"));
    let config = GraphConfig::from_toml_str("[layout]\nwidth = 100.0\npadding = 60.0");
    assert!(config.is_err());

    let config = GraphConfig {
        layout: LayoutConfig {
            width: 100.0,
            padding: 60.0,
            ..LayoutConfig::default()
        },
        ..GraphConfig::default()
    };
    assert!(GraphExplorer::new(&collection, config).is_err());
}
