//! The fixed set of entity kinds and their presentation lookups.

use serde::{Deserialize, Serialize};

/// Kinds of campaign entities that take part in the relationship graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    Npc,
    Location,
    Lore,
    Session,
    TimelineEvent,
    Encounter,
    Note,
}

impl EntityType {
    /// Every kind, in collection bucket order.
    pub const ALL: [EntityType; 7] = [
        EntityType::Npc,
        EntityType::Location,
        EntityType::Lore,
        EntityType::Session,
        EntityType::TimelineEvent,
        EntityType::Encounter,
        EntityType::Note,
    ];

    /// Short machine name, also used as the node id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Npc => "npc",
            EntityType::Location => "location",
            EntityType::Lore => "lore",
            EntityType::Session => "session",
            EntityType::TimelineEvent => "timelineEvent",
            EntityType::Encounter => "encounter",
            EntityType::Note => "note",
        }
    }

    /// Key of this kind's bucket in an entity collection.
    pub fn bucket(&self) -> &'static str {
        match self {
            EntityType::Npc => "npcs",
            EntityType::Location => "locations",
            EntityType::Lore => "lore",
            EntityType::Session => "sessions",
            EntityType::TimelineEvent => "timelineEvents",
            EntityType::Encounter => "encounters",
            EntityType::Note => "notes",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::Npc => "NPC",
            EntityType::Location => "Location",
            EntityType::Lore => "Lore",
            EntityType::Session => "Session",
            EntityType::TimelineEvent => "Timeline Event",
            EntityType::Encounter => "Encounter",
            EntityType::Note => "Note",
        }
    }

    /// Hex color used for this kind's nodes and legend entry.
    pub fn color(&self) -> &'static str {
        match self {
            EntityType::Npc => "#3b82f6",
            EntityType::Location => "#10b981",
            EntityType::Lore => "#8b5cf6",
            EntityType::Session => "#f59e0b",
            EntityType::TimelineEvent => "#ef4444",
            EntityType::Encounter => "#f97316",
            EntityType::Note => "#6b7280",
        }
    }

    /// Parse a machine name as produced by [`EntityType::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
