//! Entity definitions for the campaign.

mod kind;
mod records;

pub use kind::*;
pub use records::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for all campaign entities.
///
/// Stored as the entity store hands it out. Freshly created records get a
/// uuid v4 string, but any non-empty string is accepted on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create an entity ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Any campaign record that can take part in the relationship graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Entity {
    Npc(Npc),
    Location(Location),
    Lore(LoreEntry),
    Session(Session),
    TimelineEvent(TimelineEvent),
    Encounter(Encounter),
    Note(Note),
}

impl Entity {
    /// The record's ID.
    pub fn id(&self) -> &EntityId {
        match self {
            Entity::Npc(r) => &r.id,
            Entity::Location(r) => &r.id,
            Entity::Lore(r) => &r.id,
            Entity::Session(r) => &r.id,
            Entity::TimelineEvent(r) => &r.id,
            Entity::Encounter(r) => &r.id,
            Entity::Note(r) => &r.id,
        }
    }

    /// Display name, taken from the record's name or title.
    pub fn name(&self) -> &str {
        match self {
            Entity::Npc(r) => &r.name,
            Entity::Location(r) => &r.name,
            Entity::Lore(r) => &r.title,
            Entity::Session(r) => &r.title,
            Entity::TimelineEvent(r) => &r.title,
            Entity::Encounter(r) => &r.name,
            Entity::Note(r) => &r.title,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Entity::Npc(_) => EntityType::Npc,
            Entity::Location(_) => EntityType::Location,
            Entity::Lore(_) => EntityType::Lore,
            Entity::Session(_) => EntityType::Session,
            Entity::TimelineEvent(_) => EntityType::TimelineEvent,
            Entity::Encounter(_) => EntityType::Encounter,
            Entity::Note(_) => EntityType::Note,
        }
    }

    /// The free-text fields scanned for cross-references, in field order.
    ///
    /// Missing fields come back as empty strings so every kind always yields
    /// the same number of slots.
    pub fn text_fields(&self) -> Vec<&str> {
        fn text(field: &Option<String>) -> &str {
            field.as_deref().unwrap_or("")
        }

        match self {
            Entity::Npc(r) => vec![text(&r.description), text(&r.notes)],
            Entity::Location(r) => vec![
                text(&r.description),
                text(&r.notable_features),
                text(&r.secrets),
            ],
            Entity::Lore(r) => vec![text(&r.content)],
            Entity::Session(r) => vec![text(&r.summary), text(&r.dm_notes)],
            Entity::TimelineEvent(r) => vec![text(&r.description), text(&r.outcome)],
            Entity::Encounter(r) => vec![
                text(&r.description),
                text(&r.enemies),
                text(&r.tactics),
                text(&r.rewards),
            ],
            Entity::Note(r) => vec![text(&r.content)],
        }
    }

    /// All text fields joined by a single space.
    pub fn combined_text(&self) -> String {
        self.text_fields().join(" ")
    }
}

macro_rules! impl_from_record {
    ($($record:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$record> for Entity {
                fn from(record: $record) -> Self {
                    Entity::$variant(record)
                }
            }
        )*
    };
}

impl_from_record! {
    Npc => Npc,
    Location => Location,
    LoreEntry => Lore,
    Session => Session,
    TimelineEvent => TimelineEvent,
    Encounter => Encounter,
    Note => Note,
}
