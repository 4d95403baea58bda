//! Entity collection - the full set of campaign records, one ordered bucket
//! per entity kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{
    Encounter, Entity, EntityId, EntityType, Location, LoreEntry, Note, Npc, Session,
    TimelineEvent,
};

/// Errors raised while loading an entity collection.
#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("malformed entity collection: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RecordsResult<T> = std::result::Result<T, RecordsError>;

/// Every graph-relevant record in a campaign, keyed by bucket.
///
/// Bucket order is significant: the graph builder indexes names in this
/// order, so a later record wins a display-name collision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityCollection {
    pub npcs: Vec<Npc>,
    pub locations: Vec<Location>,
    pub lore: Vec<LoreEntry>,
    pub sessions: Vec<Session>,
    pub timeline_events: Vec<TimelineEvent>,
    pub encounters: Vec<Encounter>,
    pub notes: Vec<Note>,
}

impl EntityCollection {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bucket-keyed JSON object. Missing buckets are empty; every
    /// record must carry an `id`.
    pub fn from_json(json: &str) -> RecordsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append a record to the end of its bucket.
    pub fn push(&mut self, entity: impl Into<Entity>) -> EntityId {
        let entity = entity.into();
        let id = entity.id().clone();
        match entity {
            Entity::Npc(r) => self.npcs.push(r),
            Entity::Location(r) => self.locations.push(r),
            Entity::Lore(r) => self.lore.push(r),
            Entity::Session(r) => self.sessions.push(r),
            Entity::TimelineEvent(r) => self.timeline_events.push(r),
            Entity::Encounter(r) => self.encounters.push(r),
            Entity::Note(r) => self.notes.push(r),
        }
        id
    }

    /// Builder-style [`EntityCollection::push`].
    pub fn with(mut self, entity: impl Into<Entity>) -> Self {
        self.push(entity);
        self
    }

    /// Iterate over all records in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        let npcs = self.npcs.iter().cloned().map(Entity::Npc);
        let locations = self.locations.iter().cloned().map(Entity::Location);
        let lore = self.lore.iter().cloned().map(Entity::Lore);
        let sessions = self.sessions.iter().cloned().map(Entity::Session);
        let events = self.timeline_events.iter().cloned().map(Entity::TimelineEvent);
        let encounters = self.encounters.iter().cloned().map(Entity::Encounter);
        let notes = self.notes.iter().cloned().map(Entity::Note);

        npcs.chain(locations)
            .chain(lore)
            .chain(sessions)
            .chain(events)
            .chain(encounters)
            .chain(notes)
    }

    /// Number of records in one bucket.
    pub fn count(&self, kind: EntityType) -> usize {
        match kind {
            EntityType::Npc => self.npcs.len(),
            EntityType::Location => self.locations.len(),
            EntityType::Lore => self.lore.len(),
            EntityType::Session => self.sessions.len(),
            EntityType::TimelineEvent => self.timeline_events.len(),
            EntityType::Encounter => self.encounters.len(),
            EntityType::Note => self.notes.len(),
        }
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        EntityType::ALL.iter().map(|kind| self.count(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
