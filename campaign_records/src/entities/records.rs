//! One record type per entity kind.
//!
//! Only the fields the relationship graph reads are modelled; everything
//! else the entity store keeps is ignored on deserialization. The `id` is
//! required on load: node ids are derived from it and must not change
//! between two parses of the same store data.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A non-player character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npc {
    pub id: EntityId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Npc {
    /// Create a new NPC with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A place in the campaign world.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: EntityId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notable_features: Option<String>,
    /// DM-only information about the place.
    #[serde(default)]
    pub secrets: Option<String>,
}

impl Location {
    /// Create a new location with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_notable_features(mut self, features: impl Into<String>) -> Self {
        self.notable_features = Some(features.into());
        self
    }

    pub fn with_secrets(mut self, secrets: impl Into<String>) -> Self {
        self.secrets = Some(secrets.into());
        self
    }
}

/// A world lore entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoreEntry {
    pub id: EntityId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl LoreEntry {
    /// Create a new lore entry with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// A played (or planned) game session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: EntityId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub dm_notes: Option<String>,
}

impl Session {
    /// Create a new session with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_dm_notes(mut self, notes: impl Into<String>) -> Self {
        self.dm_notes = Some(notes.into());
        self
    }
}

/// An event on the campaign timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: EntityId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
}

impl TimelineEvent {
    /// Create a new timeline event with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }
}

/// A prepared combat or social encounter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    pub id: EntityId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enemies: Option<String>,
    #[serde(default)]
    pub tactics: Option<String>,
    #[serde(default)]
    pub rewards: Option<String>,
}

impl Encounter {
    /// Create a new encounter with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_enemies(mut self, enemies: impl Into<String>) -> Self {
        self.enemies = Some(enemies.into());
        self
    }

    pub fn with_tactics(mut self, tactics: impl Into<String>) -> Self {
        self.tactics = Some(tactics.into());
        self
    }

    pub fn with_rewards(mut self, rewards: impl Into<String>) -> Self {
        self.rewards = Some(rewards.into());
        self
    }
}

/// A free-form note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: EntityId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl Note {
    /// Create a new note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
