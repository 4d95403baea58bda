//! # Campaign Records
//!
//! The entity data model for a tabletop campaign: NPCs, locations, lore
//! entries, sessions, timeline events, encounters and notes. This crate is
//! the input boundary of the relationship graph engine and holds no graph
//! logic of its own.
//!
//! ## Core Components
//!
//! - **entities**: Ids, the entity-kind enumeration and one record type per kind
//! - **collection**: The bucket-keyed entity collection handed over by the entity store

pub mod collection;
pub mod entities;

pub use collection::*;
pub use entities::*;
