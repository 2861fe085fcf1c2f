//! Raw input tables
//!
//! Serde models for everything a resolution pass reads. Loading the documents
//! from disk (or anywhere else) is the caller's job; the resolvers only ever
//! borrow an [`InputBundle`].

mod items_game;
mod localization;
mod scalar;
mod schema;

pub use items_game::{
    ItemDefinition, ItemSet, ItemTag, ItemsGame, PaintKit, PaletteColor, Quality, Rarity,
};
pub use localization::Localization;
pub use scalar::Scalar;
pub use schema::{ItemsSchema, OriginName, SchemaItem};

use indexmap::IndexMap;

use crate::error::Result;

/// Canonical category tag → display label (`"pistol" → "Pistol"`).
pub type CategoryMapping = IndexMap<String, String>;

/// Paint index → phase label for doppler-style finishes.
pub type PhaseMapping = IndexMap<String, String>;

/// Everything one resolution pass reads. Never mutated by the resolvers.
#[derive(Debug, Clone, Default)]
pub struct InputBundle {
    pub items_game: ItemsGame,
    pub localization: Localization,
    pub schema: ItemsSchema,
    pub categories: CategoryMapping,
    pub phases: PhaseMapping,
}

/// Raw JSON documents for an [`InputBundle`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSources<'a> {
    pub items_game: &'a str,
    pub localization: &'a str,
    pub schema: &'a str,
    /// Category mapping; an absent document yields an empty mapping
    pub categories: Option<&'a str>,
    /// Phase mapping; an absent document yields an empty mapping
    pub phases: Option<&'a str>,
}

impl InputBundle {
    /// Parse all documents of a bundle.
    pub fn from_json(sources: JsonSources<'_>) -> Result<Self> {
        Ok(Self {
            items_game: ItemsGame::from_json_str(sources.items_game)?,
            localization: Localization::from_json_str(sources.localization)?,
            schema: ItemsSchema::from_json_str(sources.schema)?,
            categories: parse_mapping(sources.categories)?,
            phases: parse_mapping(sources.phases)?,
        })
    }
}

fn parse_mapping(json: Option<&str>) -> Result<IndexMap<String, String>> {
    Ok(match json {
        Some(json) => serde_json::from_str(json)?,
        None => IndexMap::new(),
    })
}
