//! Fields catalog
//!
//! Five independent lookup tables derived from the same input bundle:
//! qualities, item types, paints, rarities and origins. Each table has its
//! own file; they share the localization and category primitives from
//! [`crate::lookup`].

mod item_types;
mod origins;
mod paints;
mod qualities;
mod rarities;

pub use paints::{clean_description, paint_colors};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::config::ResolverConfig;
use crate::error::{Resolved, Result};
use crate::input::InputBundle;
use crate::lookup::LocalizationResolver;

/// An item type (weapon, case, sticker, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemType {
    pub name: String,
    /// Canonical category tag
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A paint finish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub name: String,
    pub wear_min: f64,
    pub wear_max: f64,
    /// `rgb(r, g, b)` strings; absent rather than empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Rarity labels for each item context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityLabels {
    pub weapon: String,
    #[serde(rename = "nonweapon")]
    pub non_weapon: String,
    /// Hex color from the palette (`#eb4b4b`)
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

/// The five field tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldsCatalog {
    /// Quality value → name
    pub qualities: IndexMap<String, String>,
    /// Item index → type
    pub types: IndexMap<String, ItemType>,
    /// Paint index → paint
    pub paints: IndexMap<String, Paint>,
    /// Rarity value → labels
    pub rarities: IndexMap<String, RarityLabels>,
    /// Origin id → name
    pub origins: IndexMap<String, String>,
}

/// Resolver for the fields catalog
///
/// Sentinel entries (`default` item, paint `0`, `default`/`unusual`
/// rarities) are skipped while iterating; the input tables are only read.
pub struct FieldsResolver<'a> {
    bundle: &'a InputBundle,
    config: &'a ResolverConfig,
    localization: LocalizationResolver<'a>,
}

impl<'a> FieldsResolver<'a> {
    #[must_use]
    pub fn new(bundle: &'a InputBundle, config: &'a ResolverConfig) -> Self {
        Self {
            bundle,
            config,
            localization: LocalizationResolver::new(&bundle.localization, config.code_sentinel),
        }
    }

    /// Resolve all five tables.
    ///
    /// # Errors
    /// Fails when any table needs a top-level input table that is missing.
    pub fn resolve(&self) -> Result<FieldsCatalog> {
        Ok(FieldsCatalog {
            qualities: self.qualities()?,
            types: self.types()?,
            paints: self.paints()?,
            rarities: self.rarities()?,
            origins: self.origins()?,
        })
    }
}

/// Gather per-entry outcomes into an output table, logging the skipped ones.
///
/// A repeated output key keeps its first position and takes the later value.
fn collect_table<S: Display, T>(
    table: &str,
    outcomes: impl IntoIterator<Item = (S, Resolved<(String, T)>)>,
) -> IndexMap<String, T> {
    let mut resolved = IndexMap::new();
    let mut skipped = 0usize;

    for (source, outcome) in outcomes {
        match outcome {
            Ok((key, value)) => {
                resolved.insert(key, value);
            }
            Err(reason) => {
                tracing::debug!("Skipping {table} entry {source}: {reason}");
                skipped += 1;
            }
        }
    }

    tracing::info!("Resolved {} {table} ({skipped} skipped)", resolved.len());
    resolved
}
