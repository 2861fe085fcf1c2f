//! Records of the composite `items_game` table
//!
//! Only the fields the resolvers read are modelled. Every field is optional
//! because the source data is inconsistent; unknown fields are ignored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scalar::Scalar;
use crate::error::{Error, Result};

/// The `items_game` document: item definitions, prefabs, paint kits, item
/// sets, rarities, qualities and the color palette.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsGame {
    pub items: Option<IndexMap<String, ItemDefinition>>,
    pub prefabs: Option<IndexMap<String, ItemDefinition>>,
    pub paint_kits: Option<IndexMap<String, PaintKit>>,
    pub item_sets: Option<IndexMap<String, ItemSet>>,
    pub rarities: Option<IndexMap<String, Rarity>>,
    pub qualities: Option<IndexMap<String, Quality>>,
    pub colors: Option<IndexMap<String, PaletteColor>>,
}

impl ItemsGame {
    /// Parse an `items_game` JSON document, bare or wrapped in `{"items_game": ...}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut value: Value = serde_json::from_str(json)?;
        if let Some(inner) = value.get_mut("items_game") {
            value = inner.take();
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn items(&self) -> Result<&IndexMap<String, ItemDefinition>> {
        self.items.as_ref().ok_or_else(|| Error::missing_table("items"))
    }

    pub fn paint_kits(&self) -> Result<&IndexMap<String, PaintKit>> {
        self.paint_kits
            .as_ref()
            .ok_or_else(|| Error::missing_table("paint_kits"))
    }

    pub fn item_sets(&self) -> Result<&IndexMap<String, ItemSet>> {
        self.item_sets
            .as_ref()
            .ok_or_else(|| Error::missing_table("item_sets"))
    }

    pub fn rarities(&self) -> Result<&IndexMap<String, Rarity>> {
        self.rarities
            .as_ref()
            .ok_or_else(|| Error::missing_table("rarities"))
    }

    pub fn qualities(&self) -> Result<&IndexMap<String, Quality>> {
        self.qualities
            .as_ref()
            .ok_or_else(|| Error::missing_table("qualities"))
    }

    pub fn colors(&self) -> Result<&IndexMap<String, PaletteColor>> {
        self.colors
            .as_ref()
            .ok_or_else(|| Error::missing_table("colors"))
    }
}

/// An item definition. Prefabs share the same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Internal name (`weapon_ak47`), referenced by item sets.
    pub name: Option<String>,
    /// Prefab(s) this definition inherits from, whitespace separated.
    pub prefab: Option<String>,
    /// Code reference for the display name.
    pub item_name: Option<String>,
    /// Code reference for the description.
    pub item_description: Option<String>,
    pub tags: Option<IndexMap<String, ItemTag>>,
}

impl ItemDefinition {
    /// The tag with the given name, if the definition carries tags at all.
    pub fn tag(&self, name: &str) -> Option<&ItemTag> {
        self.tags.as_ref()?.get(name)
    }

    /// Whether the prefab field names `prefab` (exactly, or as one of several).
    pub fn has_prefab(&self, prefab: &str) -> bool {
        self.prefab
            .as_deref()
            .is_some_and(|p| p.split_whitespace().any(|name| name == prefab))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemTag {
    pub tag_value: Option<String>,
    pub tag_text: Option<String>,
    pub tag_group: Option<String>,
}

/// A paint kit (finish).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaintKit {
    /// Internal name (`cu_m4a1_howling`), referenced by item sets.
    pub name: Option<String>,
    pub description_tag: Option<String>,
    pub description_string: Option<String>,
    pub wear_remap_min: Option<Scalar>,
    pub wear_remap_max: Option<Scalar>,
    /// Everything else, including the `color0..colorN` fields.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl PaintKit {
    /// The raw `"r g b"` string of `color{n}`.
    pub fn color(&self, n: usize) -> Option<&str> {
        self.extra.get(&format!("color{n}"))?.as_str()
    }
}

/// An item set: display name code and member references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemSet {
    pub name: Option<String>,
    /// Keys are `"[<paint-name>]<type-name>"`; values are irrelevant.
    pub items: Option<IndexMap<String, Value>>,
}

impl ItemSet {
    pub fn member_refs(&self) -> impl Iterator<Item = &str> {
        self.items.iter().flat_map(|m| m.keys().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rarity {
    pub value: Option<Scalar>,
    pub loc_key: Option<String>,
    pub loc_key_weapon: Option<String>,
    pub loc_key_character: Option<String>,
    /// Key into the `colors` palette.
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quality {
    pub value: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaletteColor {
    pub hex_color: Option<String>,
}
