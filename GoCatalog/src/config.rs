//! Resolver configuration
//!
//! Every constant the resolvers rely on (prefab names, sentinel keys, wear
//! defaults, the collections variant) lives here so it can be overridden from
//! a TOML file instead of being baked into the algorithms.
//!
//! ```
//! use gocatalog::config::{ImageSource, ResolverConfig};
//!
//! let config = ResolverConfig::from_toml_str(r#"
//!     image_source = "schema"
//!     wear_min_default = 0.0
//! "#)?;
//! assert_eq!(config.image_source, ImageSource::Schema);
//! assert_eq!(config.container_prefab, "weapon_case_base");
//! # Ok::<(), gocatalog::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where collection artwork comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSource {
    /// Ask the injected [`ImageLookup`](crate::collections::ImageLookup) for
    /// the set icon of each collection.
    #[default]
    AssetPack,
    /// Use the container item's `image_url` from the per-item schema.
    Schema,
}

/// What the collections catalog is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionKey {
    /// Resolved display name of the collection.
    #[default]
    Name,
    /// Index of the defining container item (set id for sets without one).
    ItemIndex,
}

/// Tunables shared by the collections and fields resolvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Prefix carried by code references (`#CSGO_...`).
    pub code_sentinel: char,
    /// Prefab of case-style containers that define a collection.
    pub container_prefab: String,
    /// Prefab of souvenir packages.
    pub souvenir_prefab: String,
    /// Tag linking an item to its item set.
    pub item_set_tag: String,
    /// Item sets whose id contains this marker are not collections.
    pub character_set_marker: String,
    /// Asset category passed to the image lookup for set icons.
    pub set_icon_category: String,
    pub image_source: ImageSource,
    pub collection_key: CollectionKey,
    /// Whether to search for souvenir packages of each collection.
    pub detect_souvenirs: bool,
    pub wear_min_default: f64,
    pub wear_max_default: f64,
    /// Paint names containing this (case-insensitive) may carry a phase.
    pub phase_marker: String,
    pub excluded_items: Vec<String>,
    pub excluded_paints: Vec<String>,
    pub excluded_rarities: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            code_sentinel: '#',
            container_prefab: "weapon_case_base".to_string(),
            souvenir_prefab: "weapon_case_souvenirpkg".to_string(),
            item_set_tag: "ItemSet".to_string(),
            character_set_marker: "_characters".to_string(),
            set_icon_category: "set_icons".to_string(),
            image_source: ImageSource::default(),
            collection_key: CollectionKey::default(),
            detect_souvenirs: true,
            wear_min_default: 0.06,
            wear_max_default: 0.8,
            phase_marker: "doppler".to_string(),
            excluded_items: vec!["default".to_string()],
            excluded_paints: vec!["0".to_string()],
            excluded_rarities: vec!["unusual".to_string(), "default".to_string()],
        }
    }
}

impl ResolverConfig {
    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub(crate) fn is_excluded_item(&self, index: &str) -> bool {
        self.excluded_items.iter().any(|k| k == index)
    }

    pub(crate) fn is_excluded_paint(&self, index: &str) -> bool {
        self.excluded_paints.iter().any(|k| k == index)
    }

    pub(crate) fn is_excluded_rarity(&self, key: &str) -> bool {
        self.excluded_rarities.iter().any(|k| k == key)
    }
}
