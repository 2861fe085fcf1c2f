//! Collections catalog
//!
//! Named item sets with their member items, artwork and souvenir flag.
//!
//! # Usage
//!
//! ```no_run
//! use gocatalog::collections::{CollectionsResolver, TemplateImages};
//! use gocatalog::config::ResolverConfig;
//! use gocatalog::input::InputBundle;
//!
//! # fn load() -> InputBundle { InputBundle::default() }
//! let bundle = load();
//! let config = ResolverConfig::default();
//! let images = TemplateImages::new("https://cdn.example.com/{category}/{key}.png");
//!
//! let collections = CollectionsResolver::new(&bundle, &config)
//!     .with_images(&images)
//!     .resolve()?;
//! for (name, collection) in &collections {
//!     println!("{name}: {} items", collection.items.len());
//! }
//! # Ok::<(), gocatalog::Error>(())
//! ```

mod images;
mod members;
mod resolver;

pub use images::{ImageLookup, TemplateImages};
pub use members::{MemberResolver, parse_member_ref};
pub use resolver::CollectionsResolver;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One collection in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Display name (the container's name for case collections)
    pub name: String,
    /// Index of the defining container item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_id: Option<String>,
    /// Display name of the item set the container opens into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    pub image: Option<String>,
    /// Compact `"[<paint-index>]<item-index>"` references; `None` where a
    /// member could not be resolved
    pub items: Vec<Option<String>>,
    pub souvenirs: bool,
}

/// Collections keyed by name or item index, in resolution order.
pub type CollectionsCatalog = IndexMap<String, Collection>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CollectionKey, ImageSource, ResolverConfig};
    use crate::test_support::bundle;
    use pretty_assertions::assert_eq;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_asset_pack_collections() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let images = TemplateImages::new("img/{category}/{key}.png");

        let catalog = CollectionsResolver::new(&bundle, &config)
            .with_images(&images)
            .resolve()
            .unwrap();

        let names: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["Huntsman Weapon Case", "CS:GO Weapon Case", "Sticker Capsule"]
        );

        assert_eq!(
            catalog["Huntsman Weapon Case"],
            Collection {
                name: "Huntsman Weapon Case".to_string(),
                extra_id: some("4001"),
                set: some("The Huntsman Collection"),
                image: some("img/set_icons/set_community_3.png"),
                items: vec![some("[309]16"), some("[180]7"), None],
                souvenirs: false,
            }
        );
        assert_eq!(catalog["CS:GO Weapon Case"].items, vec![some("[415]1")]);
        assert!(catalog["CS:GO Weapon Case"].souvenirs);

        let capsule = &catalog["Sticker Capsule"];
        assert_eq!(capsule.extra_id, None);
        assert_eq!(capsule.set, None);
        assert_eq!(capsule.image, some("img/set_icons/set_stickers_1.png"));
        assert!(!capsule.souvenirs);
    }

    #[test]
    fn test_duplicate_case_first_wins() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let catalog = CollectionsResolver::new(&bundle, &config).resolve().unwrap();

        // 4002 resolves to the same name as 4001 and comes later
        assert_eq!(catalog["Huntsman Weapon Case"].extra_id, some("4001"));
        assert!(catalog.values().all(|c| c.extra_id.as_deref() != Some("4002")));
    }

    #[test]
    fn test_no_image_lookup_means_no_image() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let catalog = CollectionsResolver::new(&bundle, &config).resolve().unwrap();
        assert!(catalog.values().all(|c| c.image.is_none()));
    }

    #[test]
    fn test_schema_variant_keyed_by_index() {
        let bundle = bundle();
        let config = ResolverConfig {
            image_source: ImageSource::Schema,
            collection_key: CollectionKey::ItemIndex,
            ..Default::default()
        };
        let catalog = CollectionsResolver::new(&bundle, &config).resolve().unwrap();

        let keys: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["4001", "4003", "set_stickers_1"]);
        assert_eq!(catalog["4001"].image, some("case3.png"));
        assert_eq!(catalog["4003"].image, some("valve1_large.png"));
        assert_eq!(catalog["set_stickers_1"].image, None);
    }

    #[test]
    fn test_souvenir_detection_can_be_disabled() {
        let bundle = bundle();
        let config = ResolverConfig {
            detect_souvenirs: false,
            ..Default::default()
        };
        let catalog = CollectionsResolver::new(&bundle, &config).resolve().unwrap();
        assert!(catalog.values().all(|c| !c.souvenirs));
    }

    #[test]
    fn test_character_sets_excluded() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let catalog = CollectionsResolver::new(&bundle, &config).resolve().unwrap();
        assert!(!catalog.contains_key("Operation Agents"));
    }

    #[test]
    fn test_set_named_like_accepted_case_skipped() {
        let mut bundle = bundle();
        let set: crate::input::ItemSet = serde_json::from_value(serde_json::json!({
            "name": "#CSGO_crate_community_3",
            "items": {"[cu_ak47_cobra]weapon_ak47": "1"}
        }))
        .unwrap();
        bundle
            .items_game
            .item_sets
            .as_mut()
            .unwrap()
            .insert("set_dup".to_string(), set);

        for collection_key in [CollectionKey::Name, CollectionKey::ItemIndex] {
            let config = ResolverConfig {
                collection_key,
                ..Default::default()
            };
            let catalog = CollectionsResolver::new(&bundle, &config).resolve().unwrap();

            let huntsman = catalog
                .values()
                .filter(|c| c.name == "Huntsman Weapon Case")
                .count();
            assert_eq!(huntsman, 1, "{collection_key:?}");
            assert!(!catalog.contains_key("set_dup"), "{collection_key:?}");
            assert_eq!(catalog.len(), 3, "{collection_key:?}");
        }
    }

    #[test]
    fn test_missing_items_table_is_fatal() {
        let mut bundle = bundle();
        bundle.items_game.items = None;
        let config = ResolverConfig::default();

        let err = CollectionsResolver::new(&bundle, &config).resolve().unwrap_err();
        assert!(matches!(err, crate::Error::MissingTable { table: "items" }));
    }
}
