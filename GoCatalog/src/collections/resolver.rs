//! Collections resolver
//!
//! Builds the collections catalog in two passes:
//!
//! 1. Case-style containers carrying an item-set tag, in item table order. The
//!    first container to claim a display name wins; Valve ships duplicates.
//! 2. Item sets no accepted container claimed (sticker capsules and the
//!    like), except character sets and sets whose name is already taken.

use indexmap::IndexMap;
use std::collections::HashSet;

use super::images::ImageLookup;
use super::members::MemberResolver;
use super::{Collection, CollectionsCatalog};
use crate::config::{CollectionKey, ImageSource, ResolverConfig};
use crate::error::{Resolved, Result, SkipReason};
use crate::input::{InputBundle, ItemDefinition, ItemSet, SchemaItem};
use crate::lookup::{LocalizationResolver, SchemaIndex, SetMembers};

/// Resolver for the collections catalog
pub struct CollectionsResolver<'a> {
    bundle: &'a InputBundle,
    config: &'a ResolverConfig,
    images: Option<&'a (dyn ImageLookup + Sync)>,
}

impl<'a> CollectionsResolver<'a> {
    #[must_use]
    pub fn new(bundle: &'a InputBundle, config: &'a ResolverConfig) -> Self {
        Self {
            bundle,
            config,
            images: None,
        }
    }

    /// Use `images` for set icons when the config asks for asset-pack artwork.
    #[must_use]
    pub fn with_images(mut self, images: &'a (dyn ImageLookup + Sync)) -> Self {
        self.images = Some(images);
        self
    }

    /// Run both passes.
    ///
    /// # Errors
    /// Fails only when a required table (`items`, `item_sets`, `paint_kits`,
    /// or schema `items` for schema artwork) is missing.
    pub fn resolve(&self) -> Result<CollectionsCatalog> {
        let game = &self.bundle.items_game;
        let items = game.items()?;
        let item_sets = game.item_sets()?;
        let paint_kits = game.paint_kits()?;

        let schema = match self.config.image_source {
            ImageSource::Schema => Some(SchemaIndex::new(self.bundle.schema.items()?)),
            ImageSource::AssetPack => None,
        };
        let souvenirs = self.config.detect_souvenirs.then(|| {
            SetMembers::new(items, &self.config.souvenir_prefab, &self.config.item_set_tag)
        });

        let mut pass = Pass {
            config: self.config,
            localization: LocalizationResolver::new(
                &self.bundle.localization,
                self.config.code_sentinel,
            ),
            item_sets,
            members: MemberResolver::new(items, paint_kits),
            souvenirs,
            schema,
            images: self.images,
            seen: HashSet::new(),
            claimed_sets: HashSet::new(),
            catalog: IndexMap::new(),
            skipped: 0,
        };

        for (index, item) in items {
            if !pass.is_container(item) {
                continue;
            }
            let outcome = pass.container(index, item);
            if let Ok((set_id, _)) = &outcome {
                pass.claimed_sets.insert(*set_id);
            }
            let key = match self.config.collection_key {
                CollectionKey::Name => None,
                CollectionKey::ItemIndex => Some(index.as_str()),
            };
            pass.accept(index, key, outcome.map(|(_, collection)| collection));
        }

        for (set_id, set) in item_sets {
            if set_id.contains(self.config.character_set_marker.as_str())
                || pass.claimed_sets.contains(set_id.as_str())
            {
                continue;
            }
            let outcome = pass.orphan_set(set_id, set);
            let key = match self.config.collection_key {
                CollectionKey::Name => None,
                CollectionKey::ItemIndex => Some(set_id.as_str()),
            };
            pass.accept(set_id, key, outcome);
        }

        tracing::info!(
            "Resolved {} collections ({} entries skipped)",
            pass.catalog.len(),
            pass.skipped
        );
        Ok(pass.catalog)
    }
}

/// State of one resolution pass.
struct Pass<'a> {
    config: &'a ResolverConfig,
    localization: LocalizationResolver<'a>,
    item_sets: &'a IndexMap<String, ItemSet>,
    members: MemberResolver<'a>,
    souvenirs: Option<SetMembers<'a>>,
    schema: Option<SchemaIndex<'a>>,
    images: Option<&'a (dyn ImageLookup + Sync)>,
    /// Display names of accepted collections
    seen: HashSet<String>,
    /// Item sets already represented by an accepted container
    claimed_sets: HashSet<&'a str>,
    catalog: CollectionsCatalog,
    skipped: usize,
}

impl<'a> Pass<'a> {
    fn is_container(&self, item: &ItemDefinition) -> bool {
        item.has_prefab(&self.config.container_prefab)
            && item.tag(&self.config.item_set_tag).is_some()
    }

    /// Insert an accepted collection under `key`, or under its name when no
    /// key is given.
    fn accept(&mut self, source: &str, key: Option<&str>, outcome: Resolved<Collection>) {
        match outcome {
            Ok(collection) => {
                let key = key.map_or_else(|| collection.name.clone(), str::to_string);
                self.seen.insert(collection.name.clone());
                self.catalog.entry(key).or_insert(collection);
            }
            Err(SkipReason::DuplicateCollection(name)) => {
                tracing::trace!("{source}: collection '{name}' already resolved");
            }
            Err(reason) => {
                tracing::debug!("Skipping collection source {source}: {reason}");
                self.skipped += 1;
            }
        }
    }

    fn container(&self, index: &str, item: &'a ItemDefinition) -> Resolved<(&'a str, Collection)> {
        let tag = item
            .tag(&self.config.item_set_tag)
            .ok_or(SkipReason::MissingField("tags"))?;
        let set_id = tag
            .tag_value
            .as_deref()
            .ok_or(SkipReason::MissingField("tag_value"))?;
        let name = self
            .localization
            .require_field(item.item_name.as_deref(), "item_name")?;
        self.check_unseen(name)?;

        let set = self
            .item_sets
            .get(set_id)
            .ok_or_else(|| SkipReason::UnknownItemSet(set_id.to_string()))?;

        let image = match self.config.image_source {
            ImageSource::AssetPack => self.set_icon(set_id),
            ImageSource::Schema => self
                .schema
                .as_ref()
                .and_then(|schema| schema.get(index))
                .and_then(SchemaItem::image)
                .map(str::to_string),
        };

        let collection = Collection {
            name: name.to_string(),
            extra_id: Some(index.to_string()),
            set: tag
                .tag_text
                .as_deref()
                .and_then(|code| self.localization.resolve(code))
                .map(str::to_string),
            image,
            items: self.members.resolve_set(set),
            souvenirs: self
                .souvenirs
                .as_ref()
                .is_some_and(|s| s.has_other(set_id, index)),
        };
        Ok((set_id, collection))
    }

    fn orphan_set(&self, set_id: &str, set: &ItemSet) -> Resolved<Collection> {
        let name = self
            .localization
            .require_field(set.name.as_deref(), "name")?;
        self.check_unseen(name)?;

        let image = match self.config.image_source {
            ImageSource::AssetPack => self.set_icon(set_id),
            ImageSource::Schema => None,
        };

        Ok(Collection {
            name: name.to_string(),
            extra_id: None,
            set: None,
            image,
            items: self.members.resolve_set(set),
            souvenirs: false,
        })
    }

    fn check_unseen(&self, name: &str) -> Resolved<()> {
        if self.seen.contains(name) {
            return Err(SkipReason::DuplicateCollection(name.to_string()));
        }
        Ok(())
    }

    fn set_icon(&self, set_id: &str) -> Option<String> {
        self.images?
            .image_url(&self.config.set_icon_category, set_id)
    }
}
