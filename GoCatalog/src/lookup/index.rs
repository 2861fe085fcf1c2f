//! Precomputed indexes over the raw tables
//!
//! Built once per pass so every cross-reference is a hash lookup instead of a
//! scan over the whole table.

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::input::{ItemDefinition, PaintKit, SchemaItem};

/// Prefab chains deeper than this are treated as cyclic.
const MAX_PREFAB_DEPTH: usize = 16;

/// Internal name → table index. The first index carrying a name wins.
#[derive(Debug, Clone, Default)]
pub struct NameIndex<'a> {
    by_name: HashMap<&'a str, &'a str>,
}

impl<'a> NameIndex<'a> {
    pub fn items(items: &'a IndexMap<String, ItemDefinition>) -> Self {
        Self::build(items.iter().map(|(idx, item)| (idx, item.name.as_deref())))
    }

    pub fn paints(paint_kits: &'a IndexMap<String, PaintKit>) -> Self {
        Self::build(paint_kits.iter().map(|(idx, kit)| (idx, kit.name.as_deref())))
    }

    fn build(entries: impl Iterator<Item = (&'a String, Option<&'a str>)>) -> Self {
        let mut by_name = HashMap::new();
        for (index, name) in entries {
            if let Some(name) = name {
                by_name.entry(name).or_insert(index.as_str());
            }
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.by_name.get(name).copied()
    }
}

/// Schema entries by stringified defindex. First entry wins.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex<'a> {
    by_defindex: HashMap<String, &'a SchemaItem>,
}

impl<'a> SchemaIndex<'a> {
    pub fn new(items: &'a [SchemaItem]) -> Self {
        let mut by_defindex = HashMap::with_capacity(items.len());
        for item in items {
            if let Some(defindex) = &item.defindex {
                by_defindex.entry(defindex.as_key()).or_insert(item);
            }
        }
        Self { by_defindex }
    }

    pub fn get(&self, defindex: &str) -> Option<&'a SchemaItem> {
        self.by_defindex.get(defindex).copied()
    }
}

/// Item-set tag value → indexes of items with a given prefab carrying it.
#[derive(Debug, Clone, Default)]
pub struct SetMembers<'a> {
    by_set: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> SetMembers<'a> {
    pub fn new(items: &'a IndexMap<String, ItemDefinition>, prefab: &str, set_tag: &str) -> Self {
        let mut by_set: HashMap<&str, Vec<&str>> = HashMap::new();
        for (index, item) in items {
            if !item.has_prefab(prefab) {
                continue;
            }
            if let Some(set_id) = item.tag(set_tag).and_then(|t| t.tag_value.as_deref()) {
                by_set.entry(set_id).or_default().push(index.as_str());
            }
        }
        Self { by_set }
    }

    /// Whether the set has a member other than `exclude`.
    pub fn has_other(&self, set_id: &str, exclude: &str) -> bool {
        self.by_set
            .get(set_id)
            .is_some_and(|members| members.iter().any(|&idx| idx != exclude))
    }
}

/// Field lookup through an item's prefab inheritance chain.
#[derive(Debug, Clone, Copy)]
pub struct Prefabs<'a> {
    prefabs: Option<&'a IndexMap<String, ItemDefinition>>,
}

impl<'a> Prefabs<'a> {
    pub fn new(prefabs: Option<&'a IndexMap<String, ItemDefinition>>) -> Self {
        Self { prefabs }
    }

    /// First value of `field` found on `item` itself or along its prefab chain.
    pub fn inherited(
        &self,
        item: &'a ItemDefinition,
        field: impl Fn(&'a ItemDefinition) -> Option<&'a str>,
    ) -> Option<&'a str> {
        field(item).or_else(|| self.from_prefabs(item, &field))
    }

    /// First value of `field` along the prefab chain of `item`, skipping the
    /// item's own fields.
    pub fn from_prefabs(
        &self,
        item: &'a ItemDefinition,
        field: impl Fn(&'a ItemDefinition) -> Option<&'a str>,
    ) -> Option<&'a str> {
        let prefabs = self.prefabs?;
        let mut pending: Vec<&str> = prefab_names(item).collect();
        let mut depth = 0;

        while !pending.is_empty() && depth < MAX_PREFAB_DEPTH {
            let mut next = Vec::new();
            for name in pending {
                let Some(prefab) = prefabs.get(name) else {
                    continue;
                };
                if let Some(value) = field(prefab) {
                    return Some(value);
                }
                next.extend(prefab_names(prefab));
            }
            pending = next;
            depth += 1;
        }
        None
    }
}

fn prefab_names(item: &ItemDefinition) -> impl Iterator<Item = &str> {
    item.prefab.iter().flat_map(|p| p.split_whitespace())
}
