//! Item-set member references
//!
//! Item sets list their members as `"[<paint-name>]<type-name>"`. The catalog
//! stores the compact `"[<paint-index>]<item-index>"` form instead.

use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

use crate::input::{ItemDefinition, ItemSet, PaintKit};
use crate::lookup::NameIndex;

static MEMBER_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+)\](.+)").expect("member reference pattern is valid"));

/// Split a member reference into `(paint_name, type_name)`.
pub fn parse_member_ref(member: &str) -> Option<(&str, &str)> {
    let caps = MEMBER_REF.captures(member)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Resolves member references against the item and paint-kit tables.
#[derive(Debug, Clone)]
pub struct MemberResolver<'a> {
    items: NameIndex<'a>,
    paints: NameIndex<'a>,
}

impl<'a> MemberResolver<'a> {
    pub fn new(
        items: &'a IndexMap<String, ItemDefinition>,
        paint_kits: &'a IndexMap<String, PaintKit>,
    ) -> Self {
        Self {
            items: NameIndex::items(items),
            paints: NameIndex::paints(paint_kits),
        }
    }

    /// Compact reference for one member, or `None` if either side is unknown
    /// or the reference is malformed.
    pub fn resolve(&self, member: &str) -> Option<String> {
        let (paint_name, type_name) = parse_member_ref(member)?;
        let paint_index = self.paints.get(paint_name)?;
        let item_index = self.items.get(type_name)?;
        Some(format!("[{paint_index}]{item_index}"))
    }

    /// All members of a set in source order. Unresolved members stay as `None`
    /// so the list keeps its shape.
    pub fn resolve_set(&self, set: &ItemSet) -> Vec<Option<String>> {
        set.member_refs().map(|member| self.resolve(member)).collect()
    }
}
