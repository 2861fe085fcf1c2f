//! Item type label → canonical category tag

use std::collections::HashMap;

use super::LocalizationResolver;
use crate::error::{Resolved, SkipReason};
use crate::input::CategoryMapping;

/// Maps an item-type code to its category tag through the inverted
/// tag → label mapping.
#[derive(Debug, Clone)]
pub struct CategoryResolver<'a> {
    localization: LocalizationResolver<'a>,
    /// Lowercase label → tag
    tags_by_label: HashMap<String, &'a str>,
}

impl<'a> CategoryResolver<'a> {
    pub fn new(mapping: &'a CategoryMapping, localization: LocalizationResolver<'a>) -> Self {
        let mut tags_by_label = HashMap::with_capacity(mapping.len());
        for (tag, label) in mapping {
            // later tags win on duplicate labels, as a plain dict inversion would
            tags_by_label.insert(label.to_lowercase(), tag.as_str());
        }
        Self {
            localization,
            tags_by_label,
        }
    }

    /// Resolve the category tag for an item-type code (`#CSGO_Type_Pistol`).
    pub fn resolve(&self, type_code: &str) -> Resolved<&'a str> {
        let label = self.localization.require(type_code)?.to_lowercase();
        self.tags_by_label
            .get(&label)
            .copied()
            .ok_or(SkipReason::UnmappedCategory(label))
    }
}
