//! Code reference → display string

use crate::error::{Resolved, SkipReason};
use crate::input::Localization;

/// Resolves sentinel-prefixed code references (`#CSGO_Type_Pistol`) through a
/// [`Localization`] table.
///
/// The sentinel is stripped only when present, so plain keys such as quality
/// names or rarity `loc_key`s go through the same path.
#[derive(Debug, Clone, Copy)]
pub struct LocalizationResolver<'a> {
    table: &'a Localization,
    sentinel: char,
}

impl<'a> LocalizationResolver<'a> {
    pub fn new(table: &'a Localization, sentinel: char) -> Self {
        Self { table, sentinel }
    }

    /// Resolve a code reference; `None` when the table has no such entry.
    pub fn resolve(&self, code: &str) -> Option<&'a str> {
        self.table.get(self.strip(code))
    }

    /// Like [`resolve`](Self::resolve) but a miss skips the current entry.
    pub fn require(&self, code: &str) -> Resolved<&'a str> {
        self.resolve(code)
            .ok_or_else(|| SkipReason::Unlocalized(code.to_string()))
    }

    /// Resolve an optional code, treating an absent field as a skip.
    pub fn require_field(&self, code: Option<&str>, field: &'static str) -> Resolved<&'a str> {
        self.require(code.ok_or(SkipReason::MissingField(field))?)
    }

    fn strip<'c>(&self, code: &'c str) -> &'c str {
        code.strip_prefix(self.sentinel).unwrap_or(code)
    }
}
