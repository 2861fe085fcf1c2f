//! Flat localization table (code → display string)

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;

/// Localization strings keyed by lowercase code.
///
/// Keys are lowercased once when the table is built, so lookups only need to
/// lowercase the query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "IndexMap<String, String>")]
pub struct Localization {
    strings: HashMap<String, String>,
}

impl Localization {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a localization document.
    ///
    /// Accepts either a flat `{code: text}` object or the `{"lang": {"Tokens": {...}}}`
    /// shape produced by KeyValues converters. Non-string values are ignored.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let tokens = value
            .get("lang")
            .and_then(|lang| lang.get("Tokens"))
            .unwrap_or(&value);

        let strings = tokens
            .as_object()
            .into_iter()
            .flatten()
            .filter_map(|(code, text)| Some((code.clone(), text.as_str()?.to_string())));

        Ok(strings.collect())
    }

    /// Look up an exact code, ignoring case.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.strings
            .get(&code.to_lowercase())
            .map(String::as_str)
    }

    /// Get the number of strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl FromIterator<(String, String)> for Localization {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut strings = HashMap::new();
        for (code, text) in iter {
            // first spelling of a code wins when two differ only by case
            strings.entry(code.to_lowercase()).or_insert(text);
        }
        Self { strings }
    }
}

impl From<IndexMap<String, String>> for Localization {
    fn from(map: IndexMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Localization {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(code, text)| (code.to_string(), text.to_string()))
            .collect()
    }
}
