//! Qualities: quality value → display name

use indexmap::IndexMap;

use super::{FieldsResolver, collect_table};
use crate::error::{Resolved, Result, SkipReason};
use crate::input::Quality;

impl FieldsResolver<'_> {
    /// The quality key doubles as its localization code.
    pub fn qualities(&self) -> Result<IndexMap<String, String>> {
        let qualities = self.bundle.items_game.qualities()?;
        Ok(collect_table(
            "qualities",
            qualities
                .iter()
                .map(|(key, quality)| (key, self.quality(key, quality))),
        ))
    }

    fn quality(&self, key: &str, quality: &Quality) -> Resolved<(String, String)> {
        let value = quality
            .value
            .as_ref()
            .ok_or(SkipReason::MissingField("value"))?;
        let name = self.localization.require(key)?;
        Ok((value.as_key(), name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ResolverConfig;
    use crate::fields::FieldsResolver;
    use crate::test_support::bundle;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_qualities() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let qualities = FieldsResolver::new(&bundle, &config).qualities().unwrap();

        let entries: Vec<(&str, &str)> = qualities
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        // vintage has no localization and is left out
        assert_eq!(
            entries,
            vec![("0", "Normal"), ("1", "Genuine"), ("3", "★"), ("9", "StatTrak™")]
        );
    }
}
