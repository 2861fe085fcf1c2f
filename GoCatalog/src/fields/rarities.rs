//! Rarities: rarity value → labels and color

use indexmap::IndexMap;

use super::{FieldsResolver, RarityLabels, collect_table};
use crate::error::{Resolved, Result, SkipReason};
use crate::input::{PaletteColor, Rarity};

impl FieldsResolver<'_> {
    pub fn rarities(&self) -> Result<IndexMap<String, RarityLabels>> {
        let game = &self.bundle.items_game;
        let rarities = game.rarities()?;
        let colors = game.colors()?;

        Ok(collect_table(
            "rarities",
            rarities
                .iter()
                .filter(|(key, _)| !self.config.is_excluded_rarity(key))
                .map(|(key, rarity)| (key, self.rarity(rarity, colors))),
        ))
    }

    fn rarity(
        &self,
        rarity: &Rarity,
        colors: &IndexMap<String, PaletteColor>,
    ) -> Resolved<(String, RarityLabels)> {
        let value = rarity
            .value
            .as_ref()
            .ok_or(SkipReason::MissingField("value"))?;
        let weapon = self
            .localization
            .require_field(rarity.loc_key_weapon.as_deref(), "loc_key_weapon")?;
        let non_weapon = self
            .localization
            .require_field(rarity.loc_key.as_deref(), "loc_key")?;

        let color_key = rarity
            .color
            .as_deref()
            .ok_or(SkipReason::MissingField("color"))?;
        let color = colors
            .get(color_key)
            .and_then(|c| c.hex_color.as_deref())
            .ok_or_else(|| SkipReason::UnknownColor(color_key.to_string()))?;

        let character = rarity
            .loc_key_character
            .as_deref()
            .and_then(|code| self.localization.resolve(code))
            .map(str::to_string);

        Ok((
            value.as_key(),
            RarityLabels {
                weapon: weapon.to_string(),
                non_weapon: non_weapon.to_string(),
                color: color.to_string(),
                character,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ResolverConfig;
    use crate::fields::{FieldsResolver, RarityLabels};
    use crate::test_support::bundle;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rarities() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let rarities = FieldsResolver::new(&bundle, &config).rarities().unwrap();

        // default and unusual are excluded, legendary has no palette color
        let keys: Vec<&str> = rarities.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["1", "6", "7"]);

        assert_eq!(
            rarities["6"],
            RarityLabels {
                weapon: "Covert".to_string(),
                non_weapon: "Extraordinary".to_string(),
                color: "#eb4b4b".to_string(),
                character: Some("Master".to_string()),
            }
        );
        assert_eq!(rarities["1"].character.as_deref(), Some("Distinguished"));
        assert_eq!(rarities["7"].character, None);
        assert_eq!(rarities["7"].color, "#e4ae39");
    }

    #[test]
    fn test_exclusions_follow_config() {
        let bundle = bundle();
        let config = ResolverConfig {
            excluded_rarities: Vec::new(),
            ..Default::default()
        };
        let rarities = FieldsResolver::new(&bundle, &config).rarities().unwrap();

        assert_eq!(rarities["0"].weapon, "Stock");
        assert_eq!(rarities["99"].non_weapon, "Rare Special Item");
    }
}
