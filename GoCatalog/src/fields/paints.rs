//! Paints: paint index → name, wear range, colors, phase and description

use indexmap::IndexMap;

use super::{FieldsResolver, Paint, collect_table};
use crate::error::{Resolved, Result};
use crate::input::{PaintKit, Scalar};

impl FieldsResolver<'_> {
    pub fn paints(&self) -> Result<IndexMap<String, Paint>> {
        let paint_kits = self.bundle.items_game.paint_kits()?;

        Ok(collect_table(
            "paints",
            paint_kits
                .iter()
                .filter(|(index, _)| !self.config.is_excluded_paint(index))
                .map(|(index, kit)| {
                    let outcome = self.paint(index, kit).map(|paint| (index.clone(), paint));
                    (index, outcome)
                }),
        ))
    }

    fn paint(&self, index: &str, kit: &PaintKit) -> Resolved<Paint> {
        let name = self
            .localization
            .require_field(kit.description_tag.as_deref(), "description_tag")?;

        let marker = self.config.phase_marker.to_lowercase();
        let phase = if name.to_lowercase().contains(&marker) {
            self.bundle.phases.get(index).cloned()
        } else {
            None
        };

        let description = kit
            .description_string
            .as_deref()
            .and_then(|code| self.localization.resolve(code))
            .map(clean_description)
            .filter(|text| !text.is_empty());

        Ok(Paint {
            name: name.to_string(),
            wear_min: wear(kit.wear_remap_min.as_ref(), self.config.wear_min_default),
            wear_max: wear(kit.wear_remap_max.as_ref(), self.config.wear_max_default),
            colors: paint_colors(kit),
            phase,
            description,
        })
    }
}

fn wear(value: Option<&Scalar>, default: f64) -> f64 {
    value.and_then(Scalar::as_f64).unwrap_or(default)
}

/// `color0`, `color1`, ... as `rgb(r, g, b)` strings, stopping at the first
/// gap. `None` when the kit has no `color0`.
#[must_use]
pub fn paint_colors(kit: &PaintKit) -> Option<Vec<String>> {
    let colors: Vec<String> = (0..)
        .map_while(|n| kit.color(n))
        .map(|raw| format!("rgb({})", raw.split_whitespace().collect::<Vec<_>>().join(", ")))
        .collect();
    (!colors.is_empty()).then_some(colors)
}

/// Flatten a localized paint description to one line of plain text.
#[must_use]
pub fn clean_description(text: &str) -> String {
    text.replace("\n\n", " ")
        .replace("<i>", "")
        .replace("</i>", "")
        .replace('"', "")
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;
    use crate::test_support::bundle;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn kit(value: serde_json::Value) -> PaintKit {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_paints() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let paints = FieldsResolver::new(&bundle, &config).paints().unwrap();

        // 0 is the sentinel, 999 has no description tag
        let keys: Vec<&str> = paints.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["180", "309", "415", "416"]);

        assert_eq!(
            paints["180"],
            Paint {
                name: "Cobra Strike".to_string(),
                wear_min: 0.1,
                wear_max: 0.7,
                colors: Some(vec!["rgb(10, 20, 30)".to_string()]),
                phase: None,
                description: Some("Strike first. The cobra bites.".to_string()),
            }
        );
    }

    #[test]
    fn test_wear_defaults() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let paints = FieldsResolver::new(&bundle, &config).paints().unwrap();

        assert_eq!(paints["309"].wear_min, 0.06);
        assert_eq!(paints["309"].wear_max, 0.8);
        assert_eq!(paints["415"].wear_min, 0.0);
        assert_eq!(paints["415"].wear_max, 0.08);
    }

    #[test]
    fn test_phase_only_for_doppler() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let paints = FieldsResolver::new(&bundle, &config).paints().unwrap();

        assert_eq!(paints["415"].phase.as_deref(), Some("Ruby"));
        // Howl has a phase mapping but is not a doppler
        assert_eq!(paints["309"].phase, None);
        // doppler without a mapping entry
        assert_eq!(paints["416"].phase, None);
    }

    #[test]
    fn test_colors_stop_at_first_gap() {
        let kit = kit(json!({"color0": "255 0 0", "color1": "128 0 0", "color3": "1 1 1"}));
        assert_eq!(
            paint_colors(&kit),
            Some(vec!["rgb(255, 0, 0)".to_string(), "rgb(128, 0, 0)".to_string()])
        );
    }

    #[test]
    fn test_no_colors() {
        assert_eq!(paint_colors(&kit(json!({"color1": "1 2 3"}))), None);
        assert_eq!(paint_colors(&kit(json!({}))), None);
    }

    #[test]
    fn test_clean_description() {
        assert_eq!(
            clean_description("<i>Strike first.</i>\n\nThe \"cobra\" bites."),
            "Strike first. The cobra bites."
        );
        assert_eq!(clean_description("plain"), "plain");
    }
}
