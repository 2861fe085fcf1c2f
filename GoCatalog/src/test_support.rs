//! Fixture bundle shared by the unit tests

use crate::input::{InputBundle, JsonSources};

pub const ITEMS_GAME: &str = include_str!("../tests/fixtures/items_game.json");
pub const LOCALIZATION: &str = include_str!("../tests/fixtures/csgo_english.json");
pub const SCHEMA: &str = include_str!("../tests/fixtures/items_schema.json");
pub const CATEGORIES: &str = include_str!("../tests/fixtures/categories.json");
pub const PHASES: &str = include_str!("../tests/fixtures/phases.json");

pub fn bundle() -> InputBundle {
    InputBundle::from_json(JsonSources {
        items_game: ITEMS_GAME,
        localization: LOCALIZATION,
        schema: SCHEMA,
        categories: Some(CATEGORIES),
        phases: Some(PHASES),
    })
    .expect("fixture bundle parses")
}
