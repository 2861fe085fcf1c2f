//! Reading the input documents from a data directory

use anyhow::Context;
use std::fs;
use std::path::Path;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::input::{InputBundle, JsonSources};

pub const ITEMS_GAME_FILE: &str = "items_game.json";
pub const LOCALIZATION_FILE: &str = "csgo_english.json";
pub const SCHEMA_FILE: &str = "items_schema.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const PHASES_FILE: &str = "phases.json";

/// Load and parse every document in `data_dir`.
///
/// # Errors
/// Returns an error if a required file is missing or any document fails to
/// parse.
pub fn load_bundle(data_dir: &Path) -> anyhow::Result<InputBundle> {
    let items_game = read_required(data_dir, ITEMS_GAME_FILE)?;
    let localization = read_required(data_dir, LOCALIZATION_FILE)?;
    let schema = read_required(data_dir, SCHEMA_FILE)?;
    let categories = read_optional(data_dir, CATEGORIES_FILE)?;
    let phases = read_optional(data_dir, PHASES_FILE)?;

    let bundle = InputBundle::from_json(JsonSources {
        items_game: &items_game,
        localization: &localization,
        schema: &schema,
        categories: categories.as_deref(),
        phases: phases.as_deref(),
    })
    .with_context(|| format!("Failed to parse input documents in {}", data_dir.display()))?;

    tracing::info!(
        "Loaded {} localization strings from {}",
        bundle.localization.len(),
        data_dir.display()
    );
    Ok(bundle)
}

/// Load a resolver config, or the defaults when no path is given.
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid config.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ResolverConfig> {
    let Some(path) = path else {
        return Ok(ResolverConfig::default());
    };
    let source =
        read_document(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
    ResolverConfig::from_toml_str(&source)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn read_document(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

fn read_required(dir: &Path, name: &str) -> anyhow::Result<String> {
    let path = dir.join(name);
    read_document(&path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_optional(dir: &Path, name: &str) -> anyhow::Result<Option<String>> {
    let path = dir.join(name);
    if !path.exists() {
        tracing::warn!("{} not found, continuing without it", path.display());
        return Ok(None);
    }
    read_required(dir, name).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use tempfile::TempDir;

    fn write_required(dir: &Path) {
        fs::write(dir.join(ITEMS_GAME_FILE), test_support::ITEMS_GAME).unwrap();
        fs::write(dir.join(LOCALIZATION_FILE), test_support::LOCALIZATION).unwrap();
        fs::write(dir.join(SCHEMA_FILE), test_support::SCHEMA).unwrap();
    }

    #[test]
    fn test_load_bundle() {
        let dir = TempDir::new().unwrap();
        write_required(dir.path());
        fs::write(dir.path().join(CATEGORIES_FILE), test_support::CATEGORIES).unwrap();
        fs::write(dir.path().join(PHASES_FILE), test_support::PHASES).unwrap();

        let bundle = load_bundle(dir.path()).unwrap();
        assert_eq!(bundle.categories.get("pistol").map(String::as_str), Some("Pistol"));
        assert_eq!(bundle.phases.get("415").map(String::as_str), Some("Ruby"));
        assert!(bundle.items_game.items().is_ok());
    }

    #[test]
    fn test_optional_files_may_be_absent() {
        let dir = TempDir::new().unwrap();
        write_required(dir.path());

        let bundle = load_bundle(dir.path()).unwrap();
        assert!(bundle.categories.is_empty());
        assert!(bundle.phases.is_empty());
    }

    #[test]
    fn test_missing_required_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(ITEMS_GAME_FILE), test_support::ITEMS_GAME).unwrap();

        let err = load_bundle(dir.path()).unwrap_err();
        assert!(err.to_string().contains(LOCALIZATION_FILE));
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::Io(_))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
        assert!(matches!(
            err.downcast_ref::<crate::Error>(),
            Some(crate::Error::Io(_))
        ));
    }

    #[test]
    fn test_load_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, "phase_marker = \"gamma\"\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.phase_marker, "gamma");
        assert_eq!(load_config(None).unwrap(), ResolverConfig::default());
    }
}
