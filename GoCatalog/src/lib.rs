#![allow(non_snake_case)]
//! # GoCatalog
//!
//! Turns the game's item definition document, its localization table and the
//! per-item schema into two denormalized catalogs for a web frontend.
//!
//! ## Catalogs
//!
//! - **Collections** - named item sets with their member items, artwork and a
//!   souvenir flag
//! - **Fields** - qualities, item types, paints, rarities and origins
//!
//! ## Quick Start
//!
//! ```no_run
//! use gocatalog::prelude::*;
//!
//! # fn load() -> InputBundle { InputBundle::default() }
//! let bundle = load();
//! let config = ResolverConfig::default();
//!
//! let fields = FieldsResolver::new(&bundle, &config).resolve()?;
//! println!("{} paints", fields.paints.len());
//!
//! let catalogs = resolve_catalogs(&bundle, &config, None)?;
//! println!("{} collections", catalogs.collections.len());
//! # Ok::<(), gocatalog::Error>(())
//! ```
//!
//! Entries that cannot be resolved (no localization, no schema entry, unknown
//! palette color, ...) are left out and logged at `debug`. Only a missing
//! top-level table fails a whole catalog.
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `gocatalog` command-line binary

pub mod collections;
pub mod config;
pub mod error;
pub mod fields;
pub mod input;
pub mod lookup;
pub mod pipeline;

// Re-exports for convenience
pub use error::{Error, Result, SkipReason};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::collections::{
        Collection, CollectionsCatalog, CollectionsResolver, ImageLookup, TemplateImages,
    };
    pub use crate::config::{CollectionKey, ImageSource, ResolverConfig};
    pub use crate::error::{Error, Result, SkipReason};
    pub use crate::fields::{FieldsCatalog, FieldsResolver, ItemType, Paint, RarityLabels};
    pub use crate::input::{InputBundle, JsonSources};
    pub use crate::pipeline::{Catalogs, resolve_catalogs};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod test_support;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
