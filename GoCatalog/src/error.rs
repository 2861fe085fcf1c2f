//! Error types for `GoCatalog`

use thiserror::Error;

/// The error type for a whole resolution pass.
///
/// Only structural problems end up here. Anything wrong with a single item,
/// paint, rarity or set is a [`SkipReason`] and stays inside the loop that
/// produced it.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Input Errors ====================
    /// A top-level table the resolver cannot work without is absent.
    #[error("required table `{table}` is missing from the input")]
    MissingTable {
        /// Name of the table as it appears in the source document.
        table: &'static str,
    },

    /// JSON parsing error for one of the raw documents.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==================== Configuration Errors ====================
    /// The resolver configuration could not be parsed.
    #[error("invalid resolver config: {0}")]
    Config(#[from] toml::de::Error),

    // ==================== IO Errors ====================
    /// IO error from file operations (CLI loader only).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn missing_table(table: &'static str) -> Self {
        Self::MissingTable { table }
    }
}

/// A specialized Result type for `GoCatalog` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single entry was left out of a catalog.
///
/// Returned by the per-entry helpers; the batch loops log it and move on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The record lacks a field the entry needs.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A code reference has no entry in the localization table.
    #[error("no localization for `{0}`")]
    Unlocalized(String),

    /// The localized type label has no canonical category tag.
    #[error("no category tag for label `{0}`")]
    UnmappedCategory(String),

    /// The item index does not appear in the per-item schema.
    #[error("item `{0}` is not in the schema")]
    NotInSchema(String),

    /// A container points at an item set that does not exist.
    #[error("unknown item set `{0}`")]
    UnknownItemSet(String),

    /// A rarity names a palette entry that does not exist.
    #[error("unknown color `{0}`")]
    UnknownColor(String),

    /// A collection with the same display name was already accepted.
    #[error("duplicate collection `{0}`")]
    DuplicateCollection(String),
}

/// Outcome of resolving one entry.
pub type Resolved<T> = std::result::Result<T, SkipReason>;
