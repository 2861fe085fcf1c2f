//! Shared lookup primitives
//!
//! The leaf layer both resolvers build on: localization, category tags, and
//! the precomputed indexes that replace repeated table scans.

mod category;
mod index;
mod localization;

pub use category::CategoryResolver;
pub use index::{NameIndex, Prefabs, SchemaIndex, SetMembers};
pub use localization::LocalizationResolver;
