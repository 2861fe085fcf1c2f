//! Both catalogs from one bundle

use serde::{Deserialize, Serialize};

use crate::collections::{CollectionsCatalog, CollectionsResolver, ImageLookup};
use crate::config::ResolverConfig;
use crate::error::Result;
use crate::fields::{FieldsCatalog, FieldsResolver};
use crate::input::InputBundle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogs {
    pub collections: CollectionsCatalog,
    pub fields: FieldsCatalog,
}

/// Resolve the collections and fields catalogs side by side.
///
/// The two resolvers share nothing but read-only input, so they run on the
/// rayon pool together.
///
/// # Errors
/// Returns the first missing-table error of either resolver.
pub fn resolve_catalogs<'a>(
    bundle: &'a InputBundle,
    config: &'a ResolverConfig,
    images: Option<&'a (dyn ImageLookup + Sync)>,
) -> Result<Catalogs> {
    let mut collections = CollectionsResolver::new(bundle, config);
    if let Some(images) = images {
        collections = collections.with_images(images);
    }
    let fields = FieldsResolver::new(bundle, config);

    let (collections, fields) = rayon::join(|| collections.resolve(), || fields.resolve());

    Ok(Catalogs {
        collections: collections?,
        fields: fields?,
    })
}
