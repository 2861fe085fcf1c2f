//! Origins: origin id → name, straight from the schema

use indexmap::IndexMap;

use super::{FieldsResolver, collect_table};
use crate::error::{Resolved, Result, SkipReason};
use crate::input::OriginName;

impl FieldsResolver<'_> {
    pub fn origins(&self) -> Result<IndexMap<String, String>> {
        let origins = self.bundle.schema.origin_names()?;
        Ok(collect_table(
            "origins",
            origins
                .iter()
                .enumerate()
                .map(|(position, origin)| (position, origin_entry(origin))),
        ))
    }
}

fn origin_entry(origin: &OriginName) -> Resolved<(String, String)> {
    let id = origin
        .origin
        .as_ref()
        .ok_or(SkipReason::MissingField("origin"))?;
    let name = origin
        .name
        .as_deref()
        .ok_or(SkipReason::MissingField("name"))?;
    Ok((id.as_key(), name.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::config::ResolverConfig;
    use crate::fields::FieldsResolver;
    use crate::test_support::bundle;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_origins() {
        let bundle = bundle();
        let config = ResolverConfig::default();
        let origins = FieldsResolver::new(&bundle, &config).origins().unwrap();

        let entries: Vec<(&str, &str)> = origins
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![("0", "Timed Drop"), ("1", "Achievement"), ("8", "Found in Crate")]
        );
    }

    #[test]
    fn test_missing_origin_names_is_fatal() {
        let mut bundle = bundle();
        bundle.schema.origin_names = None;
        let config = ResolverConfig::default();
        assert!(FieldsResolver::new(&bundle, &config).origins().is_err());
    }
}
