//! Collection artwork lookup
//!
//! Fetching images from an asset pack is outside this crate. The resolver
//! only calls an [`ImageLookup`] with an asset category (`set_icons`) and a
//! reference key (the item-set id).

/// Resolves an asset reference to an image URL.
pub trait ImageLookup {
    fn image_url(&self, category: &str, key: &str) -> Option<String>;
}

impl<F> ImageLookup for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn image_url(&self, category: &str, key: &str) -> Option<String> {
        self(category, key)
    }
}

/// Builds image URLs from a template with `{category}` and `{key}` placeholders,
/// e.g. `https://cdn.example.com/{category}/{key}.png`.
#[derive(Debug, Clone)]
pub struct TemplateImages {
    template: String,
}

impl TemplateImages {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl ImageLookup for TemplateImages {
    fn image_url(&self, category: &str, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        Some(
            self.template
                .replace("{category}", category)
                .replace("{key}", key),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template() {
        let images = TemplateImages::new("https://cdn.test/{category}/{key}.png");
        assert_eq!(
            images.image_url("set_icons", "set_community_3"),
            Some("https://cdn.test/set_icons/set_community_3.png".to_string())
        );
        assert_eq!(images.image_url("set_icons", ""), None);
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |category: &str, key: &str| Some(format!("{category}:{key}"));
        assert_eq!(lookup.image_url("a", "b"), Some("a:b".to_string()));
    }
}
